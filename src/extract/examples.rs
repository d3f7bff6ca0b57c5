use std::sync::LazyLock;

use regex::Regex;

use super::section;
use crate::record::Example;

pub const SECTION_TITLE: &str = "### 列举例句";

const CHINESE_COLON: &str = "中文：";

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.*)$").unwrap());
static CJK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fa5}]").unwrap());

/// How a sentence/translation split was found. Rules run in declaration
/// order, first accepted match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitRule {
    FullWidthParen,
    HalfWidthParen,
    ChineseColon,
}

static SPLIT_RULES: LazyLock<[(SplitRule, Regex); 3]> = LazyLock::new(|| {
    [
        (SplitRule::FullWidthParen, Regex::new(r"^(.*?)（(.*?)）$").unwrap()),
        (SplitRule::HalfWidthParen, Regex::new(r"^(.*?)\((.*?)\)$").unwrap()),
        (SplitRule::ChineseColon, Regex::new(r"^(.*?)中文：(.*?)$").unwrap()),
    ]
});

/// Pull numbered example sentences out of their section. Returns the
/// examples and the content with the section cut out; content comes back
/// untouched when the section is missing or yields nothing.
pub fn extract(content: &str) -> (Vec<Example>, String) {
    let lines: Vec<&str> = content.lines().collect();
    let Some(span) = section::find(&lines, SECTION_TITLE) else {
        return (Vec::new(), content.to_string());
    };

    let examples: Vec<Example> = lines[span.start + 1..span.end]
        .iter()
        .filter_map(|line| {
            let caps = NUMBERED_RE.captures(line.trim())?;
            split_example(caps[2].trim())
        })
        .collect();

    if examples.is_empty() {
        return (Vec::new(), content.to_string());
    }
    let reduced = section::remove(&lines, &span);
    (examples, reduced)
}

/// Ordered rule pass over one example line. A split is accepted only when
/// the sentence half is non-empty, or the line itself opens with a colon
/// marker or a parenthesis.
fn match_split(full: &str) -> Option<(SplitRule, String, String)> {
    for (rule, re) in SPLIT_RULES.iter() {
        let Some(caps) = re.captures(full) else {
            continue;
        };
        let sentence = caps[1].trim();
        let translation = caps[2].trim();
        if sentence.is_empty()
            && !full.starts_with(CHINESE_COLON)
            && !full.starts_with('（')
            && !full.starts_with('(')
        {
            continue;
        }
        return Some((*rule, sentence.to_string(), translation.to_string()));
    }
    None
}

fn split_example(full: &str) -> Option<Example> {
    let mut sentence = full.to_string();
    let mut translation = String::new();

    if let Some((_, s, t)) = match_split(full) {
        sentence = s;
        translation = t;
    }

    // A colon marker the rule pass left inside the sentence.
    if let Some(idx) = sentence.find(CHINESE_COLON) {
        let tail = sentence[idx + CHINESE_COLON.len()..].trim().to_string();
        if translation.is_empty() && !tail.is_empty() {
            translation = tail;
        }
        sentence = sentence[..idx].trim().to_string();
    }

    // A trailing parenthesized group holding Chinese text, missed above.
    for (open, close) in [('（', '）'), ('(', ')')] {
        if !translation.is_empty() {
            break;
        }
        if let Some((head, inner)) = trailing_paren(&sentence, open, close) {
            if CJK_RE.is_match(inner) {
                let head = head.trim().to_string();
                translation = inner.trim().to_string();
                sentence = head;
            }
        }
    }

    let sentence = sentence
        .strip_suffix('.')
        .unwrap_or(&sentence)
        .trim()
        .to_string();
    if sentence.is_empty() {
        return None;
    }
    Some(Example {
        sentence,
        translation,
    })
}

/// Split off a parenthesized group that closes the string, unless the
/// group opens the string too.
fn trailing_paren(s: &str, open: char, close: char) -> Option<(&str, &str)> {
    let idx = s.rfind(open)?;
    if idx == 0 || !s.ends_with(close) {
        return None;
    }
    let inner = &s[idx + open.len_utf8()..s.len() - close.len_utf8()];
    Some((&s[..idx], inner))
}
