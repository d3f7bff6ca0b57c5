use std::sync::LazyLock;

use regex::Regex;

use super::section;
use crate::record::Story;

pub const SECTION_TITLE: &str = "### 小故事";

/// Phrases that hand the rest of the block over to the Chinese half,
/// checked in order.
const CHINESE_MARKERS: &[&str] = &["英文故事的中文翻译：", "中文翻译：", "中文："];

static FULL_PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*?)（(.*?)）$").unwrap());
static HALF_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\((.*?)\)$").unwrap());
static LATIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]").unwrap());

/// Pull the bilingual story out of its section. Returns the story and the
/// content with the section cut out; content comes back untouched when
/// the section is missing or empty.
pub fn extract(content: &str) -> (Option<Story>, String) {
    let lines: Vec<&str> = content.lines().collect();
    let Some(span) = section::find(&lines, SECTION_TITLE) else {
        return (None, content.to_string());
    };
    let block: Vec<&str> = lines[span.start + 1..span.end]
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    match split_story(&block) {
        Some(story) => {
            let reduced = section::remove(&lines, &span);
            (Some(story), reduced)
        }
        None => (None, content.to_string()),
    }
}

/// Two-pass language split: lines are English until a marker phrase or a
/// bilingual `english（中文）` line flips the mode, after which every line
/// is Chinese.
fn split_story(block: &[&str]) -> Option<Story> {
    let mut english: Vec<String> = Vec::new();
    let mut chinese: Vec<String> = Vec::new();
    let mut in_english = true;

    for line in block {
        if let Some(rest) = strip_marker(line) {
            in_english = false;
            chinese.push(rest.trim().to_string());
            continue;
        }
        if !in_english {
            chinese.push(line.to_string());
            continue;
        }
        match paren_pair(line) {
            Some((en, zh)) => {
                english.push(en);
                chinese.push(zh);
                in_english = false;
            }
            None => english.push(line.to_string()),
        }
    }

    let mut story = Story {
        english: english.join(" ").trim().to_string(),
        chinese: chinese.join(" ").trim().to_string(),
    };

    // An all-Chinese result is sometimes a single `english（中文）` line that
    // slipped past the split; reclaim it when the first half has Latin text.
    if story.english.is_empty() && !story.chinese.is_empty() {
        if let Some((first, second)) = paren_split(&story.chinese) {
            if !first.trim().is_empty() && LATIN_RE.is_match(first) {
                let en = first.trim().to_string();
                let zh = second.trim().to_string();
                story.english = en;
                story.chinese = zh;
            }
        }
    }

    if story.english.is_empty() && story.chinese.is_empty() {
        None
    } else {
        Some(story)
    }
}

fn strip_marker(line: &str) -> Option<&str> {
    CHINESE_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
}

/// A `<english>（<chinese>）` line; both halves must be non-empty, half-width
/// parentheses tried after full-width.
fn paren_pair(line: &str) -> Option<(String, String)> {
    for re in [&FULL_PAREN_RE, &HALF_PAREN_RE] {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let en = caps[1].trim();
        let zh = caps[2].trim();
        if !en.is_empty() && !zh.is_empty() {
            return Some((en.to_string(), zh.to_string()));
        }
    }
    None
}

/// Raw parenthetical split of the first matching shape, no emptiness checks.
fn paren_split(text: &str) -> Option<(&str, &str)> {
    for re in [&FULL_PAREN_RE, &HALF_PAREN_RE] {
        if let Some(caps) = re.captures(text) {
            return Some((
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map_or("", |m| m.as_str()),
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(english: &str, chinese: &str) -> Story {
        Story {
            english: english.into(),
            chinese: chinese.into(),
        }
    }

    #[test]
    fn single_bilingual_line_splits_into_both_halves() {
        let (extracted, rest) = extract("### 小故事\nOnce upon a time.（从前。）");
        assert_eq!(extracted, Some(story("Once upon a time.", "从前。")));
        assert_eq!(rest, "");
    }

    #[test]
    fn explicit_marker_splits_the_block() {
        let content = "### 小故事\nA man walked.\nHe sat.\n中文：从前有一个人\n他坐下了";
        let (extracted, rest) = extract(content);
        assert_eq!(
            extracted,
            Some(story("A man walked. He sat.", "从前有一个人 他坐下了"))
        );
        assert_eq!(rest, "");
    }

    #[test]
    fn longest_marker_is_stripped_whole() {
        let (extracted, _) = extract("### 小故事\nHe left.\n英文故事的中文翻译：他走了");
        assert_eq!(extracted, Some(story("He left.", "他走了")));
    }

    #[test]
    fn lines_after_the_switch_are_chinese_regardless_of_content() {
        let content = "### 小故事\nTom ran.（汤姆跑了。）\nThen he stopped.";
        let (extracted, _) = extract(content);
        assert_eq!(
            extracted,
            Some(story("Tom ran.", "汤姆跑了。 Then he stopped."))
        );
    }

    #[test]
    fn halfwidth_bilingual_line_also_switches() {
        let (extracted, _) = extract("### 小故事\nA dog barked. (狗叫了。)");
        assert_eq!(extracted, Some(story("A dog barked.", "狗叫了。")));
    }

    #[test]
    fn misfiled_english_is_reclaimed_from_the_chinese_half() {
        let (extracted, _) = extract("### 小故事\n中文：Long ago (很久以前)");
        assert_eq!(extracted, Some(story("Long ago", "很久以前")));
    }

    #[test]
    fn reclaim_needs_latin_text_in_the_first_half() {
        let (extracted, _) = extract("### 小故事\n中文：从前（好）");
        assert_eq!(extracted, Some(story("", "从前（好）")));
    }

    #[test]
    fn empty_section_attaches_nothing_and_keeps_content() {
        let content = "### 小故事\n\n### 下一节\n正文";
        let (extracted, rest) = extract(content);
        assert_eq!(extracted, None);
        assert_eq!(rest, content);
    }

    #[test]
    fn content_without_section_is_unchanged() {
        let content = "plain prose\nno markers";
        assert_eq!(extract(content), (None, content.to_string()));
    }

    #[test]
    fn section_removal_rejoins_surroundings() {
        let content = "开头\n\n### 小故事\nThe end.（结束。）\n\n### 用法\n后文";
        let (extracted, rest) = extract(content);
        assert!(extracted.is_some());
        assert_eq!(rest, "开头\n\n### 用法\n后文");
    }
}
