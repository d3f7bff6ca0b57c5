const HEADING_PREFIX: &str = "### ";

/// Line range of a heading-delimited section: `start` is the title line,
/// `end` is the next heading line or one past the last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Locate the section whose title line, after trimming, equals `title`.
pub fn find(lines: &[&str], title: &str) -> Option<Span> {
    let start = lines.iter().position(|l| l.trim() == title)?;
    let end = lines[start + 1..]
        .iter()
        .position(|l| l.trim().starts_with(HEADING_PREFIX))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());
    Some(Span { start, end })
}

/// Cut the span out and stitch the remainder back together, one blank
/// line between the halves when both survive.
pub fn remove(lines: &[&str], span: &Span) -> String {
    let before = lines[..span.start].join("\n");
    let after = lines[span.end..].join("\n");
    let before = before.trim();
    let after = after.trim();
    if before.is_empty() {
        after.to_string()
    } else if after.is_empty() {
        before.to_string()
    } else {
        format!("{before}\n\n{after}")
    }
}
