use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::record::WordRecord;

/// Read and parse a JSON-Lines dump. An unreadable file is fatal;
/// unparseable lines are logged with their line number and skipped.
pub fn load_records(path: &Path) -> Result<Vec<WordRecord>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_lines(&raw))
}

pub fn parse_lines(raw: &str) -> Vec<WordRecord> {
    let mut records = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<WordRecord>(line) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(
                    line = idx + 1,
                    error = %err,
                    raw = %truncate(line, 120),
                    "skipping unparseable line"
                );
            }
        }
    }
    records
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_len_is_parseable_lines() {
        let raw = "{\"word\":\"a\"}\n\n   \nnot json\n{\"word\":\"b\"}\n";
        let records = parse_lines(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].word(), Some("a"));
        assert_eq!(records[1].word(), Some("b"));
    }

    #[test]
    fn blank_lines_are_silent() {
        assert!(parse_lines("\n  \n\t\n").is_empty());
    }

    #[test]
    fn bad_line_does_not_abort() {
        let raw = "{broken\n{\"word\":\"ok\"}";
        let records = parse_lines(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word(), Some("ok"));
    }

    #[test]
    fn long_diagnostics_are_truncated() {
        let long = "x".repeat(200);
        assert_eq!(truncate(&long, 120).chars().count(), 123);
        assert_eq!(truncate("short", 120), "short");
    }
}
