//! Heading extraction for Markdown-style documents.
//!
//! A heading is a line starting with one to six `#` characters, then at
//! least one whitespace character, then a title that is non-empty once
//! trailing whitespace is removed. Depth is discarded. Extraction is purely
//! textual: code fences and block quotes are not interpreted, so a
//! `# comment` inside a fenced block still counts as a heading.

use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+(.*)$").unwrap());

/// Return heading titles in document order, duplicates preserved.
pub fn extract_headings(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| HEADING_RE.captures(line))
        .filter_map(|caps| {
            let title = caps.get(1)?.as_str().trim_end();
            (!title.is_empty()).then(|| title.to_string())
        })
        .collect()
}
