//! Plain-text pattern reconstruction
//!
//! Clipboard and fallback extractions arrive with their structure erased:
//! section numbers, glyph bullets, key-value rows, and lone headings are
//! all plain lines. This pass rebuilds the Markdown line by line. Patterns
//! are probed in a fixed order and the first match rewrites the line;
//! blank lines survive as blanks so paragraph breaks are preserved.
//!
//! The pass is idempotent. Every rewrite either reproduces itself on a
//! second run (`- x`, `1. x`) or is fenced off by a guard (`**` for
//! key-value rows, `#` for headings), and rewrites never change which
//! lines are blank, so the neighbor checks of the bare-heading pattern see
//! the same context on every run.

use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+[-.]\d+\.?)\s*(.+)$").expect("valid section pattern")
});

static ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)[.)\]]\s+(.+)$").expect("valid ordinal pattern"));

static GLYPH_BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[・•●○◆◇■□▪▫※]\s*(.+)$").expect("valid glyph bullet pattern")
});

static DASH_BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*]\s+(.+)$").expect("valid dash bullet pattern"));

static KEY_VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^：:]{1,20})[：:](.+)$").expect("valid key-value pattern")
});

/// Rebuild Markdown from plain text, line by line.
pub fn reconstruct(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            out.push(String::new());
            continue;
        }
        out.push(rewrite_line(line, i, &lines));
    }
    out.join("\n")
}

fn rewrite_line(line: &str, index: usize, lines: &[&str]) -> String {
    if let Some(caps) = SECTION_RE.captures(line) {
        return format!("## {} {}", &caps[1], &caps[2]);
    }
    if let Some(caps) = ORDINAL_RE.captures(line) {
        return format!("{}. {}", &caps[1], &caps[2]);
    }
    if let Some(caps) = GLYPH_BULLET_RE.captures(line) {
        return format!("- {}", &caps[1]);
    }
    if let Some(caps) = DASH_BULLET_RE.captures(line) {
        return format!("- {}", &caps[1]);
    }
    if let Some(rewritten) = rewrite_key_value(line) {
        return rewritten;
    }
    if let Some(rewritten) = rewrite_bare_heading(line, index, lines) {
        return rewritten;
    }
    line.to_string()
}

/// `期間：8～12週` style rows become bold keys. URLs are left alone since a
/// scheme colon is not a key separator, and short labels only: anything
/// longer reads as a sentence, not a key.
fn rewrite_key_value(line: &str) -> Option<String> {
    if line.contains("http") || line.starts_with("**") {
        return None;
    }
    let caps = KEY_VALUE_RE.captures(line)?;
    let key = &caps[1];
    if key.trim() != key || key.chars().count() > 15 {
        return None;
    }
    Some(format!("**{}**: {}", key, caps[2].trim()))
}

/// A short line sitting alone after a blank, with content following, reads
/// as a section title.
fn rewrite_bare_heading(line: &str, index: usize, lines: &[&str]) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.chars().count() > 30 || trimmed.starts_with('#') {
        return None;
    }
    if line.contains('：') || line.contains(':') {
        return None;
    }
    let prev_blank = index == 0 || lines[index - 1].trim().is_empty();
    let next_filled = index + 1 < lines.len() && !lines[index + 1].trim().is_empty();
    if prev_blank && next_filled {
        Some(format!("### {trimmed}"))
    } else {
        None
    }
}
