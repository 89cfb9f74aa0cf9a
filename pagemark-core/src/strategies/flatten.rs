//! Line-forcing flatten, the fourth strategy
//!
//! Rebuilds the clone as one line per block-level element: each block tag
//! aggregates its immediate text and inline children into a single line,
//! while nested block children are processed first and push their own
//! lines. The flat text then goes through the pattern reconstructor, which
//! is where any structure this walk preserved as glyphs or prefixes gets
//! turned back into Markdown.

use super::ExtractionStrategy;
use crate::dom::{is_text, tag_name, text_content, text_of, Page};
use crate::reconstruct::reconstruct;
use crate::selection::{is_block_tag, Selection};
use markup5ever_rcdom::Handle;

const INLINE_TAGS: &[&str] = &["span", "a", "strong", "em", "b", "i", "code"];

pub struct LineForcingFlatten;

impl ExtractionStrategy for LineForcingFlatten {
    fn name(&self) -> &'static str {
        "line-flatten"
    }

    fn extract(&self, page: &Page, selection: &Selection) -> Option<String> {
        let clone = selection.clone_contents(&page.document());
        let mut lines = Vec::new();
        force_lines(&clone, &mut lines);
        if lines.is_empty() {
            None
        } else {
            Some(reconstruct(&lines.join("\n")))
        }
    }
}

fn force_lines(node: &Handle, lines: &mut Vec<String>) {
    let Some(tag) = tag_name(node) else {
        return;
    };
    if !is_block_tag(tag) {
        for child in node.children.borrow().iter() {
            force_lines(child, lines);
        }
        return;
    }
    let mut parts: Vec<String> = Vec::new();
    for child in node.children.borrow().iter() {
        if is_text(child) {
            let text = text_of(child);
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
            continue;
        }
        match tag_name(child) {
            Some(child_tag) if INLINE_TAGS.contains(&child_tag) => {
                let text = text_content(child);
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            }
            Some(_) => force_lines(child, lines),
            None => {}
        }
    }
    let line = parts.join(" ");
    if !line.trim().is_empty() {
        lines.push(line.trim().to_string());
    }
}
