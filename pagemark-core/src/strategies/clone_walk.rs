//! Detached-clone structural walk, the third strategy
//!
//! Clones the selection contents into a detached container and reads the
//! copy. Identity blocks surviving in the clone are formatted directly;
//! without them the clone is walked node by node, every `div`/`p` becoming
//! one classified line. As a last resort a generic tag-driven converter
//! handles content that is plain semantic HTML rather than editor blocks.
//!
//! Already-structured text passes through untouched here: a block whose
//! text starts with an ordinal or section marker keeps it, and bullet
//! glyphs are stripped before the `- ` prefix is applied, so markers are
//! never doubled.

use super::ExtractionStrategy;
use crate::blocks::format_block;
use crate::classify::{classify_block, BlockRole};
use crate::dom::{attr, descendants_where, is_leaf_block, is_text, tag_name, text_of, Page};
use crate::inline::format_inline;
use crate::selection::Selection;
use markup5ever_rcdom::Handle;
use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)\]]\s").expect("valid ordered prefix pattern"));

static SECTION_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[-.]\d+").expect("valid section prefix pattern"));

static BULLET_MARK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[•\-*]\s").expect("valid bullet mark pattern"));

static BULLET_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[•\-*]\s*").expect("valid bullet strip pattern"));

static NEWLINE_SQUEEZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid newline squeeze pattern"));

pub struct CloneWalk;

impl ExtractionStrategy for CloneWalk {
    fn name(&self) -> &'static str {
        "clone-walk"
    }

    fn extract(&self, page: &Page, selection: &Selection) -> Option<String> {
        let clone = selection.clone_contents(&page.document());
        let structured = structured_pass(&clone);
        let markdown = if structured.trim().is_empty() {
            generic_convert(&clone)
        } else {
            structured
        };
        if markdown.trim().is_empty() {
            None
        } else {
            Some(markdown)
        }
    }
}

fn structured_pass(container: &Handle) -> String {
    let blocks: Vec<Handle> = descendants_where(container, &|n: &Handle| {
        attr(n, crate::dom::IDENTITY_ATTR).is_some()
    })
    .into_iter()
    .filter(|b| is_leaf_block(b))
    .collect();

    let mut lines = Vec::new();
    if !blocks.is_empty() {
        for block in &blocks {
            let text = format_inline(block);
            if let Some(line) = structured_line(block, &text) {
                lines.push(line);
            }
        }
        return lines.join("\n");
    }
    for child in container.children.borrow().iter() {
        walk_clone(child, &mut lines);
    }
    lines.join("\n")
}

/// Format one clone node's text as a Markdown line.
fn structured_line(node: &Handle, text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if ORDERED_PREFIX_RE.is_match(trimmed) || SECTION_PREFIX_RE.is_match(trimmed) {
        return Some(trimmed.to_string());
    }
    let mut role = classify_block(node);
    if role == BlockRole::Paragraph && BULLET_MARK_RE.is_match(trimmed) {
        role = BlockRole::BulletItem;
    }
    if role == BlockRole::BulletItem {
        let stripped = BULLET_STRIP_RE.replace(trimmed, "");
        return format_block(role, &stripped);
    }
    format_block(role, trimmed)
}

fn walk_clone(node: &Handle, lines: &mut Vec<String>) {
    if is_text(node) {
        let text = text_of(node);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
        return;
    }
    let Some(tag) = tag_name(node) else {
        return;
    };
    match tag {
        "br" => {}
        "div" | "p" => {
            let text = format_inline(node);
            if let Some(line) = structured_line(node, &text) {
                lines.push(line);
            }
        }
        "span" | "a" | "strong" | "em" | "b" | "i" | "code" => {
            let text = format_inline(node);
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
        _ => {
            for child in node.children.borrow().iter() {
                walk_clone(child, lines);
            }
        }
    }
}

/// Tag-driven conversion for content that is ordinary HTML.
fn generic_convert(container: &Handle) -> String {
    let mut out = String::new();
    for child in container.children.borrow().iter() {
        out.push_str(&convert_node(child, 0, false));
    }
    NEWLINE_SQUEEZE_RE
        .replace_all(&out, "\n\n")
        .trim()
        .to_string()
}

fn convert_node(node: &Handle, list_level: usize, ordered: bool) -> String {
    if is_text(node) {
        return text_of(node);
    }
    let Some(tag) = tag_name(node) else {
        return String::new();
    };
    let child_level = if matches!(tag, "ul" | "ol") {
        list_level + 1
    } else {
        list_level
    };
    let child_ordered = match tag {
        "ol" => true,
        "ul" => false,
        _ => ordered,
    };
    let children: String = node
        .children
        .borrow()
        .iter()
        .map(|c| convert_node(c, child_level, child_ordered))
        .collect();

    match tag {
        "h1" => format!("\n# {children}\n\n"),
        "h2" => format!("\n## {children}\n\n"),
        "h3" => format!("\n### {children}\n\n"),
        "strong" | "b" => wrap_nonempty(&children, "**", "**"),
        "em" | "i" => wrap_nonempty(&children, "*", "*"),
        "u" => wrap_nonempty(&children, "<u>", "</u>"),
        "s" | "strike" | "del" => wrap_nonempty(&children, "~~", "~~"),
        "code" => wrap_nonempty(&children, "`", "`"),
        "a" => match attr(node, "href") {
            Some(href) if !href.is_empty() => format!("[{children}]({href})"),
            _ => children,
        },
        // a list opens on its own line so an item containing a nested
        // list keeps the sublist below it
        "ul" | "ol" => format!("\n{children}"),
        "li" => {
            let indent = "  ".repeat(list_level.saturating_sub(1));
            let marker = if ordered { "1. " } else { "- " };
            format!("{indent}{marker}{}\n", children.trim())
        }
        "blockquote" => {
            let quoted: Vec<String> = children
                .trim()
                .lines()
                .map(|l| format!("> {l}"))
                .collect();
            format!("{}\n\n", quoted.join("\n"))
        }
        "pre" => format!("\n```\n{}\n```\n\n", children.trim()),
        "br" => "\n".to_string(),
        "div" | "p" => {
            let role = classify_block(node);
            if role == BlockRole::Paragraph {
                format!("{children}\n")
            } else {
                match format_block(role, children.trim()) {
                    Some(line) => format!("{line}\n"),
                    None => String::new(),
                }
            }
        }
        _ => children,
    }
}

fn wrap_nonempty(content: &str, open: &str, close: &str) -> String {
    if content.trim().is_empty() {
        content.to_string()
    } else {
        format!("{open}{content}{close}")
    }
}
