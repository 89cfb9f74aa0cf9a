//! Inline emphasis recovery
//!
//! Emphasis in the host editor may arrive as real tags (`strong`, `em`,
//! `s`, `code`) or as bare spans styled inline. Both are honored. Wrapping
//! is applied per child element, innermost first: code span, bold, italic,
//! strikethrough, and for anchors a final link wrap. An element whose
//! subtree produces no text contributes nothing, so empty spans never leave
//! stray wrapper pairs behind.

use crate::dom::{attr, class_contains, is_text, style_value, tag_name, text_of};
use markup5ever_rcdom::Handle;

/// Recover Markdown inline formatting for the contents of `node`.
///
/// The node itself is never wrapped; formatting decisions are made for each
/// element child while concatenating, mirroring how a selection hands over
/// a container rather than the styled runs themselves.
pub fn format_inline(node: &Handle) -> String {
    let mut out = String::new();
    for child in node.children.borrow().iter() {
        if is_text(child) {
            out.push_str(&text_of(child));
            continue;
        }
        if tag_name(child).is_none() {
            continue;
        }
        let mut text = format_inline(child);
        if text.is_empty() {
            continue;
        }
        if is_code(child) {
            text = format!("`{text}`");
        }
        if is_bold(child) {
            text = format!("**{text}**");
        }
        if is_italic(child) {
            text = format!("*{text}*");
        }
        if is_strikethrough(child) {
            text = format!("~~{text}~~");
        }
        if tag_name(child) == Some("a") {
            match attr(child, "href") {
                Some(href) if !href.is_empty() => text = format!("[{text}]({href})"),
                _ => {}
            }
        }
        out.push_str(&text);
    }
    out
}

fn is_bold(node: &Handle) -> bool {
    if matches!(tag_name(node), Some("strong") | Some("b")) {
        return true;
    }
    match style_value(node, "font-weight") {
        Some(weight) => font_weight_is_bold(&weight),
        None => false,
    }
}

/// Numeric weights bold from 600 up; keyword weights only for the bold
/// family.
fn font_weight_is_bold(value: &str) -> bool {
    let value = value.trim();
    if let Ok(numeric) = value.parse::<u32>() {
        return numeric >= 600;
    }
    value.eq_ignore_ascii_case("bold") || value.eq_ignore_ascii_case("bolder")
}

fn is_italic(node: &Handle) -> bool {
    if matches!(tag_name(node), Some("em") | Some("i")) {
        return true;
    }
    style_value(node, "font-style")
        .map(|v| v.eq_ignore_ascii_case("italic"))
        .unwrap_or(false)
}

fn is_strikethrough(node: &Handle) -> bool {
    if matches!(tag_name(node), Some("s") | Some("del")) {
        return true;
    }
    let decorated = |property: &str| {
        style_value(node, property)
            .map(|v| v.contains("line-through"))
            .unwrap_or(false)
    };
    decorated("text-decoration") || decorated("text-decoration-line")
}

fn is_code(node: &Handle) -> bool {
    if tag_name(node) == Some("code") {
        return true;
    }
    if class_contains(node, "equation") {
        return true;
    }
    style_value(node, "font-family")
        .map(|v| v.to_ascii_lowercase().contains("monospace"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{find_descendant, Page};

    fn container_of(html: &str) -> Handle {
        // Leak the page: rcdom severs a dropped page's subtree, so the
        // returned handle is only usable while its Page stays alive.
        let page = Box::leak(Box::new(Page::parse(html).unwrap()));
        find_descendant(&page.document(), &|n| {
            attr(n, "id").as_deref() == Some("c")
        })
        .unwrap()
    }

    #[test]
    fn test_plain_text_passthrough() {
        let c = container_of("<div id=\"c\">just words</div>");
        assert_eq!(format_inline(&c), "just words");
    }

    #[test]
    fn test_bold_from_tag_and_style() {
        let c = container_of("<div id=\"c\"><strong>a</strong> <span style=\"font-weight:700\">b</span></div>");
        assert_eq!(format_inline(&c), "**a** **b**");
    }

    #[test]
    fn test_bold_numeric_threshold() {
        let c = container_of(
            "<div id=\"c\"><span style=\"font-weight:650\">x</span><span style=\"font-weight:400\">y</span></div>",
        );
        assert_eq!(format_inline(&c), "**x**y");
    }

    #[test]
    fn test_italic_and_strike() {
        let c = container_of(
            "<div id=\"c\"><em>it</em> <span style=\"text-decoration: line-through\">gone</span></div>",
        );
        assert_eq!(format_inline(&c), "*it* ~~gone~~");
    }

    #[test]
    fn test_code_from_monospace_and_equation() {
        let c = container_of(
            "<div id=\"c\"><span style=\"font-family: SFMono, monospace\">f(x)</span><span class=\"text-equation\">E=mc2</span></div>",
        );
        assert_eq!(format_inline(&c), "`f(x)``E=mc2`");
    }

    #[test]
    fn test_wrap_order_is_code_bold_italic_strike() {
        let c = container_of(
            "<div id=\"c\"><code style=\"font-weight:700; font-style:italic; text-decoration:line-through\">v</code></div>",
        );
        assert_eq!(format_inline(&c), "~~***`v`***~~");
    }

    #[test]
    fn test_link_wraps_last() {
        let c = container_of("<div id=\"c\"><a href=\"https://example.com\"><strong>go</strong></a></div>");
        assert_eq!(format_inline(&c), "[**go**](https://example.com)");
    }

    #[test]
    fn test_link_without_destination_degrades() {
        let c = container_of("<div id=\"c\"><a>nowhere</a><a href=\"\">blank</a></div>");
        assert_eq!(format_inline(&c), "nowhereblank");
    }

    #[test]
    fn test_empty_elements_leave_no_wrappers() {
        let c = container_of("<div id=\"c\">a<strong></strong><em>  </em>b</div>");
        assert_eq!(format_inline(&c), "a*  *b");
    }

    #[test]
    fn test_nested_styles_compose() {
        let c = container_of("<div id=\"c\"><strong>bold <em>both</em></strong></div>");
        assert_eq!(format_inline(&c), "**bold *both***");
    }
}
