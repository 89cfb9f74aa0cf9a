//! Property coverage for the text-facing layers
//!
//! Reconstruction must be idempotent (extraction pipelines may route text
//! through it more than once), and inline formatting must never emit
//! unbalanced wrapper pairs whatever the span nesting looks like.

use markup5ever_rcdom::Handle;
use pagemark_core::dom::{append_child, create_element, create_text};
use pagemark_core::{format_inline, reconstruct};
use proptest::prelude::*;

/// A generated inline tree: styled wrappers over plain text runs.
#[derive(Debug, Clone)]
enum InlineSpec {
    Text(String),
    Bold(Vec<InlineSpec>),
    Italic(Vec<InlineSpec>),
    Strike(Vec<InlineSpec>),
    Code(Vec<InlineSpec>),
    Link(String, Vec<InlineSpec>),
}

fn inline_spec() -> impl Strategy<Value = InlineSpec> {
    let leaf = "[a-z0-9 ]{0,12}".prop_map(InlineSpec::Text);
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(InlineSpec::Bold),
            prop::collection::vec(inner.clone(), 0..4).prop_map(InlineSpec::Italic),
            prop::collection::vec(inner.clone(), 0..4).prop_map(InlineSpec::Strike),
            prop::collection::vec(inner.clone(), 0..4).prop_map(InlineSpec::Code),
            ("[a-z]{1,8}", prop::collection::vec(inner, 0..3)).prop_map(|(host, children)| {
                InlineSpec::Link(format!("https://{host}.example"), children)
            }),
        ]
    })
}

fn build(spec: &InlineSpec) -> Handle {
    match spec {
        InlineSpec::Text(text) => create_text(text),
        InlineSpec::Bold(children) => with_children("strong", vec![], children),
        InlineSpec::Italic(children) => with_children("em", vec![], children),
        InlineSpec::Strike(children) => with_children("s", vec![], children),
        InlineSpec::Code(children) => with_children("code", vec![], children),
        InlineSpec::Link(href, children) => {
            with_children("a", vec![("href", href.as_str())], children)
        }
    }
}

fn with_children(tag: &str, attrs: Vec<(&str, &str)>, children: &[InlineSpec]) -> Handle {
    let element = create_element(tag, attrs);
    for child in children {
        append_child(&element, build(child));
    }
    element
}

proptest! {
    #[test]
    fn test_reconstruct_idempotent_ascii(
        lines in prop::collection::vec("[ -~]{0,32}", 0..10),
    ) {
        let input = lines.join("\n");
        let once = reconstruct(&input);
        prop_assert_eq!(reconstruct(&once), once);
    }

    #[test]
    fn test_reconstruct_idempotent_mixed(
        lines in prop::collection::vec("[ぁ-ん一-龯・•●○：0-9a-z #:*-]{0,24}", 0..8),
    ) {
        let input = lines.join("\n");
        let once = reconstruct(&input);
        prop_assert_eq!(reconstruct(&once), once);
    }

    #[test]
    fn test_inline_wrappers_balance(specs in prop::collection::vec(inline_spec(), 0..5)) {
        let root = create_element("div", vec![]);
        for spec in &specs {
            append_child(&root, build(spec));
        }
        let out = format_inline(&root);
        prop_assert_eq!(out.matches('*').count() % 2, 0);
        prop_assert_eq!(out.matches('`').count() % 2, 0);
        prop_assert_eq!(out.matches('~').count() % 2, 0);
        prop_assert_eq!(out.matches('[').count(), out.matches(']').count());
        prop_assert_eq!(out.matches('(').count(), out.matches(')').count());
    }
}
