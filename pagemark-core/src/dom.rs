//! Page model and node helpers over html5ever's reference DOM
//!
//! The host editor exposes structure only through generic containers, class
//! naming conventions, and inline presentation styles. This module wraps the
//! parsed tree and provides the small node vocabulary the rest of the engine
//! speaks: tag/class/style/attribute access, text aggregation, pre-order
//! walks, path addressing, and detached deep clones.
//!
//! Nodes are addressed by paths (child-index chains from the document root)
//! rather than through parent links. Parent links in `markup5ever_rcdom` are
//! weak cells and detached clones have none; paths work uniformly for both.

use crate::error::ExtractError;
use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ns, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};
use std::cell::{Cell, RefCell};
use std::io::Read;
use std::rc::Rc;

/// Attribute that marks an editor block and carries its identity.
pub const IDENTITY_ATTR: &str = "data-block-id";

/// A parsed editor page.
pub struct Page {
    dom: RcDom,
}

impl Page {
    /// Parse a page from an HTML string.
    pub fn parse(html: &str) -> Result<Self, ExtractError> {
        Self::from_reader(&mut html.as_bytes())
    }

    /// Parse a page from a reader.
    pub fn from_reader(reader: &mut impl Read) -> Result<Self, ExtractError> {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                drop_doctype: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let dom = parse_document(RcDom::default(), opts)
            .from_utf8()
            .read_from(reader)?;
        Ok(Page { dom })
    }

    /// The document root node.
    pub fn document(&self) -> Handle {
        self.dom.document.clone()
    }

    /// The `<body>` element, or the document root when none was parsed.
    pub fn body(&self) -> Handle {
        find_descendant(&self.dom.document, &|node| tag_name(node) == Some("body"))
            .unwrap_or_else(|| self.dom.document.clone())
    }

    /// All identity-bearing blocks in document order.
    pub fn blocks(&self) -> Vec<Handle> {
        let mut out = Vec::new();
        walk(&self.dom.document, &mut |node| {
            if attr(node, IDENTITY_ATTR).is_some() {
                out.push(node.clone());
            }
        });
        out
    }

    /// Identity-bearing blocks with no identity-bearing descendant.
    pub fn leaf_blocks(&self) -> Vec<Handle> {
        self.blocks()
            .into_iter()
            .filter(is_leaf_block)
            .collect()
    }

    /// Find a block by its identity attribute value.
    pub fn find_block(&self, id: &str) -> Option<Handle> {
        find_descendant(&self.dom.document, &|node| {
            attr(node, IDENTITY_ATTR).as_deref() == Some(id)
        })
    }
}

/// True when the node is an identity-bearing block with no nested block.
pub fn is_leaf_block(node: &Handle) -> bool {
    attr(node, IDENTITY_ATTR).is_some()
        && find_descendant(node, &|d| attr(d, IDENTITY_ATTR).is_some()).is_none()
}

/// The element's local tag name, lowercase as parsed.
pub fn tag_name(node: &Handle) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

pub fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

pub fn is_text(node: &Handle) -> bool {
    matches!(node.data, NodeData::Text { .. })
}

/// The text of a text node, empty for anything else.
pub fn text_of(node: &Handle) -> String {
    match node.data {
        NodeData::Text { ref contents } => contents.borrow().to_string(),
        _ => String::new(),
    }
}

/// An attribute value by name.
pub fn attr(node: &Handle, name: &str) -> Option<String> {
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// The class attribute, empty when absent.
pub fn class_attr(node: &Handle) -> String {
    attr(node, "class").unwrap_or_default()
}

/// Substring containment over the class attribute. Host block kinds are
/// conveyed as class-name fragments, not whole tokens.
pub fn class_contains(node: &Handle, fragment: &str) -> bool {
    class_attr(node).contains(fragment)
}

/// Whitespace-token equality over the class attribute. Used where substring
/// matching would be wrong ("unchecked" contains "checked").
pub fn class_has_token(node: &Handle, token: &str) -> bool {
    class_attr(node).split_whitespace().any(|t| t == token)
}

/// The inline style attribute, empty when absent.
pub fn style_attr(node: &Handle) -> String {
    attr(node, "style").unwrap_or_default()
}

/// Substring containment over the raw inline style attribute.
pub fn style_contains(node: &Handle, fragment: &str) -> bool {
    style_attr(node).contains(fragment)
}

/// A single declaration value out of the inline style attribute.
pub fn style_value(node: &Handle, property: &str) -> Option<String> {
    let style = style_attr(node);
    for decl in style.split(';') {
        let mut parts = decl.splitn(2, ':');
        let name = parts.next()?.trim();
        if name.eq_ignore_ascii_case(property) {
            return parts.next().map(|v| v.trim().to_string());
        }
    }
    None
}

/// Concatenated text of all text descendants, in document order.
pub fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Pre-order visit of the node and all descendants.
pub fn walk(node: &Handle, visit: &mut impl FnMut(&Handle)) {
    visit(node);
    for child in node.children.borrow().iter() {
        walk(child, visit);
    }
}

/// First descendant (excluding the node itself) matching the predicate.
pub fn find_descendant(node: &Handle, pred: &impl Fn(&Handle) -> bool) -> Option<Handle> {
    for child in node.children.borrow().iter() {
        if pred(child) {
            return Some(child.clone());
        }
        if let Some(found) = find_descendant(child, pred) {
            return Some(found);
        }
    }
    None
}

/// All descendants (excluding the node itself) matching the predicate.
pub fn descendants_where(node: &Handle, pred: &impl Fn(&Handle) -> bool) -> Vec<Handle> {
    let mut out = Vec::new();
    for child in node.children.borrow().iter() {
        if pred(child) {
            out.push(child.clone());
        }
        out.extend(descendants_where(child, pred));
    }
    out
}

/// Child-index path from `root` down to `target`, or None when `target`
/// is not in `root`'s subtree. The empty path addresses `root` itself.
pub fn path_to(root: &Handle, target: &Handle) -> Option<Vec<usize>> {
    if Rc::ptr_eq(root, target) {
        return Some(Vec::new());
    }
    for (i, child) in root.children.borrow().iter().enumerate() {
        if let Some(mut sub) = path_to(child, target) {
            sub.insert(0, i);
            return Some(sub);
        }
    }
    None
}

/// The node addressed by a child-index path.
pub fn node_at_path(root: &Handle, path: &[usize]) -> Option<Handle> {
    let mut current = root.clone();
    for &idx in path {
        let next = current.children.borrow().get(idx)?.clone();
        current = next;
    }
    Some(current)
}

/// Identity-bearing blocks under `root` paired with their paths, one walk.
pub fn blocks_with_paths(root: &Handle) -> Vec<(Handle, Vec<usize>)> {
    matches_with_paths(root, &|node| attr(node, IDENTITY_ATTR).is_some())
}

/// Nodes matching the predicate (the root included) paired with their
/// paths relative to `root`, in document order.
pub fn matches_with_paths(
    root: &Handle,
    pred: &impl Fn(&Handle) -> bool,
) -> Vec<(Handle, Vec<usize>)> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    collect_matches(root, pred, &mut path, &mut out);
    out
}

fn collect_matches(
    node: &Handle,
    pred: &impl Fn(&Handle) -> bool,
    path: &mut Vec<usize>,
    out: &mut Vec<(Handle, Vec<usize>)>,
) {
    if pred(node) {
        out.push((node.clone(), path.clone()));
    }
    for (i, child) in node.children.borrow().iter().enumerate() {
        path.push(i);
        collect_matches(child, pred, path, out);
        path.pop();
    }
}

/// Deep clone of a subtree, skipping any subtree the predicate excludes.
/// Comments and other non-content nodes are dropped.
pub fn clone_without<F: Fn(&Handle) -> bool>(node: &Handle, exclude: &F) -> Option<Handle> {
    if exclude(node) {
        return None;
    }
    let cloned = match node.data {
        NodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            let attributes = attrs.borrow().clone();
            Rc::new(Node {
                parent: Cell::new(None),
                children: RefCell::new(Vec::new()),
                data: NodeData::Element {
                    name: name.clone(),
                    attrs: RefCell::new(attributes),
                    template_contents: Default::default(),
                    mathml_annotation_xml_integration_point: false,
                },
            })
        }
        NodeData::Text { ref contents } => create_text(&contents.borrow()),
        _ => return None,
    };
    for child in node.children.borrow().iter() {
        if let Some(c) = clone_without(child, exclude) {
            cloned.children.borrow_mut().push(c);
        }
    }
    Some(cloned)
}

/// Create a detached element with attributes.
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a detached text node.
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

pub fn append_child(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}
