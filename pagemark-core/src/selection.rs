//! Selection ranges over a parsed page
//!
//! A selection is an ordered pair of boundary points, each a (container,
//! offset) pair. Containers are addressed by child-index paths from the
//! document root; offsets index children for element containers and
//! characters for text containers. Encoding a boundary as its path with the
//! offset appended makes document-order comparison a plain lexicographic
//! compare, the same ordering the DOM defines for boundary points.

use crate::dom::{
    self, clone_without, create_element, create_text, is_text, node_at_path, path_to, text_of,
    Page,
};
use crate::error::ExtractError;
use markup5ever_rcdom::Handle;

/// One end of a selection: a container path plus an offset into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    pub path: Vec<usize>,
    pub offset: usize,
}

impl Boundary {
    pub fn new(path: Vec<usize>, offset: usize) -> Self {
        Boundary { path, offset }
    }

    fn key(&self) -> Vec<usize> {
        let mut key = self.path.clone();
        key.push(self.offset);
        key
    }
}

/// A normalized selection range: start never follows end.
#[derive(Debug, Clone)]
pub struct Selection {
    start: Boundary,
    end: Boundary,
}

/// Tags the flattened-text walk treats as line-producing.
const BLOCK_TAGS: &[&str] = &[
    "div",
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "blockquote",
    "pre",
];

pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

impl Selection {
    /// Build a selection from two boundaries, swapping them when given in
    /// reverse document order.
    pub fn new(a: Boundary, b: Boundary) -> Self {
        if a.key() <= b.key() {
            Selection { start: a, end: b }
        } else {
            Selection { start: b, end: a }
        }
    }

    /// A selection spanning the whole page body.
    pub fn entire(page: &Page) -> Self {
        let root = page.document();
        let body = page.body();
        let path = path_to(&root, &body).unwrap_or_default();
        let child_count = body.children.borrow().len();
        Selection::new(
            Boundary::new(path.clone(), 0),
            Boundary::new(path, child_count),
        )
    }

    /// A selection from the start of one identified block to the end of
    /// another.
    pub fn between_blocks(page: &Page, from_id: &str, to_id: &str) -> Result<Self, ExtractError> {
        let root = page.document();
        let from = page
            .find_block(from_id)
            .ok_or_else(|| ExtractError::NodeNotFound(from_id.to_string()))?;
        let to = page
            .find_block(to_id)
            .ok_or_else(|| ExtractError::NodeNotFound(to_id.to_string()))?;
        let from_path = path_to(&root, &from).unwrap_or_default();
        let to_path = path_to(&root, &to).unwrap_or_default();
        Ok(Selection::new(
            boundary_before(&from_path),
            boundary_after(&to_path),
        ))
    }

    pub fn start(&self) -> &Boundary {
        &self.start
    }

    pub fn end(&self) -> &Boundary {
        &self.end
    }

    /// True when the node at `node_path` lies at least partly inside the
    /// selection. Matches DOM `intersectsNode`: a collapsed selection inside
    /// a node still intersects it.
    pub fn intersects_path(&self, node_path: &[usize]) -> bool {
        if node_path.is_empty() {
            return true;
        }
        let node_start = node_path.to_vec();
        let mut node_end = node_path.to_vec();
        *node_end.last_mut().unwrap() += 1;
        self.start.key() < node_end && self.end.key() > node_start
    }

    /// True when the node's whole extent lies inside the selection.
    pub fn contains_path(&self, node_path: &[usize]) -> bool {
        if node_path.is_empty() {
            return false;
        }
        let node_start = node_path.to_vec();
        let mut node_end = node_path.to_vec();
        *node_end.last_mut().unwrap() += 1;
        self.start.key() <= node_start && node_end <= self.end.key()
    }

    pub fn intersects(&self, root: &Handle, node: &Handle) -> bool {
        match path_to(root, node) {
            Some(path) => self.intersects_path(&path),
            None => false,
        }
    }

    /// The deepest element containing both boundaries. A text container is
    /// reported through its parent element.
    pub fn common_ancestor(&self, root: &Handle) -> Handle {
        let mut prefix: Vec<usize> = self
            .start
            .path
            .iter()
            .zip(self.end.path.iter())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| *a)
            .collect();
        loop {
            match node_at_path(root, &prefix) {
                Some(node) if !is_text(&node) => return node,
                _ => {
                    if prefix.pop().is_none() {
                        return root.clone();
                    }
                }
            }
        }
    }

    /// The selection's visible text: text nodes in range, boundary nodes
    /// sliced by character offset, one line per block-level element.
    pub fn flattened_text(&self, root: &Handle) -> String {
        let mut out = String::new();
        let mut path = Vec::new();
        self.flatten_into(root, &mut path, &mut out);
        while out.ends_with('\n') {
            out.pop();
        }
        out
    }

    fn flatten_into(&self, node: &Handle, path: &mut Vec<usize>, out: &mut String) {
        if is_text(node) {
            if self.intersects_path(path) {
                let text = text_of(node);
                let (from, to) = self.char_range(path, text.chars().count());
                out.push_str(&char_slice(&text, from, to));
            }
            return;
        }
        if dom::tag_name(node) == Some("br") {
            if self.intersects_path(path) && !out.is_empty() {
                out.push('\n');
            }
            return;
        }
        let before = out.len();
        for (i, child) in node.children.borrow().iter().enumerate() {
            path.push(i);
            self.flatten_into(child, path, out);
            path.pop();
        }
        if let Some(tag) = dom::tag_name(node) {
            if is_block_tag(tag) && out.len() > before && !out.ends_with('\n') {
                out.push('\n');
            }
        }
    }

    /// Character span of a text container clipped by whichever boundaries
    /// live inside it.
    fn char_range(&self, text_path: &[usize], char_len: usize) -> (usize, usize) {
        let from = if self.start.path == text_path {
            self.start.offset.min(char_len)
        } else {
            0
        };
        let to = if self.end.path == text_path {
            self.end.offset.min(char_len)
        } else {
            char_len
        };
        (from, to.max(from))
    }

    /// Clone the selected contents into a detached container, the way DOM
    /// `cloneContents` does: children of the common container are deep
    /// cloned when fully covered, shell-cloned and recursed when partially
    /// covered, and boundary text is sliced.
    pub fn clone_contents(&self, root: &Handle) -> Handle {
        let container = create_element("div", vec![]);
        let mut prefix: Vec<usize> = self
            .start
            .path
            .iter()
            .zip(self.end.path.iter())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| *a)
            .collect();
        let Some(ancestor) = node_at_path(root, &prefix) else {
            return container;
        };
        if is_text(&ancestor) {
            let text = text_of(&ancestor);
            let (from, to) = self.char_range(&prefix, text.chars().count());
            let slice = char_slice(&text, from, to);
            if !slice.is_empty() {
                dom::append_child(&container, create_text(&slice));
            }
            return container;
        }
        for (i, child) in ancestor.children.borrow().iter().enumerate() {
            prefix.push(i);
            if let Some(cloned) = self.clone_range(child, &mut prefix) {
                dom::append_child(&container, cloned);
            }
            prefix.pop();
        }
        container
    }

    fn clone_range(&self, node: &Handle, path: &mut Vec<usize>) -> Option<Handle> {
        if !self.intersects_path(path) {
            return None;
        }
        if is_text(node) {
            let text = text_of(node);
            let (from, to) = self.char_range(path, text.chars().count());
            let slice = char_slice(&text, from, to);
            if slice.is_empty() {
                return None;
            }
            return Some(create_text(&slice));
        }
        if self.contains_path(path) {
            return clone_without(node, &|_| false);
        }
        let shell = clone_without(node, &|n| !std::rc::Rc::ptr_eq(n, node))?;
        for (i, child) in node.children.borrow().iter().enumerate() {
            path.push(i);
            if let Some(cloned) = self.clone_range(child, path) {
                dom::append_child(&shell, cloned);
            }
            path.pop();
        }
        Some(shell)
    }
}

fn boundary_before(node_path: &[usize]) -> Boundary {
    match node_path.split_last() {
        Some((last, parent)) => Boundary::new(parent.to_vec(), *last),
        None => Boundary::new(Vec::new(), 0),
    }
}

fn boundary_after(node_path: &[usize]) -> Boundary {
    match node_path.split_last() {
        Some((last, parent)) => Boundary::new(parent.to_vec(), last + 1),
        None => Boundary::new(Vec::new(), usize::MAX),
    }
}

/// Slice a string by character positions.
pub fn char_slice(s: &str, from: usize, to: usize) -> String {
    s.chars().skip(from).take(to.saturating_sub(from)).collect()
}
