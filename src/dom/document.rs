//! In-memory document tree.

use std::collections::HashMap;

use super::tree::StyleTree;

/// Handle to an element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    parent: Option<NodeId>,
    styles: HashMap<String, String>,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            parent,
            styles: HashMap::new(),
        }
    }
}

/// A minimal styled document: an `html` root with a `body` child.
///
/// Styles are stored as declared and resolved on read the way a browser
/// resolves them for `getComputedStyle`, limited to the overflow
/// properties: `overflow` is a shorthand for `overflow-x` / `overflow-y`,
/// both default to `visible`, and `visible` / `clip` turn into `auto` /
/// `hidden` when the other axis scrolls or hides.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    body: NodeId,
    lang: Option<String>,
}

impl Document {
    /// Create a document holding `<html><body></body></html>`.
    pub fn new() -> Self {
        let root = NodeId(0);
        let body = NodeId(1);
        Self {
            nodes: vec![Element::new("html", None), Element::new("body", Some(root))],
            root,
            body,
            lang: None,
        }
    }

    /// The `html` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `body` element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Set the `lang` attribute of the root element.
    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = Some(lang.into());
    }

    /// The `lang` attribute of the root element.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Create an element that is not attached to the tree.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Element::new(tag, None))
    }

    /// Create an element as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.push(Element::new(tag, Some(parent)))
    }

    /// Declare a style property on `node`.
    ///
    /// `overflow` expands to its longhands: one keyword sets both axes,
    /// two keywords set `overflow-x` then `overflow-y`.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        let Some(element) = self.nodes.get_mut(node.0) else {
            return;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();

        if property == "overflow" {
            let mut keywords = value.split_whitespace();
            let x = keywords.next().unwrap_or("visible");
            let y = keywords.next().unwrap_or(x);
            element.styles.insert("overflow-x".to_string(), x.to_string());
            element.styles.insert("overflow-y".to_string(), y.to_string());
        } else {
            element.styles.insert(property, value.to_string());
        }
    }

    /// Tag name of `node`, lowercase.
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|element| element.tag.as_str())
    }

    /// Parent of `node`, `None` for the root and detached elements.
    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|element| element.parent)
    }

    /// Number of elements, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a document has at least `html` and `body`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolved value of a style property on `node`.
    pub fn resolved_style(&self, node: NodeId, property: &str) -> Option<String> {
        let element = self.nodes.get(node.0)?;
        match property.trim().to_ascii_lowercase().as_str() {
            "overflow" => {
                let (x, y) = resolve_overflow(element);
                if x == y {
                    Some(x.to_string())
                } else {
                    Some(format!("{x} {y}"))
                }
            }
            "overflow-x" => Some(resolve_overflow(element).0.to_string()),
            "overflow-y" => Some(resolve_overflow(element).1.to_string()),
            other => element.styles.get(other).cloned(),
        }
    }

    fn push(&mut self, element: Element) -> NodeId {
        self.nodes.push(element);
        NodeId(self.nodes.len() - 1)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_overflow(element: &Element) -> (&str, &str) {
    let declared = |property: &str| {
        element
            .styles
            .get(property)
            .map(String::as_str)
            .unwrap_or("visible")
    };
    let x = declared("overflow-x");
    let y = declared("overflow-y");
    (adjust_axis(x, y), adjust_axis(y, x))
}

/// `visible` and `clip` only survive when the other axis is also one of them.
fn adjust_axis<'a>(axis: &'a str, other: &str) -> &'a str {
    let other_contained = matches!(other, "visible" | "clip");
    match axis {
        "visible" if !other_contained => "auto",
        "clip" if !other_contained => "hidden",
        _ => axis,
    }
}

impl StyleTree for Document {
    type Node = NodeId;

    fn root_lang(&self) -> Option<String> {
        self.lang.clone()
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.parent_of(*node)
    }

    fn computed_style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.resolved_style(*node, property)
    }
}
