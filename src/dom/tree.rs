//! Read-only document tree access and the scroll-parent walk.

/// Overflow properties that make an element a scroll container.
pub const SCROLL_PROPERTIES: [&str; 3] = ["overflow", "overflow-x", "overflow-y"];

/// Read access to a styled document tree.
///
/// Implemented by the in-memory [`Document`](super::Document) and, with the
/// `web` feature, by the live browser DOM.
pub trait StyleTree {
    /// Handle to an element of the tree.
    type Node: Clone + PartialEq;

    /// The `lang` attribute of the root element, if any.
    fn root_lang(&self) -> Option<String>;

    /// The document body, if the document has one.
    fn body(&self) -> Option<Self::Node>;

    /// The parent element of `node`.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The resolved value of a CSS property on `node`.
    fn computed_style(&self, node: &Self::Node, property: &str) -> Option<String>;
}

/// Check if a resolved overflow value lets the element scroll.
///
/// Only the exact keywords `auto` and `scroll` count.
pub fn is_scrolling_value(value: &str) -> bool {
    matches!(value, "auto" | "scroll")
}

/// Check if any overflow property of `node` lets it scroll.
pub fn is_scrollable<T: StyleTree>(tree: &T, node: &T::Node) -> bool {
    SCROLL_PROPERTIES.iter().any(|property| {
        tree.computed_style(node, property)
            .is_some_and(|value| is_scrolling_value(&value))
    })
}

/// Find the nearest scroll container at or above `node`.
///
/// Walks parent links starting at `node` itself and returns the first
/// element whose `overflow`, `overflow-x` or `overflow-y` resolves to
/// `auto` or `scroll`. The body is never returned and stops the search.
/// Returns `None` for a missing node, on reaching the body, or when the
/// chain runs out of parents (detached subtree).
pub fn find_scroll_parent<T: StyleTree>(tree: &T, node: Option<&T::Node>) -> Option<T::Node> {
    let body = tree.body();
    let mut current = node.cloned();

    while let Some(node) = current {
        if body.as_ref() == Some(&node) {
            return None;
        }
        if is_scrollable(tree, &node) {
            return Some(node);
        }
        current = tree.parent(&node);
    }

    None
}
