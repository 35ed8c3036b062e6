//! Document tree queries.
//!
//! [`StyleTree`] is the read-only view of a document the helpers need:
//! root language, body, parent links and resolved styles.

mod document;
mod tree;
#[cfg(feature = "web")]
mod web;

pub use document::{Document, NodeId};
pub use tree::{find_scroll_parent, is_scrollable, is_scrolling_value, StyleTree, SCROLL_PROPERTIES};
#[cfg(feature = "web")]
pub use web::BrowserDom;
