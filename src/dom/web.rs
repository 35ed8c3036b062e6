//! Live browser DOM binding.

use web_sys::{Element, Window};

use super::tree::StyleTree;

/// The document of the current browser window.
#[derive(Debug, Clone)]
pub struct BrowserDom {
    window: Window,
    document: web_sys::Document,
}

impl BrowserDom {
    /// Bind to `window.document`.
    ///
    /// Returns `None` outside a browser main thread (no window or document).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl StyleTree for BrowserDom {
    type Node = Element;

    fn root_lang(&self) -> Option<String> {
        self.document.document_element()?.get_attribute("lang")
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn computed_style(&self, node: &Element, property: &str) -> Option<String> {
        self.window
            .get_computed_style(node)
            .ok()
            .flatten()?
            .get_property_value(property)
            .ok()
    }
}
