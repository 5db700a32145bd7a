use std::collections::{BTreeMap, BTreeSet};

/// Conventional id under which implementations expose the document root
/// element (the carrier of the `data-theme` attribute).
pub const ROOT_ID: &str = "html";

/// Capability through which page behaviors touch the document.
///
/// Every operation addresses an element by id and reports whether that
/// element existed. Missing elements are silent no-ops at every call site,
/// mirroring the `if (el)` guards of a hand-written page script; callers
/// never treat `false` as an error.
pub trait DomSurface {
    /// Replace the element's content with a markup fragment.
    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;

    /// Replace the element's text content.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Read an attribute value.
    fn get_attr(&self, id: &str, name: &str) -> Option<String>;

    /// Write an attribute value.
    fn set_attr(&mut self, id: &str, name: &str, value: &str) -> bool;

    /// Add a class to the element's class list.
    fn add_class(&mut self, id: &str, class: &str) -> bool;

    /// Remove a class from the element's class list.
    fn remove_class(&mut self, id: &str, class: &str) -> bool;
}

/// One element held by [`MemoryDom`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
    /// Current markup content.
    pub inner_html: String,
    /// Current text content.
    pub text: String,
    /// Attribute table.
    pub attrs: BTreeMap<String, String>,
    /// Class list.
    pub classes: BTreeSet<String>,
}

/// In-memory surface for tests and headless use.
///
/// Only ids registered with [`MemoryDom::insert`] exist; operations on other
/// ids return `false`/`None`, the same as a lookup miss on a real page.
#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: BTreeMap<String, MemoryElement>,
}

impl MemoryDom {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty element under `id`.
    pub fn insert(&mut self, id: impl Into<String>) {
        self.elements.insert(id.into(), MemoryElement::default());
    }

    /// Inspect an element, if present.
    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }
}

impl DomSurface for MemoryDom {
    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.inner_html = html.to_string();
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn get_attr(&self, id: &str, name: &str) -> Option<String> {
        self.elements.get(id)?.attrs.get(name).cloned()
    }

    fn set_attr(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.attrs.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.classes.insert(class.to_string());
                true
            }
            None => false,
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.classes.remove(class);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/surface.rs"]
mod tests;
