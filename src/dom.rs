//! In-memory document model.
//!
//! `Document` stands in for the browser DOM: a flat set of elements
//! addressable by id, each carrying inner HTML, an input value, attributes
//! and a focus flag. Every mutating operation on a missing id is a silent
//! no-op, which is what makes the page controller safe to run against
//! pages that only implement a subset of the UI.

use std::collections::BTreeMap;

/// A single modeled element.
///
/// Only the handful of properties the page controller touches are modeled;
/// anything else the real page carries is irrelevant here.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Rendered inner HTML of the element
    pub inner_html: String,
    /// Current value, for input elements
    pub value: String,
    /// Attributes (used for ARIA toggling on the search panel)
    pub attrs: BTreeMap<String, String>,
}

/// Flat document: elements by id.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    /// Id of the currently focused element, if any
    focused: Option<String>,
}

impl Document {
    /// Create an empty document with no elements at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element with the given id. Replaces any existing one.
    pub fn add_element(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_owned()).or_default()
    }

    /// Whether an element with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Borrow an element by id.
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Inner HTML of an element, or `None` if the id is absent.
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.inner_html.as_str())
    }

    /// Replace an element's inner HTML.
    ///
    /// Returns `true` if the element existed. A missing id is a no-op.
    pub fn set_inner_html(&mut self, id: &str, html: impl Into<String>) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.inner_html = html.into();
                true
            }
            None => false,
        }
    }

    /// Current value of an input element. Missing id reads as empty.
    pub fn input_value(&self, id: &str) -> &str {
        self.elements.get(id).map_or("", |e| e.value.as_str())
    }

    /// Set the value of an input element. Missing id is a no-op.
    pub fn set_input_value(&mut self, id: &str, value: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.value = value.into();
        }
    }

    /// Read an attribute of an element.
    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    /// Set an attribute on an element. Missing id is a no-op.
    pub fn set_attr(&mut self, id: &str, name: &str, value: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.attrs.insert(name.to_owned(), value.into());
        }
    }

    /// Remove an attribute from an element. Missing id is a no-op.
    pub fn remove_attr(&mut self, id: &str, name: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.attrs.remove(name);
        }
    }

    /// Move focus to an element. Missing id is a no-op.
    pub fn focus(&mut self, id: &str) {
        if self.elements.contains_key(id) {
            self.focused = Some(id.to_owned());
        }
    }

    /// Id of the focused element, if any.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}
