//! Read-only view of the source markup element behind a layout box.
//!
//! Attribute values feed the replaced-content fallback (`alt`), tooltips
//! (`title`, the enclosing anchor's `title` and `href`) and nothing else;
//! the bridge never serializes or mutates markup.

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// Attribute access for the markup element a box was generated from.
///
/// Attributes are not expected to change without a full relayout, so views
/// may read them once at construction.
pub trait MarkupElement {
    /// Look up an attribute value by name.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Attributes of the nearest enclosing hyperlink element, when the
    /// element sits inside one. Used for anchor tooltips.
    fn anchor_attributes(&self) -> Option<&AttributesMap>;
}

/// Plain owned implementation of [`MarkupElement`] for hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct SimpleElement {
    attrs: AttributesMap,
    anchor: Option<AttributesMap>,
}

impl SimpleElement {
    /// Create an element from its attribute map.
    #[must_use]
    pub fn new(attrs: AttributesMap) -> Self {
        Self {
            attrs,
            anchor: None,
        }
    }

    /// Attach the attribute map of the enclosing hyperlink.
    #[must_use]
    pub fn with_anchor(mut self, anchor: AttributesMap) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

impl MarkupElement for SimpleElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn anchor_attributes(&self) -> Option<&AttributesMap> {
        self.anchor.as_ref()
    }
}
