//! In-memory XML element tree.
//!
//! [`Element`] is the node type every section builder returns. It supports
//! the handful of operations tree construction needs (create, set attribute,
//! append child, set text) and read accessors for callers that inspect or
//! serialize the result.
//!
//! # Examples
//!
//! ```ignore
//! use audiomd::element::Element;
//! use audiomd::namespace::qualified_tag;
//!
//! let mut tracking = Element::new(qualified_tag("tracking", ""));
//! tracking
//!     .sub_element(qualified_tag("trackingType", ""))
//!     .set_text("CTL");
//!
//! assert_eq!(tracking.find_path("trackingType").and_then(|e| e.text()), Some("CTL"));
//! ```

use indexmap::IndexMap;

use crate::namespace::QName;

/// A namespaced XML element with attributes, children and optional text.
///
/// Equality is structural: two trees are equal when they have the same names,
/// attributes, text and children in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: QName,
    attributes: IndexMap<QName, String>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: QName) -> Self {
        Element {
            name,
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Qualified element name.
    #[must_use]
    pub fn name(&self) -> &QName {
        &self.name
    }

    /// Local part of the element name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name.local_name()
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn set_attribute(&mut self, name: impl Into<QName>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Value of an unqualified attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&QName::unqualified(name))
            .map(String::as_str)
    }

    /// Value of a namespaced attribute.
    #[must_use]
    pub fn attribute_ns(&self, namespace: &str, name: &str) -> Option<&str> {
        self.attributes
            .get(&QName::new(namespace, name))
            .map(String::as_str)
    }

    /// Attributes in the order they were first set.
    pub fn attributes(&self) -> impl Iterator<Item = (&QName, &str)> {
        self.attributes.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Append a child element.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Append a new empty child and return a mutable reference to it.
    pub fn sub_element(&mut self, name: QName) -> &mut Element {
        self.children.push(Element::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Whether the element has no children and no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }

    /// First child with the given local name.
    #[must_use]
    pub fn find(&self, local_name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.local_name() == local_name)
    }

    /// All children with the given local name, in document order.
    pub fn find_all<'a>(&'a self, local_name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children
            .iter()
            .filter(move |c| c.local_name() == local_name)
    }

    /// Follow a `/`-separated path of child local names, taking the first
    /// match at each step.
    #[must_use]
    pub fn find_path(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|step| !step.is_empty())
            .try_fold(self, |node, step| node.find(step))
    }

    /// Local names of the direct children, in document order.
    #[must_use]
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(Element::local_name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{qualified_tag, XSI_NS};

    #[test]
    fn test_new_element_is_empty() {
        let element = Element::new(qualified_tag("material", ""));
        assert!(element.is_empty());
        assert_eq!(element.local_name(), "material");
        assert_eq!(element.attribute_count(), 0);
    }

    #[test]
    fn test_set_attribute_replaces_value() {
        let mut element = Element::new(qualified_tag("dimensions", ""));
        element.set_attribute("WIDTH", "1");
        element.set_attribute("WIDTH", "2");
        assert_eq!(element.attribute("WIDTH"), Some("2"));
        assert_eq!(element.attribute_count(), 1);
    }

    #[test]
    fn test_namespaced_attribute() {
        let mut element = Element::new(qualified_tag("AUDIOMD", ""));
        element.set_attribute(QName::new(XSI_NS, "schemaLocation"), "loc");
        assert_eq!(element.attribute_ns(XSI_NS, "schemaLocation"), Some("loc"));
        assert_eq!(element.attribute("schemaLocation"), None);
    }

    #[test]
    fn test_find_path() {
        let mut root = Element::new(qualified_tag("AUDIOMD", ""));
        let file_data = root.sub_element(qualified_tag("fileData", ""));
        file_data
            .sub_element(qualified_tag("dataRate", ""))
            .set_text("256");

        assert_eq!(
            root.find_path("fileData/dataRate").and_then(Element::text),
            Some("256")
        );
        assert!(root.find_path("fileData/wordSize").is_none());
    }

    #[test]
    fn test_structural_equality() {
        let build = || {
            let mut e = Element::new(qualified_tag("tracking", ""));
            e.sub_element(qualified_tag("trackingType", "")).set_text("CTL");
            e
        };
        assert_eq!(build(), build());

        let mut other = build();
        other.set_attribute("NOTE", "x");
        assert_ne!(build(), other);
    }
}
