//! Element construction primitives.
//!
//! Section builders are flat sequences of calls to these helpers. Each one is
//! a no-op when its value is absent, so builders carry no conditionals of
//! their own.

use tracing::trace;

use crate::element::Element;
use crate::namespace::{qualified_tag, QName};
use crate::params::Field;

/// Append one text child per value, in order.
///
/// A single empty string is treated as absent.
pub fn append_children_with_text(parent: &mut Element, tag: &str, values: &Field<String>) {
    if let Field::One(value) = values {
        if value.is_empty() {
            return;
        }
    }
    for value in values {
        parent
            .sub_element(qualified_tag(tag, ""))
            .set_text(value.as_str());
    }
}

/// Append exactly one text child if `value` is present and non-empty.
///
/// Used for elements the schema does not allow to repeat.
pub fn append_single_child_with_text(parent: &mut Element, tag: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        parent.sub_element(qualified_tag(tag, "")).set_text(value);
    }
}

/// Append pre-built subtrees as children, in order.
pub fn append_prebuilt_elements(parent: &mut Element, elements: &Field<Element>) {
    for element in elements {
        parent.append(element.clone());
    }
}

/// Set an unqualified attribute if `value` is present and non-empty.
pub fn set_optional_attribute(element: &mut Element, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        element.set_attribute(QName::unqualified(name), value);
    }
}

/// How one schema field is emitted into its section element.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Slot<'a> {
    /// Repeatable text child.
    Text(&'a Field<String>),
    /// Non-repeatable text child.
    Single(Option<&'a str>),
    /// Pre-built child subtrees.
    Elements(&'a Field<Element>),
    /// Attribute on the section element itself.
    Attribute(Option<&'a str>),
}

impl Slot<'_> {
    fn emit(self, parent: &mut Element, key: &str) {
        match self {
            Slot::Text(values) => append_children_with_text(parent, key, values),
            Slot::Single(value) => append_single_child_with_text(parent, key, value),
            Slot::Elements(elements) => append_prebuilt_elements(parent, elements),
            Slot::Attribute(value) => set_optional_attribute(parent, key, value),
        }
    }
}

/// Build a section element by emitting `slots` in declaration order.
pub(crate) fn build_section<'a>(
    tag: &str,
    slots: impl IntoIterator<Item = (&'static str, Slot<'a>)>,
) -> Element {
    let mut element = Element::new(qualified_tag(tag, ""));
    for (key, slot) in slots {
        slot.emit(&mut element, key);
    }
    trace!(tag, children = element.children().len(), "built section element");
    element
}
