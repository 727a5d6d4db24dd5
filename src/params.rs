//! Parameter values, parameter mappings and the validation gate.
//!
//! Section builders take their values either as typed structs (see
//! [`crate::sections`]) or as an untyped [`ParameterSet`] keyed by the
//! schema's element names. A [`Field`] holds the value for one key: absent,
//! a single value, or an ordered list for repeatable schema elements.
//!
//! # Examples
//!
//! ```ignore
//! use audiomd::params::{check_params, make_empty_parameter_set};
//! use audiomd::sections::file_data::FILE_DATA_PARAMS;
//!
//! let mut params = make_empty_parameter_set(FILE_DATA_PARAMS);
//! params.set("audioDataEncoding", "PCM");
//! params.set("bitsPerSample", vec!["8"]);
//! assert!(check_params(&params, FILE_DATA_PARAMS).is_ok());
//!
//! params.set("Compression", "lossy");
//! assert!(check_params(&params, FILE_DATA_PARAMS).is_err());
//! ```

use indexmap::IndexMap;
use serde_json::Value;
use tracing::warn;

use crate::element::Element;
use crate::error::{AudiomdError, Result};

/// Value slot for one schema field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// No value; nothing is emitted.
    #[default]
    Absent,
    /// Exactly one value.
    One(T),
    /// Ordered values for a repeatable element.
    Many(Vec<T>),
}

impl<T> Field<T> {
    /// Whether the field holds no values.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Values as a slice, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Field::Absent => &[],
            Field::One(value) => std::slice::from_ref(value),
            Field::Many(values) => values,
        }
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Number of values held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Convert each value, keeping the variant.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(&T) -> std::result::Result<U, E>,
    ) -> std::result::Result<Field<U>, E> {
        Ok(match self {
            Field::Absent => Field::Absent,
            Field::One(value) => Field::One(f(value)?),
            Field::Many(values) => Field::Many(
                values
                    .iter()
                    .map(f)
                    .collect::<std::result::Result<_, _>>()?,
            ),
        })
    }
}

impl<'a, T> IntoIterator for &'a Field<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Field<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Field::Many(iter.into_iter().collect())
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Field::One(value.to_string())
    }
}

impl From<String> for Field<String> {
    fn from(value: String) -> Self {
        Field::One(value)
    }
}

impl From<Vec<&str>> for Field<String> {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().map(str::to_string).collect()
    }
}

impl From<Vec<String>> for Field<String> {
    fn from(values: Vec<String>) -> Self {
        Field::Many(values)
    }
}

impl From<Option<&str>> for Field<String> {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Field::Absent, Field::from)
    }
}

impl From<Option<String>> for Field<String> {
    fn from(value: Option<String>) -> Self {
        value.map_or(Field::Absent, Field::One)
    }
}

impl From<Element> for Field<Element> {
    fn from(value: Element) -> Self {
        Field::One(value)
    }
}

impl From<Vec<Element>> for Field<Element> {
    fn from(values: Vec<Element>) -> Self {
        Field::Many(values)
    }
}

impl From<Option<Element>> for Field<Element> {
    fn from(value: Option<Element>) -> Self {
        value.map_or(Field::Absent, Field::One)
    }
}

/// An untyped parameter value: text or a pre-built subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Text content for a leaf element or attribute.
    Text(String),
    /// A subtree produced by another section builder.
    Element(Element),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<Element> for ParamValue {
    fn from(value: Element) -> Self {
        ParamValue::Element(value)
    }
}

impl From<&str> for Field<ParamValue> {
    fn from(value: &str) -> Self {
        Field::One(value.into())
    }
}

impl From<String> for Field<ParamValue> {
    fn from(value: String) -> Self {
        Field::One(value.into())
    }
}

impl From<Element> for Field<ParamValue> {
    fn from(value: Element) -> Self {
        Field::One(value.into())
    }
}

impl From<Vec<&str>> for Field<ParamValue> {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().map(ParamValue::from).collect()
    }
}

impl From<Vec<String>> for Field<ParamValue> {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().map(ParamValue::from).collect()
    }
}

impl From<Vec<Element>> for Field<ParamValue> {
    fn from(values: Vec<Element>) -> Self {
        values.into_iter().map(ParamValue::from).collect()
    }
}

/// Insertion-ordered mapping from parameter names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    values: IndexMap<String, Field<ParamValue>>,
}

impl ParameterSet {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a key, replacing any previous value.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Field<ParamValue>>,
    ) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Field<ParamValue>>) -> Self {
        self.set(key, value);
        self
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Field<ParamValue>> {
        self.values.get(key)
    }

    /// Whether `key` is present (even if its value is absent).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a JSON object of parameters.
    ///
    /// See [`from_json_value`](Self::from_json_value) for the accepted shapes.
    ///
    /// # Errors
    ///
    /// Returns [`AudiomdError::Json`] if `input` is not valid JSON, or
    /// [`AudiomdError::InvalidValue`] for unsupported value shapes.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }

    /// Build a mapping from a JSON object.
    ///
    /// `null` is absent, strings and numbers become text, and arrays of those
    /// become repeated text. Subtree-valued keys cannot be expressed in JSON
    /// and must be set with [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`AudiomdError::InvalidValue`] if the input is not an object or
    /// a value has an unsupported shape.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(object) = value else {
            return Err(AudiomdError::InvalidValue {
                key: JSON_ROOT_KEY.to_string(),
                expected: "a JSON object of parameters",
            });
        };

        let mut params = ParameterSet::new();
        for (key, value) in object {
            let field = match value {
                Value::Null => Field::Absent,
                Value::Array(items) => items
                    .iter()
                    .map(|item| json_text(key, item).map(ParamValue::Text))
                    .collect::<Result<Field<_>>>()?,
                other => Field::One(ParamValue::Text(json_text(key, other)?)),
            };
            params.set(key.clone(), field);
        }
        Ok(params)
    }
}

/// Key reported when the JSON input itself is not an object.
const JSON_ROOT_KEY: &str = "<root>";

fn json_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(AudiomdError::InvalidValue {
            key: key.to_string(),
            expected: "a string, a number, an array of those, or null",
        }),
    }
}

/// Create a mapping with every recognized key set to absent.
#[must_use]
pub fn make_empty_parameter_set(recognized: &[&str]) -> ParameterSet {
    let mut params = ParameterSet::new();
    for key in recognized {
        params.set(*key, Field::<ParamValue>::Absent);
    }
    params
}

/// Check that every key in `params` is one of `recognized`.
///
/// # Errors
///
/// Returns [`AudiomdError::UnrecognizedParameter`] carrying the first key,
/// in insertion order, that is not recognized.
pub fn check_params(params: &ParameterSet, recognized: &[&str]) -> Result<()> {
    match params.keys().find(|key| !recognized.contains(key)) {
        Some(key) => {
            warn!(key, "rejecting unrecognized parameter");
            Err(AudiomdError::UnrecognizedParameter(key.to_string()))
        }
        None => Ok(()),
    }
}

/// Read a repeatable text parameter.
pub(crate) fn text_field(params: &ParameterSet, key: &str) -> Result<Field<String>> {
    let Some(field) = params.get(key) else {
        return Ok(Field::Absent);
    };
    field.try_map(|value| match value {
        ParamValue::Text(text) => Ok(text.clone()),
        ParamValue::Element(_) => Err(invalid(key, "text")),
    })
}

/// Read a parameter holding pre-built subtrees.
pub(crate) fn element_field(params: &ParameterSet, key: &str) -> Result<Field<Element>> {
    let Some(field) = params.get(key) else {
        return Ok(Field::Absent);
    };
    field.try_map(|value| match value {
        ParamValue::Element(element) => Ok(element.clone()),
        ParamValue::Text(_) => Err(invalid(key, "pre-built elements")),
    })
}

/// Read a single-valued text parameter.
pub(crate) fn single_text(params: &ParameterSet, key: &str) -> Result<Option<String>> {
    let Some(field) = params.get(key) else {
        return Ok(None);
    };
    match field.as_slice() {
        [] => Ok(None),
        [ParamValue::Text(text)] => Ok(Some(text.clone())),
        _ => Err(invalid(key, "a single text value")),
    }
}

fn invalid(key: &str, expected: &'static str) -> AudiomdError {
    AudiomdError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}
