//! Serializing AudioMD element trees to XML.
//!
//! This module provides [`XmlWriter`] for writing an [`Element`] tree to any
//! destination implementing [`std::io::Write`], and [`to_xml_string`] for the
//! common in-memory case. The section builders never serialize; callers do.
//!
//! # Examples
//!
//! ```ignore
//! use audiomd::sections::{AudioMd, Section};
//! use audiomd::writer::{to_xml_string, WriterConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = AudioMd::default().to_element();
//! let xml = to_xml_string(&root, &WriterConfig::default())?;
//! assert!(xml.contains(r#"ANALOGDIGITALFLAG="FileDigital""#));
//! # Ok(())
//! # }
//! ```
//!
//! Pretty-printed output without a declaration:
//!
//! ```ignore
//! use audiomd::writer::WriterConfig;
//!
//! let config = WriterConfig {
//!     xml_declaration: false,
//!     indent: Some(2),
//!     ..Default::default()
//! };
//! ```

use std::fmt;
use std::io::Write;

use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::element::Element;
use crate::error::{AudiomdError, Result};
use crate::namespace::{QName, AUDIOMD_NS, AUDIOMD_PREFIX, XSI_NS, XSI_PREFIX};

/// Configuration for XML serialization.
///
/// Every field has a default, so a partial JSON object is a valid
/// configuration:
///
/// ```ignore
/// use audiomd::writer::WriterConfig;
///
/// let config: WriterConfig = serde_json::from_str(r#"{"indent": 4}"#)?;
/// assert!(config.xml_declaration);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Write an `<?xml version="1.0" encoding="UTF-8"?>` declaration first.
    pub xml_declaration: bool,

    /// Indent nested elements by this many spaces. `None` writes the tree on
    /// a single line.
    pub indent: Option<usize>,

    /// Namespace prefixes, prefix → URI. All of them are declared on the
    /// outermost element. An empty prefix declares the default namespace.
    pub namespaces: IndexMap<String, String>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        let mut namespaces = IndexMap::new();
        namespaces.insert(AUDIOMD_PREFIX.to_string(), AUDIOMD_NS.to_string());
        namespaces.insert(XSI_PREFIX.to_string(), XSI_NS.to_string());
        WriterConfig {
            xml_declaration: true,
            indent: None,
            namespaces,
        }
    }
}

/// Writer for a single AudioMD XML document.
///
/// An XML stream holds exactly one root element, so a writer accepts one
/// [`write_document`](Self::write_document) call and rejects any after it.
///
/// # Examples
///
/// ```ignore
/// use audiomd::sections::{tracking};
/// use audiomd::writer::XmlWriter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut writer = XmlWriter::new(Vec::new());
/// writer.write_document(&tracking(Some("CTL"), None))?;
/// let bytes = writer.into_inner();
/// # Ok(())
/// # }
/// ```
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
    config: WriterConfig,
    finished: bool,
}

impl<W: Write> XmlWriter<W> {
    /// Create a writer with the default configuration.
    pub fn new(inner: W) -> Self {
        Self::with_config(inner, WriterConfig::default())
    }

    /// Create a writer with an explicit configuration.
    pub fn with_config(inner: W, config: WriterConfig) -> Self {
        let writer = match config.indent {
            Some(size) => Writer::new_with_indent(inner, b' ', size),
            None => Writer::new(inner),
        };
        XmlWriter {
            writer,
            config,
            finished: false,
        }
    }

    /// Write `root` as a complete document.
    ///
    /// # Errors
    ///
    /// Returns [`AudiomdError::UnboundNamespace`] if the tree uses a
    /// namespace with no configured prefix, or
    /// [`AudiomdError::Serialization`] if writing fails or a document has
    /// already been written.
    pub fn write_document(&mut self, root: &Element) -> Result<()> {
        if self.finished {
            return Err(AudiomdError::Serialization(
                "A document has already been written; XML allows one root element".to_string(),
            ));
        }
        debug!(root = root.local_name(), "serializing AudioMD document");
        if self.config.xml_declaration {
            self.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        self.finished = true;
        self.write_element(root, true)
    }

    /// Whether a document has been written.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consume the writer and return the underlying destination.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_element(&mut self, element: &Element, is_root: bool) -> Result<()> {
        let name = self.element_name(element.name())?;
        let mut start = BytesStart::new(name.as_str());

        if is_root {
            for (prefix, uri) in &self.config.namespaces {
                let attr = if prefix.is_empty() {
                    "xmlns".to_string()
                } else {
                    format!("xmlns:{prefix}")
                };
                start.push_attribute((attr.as_str(), uri.as_str()));
            }
        }
        for (attr_name, value) in element.attributes() {
            let attr = self.attribute_name(attr_name)?;
            start.push_attribute((attr.as_str(), value));
        }

        if element.is_empty() {
            return self.write_event(Event::Empty(start));
        }

        self.write_event(Event::Start(start))?;
        if let Some(text) = element.text() {
            self.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in element.children() {
            self.write_element(child, false)?;
        }
        self.write_event(Event::End(BytesEnd::new(name.as_str())))
    }

    fn element_name(&self, name: &QName) -> Result<String> {
        if !name.is_qualified() {
            return Ok(name.local_name().to_string());
        }
        match self.prefix_for(name, true)? {
            "" => Ok(name.local_name().to_string()),
            prefix => Ok(format!("{prefix}:{}", name.local_name())),
        }
    }

    /// The default namespace never applies to attributes, so a qualified
    /// attribute needs a non-empty prefix.
    fn attribute_name(&self, name: &QName) -> Result<String> {
        if !name.is_qualified() {
            return Ok(name.local_name().to_string());
        }
        let prefix = self.prefix_for(name, false)?;
        Ok(format!("{prefix}:{}", name.local_name()))
    }

    fn prefix_for(&self, name: &QName, allow_default: bool) -> Result<&str> {
        self.config
            .namespaces
            .iter()
            .find(|(prefix, uri)| {
                uri.as_str() == name.namespace() && (allow_default || !prefix.is_empty())
            })
            .map(|(prefix, _)| prefix.as_str())
            .ok_or_else(|| AudiomdError::UnboundNamespace(name.namespace().to_string()))
    }

    fn write_event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| AudiomdError::Serialization(e.to_string()))
    }
}

impl<W: Write> fmt::Debug for XmlWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlWriter")
            .field("config", &self.config)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// Serialize `root` to a string.
///
/// # Errors
///
/// See [`XmlWriter::write_document`].
pub fn to_xml_string(root: &Element, config: &WriterConfig) -> Result<String> {
    let mut writer = XmlWriter::with_config(Vec::new(), config.clone());
    writer.write_document(root)?;
    String::from_utf8(writer.into_inner())
        .map_err(|e| AudiomdError::Serialization(format!("Output is not UTF-8: {e}")))
}
