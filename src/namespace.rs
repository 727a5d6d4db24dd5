//! AudioMD namespace constants and qualified tag resolution.
//!
//! Every element the builders produce lives in the single AudioMD namespace
//! (`http://www.loc.gov/audioMD/`). The root element additionally carries an
//! `xsi:schemaLocation` attribute from the XML Schema instance namespace.

use std::fmt;

/// AudioMD namespace URI.
pub const AUDIOMD_NS: &str = "http://www.loc.gov/audioMD/";

/// XML Schema instance namespace URI.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Conventional prefix for the AudioMD namespace.
pub const AUDIOMD_PREFIX: &str = "amd";

/// Conventional prefix for the XML Schema instance namespace.
pub const XSI_PREFIX: &str = "xsi";

/// Value of the root element's `xsi:schemaLocation` attribute.
pub const SCHEMA_LOCATION: &str =
    "http://www.loc.gov/audioMD/ https://www.loc.gov/standards/amdvmd/audioMD.xsd";

/// A name bound to a namespace URI.
///
/// Used for both element and attribute names. Plain (unqualified) attributes
/// such as `CHANNELNUM` have an empty namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    namespace: String,
    local_name: String,
}

impl QName {
    /// Create a name in the given namespace.
    pub fn new(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        QName {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Create a name with no namespace.
    pub fn unqualified(local_name: impl Into<String>) -> Self {
        QName::new(String::new(), local_name)
    }

    /// Namespace URI, empty for unqualified names.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Local part of the name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Whether the name is bound to a namespace.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        !self.namespace.is_empty()
    }
}

/// Clark notation: `{namespace}local`, or just `local` when unqualified.
impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_qualified() {
            write!(f, "{{{}}}{}", self.namespace, self.local_name)
        } else {
            f.write_str(&self.local_name)
        }
    }
}

impl From<&str> for QName {
    fn from(local_name: &str) -> Self {
        QName::unqualified(local_name)
    }
}

/// Resolve a tag name in the AudioMD namespace.
///
/// With an empty `prefix` the tag is used as-is. Otherwise the first character
/// of `tag` is uppercased and appended to the prefix, which is how the
/// role-prefixed variants of a base element name are derived:
///
/// ```ignore
/// use audiomd::namespace::qualified_tag;
///
/// let name = qualified_tag("objectIdentifier", "linking");
/// assert_eq!(name.local_name(), "linkingObjectIdentifier");
/// assert_eq!(name.to_string(), "{http://www.loc.gov/audioMD/}linkingObjectIdentifier");
/// ```
#[must_use]
pub fn qualified_tag(tag: &str, prefix: &str) -> QName {
    if prefix.is_empty() {
        return QName::new(AUDIOMD_NS, tag);
    }

    let mut chars = tag.chars();
    let mut local_name = String::with_capacity(prefix.len() + tag.len());
    local_name.push_str(prefix);
    if let Some(first) = chars.next() {
        local_name.extend(first.to_uppercase());
        local_name.push_str(chars.as_str());
    }
    QName::new(AUDIOMD_NS, local_name)
}
