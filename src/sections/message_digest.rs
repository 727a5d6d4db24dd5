//! `messageDigest`: a checksum recorded for the file.

use crate::element::Element;
use crate::namespace::qualified_tag;

use super::Section;

/// The `messageDigest` section. All three children are always written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDigest {
    /// `messageDigestDatetime`, when the digest was computed
    pub datetime: String,
    /// `messageDigestAlgorithm`, e.g. `MD5`
    pub algorithm: String,
    /// `messageDigest`, the digest value
    pub digest: String,
}

impl Section for MessageDigest {
    const TAG: &'static str = "messageDigest";

    fn to_element(&self) -> Element {
        let mut element = Element::new(qualified_tag(Self::TAG, ""));
        for (tag, text) in [
            ("messageDigestDatetime", &self.datetime),
            ("messageDigestAlgorithm", &self.algorithm),
            ("messageDigest", &self.digest),
        ] {
            element
                .sub_element(qualified_tag(tag, ""))
                .set_text(text.as_str());
        }
        element
    }
}

/// Build a `messageDigest` element.
#[must_use]
pub fn message_digest(datetime: &str, algorithm: &str, digest: &str) -> Element {
    MessageDigest {
        datetime: datetime.to_string(),
        algorithm: algorithm.to_string(),
        digest: digest.to_string(),
    }
    .to_element()
}
