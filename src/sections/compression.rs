//! `compression`: codec used to encode the audio stream.

use crate::element::Element;
use crate::emit::{build_section, Slot};

use super::Section;

/// The `compression` section. Every child is optional and non-repeating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compression {
    /// `codecCreatorApp`
    pub app: Option<String>,
    /// `codecCreatorAppVersion`
    pub app_version: Option<String>,
    /// `codecName`
    pub name: Option<String>,
    /// `codecQuality`, `lossy` or `lossless`
    pub quality: Option<String>,
}

impl Section for Compression {
    const TAG: &'static str = "compression";

    fn to_element(&self) -> Element {
        build_section(
            Self::TAG,
            [
                ("codecCreatorApp", Slot::Single(self.app.as_deref())),
                ("codecCreatorAppVersion", Slot::Single(self.app_version.as_deref())),
                ("codecName", Slot::Single(self.name.as_deref())),
                ("codecQuality", Slot::Single(self.quality.as_deref())),
            ],
        )
    }
}

/// Build a `compression` element.
#[must_use]
pub fn compression(
    app: Option<&str>,
    app_version: Option<&str>,
    name: Option<&str>,
    quality: Option<&str>,
) -> Element {
    Compression {
        app: app.map(str::to_string),
        app_version: app_version.map(str::to_string),
        name: name.map(str::to_string),
        quality: quality.map(str::to_string),
    }
    .to_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_compression() {
        let element = compression(Some("SoundForge"), Some("10"), Some("(:unap)"), Some("lossy"));
        assert_eq!(
            element.child_names(),
            ["codecCreatorApp", "codecCreatorAppVersion", "codecName", "codecQuality"]
        );
        assert_eq!(element.find("codecName").and_then(Element::text), Some("(:unap)"));
    }

    #[test]
    fn test_children_are_independently_omittable() {
        let element = compression(None, Some("10"), None, Some("lossless"));
        assert_eq!(element.child_names(), ["codecCreatorAppVersion", "codecQuality"]);
        assert!(compression(None, None, None, None).is_empty());
    }
}
