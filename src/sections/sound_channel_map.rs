//! `soundChannelMap`: assignment of a channel to a playback location.

use crate::element::Element;
use crate::emit::set_optional_attribute;
use crate::namespace::qualified_tag;

use super::Section;

/// The `soundChannelMap` section.
///
/// The `channelAssignment` child is always written, even with neither
/// attribute set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundChannelMap {
    /// `CHANNELNUM` attribute of `channelAssignment`
    pub channel_num: Option<String>,
    /// `MAPLOCATION` attribute of `channelAssignment`
    pub map_location: Option<String>,
}

impl Section for SoundChannelMap {
    const TAG: &'static str = "soundChannelMap";

    fn to_element(&self) -> Element {
        let mut element = Element::new(qualified_tag(Self::TAG, ""));
        let assignment = element.sub_element(qualified_tag("channelAssignment", ""));
        set_optional_attribute(assignment, "CHANNELNUM", self.channel_num.as_deref());
        set_optional_attribute(assignment, "MAPLOCATION", self.map_location.as_deref());
        element
    }
}

/// Build a `soundChannelMap` element.
#[must_use]
pub fn sound_channel_map(channel_num: Option<&str>, map_location: Option<&str>) -> Element {
    SoundChannelMap {
        channel_num: channel_num.map(str::to_string),
        map_location: map_location.map(str::to_string),
    }
    .to_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_assignment_attributes() {
        let element = sound_channel_map(Some("5"), Some("FRONT"));
        assert_eq!(element.child_names(), ["channelAssignment"]);
        let assignment = &element.children()[0];
        assert_eq!(assignment.attribute("CHANNELNUM"), Some("5"));
        assert_eq!(assignment.attribute("MAPLOCATION"), Some("FRONT"));
    }

    #[test]
    fn test_channel_assignment_always_present() {
        let element = sound_channel_map(None, None);
        assert_eq!(element.child_names(), ["channelAssignment"]);
        assert_eq!(element.children()[0].attribute_count(), 0);
    }

    #[test]
    fn test_empty_channel_num_is_skipped() {
        let element = sound_channel_map(Some(""), None);
        assert_eq!(element.child_names(), ["channelAssignment"]);
        assert_eq!(element.children()[0].attribute("CHANNELNUM"), None);
        assert_eq!(element.children()[0].attribute_count(), 0);
    }
}
