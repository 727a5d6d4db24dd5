//! `audioInfo`: intellectual characteristics of the audio content.

use crate::element::Element;
use crate::emit::{build_section, Slot};
use crate::params::Field;

use super::Section;

/// The `audioInfo` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioInfo {
    /// `duration`, an ISO 8601 duration such as `PT1H30M`
    pub duration: Field<String>,
    /// `note`
    pub note: Field<String>,
    /// `numChannels`
    pub num_channels: Field<String>,
    /// `soundChannelMap` subtrees built by [`super::sound_channel_map`]
    pub sound_channel_map: Field<Element>,
    /// `soundField`, e.g. `stereo`
    pub sound_field: Field<String>,
}

impl Section for AudioInfo {
    const TAG: &'static str = "audioInfo";

    fn to_element(&self) -> Element {
        build_section(
            Self::TAG,
            [
                ("duration", Slot::Text(&self.duration)),
                ("note", Slot::Text(&self.note)),
                ("numChannels", Slot::Text(&self.num_channels)),
                ("soundChannelMap", Slot::Elements(&self.sound_channel_map)),
                ("soundField", Slot::Text(&self.sound_field)),
            ],
        )
    }
}

/// Build an `audioInfo` element.
///
/// Each argument accepts anything convertible to a [`Field`], so a single
/// `&str`, a `Vec` of values or `None` all work.
#[must_use]
pub fn audio_info(
    duration: impl Into<Field<String>>,
    note: impl Into<Field<String>>,
    num_channels: impl Into<Field<String>>,
    sound_channel_map: impl Into<Field<Element>>,
    sound_field: impl Into<Field<String>>,
) -> Element {
    AudioInfo {
        duration: duration.into(),
        note: note.into(),
        num_channels: num_channels.into(),
        sound_channel_map: sound_channel_map.into(),
        sound_field: sound_field.into(),
    }
    .to_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::sound_channel_map;

    #[test]
    fn test_audio_info_order() {
        let info = AudioInfo {
            sound_field: "stereo".into(),
            sound_channel_map: vec![
                sound_channel_map(Some("1"), Some("FRONT_LEFT")),
                sound_channel_map(Some("2"), Some("FRONT_RIGHT")),
            ]
            .into(),
            num_channels: "2".into(),
            duration: "PT1H30M".into(),
            ..Default::default()
        };
        let element = info.to_element();
        assert_eq!(
            element.child_names(),
            ["duration", "numChannels", "soundChannelMap", "soundChannelMap", "soundField"]
        );
        assert_eq!(element.find("duration").and_then(Element::text), Some("PT1H30M"));
    }

    #[test]
    fn test_audio_info_function_matches_struct() {
        let maps = vec![sound_channel_map(Some("1"), Some("FRONT_LEFT"))];
        let element = audio_info("PT3M", None::<&str>, "1", maps.clone(), "mono");
        let expected = AudioInfo {
            duration: "PT3M".into(),
            num_channels: "1".into(),
            sound_channel_map: maps.into(),
            sound_field: "mono".into(),
            ..Default::default()
        }
        .to_element();
        assert_eq!(element, expected);
        assert_eq!(
            element.child_names(),
            ["duration", "numChannels", "soundChannelMap", "soundField"]
        );
    }

    #[test]
    fn test_audio_info_function_repeats_notes() {
        let element = audio_info(
            None::<&str>,
            vec!["first pass", "second pass"],
            None::<&str>,
            Field::<Element>::Absent,
            None::<&str>,
        );
        assert_eq!(element.child_names(), ["note", "note"]);
    }

    #[test]
    fn test_empty_audio_info() {
        assert!(AudioInfo::default().to_element().is_empty());
    }
}
