//! The `AUDIOMD` root element.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::AudiomdError;
use crate::namespace::{qualified_tag, QName, SCHEMA_LOCATION, XSI_NS};

use super::Section;

/// Value of the root `ANALOGDIGITALFLAG` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalogDigitalFlag {
    /// Analog source object
    Analog,
    /// Physical digital carrier, e.g. a CD
    PhysDigital,
    /// Digital file
    #[default]
    FileDigital,
}

impl AnalogDigitalFlag {
    /// Schema value of the flag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Analog => "Analog",
            Self::PhysDigital => "PhysDigital",
            Self::FileDigital => "FileDigital",
        }
    }
}

impl fmt::Display for AnalogDigitalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalogDigitalFlag {
    type Err = AudiomdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Analog" => Ok(Self::Analog),
            "PhysDigital" => Ok(Self::PhysDigital),
            "FileDigital" => Ok(Self::FileDigital),
            _ => Err(AudiomdError::InvalidValue {
                key: "ANALOGDIGITALFLAG".to_string(),
                expected: "one of Analog, PhysDigital, FileDigital",
            }),
        }
    }
}

/// The AudioMD root.
///
/// Holds up to four pre-built sections, written in schema order and omitted
/// when `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioMd {
    /// `ANALOGDIGITALFLAG` attribute
    pub analog_digital_flag: AnalogDigitalFlag,
    /// `fileData` subtree
    pub file_data: Option<Element>,
    /// `physicalData` subtree
    pub physical_data: Option<Element>,
    /// `audioInfo` subtree
    pub audio_info: Option<Element>,
    /// `calibrationInfo` subtree
    pub calibration_info: Option<Element>,
}

impl Section for AudioMd {
    const TAG: &'static str = "AUDIOMD";

    fn to_element(&self) -> Element {
        let mut element = Element::new(qualified_tag(Self::TAG, ""));
        element.set_attribute(QName::new(XSI_NS, "schemaLocation"), SCHEMA_LOCATION);
        element.set_attribute("ANALOGDIGITALFLAG", self.analog_digital_flag.as_str());

        for section in [
            &self.file_data,
            &self.physical_data,
            &self.audio_info,
            &self.calibration_info,
        ]
        .into_iter()
        .flatten()
        {
            element.append(section.clone());
        }
        element
    }
}

/// Build the `AUDIOMD` root element.
#[must_use]
pub fn create_audiomd(
    analog_digital_flag: AnalogDigitalFlag,
    file_data: Option<Element>,
    physical_data: Option<Element>,
    audio_info: Option<Element>,
    calibration_info: Option<Element>,
) -> Element {
    AudioMd {
        analog_digital_flag,
        file_data,
        physical_data,
        audio_info,
        calibration_info,
    }
    .to_element()
}
