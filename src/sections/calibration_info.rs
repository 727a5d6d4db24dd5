//! `calibrationInfo`: calibration tones recorded alongside the content.

use crate::element::Element;
use crate::emit::{build_section, Slot};

use super::Section;

/// The `calibrationInfo` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalibrationInfo {
    /// `calibrationExtInt`, whether the calibration is internal or external
    pub ext_int: Option<String>,
    /// `calibrationLocation`
    pub location: Option<String>,
    /// `calibrationTimeStamp`
    pub time_stamp: Option<String>,
    /// `calibrationTrackType`
    pub track_type: Option<String>,
}

impl Section for CalibrationInfo {
    const TAG: &'static str = "calibrationInfo";

    fn to_element(&self) -> Element {
        build_section(
            Self::TAG,
            [
                ("calibrationExtInt", Slot::Single(self.ext_int.as_deref())),
                ("calibrationLocation", Slot::Single(self.location.as_deref())),
                ("calibrationTimeStamp", Slot::Single(self.time_stamp.as_deref())),
                ("calibrationTrackType", Slot::Single(self.track_type.as_deref())),
            ],
        )
    }
}

/// Build a `calibrationInfo` element.
#[must_use]
pub fn calibration_info(
    ext_int: Option<&str>,
    location: Option<&str>,
    time_stamp: Option<&str>,
    track_type: Option<&str>,
) -> Element {
    CalibrationInfo {
        ext_int: ext_int.map(str::to_string),
        location: location.map(str::to_string),
        time_stamp: time_stamp.map(str::to_string),
        track_type: track_type.map(str::to_string),
    }
    .to_element()
}
