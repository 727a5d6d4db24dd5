//! `tracking`: tape tracking information.

use crate::element::Element;
use crate::emit::{build_section, Slot};

use super::Section;

/// The `tracking` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracking {
    /// `trackingType`
    pub tracking_type: Option<String>,
    /// `trackingValue`
    pub tracking_value: Option<String>,
}

impl Section for Tracking {
    const TAG: &'static str = "tracking";

    fn to_element(&self) -> Element {
        build_section(
            Self::TAG,
            [
                ("trackingType", Slot::Single(self.tracking_type.as_deref())),
                ("trackingValue", Slot::Single(self.tracking_value.as_deref())),
            ],
        )
    }
}

/// Build a `tracking` element.
#[must_use]
pub fn tracking(tracking_type: Option<&str>, tracking_value: Option<&str>) -> Element {
    Tracking {
        tracking_type: tracking_type.map(str::to_string),
        tracking_value: tracking_value.map(str::to_string),
    }
    .to_element()
}
