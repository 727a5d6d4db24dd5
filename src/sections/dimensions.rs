//! `dimensions`: physical measurements of the carrier.
//!
//! Unlike the other sections, every value is written as an attribute of a
//! single `dimensions` element rather than as a child element.

use crate::element::Element;
use crate::emit::{build_section, Slot};
use crate::error::Result;
use crate::params::{single_text, ParameterSet};

use super::{ParamSection, Section};

/// Recognized `dimensions` parameters (attribute names), in schema order.
pub const DIMENSIONS_PARAMS: &[&str] = &[
    "DEPTH",
    "DIAMETER",
    "GAUGE",
    "HEIGHT",
    "LENGTH",
    "NOTE",
    "THICKNESS",
    "UNITS",
    "WIDTH",
];

/// The `dimensions` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// `DEPTH`
    pub depth: Option<String>,
    /// `DIAMETER`
    pub diameter: Option<String>,
    /// `GAUGE`
    pub gauge: Option<String>,
    /// `HEIGHT`
    pub height: Option<String>,
    /// `LENGTH`
    pub length: Option<String>,
    /// `NOTE`
    pub note: Option<String>,
    /// `THICKNESS`
    pub thickness: Option<String>,
    /// `UNITS`
    pub units: Option<String>,
    /// `WIDTH`
    pub width: Option<String>,
}

impl Dimensions {
    fn slots(&self) -> [(&'static str, Slot<'_>); 9] {
        [
            ("DEPTH", Slot::Attribute(self.depth.as_deref())),
            ("DIAMETER", Slot::Attribute(self.diameter.as_deref())),
            ("GAUGE", Slot::Attribute(self.gauge.as_deref())),
            ("HEIGHT", Slot::Attribute(self.height.as_deref())),
            ("LENGTH", Slot::Attribute(self.length.as_deref())),
            ("NOTE", Slot::Attribute(self.note.as_deref())),
            ("THICKNESS", Slot::Attribute(self.thickness.as_deref())),
            ("UNITS", Slot::Attribute(self.units.as_deref())),
            ("WIDTH", Slot::Attribute(self.width.as_deref())),
        ]
    }
}

impl Section for Dimensions {
    const TAG: &'static str = "dimensions";

    fn to_element(&self) -> Element {
        build_section(Self::TAG, self.slots())
    }
}

impl ParamSection for Dimensions {
    const PARAMS: &'static [&'static str] = DIMENSIONS_PARAMS;

    fn from_checked_params(params: &ParameterSet) -> Result<Self> {
        Ok(Dimensions {
            depth: single_text(params, "DEPTH")?,
            diameter: single_text(params, "DIAMETER")?,
            gauge: single_text(params, "GAUGE")?,
            height: single_text(params, "HEIGHT")?,
            length: single_text(params, "LENGTH")?,
            note: single_text(params, "NOTE")?,
            thickness: single_text(params, "THICKNESS")?,
            units: single_text(params, "UNITS")?,
            width: single_text(params, "WIDTH")?,
        })
    }
}

/// Build a `dimensions` element from a parameter mapping.
///
/// # Errors
///
/// Returns [`crate::AudiomdError::UnrecognizedParameter`] if `params` holds
/// a key outside [`DIMENSIONS_PARAMS`], or
/// [`crate::AudiomdError::InvalidValue`] if a value is not a single text.
pub fn dimensions(params: &ParameterSet) -> Result<Element> {
    Dimensions::build_from_params(params)
}
