//! `physicalData`: the analog or physical carrier the audio came from.

use crate::element::Element;
use crate::emit::{build_section, Slot};
use crate::error::Result;
use crate::params::{element_field, text_field, Field, ParameterSet};

use super::{ParamSection, Section};

/// Recognized `physicalData` parameters, in schema order.
pub const PHYSICAL_DATA_PARAMS: &[&str] = &[
    "EBUStorageMediaCodes",
    "condition",
    "dimensions",
    "disposition",
    "equalization",
    "generation",
    "groove",
    "material",
    "noiseReduction",
    "physFormat",
    "speed",
    "speedAdjustment",
    "speedNote",
    "trackFormat",
    "tracking",
    "note",
];

/// The `physicalData` section.
///
/// `dimensions`, `material` and `tracking` hold subtrees built by the
/// sections of the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicalData {
    /// `EBUStorageMediaCodes`
    pub ebu_storage_media_codes: Field<String>,
    /// `condition`
    pub condition: Field<String>,
    /// `dimensions` subtrees
    pub dimensions: Field<Element>,
    /// `disposition`
    pub disposition: Field<String>,
    /// `equalization`
    pub equalization: Field<String>,
    /// `generation`
    pub generation: Field<String>,
    /// `groove`
    pub groove: Field<String>,
    /// `material` subtrees
    pub material: Field<Element>,
    /// `noiseReduction`
    pub noise_reduction: Field<String>,
    /// `physFormat`
    pub phys_format: Field<String>,
    /// `speed`
    pub speed: Field<String>,
    /// `speedAdjustment`
    pub speed_adjustment: Field<String>,
    /// `speedNote`
    pub speed_note: Field<String>,
    /// `trackFormat`
    pub track_format: Field<String>,
    /// `tracking` subtrees
    pub tracking: Field<Element>,
    /// `note`
    pub note: Field<String>,
}

impl PhysicalData {
    fn slots(&self) -> [(&'static str, Slot<'_>); 16] {
        [
            ("EBUStorageMediaCodes", Slot::Text(&self.ebu_storage_media_codes)),
            ("condition", Slot::Text(&self.condition)),
            ("dimensions", Slot::Elements(&self.dimensions)),
            ("disposition", Slot::Text(&self.disposition)),
            ("equalization", Slot::Text(&self.equalization)),
            ("generation", Slot::Text(&self.generation)),
            ("groove", Slot::Text(&self.groove)),
            ("material", Slot::Elements(&self.material)),
            ("noiseReduction", Slot::Text(&self.noise_reduction)),
            ("physFormat", Slot::Text(&self.phys_format)),
            ("speed", Slot::Text(&self.speed)),
            ("speedAdjustment", Slot::Text(&self.speed_adjustment)),
            ("speedNote", Slot::Text(&self.speed_note)),
            ("trackFormat", Slot::Text(&self.track_format)),
            ("tracking", Slot::Elements(&self.tracking)),
            ("note", Slot::Text(&self.note)),
        ]
    }
}

impl Section for PhysicalData {
    const TAG: &'static str = "physicalData";

    fn to_element(&self) -> Element {
        build_section(Self::TAG, self.slots())
    }
}

impl ParamSection for PhysicalData {
    const PARAMS: &'static [&'static str] = PHYSICAL_DATA_PARAMS;

    fn from_checked_params(params: &ParameterSet) -> Result<Self> {
        Ok(PhysicalData {
            ebu_storage_media_codes: text_field(params, "EBUStorageMediaCodes")?,
            condition: text_field(params, "condition")?,
            dimensions: element_field(params, "dimensions")?,
            disposition: text_field(params, "disposition")?,
            equalization: text_field(params, "equalization")?,
            generation: text_field(params, "generation")?,
            groove: text_field(params, "groove")?,
            material: element_field(params, "material")?,
            noise_reduction: text_field(params, "noiseReduction")?,
            phys_format: text_field(params, "physFormat")?,
            speed: text_field(params, "speed")?,
            speed_adjustment: text_field(params, "speedAdjustment")?,
            speed_note: text_field(params, "speedNote")?,
            track_format: text_field(params, "trackFormat")?,
            tracking: element_field(params, "tracking")?,
            note: text_field(params, "note")?,
        })
    }
}

/// Build a `physicalData` element from a parameter mapping.
///
/// # Errors
///
/// Returns [`crate::AudiomdError::UnrecognizedParameter`] if `params` holds
/// a key outside [`PHYSICAL_DATA_PARAMS`], or
/// [`crate::AudiomdError::InvalidValue`] if a value has the wrong shape.
pub fn physical_data(params: &ParameterSet) -> Result<Element> {
    PhysicalData::build_from_params(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{dimensions, material, tracking};

    #[test]
    fn test_slots_follow_recognized_keys() {
        let keys: Vec<_> = PhysicalData::default()
            .slots()
            .iter()
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(keys, PHYSICAL_DATA_PARAMS);
    }

    #[test]
    fn test_subtrees_attach_to_physical_data() {
        let dims = dimensions(&ParameterSet::new().with("DIAMETER", "7")).unwrap();
        let mat = material(&ParameterSet::new().with("binder", "polyurethane")).unwrap();
        let track = tracking(Some("CTL"), Some("1"));

        let params = ParameterSet::new()
            .with("note", "warped")
            .with("tracking", track)
            .with("material", mat)
            .with("dimensions", dims)
            .with("EBUStorageMediaCodes", "ACZ");

        let element = physical_data(&params).unwrap();
        assert_eq!(
            element.child_names(),
            ["EBUStorageMediaCodes", "dimensions", "material", "tracking", "note"]
        );
        assert_eq!(
            element.find("dimensions").and_then(|d| d.attribute("DIAMETER")),
            Some("7")
        );
        assert_eq!(
            element.find_path("material/binder").and_then(Element::text),
            Some("polyurethane")
        );
    }

    #[test]
    fn test_repeated_tracking_blocks() {
        let physical = PhysicalData {
            tracking: vec![tracking(Some("CTL"), None), tracking(Some("SMPTE"), None)].into(),
            ..Default::default()
        };
        let element = physical.to_element();
        let types: Vec<_> = element
            .find_all("tracking")
            .filter_map(|t| t.find("trackingType").and_then(Element::text))
            .collect();
        assert_eq!(types, ["CTL", "SMPTE"]);
    }
}
