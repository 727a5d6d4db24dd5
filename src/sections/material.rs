//! `material`: composition of the physical carrier.

use crate::element::Element;
use crate::emit::{build_section, Slot};
use crate::error::Result;
use crate::params::{text_field, Field, ParameterSet};

use super::{ParamSection, Section};

/// Recognized `material` parameters, in schema order.
pub const MATERIAL_PARAMS: &[&str] = &[
    "baseMaterial",
    "binder",
    "discSurface",
    "oxide",
    "activeLayer",
    "reflectiveLayer",
    "stockBrand",
    "method",
    "usedSides",
];

/// The `material` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Material {
    /// `baseMaterial`
    pub base_material: Field<String>,
    /// `binder`
    pub binder: Field<String>,
    /// `discSurface`
    pub disc_surface: Field<String>,
    /// `oxide`
    pub oxide: Field<String>,
    /// `activeLayer`
    pub active_layer: Field<String>,
    /// `reflectiveLayer`
    pub reflective_layer: Field<String>,
    /// `stockBrand`
    pub stock_brand: Field<String>,
    /// `method`
    pub method: Field<String>,
    /// `usedSides`
    pub used_sides: Field<String>,
}

impl Material {
    fn slots(&self) -> [(&'static str, Slot<'_>); 9] {
        [
            ("baseMaterial", Slot::Text(&self.base_material)),
            ("binder", Slot::Text(&self.binder)),
            ("discSurface", Slot::Text(&self.disc_surface)),
            ("oxide", Slot::Text(&self.oxide)),
            ("activeLayer", Slot::Text(&self.active_layer)),
            ("reflectiveLayer", Slot::Text(&self.reflective_layer)),
            ("stockBrand", Slot::Text(&self.stock_brand)),
            ("method", Slot::Text(&self.method)),
            ("usedSides", Slot::Text(&self.used_sides)),
        ]
    }
}

impl Section for Material {
    const TAG: &'static str = "material";

    fn to_element(&self) -> Element {
        build_section(Self::TAG, self.slots())
    }
}

impl ParamSection for Material {
    const PARAMS: &'static [&'static str] = MATERIAL_PARAMS;

    fn from_checked_params(params: &ParameterSet) -> Result<Self> {
        Ok(Material {
            base_material: text_field(params, "baseMaterial")?,
            binder: text_field(params, "binder")?,
            disc_surface: text_field(params, "discSurface")?,
            oxide: text_field(params, "oxide")?,
            active_layer: text_field(params, "activeLayer")?,
            reflective_layer: text_field(params, "reflectiveLayer")?,
            stock_brand: text_field(params, "stockBrand")?,
            method: text_field(params, "method")?,
            used_sides: text_field(params, "usedSides")?,
        })
    }
}

/// Build a `material` element from a parameter mapping.
///
/// # Errors
///
/// Returns [`crate::AudiomdError::UnrecognizedParameter`] if `params` holds
/// a key outside [`MATERIAL_PARAMS`], or
/// [`crate::AudiomdError::InvalidValue`] if a value is not text.
pub fn material(params: &ParameterSet) -> Result<Element> {
    Material::build_from_params(params)
}
