//! AudioMD section builders.
//!
//! Each submodule builds one named subtree of the schema. Sections are
//! described by typed structs whose fields are all optional, so an empty
//! struct (`Default::default()`) yields an empty section element. The four
//! sections the schema describes as open parameter lists (`fileData`,
//! `physicalData`, `dimensions`, `material`) can also be built from an
//! untyped [`ParameterSet`], which is validated against the section's
//! recognized keys first.
//!
//! Builders never attach their output to a parent. Composition is the
//! caller's job:
//!
//! ```ignore
//! use audiomd::sections::{AudioInfo, AudioMd, Compression, FileData, Section};
//!
//! let compression = Compression {
//!     app: Some("SoundForge".into()),
//!     quality: Some("lossy".into()),
//!     ..Default::default()
//! };
//! let file_data = FileData {
//!     audio_data_encoding: "PCM".into(),
//!     compression: compression.to_element().into(),
//!     ..Default::default()
//! };
//! let audio_info = AudioInfo {
//!     duration: "PT1H30M".into(),
//!     ..Default::default()
//! };
//! let root = AudioMd {
//!     file_data: Some(file_data.to_element()),
//!     audio_info: Some(audio_info.to_element()),
//!     ..Default::default()
//! }
//! .to_element();
//! ```

use tracing::debug;

use crate::element::Element;
use crate::error::Result;
use crate::params::{check_params, ParameterSet};

pub mod audio_info;
pub mod calibration_info;
pub mod compression;
pub mod dimensions;
pub mod file_data;
pub mod material;
pub mod message_digest;
pub mod physical_data;
pub mod root;
pub mod sound_channel_map;
pub mod tracking;

pub use audio_info::{audio_info, AudioInfo};
pub use calibration_info::{calibration_info, CalibrationInfo};
pub use compression::{compression, Compression};
pub use dimensions::{dimensions, Dimensions, DIMENSIONS_PARAMS};
pub use file_data::{file_data, FileData, FILE_DATA_PARAMS};
pub use material::{material, Material, MATERIAL_PARAMS};
pub use message_digest::{message_digest, MessageDigest};
pub use physical_data::{physical_data, PhysicalData, PHYSICAL_DATA_PARAMS};
pub use root::{create_audiomd, AnalogDigitalFlag, AudioMd};
pub use sound_channel_map::{sound_channel_map, SoundChannelMap};
pub use tracking::{tracking, Tracking};

/// A schema section that can be rendered as an element subtree.
pub trait Section {
    /// Local name of the section element.
    const TAG: &'static str;

    /// Build the section element. Children appear in schema order.
    fn to_element(&self) -> Element;
}

/// A section that can also be built from an untyped parameter mapping.
pub trait ParamSection: Section + Sized {
    /// Recognized parameter keys, in schema order.
    const PARAMS: &'static [&'static str];

    /// Convert an already validated mapping into the typed section.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AudiomdError::InvalidValue`] if a value has the wrong
    /// shape for its key.
    fn from_checked_params(params: &ParameterSet) -> Result<Self>;

    /// Validate `params` against [`PARAMS`](Self::PARAMS), then convert.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AudiomdError::UnrecognizedParameter`] for an unknown
    /// key, or [`crate::AudiomdError::InvalidValue`] for a mistyped value.
    fn from_params(params: &ParameterSet) -> Result<Self> {
        check_params(params, Self::PARAMS)?;
        Self::from_checked_params(params)
    }

    /// Validate, convert and build in one step.
    ///
    /// # Errors
    ///
    /// See [`from_params`](Self::from_params). No element is built when
    /// validation fails.
    fn build_from_params(params: &ParameterSet) -> Result<Element> {
        let section = Self::from_params(params)?;
        debug!(section = Self::TAG, keys = params.len(), "building section from parameters");
        Ok(section.to_element())
    }
}
