#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # AudioMD: audio technical metadata builder
//!
//! Builds XML element trees conforming to the Library of Congress AudioMD
//! schema (<https://www.loc.gov/standards/amdvmd/>) from plain values.
//!
//! ## Quick Start
//!
//! ```ignore
//! use audiomd::{
//!     compression, file_data, make_empty_parameter_set, to_xml_string, AudioInfo, AudioMd,
//!     Section, WriterConfig, FILE_DATA_PARAMS,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut params = make_empty_parameter_set(FILE_DATA_PARAMS);
//! params.set("audioDataEncoding", "PCM");
//! params.set("compression", compression(Some("SoundForge"), Some("10"), None, Some("lossy")));
//! params.set("samplingFrequency", "44.1");
//!
//! let root = AudioMd {
//!     file_data: Some(file_data(&params)?),
//!     audio_info: Some(
//!         AudioInfo {
//!             duration: "PT1H30M".into(),
//!             num_channels: "1".into(),
//!             ..Default::default()
//!         }
//!         .to_element(),
//!     ),
//!     ..Default::default()
//! }
//! .to_element();
//!
//! println!("{}", to_xml_string(&root, &WriterConfig::default())?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`namespace`]: Namespace constants and qualified tag resolution
//! - [`element`]: In-memory element tree
//! - [`params`]: Parameter values, mappings and the validation gate
//! - [`emit`]: Element construction primitives
//! - [`sections`]: One builder per schema section
//! - [`writer`]: XML serialization
//! - [`error`]: Error types and result type

pub mod element;
pub mod emit;
pub mod error;
pub mod namespace;
pub mod params;
pub mod sections;
pub mod writer;

pub use element::Element;
pub use error::{AudiomdError, Result};
pub use namespace::{qualified_tag, QName, AUDIOMD_NS, SCHEMA_LOCATION, XSI_NS};
pub use params::{check_params, make_empty_parameter_set, Field, ParamValue, ParameterSet};
pub use sections::{
    audio_info, calibration_info, compression, create_audiomd, dimensions, file_data, material,
    message_digest, physical_data, sound_channel_map, tracking, AnalogDigitalFlag, AudioInfo,
    AudioMd, CalibrationInfo, Compression, Dimensions, FileData, Material, MessageDigest,
    ParamSection, PhysicalData, Section, SoundChannelMap, Tracking, DIMENSIONS_PARAMS,
    FILE_DATA_PARAMS, MATERIAL_PARAMS, PHYSICAL_DATA_PARAMS,
};
pub use writer::{to_xml_string, WriterConfig, XmlWriter};
