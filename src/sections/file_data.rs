//! `fileData`: technical characteristics of an audio file.

use crate::element::Element;
use crate::emit::{build_section, Slot};
use crate::error::Result;
use crate::params::{element_field, text_field, Field, ParameterSet};

use super::{ParamSection, Section};

/// Recognized `fileData` parameters, in schema order.
pub const FILE_DATA_PARAMS: &[&str] = &[
    "audioBlockSize",
    "audioDataEncoding",
    "bitsPerSample",
    "byteOrder",
    "messageDigest",
    "compression",
    "dataRate",
    "dataRateMode",
    "firstSampleOffset",
    "firstValidByteBlock",
    "formatLocation",
    "formatName",
    "formatNote",
    "formatVersion",
    "lastValidByteBlock",
    "numSampleFrames",
    "samplingFrequency",
    "security",
    "use",
    "otherUse",
    "wordSize",
];

/// The `fileData` section.
///
/// Text fields may repeat. `message_digest` and `compression` hold subtrees
/// built by [`super::message_digest`] and [`super::compression`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileData {
    /// `audioBlockSize`
    pub audio_block_size: Field<String>,
    /// `audioDataEncoding`, e.g. `PCM`
    pub audio_data_encoding: Field<String>,
    /// `bitsPerSample`
    pub bits_per_sample: Field<String>,
    /// `byteOrder`
    pub byte_order: Field<String>,
    /// `messageDigest` subtrees
    pub message_digest: Field<Element>,
    /// `compression` subtrees
    pub compression: Field<Element>,
    /// `dataRate`
    pub data_rate: Field<String>,
    /// `dataRateMode`, e.g. `Fixed`
    pub data_rate_mode: Field<String>,
    /// `firstSampleOffset`
    pub first_sample_offset: Field<String>,
    /// `firstValidByteBlock`
    pub first_valid_byte_block: Field<String>,
    /// `formatLocation`
    pub format_location: Field<String>,
    /// `formatName`
    pub format_name: Field<String>,
    /// `formatNote`
    pub format_note: Field<String>,
    /// `formatVersion`
    pub format_version: Field<String>,
    /// `lastValidByteBlock`
    pub last_valid_byte_block: Field<String>,
    /// `numSampleFrames`
    pub num_sample_frames: Field<String>,
    /// `samplingFrequency`
    pub sampling_frequency: Field<String>,
    /// `security`
    pub security: Field<String>,
    /// `use`
    pub usage: Field<String>,
    /// `otherUse`
    pub other_use: Field<String>,
    /// `wordSize`
    pub word_size: Field<String>,
}

impl FileData {
    fn slots(&self) -> [(&'static str, Slot<'_>); 21] {
        [
            ("audioBlockSize", Slot::Text(&self.audio_block_size)),
            ("audioDataEncoding", Slot::Text(&self.audio_data_encoding)),
            ("bitsPerSample", Slot::Text(&self.bits_per_sample)),
            ("byteOrder", Slot::Text(&self.byte_order)),
            ("messageDigest", Slot::Elements(&self.message_digest)),
            ("compression", Slot::Elements(&self.compression)),
            ("dataRate", Slot::Text(&self.data_rate)),
            ("dataRateMode", Slot::Text(&self.data_rate_mode)),
            ("firstSampleOffset", Slot::Text(&self.first_sample_offset)),
            ("firstValidByteBlock", Slot::Text(&self.first_valid_byte_block)),
            ("formatLocation", Slot::Text(&self.format_location)),
            ("formatName", Slot::Text(&self.format_name)),
            ("formatNote", Slot::Text(&self.format_note)),
            ("formatVersion", Slot::Text(&self.format_version)),
            ("lastValidByteBlock", Slot::Text(&self.last_valid_byte_block)),
            ("numSampleFrames", Slot::Text(&self.num_sample_frames)),
            ("samplingFrequency", Slot::Text(&self.sampling_frequency)),
            ("security", Slot::Text(&self.security)),
            ("use", Slot::Text(&self.usage)),
            ("otherUse", Slot::Text(&self.other_use)),
            ("wordSize", Slot::Text(&self.word_size)),
        ]
    }
}

impl Section for FileData {
    const TAG: &'static str = "fileData";

    fn to_element(&self) -> Element {
        build_section(Self::TAG, self.slots())
    }
}

impl ParamSection for FileData {
    const PARAMS: &'static [&'static str] = FILE_DATA_PARAMS;

    fn from_checked_params(params: &ParameterSet) -> Result<Self> {
        Ok(FileData {
            audio_block_size: text_field(params, "audioBlockSize")?,
            audio_data_encoding: text_field(params, "audioDataEncoding")?,
            bits_per_sample: text_field(params, "bitsPerSample")?,
            byte_order: text_field(params, "byteOrder")?,
            message_digest: element_field(params, "messageDigest")?,
            compression: element_field(params, "compression")?,
            data_rate: text_field(params, "dataRate")?,
            data_rate_mode: text_field(params, "dataRateMode")?,
            first_sample_offset: text_field(params, "firstSampleOffset")?,
            first_valid_byte_block: text_field(params, "firstValidByteBlock")?,
            format_location: text_field(params, "formatLocation")?,
            format_name: text_field(params, "formatName")?,
            format_note: text_field(params, "formatNote")?,
            format_version: text_field(params, "formatVersion")?,
            last_valid_byte_block: text_field(params, "lastValidByteBlock")?,
            num_sample_frames: text_field(params, "numSampleFrames")?,
            sampling_frequency: text_field(params, "samplingFrequency")?,
            security: text_field(params, "security")?,
            usage: text_field(params, "use")?,
            other_use: text_field(params, "otherUse")?,
            word_size: text_field(params, "wordSize")?,
        })
    }
}

/// Build a `fileData` element from a parameter mapping.
///
/// # Errors
///
/// Returns [`crate::AudiomdError::UnrecognizedParameter`] if `params` holds
/// a key outside [`FILE_DATA_PARAMS`], or
/// [`crate::AudiomdError::InvalidValue`] if a value has the wrong shape.
pub fn file_data(params: &ParameterSet) -> Result<Element> {
    FileData::build_from_params(params)
}
