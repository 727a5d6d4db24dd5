//! Common test helpers and fixtures shared across the test suite.

use audiomd::{
    message_digest, sound_channel_map, AudioInfo, Compression, Element, FileData,
    ParameterSet, Section,
};

/// Compression block used by the reference document.
#[allow(dead_code)]
pub fn sound_forge_compression() -> Element {
    Compression {
        app: Some("SoundForge".to_string()),
        app_version: Some("10".to_string()),
        name: Some("(:unap)".to_string()),
        quality: Some("lossy".to_string()),
    }
    .to_element()
}

/// File-data parameters for a 44.1 kHz PCM file, as an untyped mapping.
#[allow(dead_code)]
pub fn pcm_file_params() -> ParameterSet {
    ParameterSet::new()
        .with("audioDataEncoding", vec!["PCM"])
        .with("bitsPerSample", vec!["8"])
        .with("compression", vec![sound_forge_compression()])
        .with("dataRate", vec!["256"])
        .with("dataRateMode", vec!["Fixed"])
        .with("samplingFrequency", vec!["44.1"])
}

/// The same file data as [`pcm_file_params`], as a typed struct.
#[allow(dead_code)]
pub fn pcm_file_data() -> FileData {
    FileData {
        audio_data_encoding: "PCM".into(),
        bits_per_sample: "8".into(),
        compression: sound_forge_compression().into(),
        data_rate: "256".into(),
        data_rate_mode: "Fixed".into(),
        sampling_frequency: "44.1".into(),
        ..Default::default()
    }
}

/// A stereo audio-info block with one channel map per channel.
#[allow(dead_code)]
pub fn stereo_audio_info() -> AudioInfo {
    AudioInfo {
        duration: "PT1H30M".into(),
        num_channels: "2".into(),
        sound_channel_map: vec![
            sound_channel_map(Some("1"), Some("FRONT_LEFT")),
            sound_channel_map(Some("2"), Some("FRONT_RIGHT")),
        ]
        .into(),
        sound_field: "stereo".into(),
        ..Default::default()
    }
}

/// A message digest with a fixed timestamp.
#[allow(dead_code)]
pub fn md5_digest() -> Element {
    message_digest("2018-04-10T12:00:00", "MD5", "d41d8cd98f00b204e9800998ecf8427e")
}

/// Text of the first element at `path`, relative to `root`.
#[allow(dead_code)]
pub fn text_at<'a>(root: &'a Element, path: &str) -> Option<&'a str> {
    root.find_path(path).and_then(Element::text)
}
