//! End-to-end construction of complete AudioMD documents.

mod common;

use audiomd::{
    calibration_info, create_audiomd, dimensions, file_data, material, physical_data,
    to_xml_string, tracking, AnalogDigitalFlag, AudioInfo, AudioMd, AudiomdError, ParameterSet,
    PhysicalData, Section, WriterConfig, AUDIOMD_NS,
};
use common::{md5_digest, pcm_file_data, pcm_file_params, stereo_audio_info, text_at};

#[test]
fn test_file_digital_document() {
    let file_data = file_data(&pcm_file_params()).expect("Failed to build fileData");
    let audio_info = AudioInfo {
        duration: vec!["PT1H30M"].into(),
        num_channels: vec!["1"].into(),
        ..Default::default()
    }
    .to_element();

    let root = AudioMd {
        file_data: Some(file_data),
        audio_info: Some(audio_info),
        ..Default::default()
    }
    .to_element();

    assert_eq!(root.name().namespace(), AUDIOMD_NS);
    assert_eq!(root.attribute("ANALOGDIGITALFLAG"), Some("FileDigital"));
    assert_eq!(root.find_all("fileData").count(), 1);
    assert_eq!(root.find_all("audioInfo").count(), 1);
    assert_eq!(root.find_all("physicalData").count(), 0);
    assert_eq!(root.find_all("calibrationInfo").count(), 0);

    assert_eq!(text_at(&root, "fileData/audioDataEncoding"), Some("PCM"));
    assert_eq!(text_at(&root, "fileData/bitsPerSample"), Some("8"));
    assert_eq!(text_at(&root, "fileData/compression/codecCreatorApp"), Some("SoundForge"));
    assert_eq!(text_at(&root, "fileData/compression/codecCreatorAppVersion"), Some("10"));
    assert_eq!(text_at(&root, "fileData/compression/codecName"), Some("(:unap)"));
    assert_eq!(text_at(&root, "fileData/compression/codecQuality"), Some("lossy"));
    assert_eq!(text_at(&root, "fileData/dataRate"), Some("256"));
    assert_eq!(text_at(&root, "fileData/dataRateMode"), Some("Fixed"));
    assert_eq!(text_at(&root, "fileData/samplingFrequency"), Some("44.1"));
    assert_eq!(text_at(&root, "audioInfo/duration"), Some("PT1H30M"));
    assert_eq!(text_at(&root, "audioInfo/numChannels"), Some("1"));
}

#[test]
fn test_misspelled_compression_key_aborts() {
    // "Compression" is not a fileData element; the mapping builder must refuse it.
    let mut params = pcm_file_params();
    params.set("Compression", vec![common::sound_forge_compression()]);

    match file_data(&params) {
        Err(AudiomdError::UnrecognizedParameter(key)) => assert_eq!(key, "Compression"),
        other => panic!("expected UnrecognizedParameter, got {other:?}"),
    }
}

#[test]
fn test_typed_and_mapping_file_data_match() {
    let from_params = file_data(&pcm_file_params()).unwrap();
    assert_eq!(from_params, pcm_file_data().to_element());
}

#[test]
fn test_analog_document_with_physical_data() {
    let dims = dimensions(
        &ParameterSet::new()
            .with("DIAMETER", "7")
            .with("UNITS", "inches"),
    )
    .unwrap();
    let mat = material(
        &ParameterSet::new()
            .with("baseMaterial", "polyester")
            .with("oxide", "ferric"),
    )
    .unwrap();

    let physical = physical_data(
        &ParameterSet::new()
            .with("physFormat", "open reel")
            .with("dimensions", dims)
            .with("material", mat)
            .with("tracking", tracking(Some("CTL"), Some("12")))
            .with("speed", "7.5 ips"),
    )
    .unwrap();

    let root = create_audiomd(
        AnalogDigitalFlag::Analog,
        None,
        Some(physical),
        Some(stereo_audio_info().to_element()),
        Some(calibration_info(Some("internal"), Some("head"), None, Some("tone"))),
    );

    assert_eq!(root.attribute("ANALOGDIGITALFLAG"), Some("Analog"));
    assert_eq!(root.child_names(), ["physicalData", "audioInfo", "calibrationInfo"]);

    let physical = root.find("physicalData").unwrap();
    assert_eq!(
        physical.child_names(),
        ["dimensions", "material", "physFormat", "speed", "tracking"]
    );
    assert_eq!(
        physical.find("dimensions").and_then(|d| d.attribute("UNITS")),
        Some("inches")
    );
    assert_eq!(text_at(&root, "physicalData/tracking/trackingValue"), Some("12"));

    let maps: Vec<_> = root
        .find("audioInfo")
        .unwrap()
        .find_all("soundChannelMap")
        .filter_map(|m| m.find("channelAssignment"))
        .filter_map(|a| a.attribute("MAPLOCATION"))
        .collect();
    assert_eq!(maps, ["FRONT_LEFT", "FRONT_RIGHT"]);
}

#[test]
fn test_building_twice_is_structurally_identical() {
    let build = || {
        let physical = PhysicalData {
            condition: "good".into(),
            tracking: tracking(Some("CTL"), None).into(),
            ..Default::default()
        };
        let mut file = pcm_file_data();
        file.message_digest = md5_digest().into();
        create_audiomd(
            AnalogDigitalFlag::PhysDigital,
            Some(file.to_element()),
            Some(physical.to_element()),
            Some(stereo_audio_info().to_element()),
            None,
        )
    };
    assert_eq!(build(), build());
}

#[test]
fn test_serialized_document() {
    let mut file = pcm_file_data();
    file.message_digest = md5_digest().into();
    let root = AudioMd {
        file_data: Some(file.to_element()),
        ..Default::default()
    }
    .to_element();

    let xml = to_xml_string(&root, &WriterConfig::default()).expect("Failed to serialize");

    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("<amd:fileData>"));
    assert!(xml.contains("<amd:messageDigestAlgorithm>MD5</amd:messageDigestAlgorithm>"));
    assert!(xml.contains("<amd:codecName>(:unap)</amd:codecName>"));
    assert!(xml.ends_with("</amd:AUDIOMD>"));

    // messageDigest precedes compression, which precedes dataRate
    let digest = xml.find("<amd:messageDigest>").unwrap();
    let codec = xml.find("<amd:compression>").unwrap();
    let rate = xml.find("<amd:dataRate>").unwrap();
    assert!(digest < codec && codec < rate);
}
