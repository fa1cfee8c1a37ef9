//! CLI Command Tests
//!
//! Runs the command implementations against temporary files.

use std::fs;

use approx::assert_relative_eq;
use pcm_audio::cli::commands;
use pcm_audio::{AudioData, AudioError, AudioFormat, ParsePolicy};
use tempfile::TempDir;

fn raw_input(dir: &TempDir, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join("input.raw");
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_parse_format_command() {
    let format =
        commands::parse_format("audio/L16;rate=11025;channels=2", ParsePolicy::Lenient).unwrap();
    assert_eq!(format, AudioFormat::l16(11025, 2));

    let err = commands::parse_format("audio/L16;rate=abc", ParsePolicy::Strict).unwrap_err();
    assert_eq!(err.error_code(), "MALFORMED_PARAMETER");
}

#[test]
fn test_encode_writes_document() {
    let dir = TempDir::new().unwrap();
    let input = raw_input(&dir, &[1, 0, 2, 0, 3, 0, 4, 0]);
    let output = dir.path().join("audio.json");

    let data = commands::encode(
        &input,
        "audio/L16;rate=8000;channels=2",
        ParsePolicy::Lenient,
        Some(&output),
    )
    .unwrap();
    assert_eq!(data.frame_count(), 2);

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(AudioData::from_document(&document).unwrap(), data);
}

#[test]
fn test_encode_rejects_unsupported_content_type() {
    let dir = TempDir::new().unwrap();
    let input = raw_input(&dir, &[0; 4]);
    let output = dir.path().join("audio.json");

    let err = commands::encode(&input, "audio/mpeg", ParsePolicy::Lenient, Some(&output))
        .unwrap_err();
    assert!(matches!(err, AudioError::UnsupportedFormat { .. }));
    assert!(!output.exists());
}

#[test]
fn test_encode_missing_input() {
    let dir = TempDir::new().unwrap();
    let err = commands::encode(
        &dir.path().join("missing.raw"),
        "audio/L16",
        ParsePolicy::Lenient,
        None,
    )
    .unwrap_err();
    assert_eq!(err.error_code(), "FILE_NOT_FOUND");
}

#[test]
fn test_encode_decode_round_trip() {
    let dir = TempDir::new().unwrap();
    let bytes: Vec<u8> = (0..64).collect();
    let input = raw_input(&dir, &bytes);
    let document = dir.path().join("audio.json");
    let decoded = dir.path().join("decoded.raw");

    commands::encode(&input, "audio/L16", ParsePolicy::Lenient, Some(&document)).unwrap();
    let data = commands::decode(&document, &decoded).unwrap();

    assert_eq!(fs::read(&decoded).unwrap(), bytes);
    assert_eq!(data.format(), AudioFormat::L16_DEFAULT);
}

#[test]
fn test_decode_invalid_document() {
    let dir = TempDir::new().unwrap();
    let document = dir.path().join("bad.json");
    fs::write(&document, r#"{"waveData": "%%%"}"#).unwrap();

    let err = commands::decode(&document, &dir.path().join("out.raw")).unwrap_err();
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
}

#[test]
fn test_info_command() {
    let dir = TempDir::new().unwrap();
    let document = dir.path().join("audio.json");
    let data = AudioData::new(vec![0; 16000], 8000, 1, 16);
    fs::write(&document, data.to_document().to_string()).unwrap();

    let loaded = commands::info(&document).unwrap();
    assert_eq!(loaded, data);
    assert_relative_eq!(loaded.duration_secs(), 1.0);
}
