//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;
use serde_json::Value;

use crate::data::{AudioData, BinaryData};
use crate::error::{AudioError, Result};
use crate::format::{parse_audio_format_with, AudioFormat, ParsePolicy};

/// Resolve a content type and print the format as JSON.
pub fn parse_format(content_type: &str, policy: ParsePolicy) -> Result<AudioFormat> {
    info!("Parsing content type: {}", content_type);

    let format = parse_audio_format_with(content_type, policy)?;
    println!("{}", serde_json::to_string_pretty(&format)?);

    Ok(format)
}

/// Import a raw PCM file and write its JSON document.
pub fn encode(
    input: &Path,
    content_type: &str,
    policy: ParsePolicy,
    output: Option<&Path>,
) -> Result<AudioData> {
    info!("Encoding {} as {}", input.display(), content_type);

    let bytes = read_file(input)?;
    let mut data = AudioData::default();
    data.from_binary_with(policy, content_type, &bytes)?;

    let document = serde_json::to_string_pretty(&data.to_document())?;
    match output {
        Some(path) => {
            fs::write(path, document)?;
            println!("Document written: {} ({})", path.display(), data.format());
        }
        None => println!("{}", document),
    }

    Ok(data)
}

/// Read a JSON document and write its raw PCM bytes.
pub fn decode(input: &Path, output: &Path) -> Result<AudioData> {
    info!("Decoding {} to {}", input.display(), output.display());

    let data = read_document(input)?;
    fs::write(output, data.to_binary())?;

    println!("Raw audio written: {}", output.display());
    match data.content_type() {
        Some(content_type) => println!("Content type: {}", content_type),
        None => println!(
            "Content type: none ({}-bit audio has no audio/L16 form)",
            data.bits_per_sample()
        ),
    }

    Ok(data)
}

/// Print a summary of a JSON document.
pub fn info(input: &Path) -> Result<AudioData> {
    let data = read_document(input)?;

    println!("Format: {}", data.format());
    println!("Bytes: {}", data.wave_data().len());
    println!("Frames: {}", data.frame_count());
    println!("Duration: {:.3}s", data.duration_secs());

    Ok(data)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AudioError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => AudioError::Io(e),
    })
}

fn read_document(path: &Path) -> Result<AudioData> {
    let bytes = read_file(path)?;
    let document: Value = serde_json::from_slice(&bytes)?;
    AudioData::from_document(&document)
}
