//! PCM Audio - raw wave audio payloads
//!
//! [`AudioData`] carries raw PCM bytes together with sample rate, channel count
//! and bit depth. It moves between components in one of two forms:
//! 1. Structured - a JSON object with the wave bytes Base64-encoded
//! 2. Binary - the bare wave bytes, described by an `audio/L16` content type
//!
//! # Example
//!
//! ```
//! use pcm_audio::{AudioData, BinaryData};
//!
//! let mut audio = AudioData::default();
//! audio.from_binary("audio/L16;rate=44100;channels=2", &[0, 0, 0, 0]).unwrap();
//! assert_eq!(audio.sample_rate_hz(), 44100);
//! assert_eq!(audio.bits_per_sample(), 16);
//!
//! let doc = audio.to_document();
//! assert_eq!(AudioData::from_document(&doc).unwrap(), audio);
//! ```

pub mod cli;
pub mod data;
pub mod error;
pub mod format;

pub use data::{AudioData, BinaryData};
pub use error::{AudioError, Result};
pub use format::{parse_audio_format, parse_audio_format_with, AudioFormat, ParsePolicy};
