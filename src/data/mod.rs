//! Data Payload Module
//!
//! Value objects that travel between capture, transport and consumers.
//! Every payload that can cross the wire as raw bytes implements
//! [`BinaryData`].

mod audio_data;

pub use audio_data::AudioData;

use crate::error::Result;

/// A payload with a raw binary wire form
pub trait BinaryData {
    /// Raw payload bytes. Format metadata is not included; send it separately
    /// (e.g. as a content type) when the receiver does not already know it.
    fn to_binary(&self) -> Vec<u8>;

    /// Replace this payload with `input`, described by `content_type`.
    ///
    /// On error the payload keeps its previous state.
    fn from_binary(&mut self, content_type: &str, input: &[u8]) -> Result<()>;
}
