//! Raw PCM audio payload
//!
//! `AudioData` holds wave bytes plus the metadata needed to interpret them.
//! The bytes are never inspected: a declared format that disagrees with the
//! buffer length is the caller's problem.
//!
//! Two serialization paths are supported:
//! - Structured: a JSON object with a Base64 `waveData` field and three
//!   unsigned integer fields
//! - Binary: the bare wave bytes, imported together with an `audio/L16`
//!   content type

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::data::BinaryData;
use crate::error::Result;
use crate::format::content_type::L16_BITS_PER_SAMPLE;
use crate::format::{parse_audio_format_with, AudioFormat, ParsePolicy};

/// Raw wave audio data with its format
///
/// Deserialization is permissive about absent values: a missing key and an
/// explicit `null` both become zero/empty. Keys holding any other wrong type,
/// and `waveData` that is not valid Base64, are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioData {
    #[serde(with = "wave_data_base64")]
    wave_data: Vec<u8>,
    #[serde(deserialize_with = "null_as_default")]
    sample_rate_hz: u32,
    #[serde(deserialize_with = "null_as_default")]
    channel_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    bits_per_sample: u32,
}

impl AudioData {
    /// Create audio data from bytes and format fields. Nothing is validated.
    pub fn new(
        wave_data: Vec<u8>,
        sample_rate_hz: u32,
        channel_count: u32,
        bits_per_sample: u32,
    ) -> Self {
        AudioData {
            wave_data,
            sample_rate_hz,
            channel_count,
            bits_per_sample,
        }
    }

    /// Create audio data from bytes and a resolved format
    pub fn with_format(wave_data: Vec<u8>, format: AudioFormat) -> Self {
        AudioData::new(
            wave_data,
            format.sample_rate_hz,
            format.channel_count,
            format.bits_per_sample,
        )
    }

    /// Import a wire payload with the lenient parameter policy
    ///
    /// # Errors
    /// * `UnsupportedFormat` - If the content type is not `audio/L16`
    pub fn from_wire(content_type: &str, input: impl Into<Vec<u8>>) -> Result<Self> {
        let format = parse_audio_format_with(content_type, ParsePolicy::Lenient)?;
        Ok(AudioData::with_format(input.into(), format))
    }

    pub fn wave_data(&self) -> &[u8] {
        &self.wave_data
    }

    pub fn into_wave_data(self) -> Vec<u8> {
        self.wave_data
    }

    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    pub fn bits_per_sample(&self) -> u32 {
        self.bits_per_sample
    }

    pub fn format(&self) -> AudioFormat {
        AudioFormat {
            sample_rate_hz: self.sample_rate_hz,
            bits_per_sample: self.bits_per_sample,
            channel_count: self.channel_count,
        }
    }

    /// True when there are no wave bytes
    pub fn is_empty(&self) -> bool {
        self.wave_data.is_empty()
    }

    /// Content type describing this buffer on the binary path.
    ///
    /// `None` unless the buffer is 16-bit, the only depth `audio/L16` carries.
    pub fn content_type(&self) -> Option<String> {
        (self.bits_per_sample == L16_BITS_PER_SAMPLE).then(|| self.format().to_content_type())
    }

    /// Bytes per interleaved frame, counting whole bytes per sample
    pub fn bytes_per_frame(&self) -> usize {
        (self.channel_count as usize).saturating_mul(self.bits_per_sample as usize / 8)
    }

    /// Number of complete frames in the buffer (0 if the format is degenerate)
    pub fn frame_count(&self) -> usize {
        match self.bytes_per_frame() {
            0 => 0,
            bytes_per_frame => self.wave_data.len() / bytes_per_frame,
        }
    }

    /// Duration in seconds (0.0 if the sample rate is 0)
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate_hz == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / self.sample_rate_hz as f64
    }

    // ------------------------------------------------------------------------
    // Structured serialization
    // ------------------------------------------------------------------------

    /// Write the four fields into `doc`, leaving its other keys alone
    pub fn serialize_into(&self, doc: &mut Map<String, Value>) {
        // A byte string and three integers always serialize to an object
        if let Ok(Value::Object(fields)) = serde_json::to_value(self) {
            doc.extend(fields);
        }
    }

    /// Serialize into a new JSON object
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        self.serialize_into(&mut doc);
        Value::Object(doc)
    }

    /// Read audio data from a structured document
    ///
    /// # Errors
    /// * `Serialization` - If `doc` is not an object, a field has the wrong
    ///   type, or `waveData` is not valid Base64
    pub fn from_document(doc: &Value) -> Result<Self> {
        Ok(AudioData::deserialize(doc)?)
    }

    /// Replace `self` with the contents of `doc`. On error `self` is unchanged.
    pub fn deserialize_from(&mut self, doc: &Value) -> Result<()> {
        *self = AudioData::from_document(doc)?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Binary import
    // ------------------------------------------------------------------------

    /// Import wire bytes using the given numeric parameter policy
    ///
    /// # Errors
    /// * `UnsupportedFormat` - If the content type is not `audio/L16`
    /// * `MalformedParameter` - Under `ParsePolicy::Strict` only
    pub fn from_binary_with(
        &mut self,
        policy: ParsePolicy,
        content_type: &str,
        input: &[u8],
    ) -> Result<()> {
        let format = parse_audio_format_with(content_type, policy)?;

        self.wave_data = input.to_vec();
        self.sample_rate_hz = format.sample_rate_hz;
        self.channel_count = format.channel_count;
        self.bits_per_sample = format.bits_per_sample;
        Ok(())
    }
}

impl BinaryData for AudioData {
    fn to_binary(&self) -> Vec<u8> {
        self.wave_data.clone()
    }

    fn from_binary(&mut self, content_type: &str, input: &[u8]) -> Result<()> {
        self.from_binary_with(ParsePolicy::Lenient, content_type, input)
    }
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod wave_data_base64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        STANDARD
            .decode(encoded)
            .map_err(|e| de::Error::custom(format!("invalid base64 in waveData: {}", e)))
    }
}
