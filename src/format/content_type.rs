//! `audio/L16` content-type parsing
//!
//! The wire contract accepts exactly one raw PCM media type:
//!
//! ```text
//! content-type = "audio/L16" *( ";" param )
//! param        = key "=" value
//! ```
//!
//! `rate` and `channels` override the defaults (16kHz, mono). Unknown keys and
//! parameters that are not a single `key=value` pair are ignored.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{AudioError, Result};

/// The only media type accepted on the binary path
pub const L16_MEDIA_TYPE: &str = "audio/L16";

/// Bit depth implied by `audio/L16`
pub const L16_BITS_PER_SAMPLE: u32 = 16;

/// Sample rate used when no `rate` parameter is given
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 16000;

/// Channel count used when no `channels` parameter is given
pub const DEFAULT_CHANNEL_COUNT: u32 = 1;

const RATE_KEY: &str = "rate";
const CHANNELS_KEY: &str = "channels";

/// How numeric parameter values are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Take the leading decimal digits and fall back to 0 when there are none.
    /// Overflow saturates at `u32::MAX`.
    #[default]
    Lenient,
    /// Reject any value that is not a complete unsigned decimal integer
    Strict,
}

/// Format metadata resolved from a content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFormat {
    pub sample_rate_hz: u32,
    pub bits_per_sample: u32,
    pub channel_count: u32,
}

impl AudioFormat {
    /// `audio/L16` with no parameters: 16kHz, 16-bit, mono
    pub const L16_DEFAULT: AudioFormat = AudioFormat {
        sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        bits_per_sample: L16_BITS_PER_SAMPLE,
        channel_count: DEFAULT_CHANNEL_COUNT,
    };

    /// Create a 16-bit format with the given rate and channel count
    pub fn l16(sample_rate_hz: u32, channel_count: u32) -> Self {
        AudioFormat {
            sample_rate_hz,
            bits_per_sample: L16_BITS_PER_SAMPLE,
            channel_count,
        }
    }

    /// Render as an `audio/L16` content type.
    ///
    /// The bit depth is implied by the media type, so it is not written out.
    pub fn to_content_type(&self) -> String {
        format!(
            "{};{}={};{}={}",
            L16_MEDIA_TYPE, RATE_KEY, self.sample_rate_hz, CHANNELS_KEY, self.channel_count
        )
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        AudioFormat::L16_DEFAULT
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hz, {}-bit, {} ch",
            self.sample_rate_hz, self.bits_per_sample, self.channel_count
        )
    }
}

/// Parse a content type with the lenient numeric policy
///
/// # Errors
/// * `UnsupportedFormat` - If the media type is not `audio/L16`
pub fn parse_audio_format(content_type: &str) -> Result<AudioFormat> {
    parse_audio_format_with(content_type, ParsePolicy::Lenient)
}

/// Parse a content type into an [`AudioFormat`]
///
/// The media type and parameter keys are matched ASCII case-insensitively and
/// are not trimmed. When a key repeats, the last value wins.
///
/// # Errors
/// * `UnsupportedFormat` - If the media type is not `audio/L16`
/// * `MalformedParameter` - Under `ParsePolicy::Strict`, if `rate` or
///   `channels` is not an unsigned integer
pub fn parse_audio_format_with(content_type: &str, policy: ParsePolicy) -> Result<AudioFormat> {
    let mut parts = content_type.split(';');

    match parts.next() {
        Some(media_type) if media_type.eq_ignore_ascii_case(L16_MEDIA_TYPE) => {}
        _ => {
            debug!("[FORMAT] Rejecting content type {:?}", content_type);
            return Err(AudioError::UnsupportedFormat {
                content_type: content_type.to_string(),
            });
        }
    }

    let mut format = AudioFormat::L16_DEFAULT;

    for part in parts {
        let tokens: Vec<&str> = part.split('=').collect();
        let [key, value] = tokens[..] else {
            debug!("[FORMAT] Ignoring parameter {:?}", part);
            continue;
        };

        if key.eq_ignore_ascii_case(RATE_KEY) {
            format.sample_rate_hz = parse_value(key, value, policy)?;
        } else if key.eq_ignore_ascii_case(CHANNELS_KEY) {
            format.channel_count = parse_value(key, value, policy)?;
        } else {
            debug!("[FORMAT] Ignoring unknown parameter {:?}", key);
        }
    }

    Ok(format)
}

fn parse_value(key: &str, value: &str, policy: ParsePolicy) -> Result<u32> {
    match policy {
        ParsePolicy::Lenient => {
            let (parsed, exact) = parse_leading_digits(value);
            if !exact {
                warn!("[FORMAT] Coerced parameter {}={:?} to {}", key, value, parsed);
            }
            Ok(parsed)
        }
        ParsePolicy::Strict => value
            .parse::<u32>()
            .map_err(|_| AudioError::MalformedParameter {
                key: key.to_string(),
                value: value.to_string(),
            }),
    }
}

/// Parse leading whitespace (as C `isspace`, so vertical tab too), an optional
/// `+`, then decimal digits up to the first non-digit. No digits yields 0.
///
/// The flag is true when the digits were the whole of the value after the
/// whitespace and sign, and fit in a `u32` without saturating.
fn parse_leading_digits(value: &str) -> (u32, bool) {
    let unsigned = value.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let unsigned = unsigned.strip_prefix('+').unwrap_or(unsigned);
    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();

    let checked = unsigned.as_bytes()[..digit_count]
        .iter()
        .try_fold(0u32, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u32::from(digit - b'0'))
        });

    let exact = digit_count > 0 && digit_count == unsigned.len() && checked.is_some();
    (checked.unwrap_or(u32::MAX), exact)
}
