//! Audio Format Module
//!
//! Content-type parsing for the raw binary wire path.

pub mod content_type;

pub use content_type::{
    parse_audio_format, parse_audio_format_with, AudioFormat, ParsePolicy, L16_MEDIA_TYPE,
};
