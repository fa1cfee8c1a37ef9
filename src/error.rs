//! Error handling for pcm-audio
//!
//! Every error carries a stable code and recovery suggestions so callers can
//! decide whether to retry with different input or drop the payload.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pcm-audio operations
pub type Result<T> = std::result::Result<T, AudioError>;

/// Main error type for pcm-audio operations
#[derive(Error, Debug)]
pub enum AudioError {
    // Content-type Errors
    #[error("Unsupported content type: {content_type:?} (only audio/L16 is accepted)")]
    UnsupportedFormat { content_type: String },

    #[error("Malformed parameter {key}={value:?}: expected an unsigned integer")]
    MalformedParameter { key: String, value: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AudioError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            AudioError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            AudioError::MalformedParameter { .. } => "MALFORMED_PARAMETER",
            AudioError::FileNotFound { .. } => "FILE_NOT_FOUND",
            AudioError::Io(_) => "IO_ERROR",
            AudioError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AudioError::UnsupportedFormat { .. }
                | AudioError::MalformedParameter { .. }
                | AudioError::FileNotFound { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            AudioError::UnsupportedFormat { .. } => vec![
                "Send the payload as raw 16-bit PCM with content type audio/L16",
                "Route other media types to a different handler",
            ],
            AudioError::MalformedParameter { .. } => vec![
                "Use decimal digits for rate and channels, e.g. audio/L16;rate=16000;channels=1",
                "Parse leniently to fall back to the leading digits",
            ],
            AudioError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            AudioError::Io(_) => vec!["Check file permissions and free disk space"],
            AudioError::Serialization(_) => vec![
                "Check the document is a JSON object",
                "waveData must be a standard Base64 string",
                "sampleRateHz, channelCount and bitsPerSample must be unsigned integers",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AudioError::UnsupportedFormat {
            content_type: "audio/basic".to_string(),
        };
        assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");
        assert!(err.is_recoverable());
        assert!(!err.recovery_suggestions().is_empty());

        let err = AudioError::MalformedParameter {
            key: "rate".to_string(),
            value: "fast".to_string(),
        };
        assert_eq!(err.error_code(), "MALFORMED_PARAMETER");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = AudioError::UnsupportedFormat {
            content_type: "audio/basic".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported content type: \"audio/basic\" (only audio/L16 is accepted)"
        );

        let err = AudioError::MalformedParameter {
            key: "channels".to_string(),
            value: "two".to_string(),
        };
        assert!(err.to_string().contains("channels=\"two\""));
    }

    #[test]
    fn test_serialization_error_not_recoverable() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AudioError::from(json_err);
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(!err.is_recoverable());
    }
}
