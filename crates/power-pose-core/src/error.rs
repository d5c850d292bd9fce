//! Error types for the power pose core.
//!
//! Classification itself is total and never fails: a missing or low-confidence
//! landmark is a negative outcome, not an error. The types here cover the
//! fallible edges around it, namely constructing validated values and loading
//! threshold files.
//!
//! # Error Hierarchy
//!
//! - [`CoreError`]: top-level error for value construction and classifier setup
//! - [`ConfigError`]: threshold validation and file loading
//!
//! # Example
//!
//! ```rust
//! use power_pose_core::error::CoreError;
//! use power_pose_core::Confidence;
//!
//! let err = Confidence::new(1.5).unwrap_err();
//! assert!(matches!(err, CoreError::Validation { .. }));
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// A specialized `Result` type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Top-level error type for the power pose core.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    /// Threshold configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation error for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Description of what validation failed
        message: String,
    },
}

impl CoreError {
    /// Creates a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Errors produced when loading or validating [`PowerPoseThresholds`].
///
/// [`PowerPoseThresholds`]: crate::config::PowerPoseThresholds
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A field has an invalid value.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Name of the field.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// A configuration file could not be read.
    #[error("Cannot read config file `{path}`: {source}")]
    FileRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file or its directory could not be written.
    #[error("Cannot write config file `{path}`: {source}")]
    FileWrite {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file contains malformed JSON.
    #[cfg(feature = "serde")]
    #[error("Cannot parse config file `{path}`: {source}")]
    ParseError {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying JSON parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Thresholds could not be encoded as JSON.
    #[cfg(feature = "serde")]
    #[error("Cannot serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ConfigError {
    /// Construct a [`ConfigError::InvalidValue`].
    pub fn invalid_value<S: Into<String>>(field: &'static str, reason: S) -> Self {
        ConfigError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = CoreError::validation("confidence out of range");
        assert_eq!(
            err.to_string(),
            "Validation error: confidence out of range"
        );
    }

    #[test]
    fn test_config_error_converts_into_core_error() {
        let err: CoreError = ConfigError::invalid_value("min_visibility", "must be <= 1.0").into();
        assert!(matches!(err, CoreError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for `min_visibility`: must be <= 1.0"
        );
    }

    #[test]
    fn test_file_read_keeps_source() {
        use std::error::Error as _;

        let err = ConfigError::FileRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_file_write_names_the_write() {
        let err = ConfigError::FileWrite {
            path: PathBuf::from("out/thresholds.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot write config file `out/thresholds.json`: denied"
        );
    }
}
