//! Error types for envdoctor operations.
//!
//! This module defines [`EnvDoctorError`], the error type used by everything
//! around the pipeline (input loading, configuration, artifact writing),
//! and a [`Result`] type alias for convenience.
//!
//! The pipeline stages themselves never fail: a malformed `.env` file
//! produces issues, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envdoctor operations.
#[derive(Debug, Error)]
pub enum EnvDoctorError {
    /// The `.env` file to analyze does not exist.
    #[error("Input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but holds invalid values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A rule id that no registered rule answers to.
    #[error("Unknown rule: {id}")]
    UnknownRule { id: String },

    /// Writing a generated artifact failed.
    #[error("Failed to write {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envdoctor operations.
pub type Result<T> = std::result::Result<T, EnvDoctorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_found_displays_path() {
        let err = EnvDoctorError::InputNotFound {
            path: PathBuf::from("/app/.env"),
        };
        assert_eq!(err.to_string(), "Input not found: /app/.env");
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = EnvDoctorError::ConfigParseError {
            path: PathBuf::from("/app/.envdoctor.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/app/.envdoctor.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_rule_displays_id() {
        let err = EnvDoctorError::UnknownRule {
            id: "no-such-rule".into(),
        };
        assert!(err.to_string().contains("no-such-rule"));
    }

    #[test]
    fn artifact_write_keeps_source() {
        use std::error::Error as _;

        let err = EnvDoctorError::ArtifactWrite {
            path: PathBuf::from("out/.env.example"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out/.env.example"));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EnvDoctorError = io_err.into();
        assert!(matches!(err, EnvDoctorError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(EnvDoctorError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
