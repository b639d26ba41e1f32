//! Configuration loading, parsing, and validation for envdoctor.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use envdoctor::config::load_config;
//! use envdoctor::lint::OutputFormat;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".envdoctor.yml"), "settings:\n  default_format: json").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.settings.default_format, OutputFormat::Json);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, CONFIG_FILE_NAMES};
pub use schema::{EnvDoctorConfig, GenerateConfig, RulesConfig, Settings};

use crate::error::{EnvDoctorError, Result};
use crate::lint::RuleRegistry;

impl EnvDoctorConfig {
    /// Build the rule registry this configuration selects.
    pub fn registry(&self) -> Result<RuleRegistry> {
        let mut registry = RuleRegistry::with_builtins();
        registry.disable(&self.rules.disabled)?;
        Ok(registry)
    }

    /// JSON Schema for the config file.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(EnvDoctorConfig)).unwrap_or_default()
    }
}

/// Check values that parse but make no sense.
///
/// # Errors
///
/// Returns `UnknownRule` for a disabled id no built-in rule has, and
/// `ConfigValidationError` for an empty artifact list.
pub fn validate(config: &EnvDoctorConfig) -> Result<()> {
    config.registry()?;

    if config.generate.artifacts.is_empty() {
        return Err(EnvDoctorError::ConfigValidationError {
            message: "generate.artifacts must list at least one artifact".to_string(),
        });
    }

    Ok(())
}
