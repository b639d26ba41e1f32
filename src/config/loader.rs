//! Configuration file discovery and loading.
//!
//! A project has at most one config file, `.envdoctor.yml` (or
//! `.envdoctor.yaml`) in the project root. An explicit `--config` path
//! replaces discovery entirely.

use crate::config::schema::EnvDoctorConfig;
use crate::error::{EnvDoctorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names checked during discovery, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".envdoctor.yml", ".envdoctor.yaml"];

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Project config, if one was found.
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover the config file for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let project = CONFIG_FILE_NAMES
            .iter()
            .map(|name| project_root.join(name))
            .find(|path| path.is_file());

        tracing::debug!(root = %project_root.display(), found = ?project, "config discovery");
        Self { project }
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<EnvDoctorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvDoctorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvDoctorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`EnvDoctorConfig`].
///
/// An empty document yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<EnvDoctorConfig> {
    if content.trim().is_empty() {
        return Ok(EnvDoctorConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvDoctorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project root is searched, and a missing file means defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<EnvDoctorConfig> {
    let path = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => ConfigPaths::discover(project_root).project,
    };

    let config = match path {
        Some(path) => load_config_file(&path)?,
        None => EnvDoctorConfig::default(),
    };

    super::validate(&config)?;
    Ok(config)
}
