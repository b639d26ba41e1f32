//! Configuration schema definitions for envdoctor.
//!
//! This module contains the struct definitions that map to the
//! `.envdoctor.yml` file format. The JSON Schema for editors is derived
//! from the same types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::generate::ArtifactKind;
use crate::lint::OutputFormat;

/// Root configuration structure for `.envdoctor.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct EnvDoctorConfig {
    /// Global settings
    pub settings: Settings,

    /// Rule selection
    pub rules: RulesConfig,

    /// Artifact generation
    pub generate: GenerateConfig,
}

/// Settings that apply to every command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Report format used by `check` when `--format` is not given
    pub default_format: OutputFormat,

    /// Treat warnings as failures
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,
}

/// Which lint rules run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Rule ids to skip, e.g. `empty-value`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
}

/// What `generate` produces and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Artifacts to produce
    pub artifacts: Vec<ArtifactKind>,

    /// Directory to write artifacts into, relative to the project root.
    /// Artifacts are printed to stdout when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactKind::ALL.to_vec(),
            output_dir: None,
        }
    }
}

fn is_false(b: &bool) -> bool {
    !b
}
