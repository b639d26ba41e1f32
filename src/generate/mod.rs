//! Deployment artifact generation.
//!
//! Four independent artifacts are synthesized from the parsed document
//! (and, for the checklist, the validation results):
//!
//! - [`env_example`] - sanitized `.env.example` template
//! - [`checklist`] - `DEPLOYMENT.md` checklist
//! - [`docker_compose`] - `docker-compose.yml` stub
//! - [`vercel`] - `vercel.json` stub
//!
//! Generation never fails and is deterministic: the same inputs always
//! produce byte-identical outputs.

pub mod catalog;
pub mod checklist;
pub mod docker_compose;
pub mod env_example;
pub mod frameworks;
pub mod vercel;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lint::ValidationResults;
use crate::parser::ParsedDocument;

/// The four generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedOutputs {
    pub env_example: String,
    pub deployment_checklist: String,
    pub docker_compose: String,
    pub vercel_config: String,
}

impl GeneratedOutputs {
    /// Content of a single artifact.
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::EnvExample => &self.env_example,
            ArtifactKind::Checklist => &self.deployment_checklist,
            ArtifactKind::DockerCompose => &self.docker_compose,
            ArtifactKind::Vercel => &self.vercel_config,
        }
    }
}

/// Artifact selector used by the CLI and project config.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    EnvExample,
    Checklist,
    DockerCompose,
    Vercel,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::EnvExample,
        ArtifactKind::Checklist,
        ArtifactKind::DockerCompose,
        ArtifactKind::Vercel,
    ];

    /// File name the artifact is written to.
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::EnvExample => ".env.example",
            ArtifactKind::Checklist => "DEPLOYMENT.md",
            ArtifactKind::DockerCompose => "docker-compose.yml",
            ArtifactKind::Vercel => "vercel.json",
        }
    }

    /// Selector name as written on the command line and in config.
    pub fn name(self) -> &'static str {
        match self {
            ArtifactKind::EnvExample => "env-example",
            ArtifactKind::Checklist => "checklist",
            ArtifactKind::DockerCompose => "docker-compose",
            ArtifactKind::Vercel => "vercel",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate all four artifacts.
pub fn generate(doc: &ParsedDocument, results: &ValidationResults) -> GeneratedOutputs {
    GeneratedOutputs {
        env_example: env_example::render(doc),
        deployment_checklist: checklist::render(doc, results),
        docker_compose: docker_compose::render(doc),
        vercel_config: vercel::render(doc),
    }
}
