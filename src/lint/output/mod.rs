//! Validation report formatters.
//!
//! This module provides formatters for rendering [`ValidationResults`]
//! in different formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use crate::lint::ValidationResults;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for validation reports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

/// Trait for formatting a validation report.
pub trait LintFormatter {
    /// Format the results for `source` (a file path or `stdin`).
    fn format<W: Write>(
        &self,
        source: &str,
        results: &ValidationResults,
        writer: &mut W,
    ) -> std::io::Result<()>;
}

/// Render `results` in the given format to a string.
pub fn render(
    format: OutputFormat,
    source: &str,
    results: &ValidationResults,
    use_color: bool,
) -> std::io::Result<String> {
    let mut out = Vec::new();
    match format {
        OutputFormat::Human => HumanFormatter::new(use_color).format(source, results, &mut out)?,
        OutputFormat::Json => JsonFormatter::new().format(source, results, &mut out)?,
        OutputFormat::Sarif => SarifFormatter::new("envdoctor", env!("CARGO_PKG_VERSION"))
            .format(source, results, &mut out)?,
    }
    String::from_utf8(out).map_err(std::io::Error::other)
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
