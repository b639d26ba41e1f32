//! JSON output formatter.
//!
//! Formats a validation report as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{Issue, ValidationResults};
use serde::Serialize;
use std::io::Write;

/// Formats validation output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    source: &'a str,
    errors: &'a [Issue],
    warnings: &'a [Issue],
    suggestions: &'a [Issue],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    suggestions: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        source: &str,
        results: &ValidationResults,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            source,
            errors: &results.errors,
            warnings: &results.warnings,
            suggestions: &results.suggestions,
            summary: JsonSummary {
                total: results.total(),
                errors: results.errors.len(),
                warnings: results.warnings.len(),
                suggestions: results.suggestions.len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}
