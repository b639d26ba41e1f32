//! Human-readable output formatter.
//!
//! Formats a validation report for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{Issue, Severity, ValidationResults};
use console::Style;
use std::io::Write;

/// Formats validation output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        if !self.use_color {
            return severity.to_string();
        }
        let style = match severity {
            Severity::Suggestion => Style::new().cyan(),
            Severity::Warning => Style::new().yellow().bold(),
            Severity::Error => Style::new().red().bold(),
        };
        style.force_styling(true).apply_to(severity).to_string()
    }

    fn write_issue<W: Write>(
        &self,
        source: &str,
        issue: &Issue,
        writer: &mut W,
    ) -> std::io::Result<()> {
        // Header line: error[rule-id]: message
        writeln!(
            writer,
            "{}[{}]: {}",
            self.severity_prefix(issue.severity),
            issue.rule_id,
            issue.message
        )?;

        if !issue.is_file_level() {
            writeln!(writer, "  --> {}:{}", source, issue.line)?;
        }

        if let Some(ref help) = issue.help {
            writeln!(writer, "   = help: {}", help)?;
        }

        writeln!(writer)
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        source: &str,
        results: &ValidationResults,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for issue in results.iter() {
            self.write_issue(source, issue, writer)?;
        }

        writeln!(
            writer,
            "Found {} error(s), {} warning(s) and {} suggestion(s)",
            results.errors.len(),
            results.warnings.len(),
            results.suggestions.len()
        )?;

        Ok(())
    }
}
