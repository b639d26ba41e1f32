//! Duplicate key detection.
//!
//! Reports each key declared more than once. Only the last declaration
//! takes effect when the file is loaded, which is rarely intended.

use crate::lint::{Issue, LintRule, RuleId, RulePhase, Severity};
use crate::parser::ParsedDocument;

/// Reports keys that appear on more than one line.
pub struct DuplicateKeyRule;

impl LintRule for DuplicateKeyRule {
    fn id(&self) -> RuleId {
        RuleId::new("duplicate-key")
    }

    fn name(&self) -> &str {
        "Duplicate Key"
    }

    fn description(&self) -> &str {
        "Detects keys declared more than once"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn phase(&self) -> RulePhase {
        RulePhase::Structure
    }

    fn check_document(&self, doc: &ParsedDocument) -> Vec<Issue> {
        doc.duplicates
            .iter()
            .map(|group| {
                let lines = group
                    .lines
                    .iter()
                    .map(|l| l.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");

                Issue::new(
                    self.id(),
                    self.default_severity(),
                    format!("Duplicate key \"{}\" found on lines: {}", group.key, lines),
                )
                .with_line(group.lines.first().copied().unwrap_or_default())
                .with_key(&group.key)
                .with_help("Remove all but one declaration")
            })
            .collect()
    }
}
