//! Placeholder value detection.

use crate::lint::patterns::is_placeholder;
use crate::lint::{Issue, LintRule, RuleId, Severity};
use crate::parser::Entry;

/// Flags values that were copied from a template and never filled in.
pub struct PlaceholderValueRule;

impl LintRule for PlaceholderValueRule {
    fn id(&self) -> RuleId {
        RuleId::new("placeholder-value")
    }

    fn name(&self) -> &str {
        "Placeholder Value"
    }

    fn description(&self) -> &str {
        "Detects template placeholders such as your-api-key or TODO"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_entry(&self, entry: &Entry) -> Vec<Issue> {
        if !is_placeholder(&entry.value) {
            return Vec::new();
        }

        vec![Issue::for_entry(
            self.id(),
            self.default_severity(),
            entry,
            format!(
                "Placeholder value detected for \"{}\": \"{}\"",
                entry.key, entry.value
            ),
        )]
    }
}
