//! PORT range validation.

use crate::lint::patterns::parse_leading_int;
use crate::lint::{Issue, LintRule, RuleId, Severity};
use crate::parser::Entry;

/// Lowest port that does not need elevated privileges.
const FIRST_UNPRIVILEGED_PORT: i64 = 1024;

/// Validates that PORT is a usable TCP port.
///
/// Out-of-range or non-numeric values are errors; ports below 1024 only
/// warn because they need root to bind.
pub struct PortRangeRule;

impl LintRule for PortRangeRule {
    fn id(&self) -> RuleId {
        RuleId::new("port-range")
    }

    fn name(&self) -> &str {
        "Port Range"
    }

    fn description(&self) -> &str {
        "Validates PORT is a number between 1 and 65535"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_entry(&self, entry: &Entry) -> Vec<Issue> {
        if entry.key != "PORT" {
            return Vec::new();
        }

        match parse_leading_int(&entry.value) {
            Some(port @ 1..=65535) if port < FIRST_UNPRIVILEGED_PORT => vec![Issue::for_entry(
                self.id(),
                Severity::Warning,
                entry,
                format!(
                    "PORT {} is a privileged port. Consider using a port >= 1024",
                    port
                ),
            )],
            Some(1..=65535) => Vec::new(),
            _ => vec![Issue::for_entry(
                self.id(),
                self.default_severity(),
                entry,
                format!(
                    "PORT must be a valid number between 1-65535. Found: \"{}\"",
                    entry.value
                ),
            )],
        }
    }
}
