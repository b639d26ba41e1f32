//! NODE_ENV value validation.

use crate::lint::patterns::NODE_ENV_VALUES;
use crate::lint::{Issue, LintRule, RuleId, Severity};
use crate::parser::Entry;

/// Validates that NODE_ENV holds one of the values Node tooling expects.
pub struct NodeEnvValueRule;

impl LintRule for NodeEnvValueRule {
    fn id(&self) -> RuleId {
        RuleId::new("node-env-value")
    }

    fn name(&self) -> &str {
        "NODE_ENV Value"
    }

    fn description(&self) -> &str {
        "Validates NODE_ENV is development, production or test"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_entry(&self, entry: &Entry) -> Vec<Issue> {
        if entry.key != "NODE_ENV" || NODE_ENV_VALUES.contains(&entry.value.as_str()) {
            return Vec::new();
        }

        vec![Issue::for_entry(
            self.id(),
            self.default_severity(),
            entry,
            format!(
                "NODE_ENV should be one of: {}. Found: \"{}\"",
                NODE_ENV_VALUES.join(", "),
                entry.value
            ),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn check(content: &str) -> Vec<Issue> {
        let doc = parse(content);
        NodeEnvValueRule.check_entry(&doc.entries[0])
    }

    #[test]
    fn warns_on_abbreviation() {
        let issues = check("NODE_ENV=dev");

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Found: \"dev\""));
    }

    #[test]
    fn value_match_is_case_sensitive() {
        assert_eq!(check("NODE_ENV=Production").len(), 1);
    }

    #[test]
    fn passes_known_values() {
        for value in NODE_ENV_VALUES {
            assert!(check(&format!("NODE_ENV={value}")).is_empty());
        }
    }

    #[test]
    fn ignores_other_keys() {
        assert!(check("MY_NODE_ENV=dev").is_empty());
    }
}
