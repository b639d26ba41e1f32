//! Empty value detection.

use crate::lint::{Issue, LintRule, RuleId, Severity};
use crate::parser::Entry;

/// Warns about keys declared without a value.
pub struct EmptyValueRule;

impl LintRule for EmptyValueRule {
    fn id(&self) -> RuleId {
        RuleId::new("empty-value")
    }

    fn name(&self) -> &str {
        "Empty Value"
    }

    fn description(&self) -> &str {
        "Detects keys with no value"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_entry(&self, entry: &Entry) -> Vec<Issue> {
        if !entry.is_empty() {
            return Vec::new();
        }

        vec![Issue::for_entry(
            self.id(),
            self.default_severity(),
            entry,
            format!("Empty value for \"{}\"", entry.key),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn warns_on_empty_and_empty_quotes() {
        let doc = parse("A=\nB=''\nC=x");

        assert_eq!(EmptyValueRule.check_entry(&doc.entries[0]).len(), 1);
        assert_eq!(EmptyValueRule.check_entry(&doc.entries[1]).len(), 1);
        assert!(EmptyValueRule.check_entry(&doc.entries[2]).is_empty());
    }

    #[test]
    fn whitespace_value_is_not_empty() {
        let doc = parse("A= ");
        // trailing whitespace is trimmed with the line
        assert_eq!(EmptyValueRule.check_entry(&doc.entries[0]).len(), 1);

        let doc = parse("A=\" \"");
        assert!(EmptyValueRule.check_entry(&doc.entries[0]).is_empty());
    }
}
