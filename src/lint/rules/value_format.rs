//! Typed value checks driven by key naming.
//!
//! The key decides what the value should look like: `*_ENABLE*`/`*DEBUG*`
//! style keys hold booleans, `*_TIMEOUT`/`*_LIMIT` style keys hold numbers
//! and `*_CONFIG`/`*_CREDENTIALS` keys hold JSON documents.

use serde::de::IgnoredAny;

use crate::lint::patterns::{is_boolean_value, is_numeric, key_is, KeyKind, BOOLEAN_VALUES};
use crate::lint::{Issue, LintRule, RuleId, Severity};
use crate::parser::Entry;

/// Boolean-ish keys must use a recognized spelling.
pub struct BooleanFormatRule;

impl LintRule for BooleanFormatRule {
    fn id(&self) -> RuleId {
        RuleId::new("boolean-format")
    }

    fn name(&self) -> &str {
        "Boolean Format"
    }

    fn description(&self) -> &str {
        "Validates boolean flags use true, false, 1, 0, yes or no"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_entry(&self, entry: &Entry) -> Vec<Issue> {
        if !key_is(&entry.key, KeyKind::Boolean) {
            return Vec::new();
        }

        let mut issues = Vec::new();

        if !is_boolean_value(&entry.value) {
            issues.push(Issue::for_entry(
                self.id(),
                self.default_severity(),
                entry,
                format!(
                    "Boolean value for \"{}\" should be one of: {}. Found: \"{}\"",
                    entry.key,
                    BOOLEAN_VALUES.join(", "),
                    entry.value
                ),
            ));
        }

        // Only the capitalized spellings; TRUE/FALSE pass silently.
        if entry.value == "True" || entry.value == "False" {
            issues.push(Issue::for_entry(
                self.id(),
                Severity::Suggestion,
                entry,
                format!(
                    "Use lowercase for boolean \"{}\": \"{}\"",
                    entry.key,
                    entry.value.to_lowercase()
                ),
            ));
        }

        issues
    }
}

/// Numeric keys must coerce to a number.
pub struct NumericFormatRule;

impl LintRule for NumericFormatRule {
    fn id(&self) -> RuleId {
        RuleId::new("numeric-format")
    }

    fn name(&self) -> &str {
        "Numeric Format"
    }

    fn description(&self) -> &str {
        "Validates PORT, TIMEOUT, LIMIT, SIZE, COUNT, MAX and MIN values are numbers"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_entry(&self, entry: &Entry) -> Vec<Issue> {
        if !key_is(&entry.key, KeyKind::Numeric) || is_numeric(&entry.value) {
            return Vec::new();
        }

        vec![Issue::for_entry(
            self.id(),
            self.default_severity(),
            entry,
            format!(
                "Numeric value expected for \"{}\". Found: \"{}\"",
                entry.key, entry.value
            ),
        )]
    }
}

/// JSON keys must hold a parseable JSON document.
pub struct JsonFormatRule;

impl LintRule for JsonFormatRule {
    fn id(&self) -> RuleId {
        RuleId::new("json-format")
    }

    fn name(&self) -> &str {
        "JSON Format"
    }

    fn description(&self) -> &str {
        "Validates CONFIG and CREDENTIALS values parse as JSON"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_entry(&self, entry: &Entry) -> Vec<Issue> {
        if !key_is(&entry.key, KeyKind::Json) {
            return Vec::new();
        }

        // Validated without building a value, so lone surrogate escapes pass as in JavaScript.
        match serde_json::from_str::<IgnoredAny>(&entry.value) {
            Ok(_) => Vec::new(),
            Err(err) => {
                tracing::trace!(key = %entry.key, error = %err, "JSON value did not parse");
                vec![Issue::for_entry(
                    self.id(),
                    self.default_severity(),
                    entry,
                    format!("Invalid JSON format for \"{}\"", entry.key),
                )
                .with_help(format!("{err}"))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn first(content: &str) -> Entry {
        parse(content).entries.remove(0)
    }

    #[test]
    fn boolean_rejects_unknown_spelling() {
        let issues = BooleanFormatRule.check_entry(&first("FEATURE_ENABLED=on"));

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0]
            .message
            .contains("should be one of: true, false, 1, 0, yes, no"));
    }

    #[test]
    fn boolean_suggests_lowercase_for_capitalized() {
        let issues = BooleanFormatRule.check_entry(&first("DEBUG=True"));

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Suggestion);
        assert!(issues[0].message.ends_with("\"true\""));
    }

    #[test]
    fn boolean_upper_case_passes() {
        assert!(BooleanFormatRule.check_entry(&first("VERBOSE=TRUE")).is_empty());
        assert!(BooleanFormatRule.check_entry(&first("STRICT_MODE=yes")).is_empty());
    }

    #[test]
    fn numeric_rejects_words() {
        let issues = NumericFormatRule.check_entry(&first("REQUEST_TIMEOUT=30s"));

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Found: \"30s\""));
    }

    #[test]
    fn numeric_accepts_blank_and_hex() {
        assert!(NumericFormatRule.check_entry(&first("MAX_CONNECTIONS=")).is_empty());
        assert!(NumericFormatRule.check_entry(&first("RATE_LIMIT=0x10")).is_empty());
    }

    #[test]
    fn numeric_rejects_non_ascii_digits() {
        assert_eq!(NumericFormatRule.check_entry(&first("MAX_ITEMS=٣٠")).len(), 1);
    }

    #[test]
    fn port_is_also_numeric() {
        assert_eq!(NumericFormatRule.check_entry(&first("PORT=abc")).len(), 1);
    }

    #[test]
    fn json_rejects_malformed() {
        let issues = JsonFormatRule.check_entry(&first("APP_CONFIG={bad json}"));

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].message, "Invalid JSON format for \"APP_CONFIG\"");
    }

    #[test]
    fn json_accepts_documents_and_scalars() {
        assert!(JsonFormatRule
            .check_entry(&first(r#"FIREBASE_CONFIG='{"projectId":"demo"}'"#))
            .is_empty());
        assert!(JsonFormatRule.check_entry(&first("FEATURE_CONFIG=42")).is_empty());
    }

    #[test]
    fn json_accepts_lone_surrogate_escape() {
        assert!(JsonFormatRule
            .check_entry(&first(r#"APP_CONFIG='["\ud800"]'"#))
            .is_empty());
        assert_eq!(
            JsonFormatRule
                .check_entry(&first(r#"APP_CONFIG='["\uZZZZ"]'"#))
                .len(),
            1
        );
    }

    #[test]
    fn json_rejects_empty() {
        assert_eq!(JsonFormatRule.check_entry(&first("GOOGLE_CREDENTIALS=")).len(), 1);
    }
}
