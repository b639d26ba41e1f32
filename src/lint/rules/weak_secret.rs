//! Weak secret detection.
//!
//! Applies to keys that look like credentials (API_KEY, SECRET, TOKEN,
//! PASSWORD, PRIVATE_KEY, CLIENT_SECRET). Public-prefixed keys are
//! handled by the exposure rule instead.

use crate::lint::patterns::{has_weak_prefix, is_base64_alphabet, key_is, utf16_len, KeyKind};
use crate::lint::{Issue, LintRule, RuleId, Severity};
use crate::parser::Entry;

/// Secrets shorter than this are considered guessable.
const MIN_SECRET_LEN: usize = 16;

/// Non-base64 secrets longer than this get an encoding suggestion.
const ENCODING_HINT_LEN: usize = 20;

/// Checks credential-like values for length, test prefixes and encoding.
pub struct WeakSecretRule;

impl LintRule for WeakSecretRule {
    fn id(&self) -> RuleId {
        RuleId::new("weak-secret")
    }

    fn name(&self) -> &str {
        "Weak Secret"
    }

    fn description(&self) -> &str {
        "Detects short, test-like or awkwardly encoded secrets"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_entry(&self, entry: &Entry) -> Vec<Issue> {
        if !key_is(&entry.key, KeyKind::Secret) {
            return Vec::new();
        }

        let mut issues = Vec::new();
        let len = utf16_len(&entry.value);

        if len < MIN_SECRET_LEN {
            issues.push(
                Issue::for_entry(
                    self.id(),
                    self.default_severity(),
                    entry,
                    format!(
                        "Secret \"{}\" is too short ({} chars). Consider using at least 16 characters",
                        entry.key, len
                    ),
                )
                .with_help("Generate one with `openssl rand -base64 32`"),
            );
        }

        if has_weak_prefix(&entry.value) {
            issues.push(Issue::for_entry(
                self.id(),
                self.default_severity(),
                entry,
                format!("Secret \"{}\" appears to use a weak or test value", entry.key),
            ));
        }

        if !is_base64_alphabet(&entry.value) && len > ENCODING_HINT_LEN {
            issues.push(Issue::for_entry(
                self.id(),
                Severity::Suggestion,
                entry,
                format!(
                    "Consider base64 encoding the secret \"{}\" for better compatibility",
                    entry.key
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn check(content: &str) -> Vec<Issue> {
        let doc = parse(content);
        WeakSecretRule.check_entry(&doc.entries[0])
    }

    #[test]
    fn short_test_secret_gets_two_warnings() {
        let issues = check("API_KEY=123");

        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues[0].message.contains("too short (3 chars)"));
        assert!(issues[1].message.contains("weak or test value"));
    }

    #[test]
    fn long_non_base64_secret_gets_suggestion() {
        let issues = check("JWT_SECRET=kP9-xL2$mQ7!vR4@wT8&zN1*");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Suggestion);
    }

    #[test]
    fn strong_base64_secret_passes() {
        assert!(check("SESSION_SECRET=Zm9vYmFyYmF6cXV4MTIzNDU2Nzg5MA==").is_empty());
    }

    #[test]
    fn empty_secret_is_too_short() {
        let issues = check("OPENAI_API_KEY=");

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("(0 chars)"));
    }

    #[test]
    fn public_keys_are_exempt() {
        assert!(check("NEXT_PUBLIC_API_KEY=123").is_empty());
        assert!(check("VITE_TOKEN=abc").is_empty());
    }

    #[test]
    fn non_secret_keys_are_ignored() {
        assert!(check("APP_NAME=abc").is_empty());
    }
}
