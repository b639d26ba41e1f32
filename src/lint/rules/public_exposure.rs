//! Secret exposure through client-bundled variables.
//!
//! Next.js inlines `NEXT_PUBLIC_*` and Vite inlines `VITE_*` into browser
//! bundles, so anything secret-looking there is already leaked.

use crate::lint::patterns::looks_like_secret;
use crate::lint::{Issue, LintRule, RuleId, Severity};
use crate::parser::Entry;

/// Flags public-prefixed variables whose values look like secrets.
pub struct PublicSecretExposureRule;

impl PublicSecretExposureRule {
    fn message(key: &str) -> Option<String> {
        if key.starts_with("NEXT_PUBLIC_") {
            Some(format!(
                "Public environment variable \"{}\" appears to contain sensitive data",
                key
            ))
        } else if key.starts_with("VITE_") {
            Some(format!(
                "Vite environment variable \"{}\" will be exposed to the client",
                key
            ))
        } else {
            None
        }
    }
}

impl LintRule for PublicSecretExposureRule {
    fn id(&self) -> RuleId {
        RuleId::new("public-secret-exposure")
    }

    fn name(&self) -> &str {
        "Public Secret Exposure"
    }

    fn description(&self) -> &str {
        "Detects secret-looking values in NEXT_PUBLIC_ and VITE_ variables"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_entry(&self, entry: &Entry) -> Vec<Issue> {
        let Some(message) = Self::message(&entry.key) else {
            return Vec::new();
        };
        if !looks_like_secret(&entry.value) {
            return Vec::new();
        }

        vec![
            Issue::for_entry(self.id(), self.default_severity(), entry, message)
                .with_help("Move the value to a server-only variable without the public prefix"),
        ]
    }
}
