//! Whole-file checks for keys that are expected but absent.

use crate::lint::{Issue, LintRule, RuleId, RulePhase, Severity};
use crate::parser::ParsedDocument;

/// Suggests declaring NODE_ENV when the file does not.
pub struct MissingNodeEnvRule;

impl LintRule for MissingNodeEnvRule {
    fn id(&self) -> RuleId {
        RuleId::new("missing-node-env")
    }

    fn name(&self) -> &str {
        "Missing NODE_ENV"
    }

    fn description(&self) -> &str {
        "Suggests adding NODE_ENV when it is not declared"
    }

    fn default_severity(&self) -> Severity {
        Severity::Suggestion
    }

    fn phase(&self) -> RulePhase {
        RulePhase::File
    }

    fn check_document(&self, doc: &ParsedDocument) -> Vec<Issue> {
        if doc.has_key("NODE_ENV") {
            return Vec::new();
        }

        vec![Issue::new(
            self.id(),
            self.default_severity(),
            "Consider adding NODE_ENV to specify the environment (development, production, test)",
        )]
    }
}

/// Stripe needs both halves of its key pair.
pub struct StripeKeyPairRule;

impl LintRule for StripeKeyPairRule {
    fn id(&self) -> RuleId {
        RuleId::new("stripe-key-pair")
    }

    fn name(&self) -> &str {
        "Stripe Key Pair"
    }

    fn description(&self) -> &str {
        "Warns when STRIPE_SECRET_KEY is set without STRIPE_PUBLISHABLE_KEY"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn phase(&self) -> RulePhase {
        RulePhase::File
    }

    fn check_document(&self, doc: &ParsedDocument) -> Vec<Issue> {
        // The client-side NEXT_PUBLIC_ variant does not count.
        if !doc.has_key("STRIPE_SECRET_KEY") || doc.has_key("STRIPE_PUBLISHABLE_KEY") {
            return Vec::new();
        }

        vec![Issue::new(
            self.id(),
            self.default_severity(),
            "STRIPE_SECRET_KEY found but STRIPE_PUBLISHABLE_KEY is missing",
        )]
    }
}
