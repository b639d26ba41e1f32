//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores the available lint rules in registration
//! order and runs them over a parsed document. Registration order is
//! significant: within a phase, rules run in the order they were added,
//! which fixes the order of issues inside each severity bucket.

use super::issue::ValidationResults;
use super::rule::{LintRule, RuleId, RulePhase};
use super::rules::{
    BooleanFormatRule, DatabaseUrlMissingRule, DuplicateKeyRule, EmptyValueRule, JsonFormatRule,
    MissingNodeEnvRule, NextAuthSecretRule, NodeEnvValueRule, NumericFormatRule,
    PlaceholderValueRule, PortRangeRule, PublicSecretExposureRule, StripeKeyPairRule,
    UrlFormatRule, WeakSecretRule,
};
use crate::error::{EnvDoctorError, Result};
use crate::parser::ParsedDocument;

/// Ordered registry of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DuplicateKeyRule));
        registry.register(Box::new(EmptyValueRule));
        registry.register(Box::new(PlaceholderValueRule));
        registry.register(Box::new(NodeEnvValueRule));
        registry.register(Box::new(PortRangeRule));
        registry.register(Box::new(PublicSecretExposureRule));
        registry.register(Box::new(WeakSecretRule));
        registry.register(Box::new(UrlFormatRule));
        registry.register(Box::new(BooleanFormatRule));
        registry.register(Box::new(NumericFormatRule));
        registry.register(Box::new(JsonFormatRule));
        registry.register(Box::new(MissingNodeEnvRule));
        registry.register(Box::new(StripeKeyPairRule));
        registry.register(Box::new(NextAuthSecretRule));
        registry.register(Box::new(DatabaseUrlMissingRule));
        registry
    }

    /// Register a lint rule.
    ///
    /// A rule with the same id replaces the earlier one in place.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        tracing::trace!(rule = %id, "registering lint rule");
        match self.rules.iter().position(|r| r.id() == id) {
            Some(idx) => self.rules[idx] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Remove the named rules.
    ///
    /// Fails without removing anything if any id is unknown.
    pub fn disable(&mut self, ids: &[String]) -> Result<()> {
        if let Some(unknown) = ids.iter().find(|id| self.get(&RuleId::new(id.as_str())).is_none()) {
            return Err(EnvDoctorError::UnknownRule {
                id: unknown.clone(),
            });
        }

        self.rules
            .retain(|rule| !ids.iter().any(|id| rule.id().as_str() == id));
        tracing::debug!(disabled = ?ids, remaining = self.rules.len(), "rules disabled");
        Ok(())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every registered rule over the document.
    ///
    /// Structure rules run first, then each entry in document order goes
    /// through every entry rule, then file rules run.
    pub fn validate(&self, doc: &ParsedDocument) -> ValidationResults {
        let mut results = ValidationResults::default();

        for rule in self.phase(RulePhase::Structure) {
            results.extend(rule.check_document(doc));
        }

        let entry_rules: Vec<_> = self.phase(RulePhase::Entry).collect();
        for entry in &doc.entries {
            for rule in &entry_rules {
                results.extend(rule.check_entry(entry));
            }
        }

        for rule in self.phase(RulePhase::File) {
            results.extend(rule.check_document(doc));
        }

        tracing::debug!(
            errors = results.errors.len(),
            warnings = results.warnings.len(),
            suggestions = results.suggestions.len(),
            "validation complete"
        );
        results
    }

    fn phase(&self, phase: RulePhase) -> impl Iterator<Item = &dyn LintRule> {
        self.iter().filter(move |r| r.phase() == phase)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
