//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity bucket for issues (Suggestion, Warning, Error)
//! - [`RulePhase`] - When in the validation pass a rule runs

use serde::Serialize;

use super::issue::Issue;
use crate::parser::{Entry, ParsedDocument};

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity bucket for an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Optional improvement.
    Suggestion,
    /// Should be reviewed.
    Warning,
    /// Must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Suggestion => write!(f, "suggestion"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Validation pass a rule belongs to.
///
/// Phases run in declaration order, which fixes the ordering of issues
/// inside each severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RulePhase {
    /// Document structure (duplicate keys); runs first.
    Structure,
    /// Once per entry, in document order.
    Entry,
    /// Whole-file checks; runs last.
    File,
}

/// A lint rule that inspects a parsed `.env` document.
///
/// Rules are independent: each one looks only at its input and never at
/// another rule's output. Entry-phase rules implement [`check_entry`],
/// the others implement [`check_document`].
///
/// [`check_entry`]: LintRule::check_entry
/// [`check_document`]: LintRule::check_document
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Which validation pass this rule runs in.
    fn phase(&self) -> RulePhase {
        RulePhase::Entry
    }

    /// Check a single entry.
    fn check_entry(&self, _entry: &Entry) -> Vec<Issue> {
        Vec::new()
    }

    /// Check the whole document.
    fn check_document(&self, _doc: &ParsedDocument) -> Vec<Issue> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_equality() {
        let id1 = RuleId::new("test-rule");
        let id2 = RuleId::new("test-rule");
        let id3 = RuleId::new("other-rule");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn rule_id_display() {
        let id = RuleId::new("my-rule");
        assert_eq!(format!("{}", id), "my-rule");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Suggestion < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Suggestion), "suggestion");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }

    #[test]
    fn phases_run_structure_first() {
        assert!(RulePhase::Structure < RulePhase::Entry);
        assert!(RulePhase::Entry < RulePhase::File);
    }
}
