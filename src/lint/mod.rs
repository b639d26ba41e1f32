//! `.env` validation and linting.
//!
//! This module turns a [`ParsedDocument`] into severity-bucketed
//! [`ValidationResults`] through a pluggable rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Ordered collection of rules ([`RuleRegistry`])
//! - **Issues** - Findings with severity, location and help ([`Issue`])
//! - **Formatters** - Report rendering ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use envdoctor::lint::{validate, Severity};
//! use envdoctor::parser::parse;
//!
//! let results = validate(&parse("NODE_ENV=production\nPORT=80"));
//!
//! assert!(results.errors.is_empty());
//! assert_eq!(results.warnings.len(), 1);
//! assert_eq!(results.warnings[0].severity, Severity::Warning);
//! ```

pub mod issue;
pub mod output;
pub mod patterns;
pub mod registry;
pub mod rule;
pub mod rules;

pub use issue::{Issue, ValidationResults};
pub use output::{
    render, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter,
};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, RulePhase, Severity};

use crate::parser::ParsedDocument;

/// Validate a document with every built-in rule.
pub fn validate(doc: &ParsedDocument) -> ValidationResults {
    RuleRegistry::with_builtins().validate(doc)
}
