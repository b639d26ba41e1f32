//! The parse, validate, generate pipeline as seen by callers.
//!
//! [`analyze`] is the single entry point front ends use. It short-circuits
//! on blank input and converts any internal fault into a single
//! file-level error instead of propagating it.

use std::panic;
use std::time::Instant;

use serde::Serialize;

use crate::generate::{generate, GeneratedOutputs};
use crate::lint::{RuleRegistry, ValidationResults};
use crate::parser::{parse, ParsedDocument};

/// Message reported when the pipeline could not run to completion.
pub const FAILURE_MESSAGE: &str = "Failed to parse .env file";

/// Everything one pipeline run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The parsed document; `None` when the pipeline failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<ParsedDocument>,
    pub results: ValidationResults,
    /// Generated artifacts; `None` when the pipeline failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<GeneratedOutputs>,
}

impl Analysis {
    /// Whether the pipeline ran to completion.
    pub fn succeeded(&self) -> bool {
        self.outputs.is_some()
    }

    fn failed() -> Self {
        Self {
            document: None,
            results: ValidationResults::failed(FAILURE_MESSAGE),
            outputs: None,
        }
    }
}

/// Run the pipeline with the built-in rules.
///
/// Returns `None` for empty or whitespace-only input.
///
/// ```
/// use envdoctor::pipeline::analyze;
///
/// assert!(analyze("   \n").is_none());
///
/// let analysis = analyze("NODE_ENV=dev").unwrap();
/// assert_eq!(analysis.results.warnings.len(), 1);
/// assert!(analysis.outputs.is_some());
/// ```
pub fn analyze(content: &str) -> Option<Analysis> {
    analyze_with(content, &RuleRegistry::with_builtins())
}

/// Run the pipeline with a caller-supplied rule set.
pub fn analyze_with(content: &str, registry: &RuleRegistry) -> Option<Analysis> {
    if content.trim().is_empty() {
        tracing::debug!("blank input, skipping analysis");
        return None;
    }

    let started = Instant::now();
    let outcome = panic::catch_unwind(panic::AssertUnwindSafe(|| run(content, registry)));

    let analysis = match outcome {
        Ok(analysis) => analysis,
        Err(_) => {
            tracing::error!("pipeline aborted on an internal fault");
            Analysis::failed()
        }
    };

    tracing::debug!(elapsed = ?started.elapsed(), "analysis finished");
    Some(analysis)
}

fn run(content: &str, registry: &RuleRegistry) -> Analysis {
    let document = parse(content);
    let results = registry.validate(&document);
    let outputs = generate(&document, &results);

    Analysis {
        document: Some(document),
        results,
        outputs: Some(outputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Issue, LintRule, RuleId, Severity};
    use crate::parser::Entry;

    struct PanickingRule;

    impl LintRule for PanickingRule {
        fn id(&self) -> RuleId {
            RuleId::new("panicking")
        }
        fn name(&self) -> &str {
            "Panicking"
        }
        fn description(&self) -> &str {
            "Always panics"
        }
        fn default_severity(&self) -> Severity {
            Severity::Error
        }
        fn check_entry(&self, _entry: &Entry) -> Vec<Issue> {
            panic!("rule bug")
        }
    }

    #[test]
    fn blank_input_has_no_results() {
        assert!(analyze("").is_none());
        assert!(analyze(" \t\r\n\n").is_none());
    }

    #[test]
    fn successful_run_has_all_parts() {
        let analysis = analyze("NODE_ENV=production\nPORT=8080").unwrap();

        assert!(analysis.succeeded());
        assert_eq!(analysis.document.as_ref().map(|d| d.entries.len()), Some(2));
        assert!(analysis.results.is_empty());
    }

    #[test]
    fn internal_fault_becomes_single_error() {
        let mut registry = RuleRegistry::with_builtins();
        registry.register(Box::new(PanickingRule));

        let analysis = analyze_with("A=1", &registry).unwrap();

        assert!(!analysis.succeeded());
        assert!(analysis.document.is_none());
        assert_eq!(analysis.results.errors.len(), 1);
        assert_eq!(analysis.results.errors[0].message, FAILURE_MESSAGE);
        assert_eq!(analysis.results.errors[0].line, 0);
        assert!(analysis.results.warnings.is_empty());
        assert!(analysis.results.suggestions.is_empty());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let text = "NEXT_PUBLIC_SECRET_KEY=AbCdEfGhIjKlMnOpQrStUvWxYz123456\nPORT=80";
        assert_eq!(analyze(text), analyze(text));
    }
}
