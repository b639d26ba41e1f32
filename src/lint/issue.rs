//! Validation issues and the severity-bucketed result set.
//!
//! An [`Issue`] is created by exactly one rule and placed in exactly one
//! bucket of [`ValidationResults`] according to its severity.

use serde::Serialize;

use super::rule::{RuleId, Severity};
use crate::parser::Entry;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Human-readable message, already interpolated.
    pub message: String,
    /// 1-based source line; 0 means the issue concerns the whole file.
    pub line: usize,
    /// Offending key, when the issue is about one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub severity: Severity,
    /// The rule that produced this issue.
    pub rule_id: RuleId,
    /// Optional hint for fixing the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Issue {
    /// Create a file-level issue (line 0, no key).
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: 0,
            key: None,
            severity,
            rule_id,
            help: None,
        }
    }

    /// Create an issue attached to an entry's key and line.
    pub fn for_entry(
        rule_id: RuleId,
        severity: Severity,
        entry: &Entry,
        message: impl Into<String>,
    ) -> Self {
        Self::new(rule_id, severity, message)
            .with_line(entry.line)
            .with_key(&entry.key)
    }

    /// Set the source line.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Set the offending key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add a fix hint.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Whether this issue concerns the file rather than a line.
    pub fn is_file_level(&self) -> bool {
        self.line == 0
    }
}

/// Issues grouped by severity, each bucket in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResults {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub suggestions: Vec<Issue>,
}

impl ValidationResults {
    /// Move an issue into the bucket matching its severity.
    pub fn push(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Suggestion => self.suggestions.push(issue),
        }
    }

    /// Results for a pipeline that could not run at all.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            errors: vec![Issue::new(
                RuleId::new("internal-failure"),
                Severity::Error,
                message,
            )],
            ..Default::default()
        }
    }

    /// Total number of issues across all buckets.
    pub fn total(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Iterate over all issues: errors, then warnings, then suggestions.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.suggestions.iter())
    }
}

impl Extend<Issue> for ValidationResults {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        for issue in iter {
            self.push(issue);
        }
    }
}
