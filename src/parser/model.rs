//! Parsed `.env` document model.
//!
//! Every type here is produced once by the parser and treated as
//! read-only by the validator and the generator.

use serde::Serialize;

/// Kind of quotes that wrapped a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteKind {
    /// Value was not quoted.
    #[default]
    None,
    /// `KEY='value'` - taken literally.
    Single,
    /// `KEY="value"` - escape sequences are expanded.
    Double,
}

/// One recognized `KEY=VALUE` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Variable name, trimmed, never contains `=`.
    pub key: String,
    /// Unquoted and (for double quotes) unescaped value.
    pub value: String,
    /// 1-based source line.
    pub line: usize,
    /// Line started with an `export` prefix.
    pub has_export: bool,
    /// Value was wrapped in a matching quote pair.
    pub is_quoted: bool,
    /// Quote style; meaningful only when `is_quoted`.
    pub quote_kind: QuoteKind,
    /// Trailing comment found outside quotes, including the leading `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_comment: Option<String>,
}

impl Entry {
    /// Whether the final value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// A key that was declared on two or more lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub key: String,
    /// Every line the key appears on, in parse order.
    pub lines: Vec<usize>,
}

/// A comment-only line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub line: usize,
    /// Trimmed line text, including the `#`.
    pub content: String,
}

/// Full output of [`parse`](super::parse).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub entries: Vec<Entry>,
    pub duplicates: Vec<DuplicateGroup>,
    /// Keys whose final value is empty, in document order.
    pub empty_values: Vec<String>,
    pub comments: Vec<Comment>,
    pub blank_lines: Vec<usize>,
}

impl ParsedDocument {
    /// Whether any entry declares exactly `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// First entry declaring exactly `key`.
    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Whether any entry key satisfies `pred`.
    pub fn any_key(&self, pred: impl Fn(&str) -> bool) -> bool {
        self.entries.iter().any(|e| pred(&e.key))
    }

    /// Total number of lines accounted for (entries, comments, blanks).
    pub fn accounted_lines(&self) -> usize {
        self.entries.len() + self.comments.len() + self.blank_lines.len()
    }
}
