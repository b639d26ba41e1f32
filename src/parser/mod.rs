//! `.env` file parsing.
//!
//! Converts raw text into a line-accurate [`ParsedDocument`]. Parsing never
//! fails: lines that do not look like a declaration are dropped rather than
//! reported.
//!
//! # Supported Formats
//!
//! - Simple: `KEY=value`
//! - Exported: `export KEY=value`
//! - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
//! - Escapes (double quotes only): `KEY="line1\nline2"`
//! - Inline comments outside quotes: `KEY=value # note`
//! - Empty: `KEY=`
//! - Values with equals signs: `URL=https://example.com?foo=bar`
//!
//! # Example
//!
//! ```
//! use envdoctor::parser::{parse, QuoteKind};
//!
//! let doc = parse("# db\nexport DATABASE_URL=\"postgres://localhost/db\"\nEMPTY=\n");
//!
//! assert_eq!(doc.entries.len(), 2);
//! assert_eq!(doc.entries[0].value, "postgres://localhost/db");
//! assert_eq!(doc.entries[0].quote_kind, QuoteKind::Double);
//! assert!(doc.entries[0].has_export);
//! assert_eq!(doc.empty_values, vec!["EMPTY".to_string()]);
//! assert_eq!(doc.comments[0].line, 1);
//! ```

pub mod line;
pub mod model;

use std::collections::HashMap;

pub use model::{Comment, DuplicateGroup, Entry, ParsedDocument, QuoteKind};

/// Parses `.env` text into a [`ParsedDocument`].
pub struct EnvParser;

impl EnvParser {
    /// Parse a complete file's content.
    pub fn parse(content: &str) -> ParsedDocument {
        let mut doc = ParsedDocument::default();
        let mut dropped = 0usize;

        for (idx, raw) in content.lines().enumerate() {
            let line_number = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                doc.blank_lines.push(line_number);
                continue;
            }

            if trimmed.starts_with('#') {
                doc.comments.push(Comment {
                    line: line_number,
                    content: trimmed.to_string(),
                });
                continue;
            }

            match Self::parse_line(raw, line_number) {
                Some(entry) => doc.entries.push(entry),
                None => {
                    dropped += 1;
                    tracing::trace!(line = line_number, "Skipping line without a declaration");
                }
            }
        }

        doc.duplicates = Self::find_duplicates(&doc.entries);
        doc.empty_values = doc
            .entries
            .iter()
            .filter(|e| e.is_empty())
            .map(|e| e.key.clone())
            .collect();

        tracing::debug!(
            entries = doc.entries.len(),
            comments = doc.comments.len(),
            blank = doc.blank_lines.len(),
            duplicates = doc.duplicates.len(),
            dropped,
            "Parsed env document"
        );

        doc
    }

    /// Parse a single non-blank, non-comment line.
    fn parse_line(raw: &str, line_number: usize) -> Option<Entry> {
        let (working, comment) = line::split_inline_comment(raw);
        let (working, has_export) = line::strip_export(working);

        let (key, raw_value) = working.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        let (value, quote_kind) = line::unquote(raw_value);

        Some(Entry {
            key: key.to_string(),
            value,
            line: line_number,
            has_export,
            is_quoted: quote_kind != QuoteKind::None,
            quote_kind,
            inline_comment: comment.map(str::to_string),
        })
    }

    /// Group keys seen on two or more entries, ordered by first appearance.
    fn find_duplicates(entries: &[Entry]) -> Vec<DuplicateGroup> {
        let mut order: Vec<&str> = Vec::new();
        let mut lines_by_key: HashMap<&str, Vec<usize>> = HashMap::new();

        for entry in entries {
            let lines = lines_by_key.entry(entry.key.as_str()).or_insert_with(|| {
                order.push(entry.key.as_str());
                Vec::new()
            });
            lines.push(entry.line);
        }

        order
            .into_iter()
            .filter_map(|key| {
                let lines = lines_by_key.remove(key)?;
                (lines.len() > 1).then(|| DuplicateGroup {
                    key: key.to_string(),
                    lines,
                })
            })
            .collect()
    }
}

/// Parse `.env` text. Shorthand for [`EnvParser::parse`].
pub fn parse(content: &str) -> ParsedDocument {
    EnvParser::parse(content)
}
