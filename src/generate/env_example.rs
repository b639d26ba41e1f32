//! `.env.example` template generation.

use super::catalog::{describe, example_value, Category};
use crate::parser::{Entry, ParsedDocument};

const HEADER: [&str; 3] = [
    "# Environment Variables Template",
    "# Copy this file to .env and fill in your actual values",
    "# Never commit .env files to version control!",
];

/// Render a shareable template: every key grouped by category, with a
/// synthesized example value in place of the real one.
pub fn render(doc: &ParsedDocument) -> String {
    let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();
    lines.push(String::new());

    for category in Category::ALL {
        let entries: Vec<&Entry> = doc
            .entries
            .iter()
            .filter(|e| Category::of(&e.key) == category)
            .collect();
        if entries.is_empty() {
            continue;
        }

        lines.push(format!("# {}", category.title()));
        for entry in entries {
            if let Some(comment) = describe(&entry.key) {
                lines.push(format!("# {}", comment));
            }
            lines.push(format!("{}={}", entry.key, example_value(&entry.key)));
        }
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}
