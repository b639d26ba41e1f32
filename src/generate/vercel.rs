//! `vercel.json` stub generation.

use crate::lint::patterns::is_public_key;
use crate::parser::{Entry, ParsedDocument};

/// Render a `vercel.json` env block mapping each server-side key to a
/// Vercel secret reference, followed by a reminder list.
///
/// Public keys are skipped; Vercel inlines those at build time.
pub fn render(doc: &ParsedDocument) -> String {
    let private: Vec<&Entry> = doc
        .entries
        .iter()
        .filter(|e| !is_public_key(&e.key))
        .collect();

    let mut lines = vec![
        "# vercel.json".to_string(),
        "{".to_string(),
        "  \"env\": {".to_string(),
    ];

    let last = private.len().saturating_sub(1);
    for (idx, entry) in private.iter().enumerate() {
        let comma = if idx == last { "" } else { "," };
        lines.push(format!(
            "    \"{}\": \"@{}\"{}",
            entry.key,
            entry.key.to_lowercase(),
            comma
        ));
    }

    lines.push("  }".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("# Add these as environment variables in Vercel dashboard:".to_string());
    lines.extend(
        private
            .iter()
            .map(|e| format!("# {}=your-actual-value", e.key)),
    );

    lines.join("\n")
}
