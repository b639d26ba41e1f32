//! Single-line scanning helpers.
//!
//! These operate on one physical line at a time and know nothing about
//! line numbers or the document being built.

use super::model::QuoteKind;

/// Split a line at the first `#` that is outside any quoted span.
///
/// Returns the working text and, if present, the trimmed comment
/// (including the `#`). Quote tracking is a plain toggle: an opening
/// quote starts a span that only the same character closes, and the
/// other quote character inside it is inert.
pub fn split_inline_comment(line: &str) -> (&str, Option<&str>) {
    let mut open: Option<char> = None;

    for (idx, ch) in line.char_indices() {
        match (ch, open) {
            ('"' | '\'', None) => open = Some(ch),
            (c, Some(q)) if c == q => open = None,
            ('#', None) => return (line[..idx].trim(), Some(line[idx..].trim())),
            _ => {}
        }
    }

    (line.trim(), None)
}

/// Strip a leading `export` keyword followed by whitespace.
///
/// Returns the remaining text and whether the prefix was present.
pub fn strip_export(line: &str) -> (&str, bool) {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix("export") {
        if rest.starts_with(char::is_whitespace) {
            return (rest.trim_start(), true);
        }
    }
    (line, false)
}

/// Remove a matching pair of surrounding quotes from a raw value.
///
/// Double-quoted values get their escape sequences expanded; single-quoted
/// values are returned verbatim. Values that are not wrapped in a matching
/// pair come back unchanged with [`QuoteKind::None`].
pub fn unquote(raw: &str) -> (String, QuoteKind) {
    let kind = match (raw.chars().next(), raw.chars().last()) {
        (Some('"'), Some('"')) => QuoteKind::Double,
        (Some('\''), Some('\'')) => QuoteKind::Single,
        _ => return (raw.to_string(), QuoteKind::None),
    };

    // A lone quote character is not a pair.
    if raw.len() < 2 {
        return (raw.to_string(), QuoteKind::None);
    }

    let inner = &raw[1..raw.len() - 1];
    match kind {
        QuoteKind::Double => (unescape(inner), kind),
        _ => (inner.to_string(), kind),
    }
}

/// Expand `\n`, `\r`, `\t`, `\\` and `\"` in a single left-to-right pass.
///
/// Output of one substitution is never re-scanned, so `\\n` yields a
/// backslash followed by `n`. Unknown escapes are kept as written.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let replacement = match chars.peek() {
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('\\') => '\\',
            Some('"') => '"',
            _ => {
                out.push('\\');
                continue;
            }
        };
        chars.next();
        out.push(replacement);
    }

    out
}
