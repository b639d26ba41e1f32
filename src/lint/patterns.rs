//! Key and value heuristics shared by the built-in rules.
//!
//! Key classification is table-driven: each [`KeyKind`] maps to the
//! substrings that mark a key as that kind. Matching is case-sensitive
//! on the key exactly as parsed.

use regex::Regex;
use std::sync::LazyLock;

/// Prefixes whose variables are bundled into client-side code.
pub const PUBLIC_PREFIXES: &[&str] = &["NEXT_PUBLIC_", "VITE_"];

/// Case-insensitive substrings that mark a value as a placeholder.
pub const PLACEHOLDER_MARKERS: &[&str] = &[
    "your-",
    "replace-",
    "change-",
    "update-",
    "add-your-",
    "example",
    "placeholder",
    "todo",
    "fixme",
    "xxx",
    "yyy",
    "test123",
    "password123",
    "secret123",
];

/// Accepted `NODE_ENV` values.
pub const NODE_ENV_VALUES: &[&str] = &["development", "production", "test"];

/// Accepted boolean spellings (compared lowercased).
pub const BOOLEAN_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no"];

/// Markers that make a key non-production unless it also says PROD.
const NON_PRODUCTION_MARKERS: &[&str] = &["DEV", "TEST", "LOCAL"];

/// Markers that always make a key production.
const PRODUCTION_MARKERS: &[&str] = &["PROD", "PRODUCTION"];

/// What a key name says about its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Credential-like; public-prefixed keys never count.
    Secret,
    /// Should hold an absolute URL.
    Url,
    /// Should hold a boolean flag.
    Boolean,
    /// Should hold a number.
    Numeric,
    /// Should hold a JSON document.
    Json,
}

const KEY_MARKERS: &[(KeyKind, &[&str])] = &[
    (
        KeyKind::Secret,
        &[
            "API_KEY",
            "SECRET",
            "TOKEN",
            "PASSWORD",
            "PRIVATE_KEY",
            "CLIENT_SECRET",
        ],
    ),
    (KeyKind::Url, &["URL", "ENDPOINT", "HOST"]),
    (
        KeyKind::Boolean,
        &["ENABLE", "DISABLE", "DEBUG", "VERBOSE", "STRICT"],
    ),
    (
        KeyKind::Numeric,
        &["PORT", "TIMEOUT", "LIMIT", "SIZE", "COUNT", "MAX", "MIN"],
    ),
    (KeyKind::Json, &["CONFIG", "CREDENTIALS", "FIREBASE_CONFIG"]),
];

static BASE64_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9+/=]{20,}").expect("BASE64_RUN must compile")
});

static BASE64_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/=]+$").expect("BASE64_ONLY must compile"));

static WEAK_SECRET_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(123|abc|test|demo|admin)").expect("WEAK_SECRET_PREFIX must compile")
});

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)$")
        .expect("DECIMAL_LITERAL must compile")
});

static RADIX_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$")
        .expect("RADIX_LITERAL must compile")
});

/// Whether `key` contains any marker for `kind`.
///
/// ```
/// use envdoctor::lint::patterns::{key_is, KeyKind};
///
/// assert!(key_is("STRIPE_SECRET_KEY", KeyKind::Secret));
/// assert!(!key_is("NEXT_PUBLIC_SECRET_KEY", KeyKind::Secret));
/// assert!(key_is("REDIS_HOST", KeyKind::Url));
/// ```
pub fn key_is(key: &str, kind: KeyKind) -> bool {
    if kind == KeyKind::Secret && is_public_key(key) {
        return false;
    }

    KEY_MARKERS
        .iter()
        .filter(|(k, _)| *k == kind)
        .flat_map(|(_, markers)| markers.iter())
        .any(|marker| key.contains(marker))
}

/// Whether the key is exposed to client bundles.
pub fn is_public_key(key: &str) -> bool {
    PUBLIC_PREFIXES.iter().any(|p| key.starts_with(p))
}

/// Whether the key names a production value.
///
/// Keys are production unless they mention DEV, TEST or LOCAL; an
/// explicit PROD marker always wins.
pub fn is_production_key(key: &str) -> bool {
    PRODUCTION_MARKERS.iter().any(|m| key.contains(m))
        || !NON_PRODUCTION_MARKERS.iter().any(|m| key.contains(m))
}

/// Whether the value contains a known placeholder marker.
pub fn is_placeholder(value: &str) -> bool {
    let lower = value.to_lowercase();
    PLACEHOLDER_MARKERS.iter().any(|p| lower.contains(p))
}

/// Coarse check for secret material: longer than 20 and containing a
/// base64-alphabet run of at least 20 characters.
pub fn looks_like_secret(value: &str) -> bool {
    utf16_len(value) > 20 && BASE64_RUN.is_match(value)
}

/// Whether every character is in the base64 alphabet.
pub fn is_base64_alphabet(value: &str) -> bool {
    BASE64_ONLY.is_match(value)
}

/// Whether the value starts with a well-known weak prefix.
pub fn has_weak_prefix(value: &str) -> bool {
    WEAK_SECRET_PREFIX.is_match(value)
}

/// Whether the value is an accepted boolean spelling.
pub fn is_boolean_value(value: &str) -> bool {
    let lower = value.to_lowercase();
    BOOLEAN_VALUES.contains(&lower.as_str())
}

/// Numeric check with JavaScript `Number()` semantics.
///
/// Blank strings coerce to zero and therefore count as numeric.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || DECIMAL_LITERAL.is_match(trimmed) || RADIX_LITERAL.is_match(trimmed)
}

/// Leading-integer parse with JavaScript `parseInt(value, 10)` semantics.
///
/// Skips leading whitespace, accepts an optional sign and reads digits
/// up to the first non-digit. Returns `None` when no digit is found.
/// Oversized values saturate.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut seen = false;
    let mut n: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        n = n.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    seen.then_some(if negative { -n } else { n })
}

/// Length in UTF-16 code units, the unit browsers count in.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_markers_respect_public_exemption() {
        assert!(key_is("OPENAI_API_KEY", KeyKind::Secret));
        assert!(key_is("GITHUB_TOKEN", KeyKind::Secret));
        assert!(!key_is("VITE_API_KEY", KeyKind::Secret));
        assert!(!key_is("APP_NAME", KeyKind::Secret));
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert!(!key_is("database_url", KeyKind::Url));
        assert!(key_is("DATABASE_URL", KeyKind::Url));
    }

    #[test]
    fn production_classification() {
        assert!(is_production_key("API_URL"));
        assert!(!is_production_key("DEV_API_URL"));
        assert!(!is_production_key("LOCAL_DB_HOST"));
        assert!(is_production_key("PROD_TEST_URL"));
        assert!(is_production_key("PRODUCTION_DEV_URL"));
    }

    #[test]
    fn placeholder_detection_is_case_insensitive() {
        assert!(is_placeholder("Your-Api-Key"));
        assert!(is_placeholder("sk_test_EXAMPLE"));
        assert!(is_placeholder("TODO"));
        assert!(!is_placeholder("sk_live_51Habc"));
    }

    #[test]
    fn secret_heuristic_needs_length_and_run() {
        assert!(looks_like_secret("AbCdEfGhIjKlMnOpQrStUvWxYz123456"));
        assert!(!looks_like_secret("short"));
        assert!(!looks_like_secret("very-secret-data"));
        assert!(!looks_like_secret("aaaa-bbbb-cccc-dddd-eeee-ffff"));
    }

    #[test]
    fn base64_alphabet() {
        assert!(is_base64_alphabet("abc+/=123"));
        assert!(!is_base64_alphabet("abc-def"));
        assert!(!is_base64_alphabet(""));
    }

    #[test]
    fn weak_prefixes() {
        assert!(has_weak_prefix("123456"));
        assert!(has_weak_prefix("Admin-pass"));
        assert!(has_weak_prefix("TESTING"));
        assert!(!has_weak_prefix("x-admin"));
    }

    #[test]
    fn boolean_values() {
        assert!(is_boolean_value("TRUE"));
        assert!(is_boolean_value("no"));
        assert!(!is_boolean_value("on"));
        assert!(!is_boolean_value(""));
    }

    #[test]
    fn numeric_follows_number_coercion() {
        for ok in ["42", "-1.5", "+3", ".5", "5.", "1e3", "0x1F", "0b101", "0o17", "Infinity", "", "  7  "] {
            assert!(is_numeric(ok), "{ok:?} should be numeric");
        }
        for bad in ["abc", "12px", "1_000", "0x", "inf", "NaN", "1e", "--1", "٣٠", "１２"] {
            assert!(!is_numeric(bad), "{bad:?} should not be numeric");
        }
    }

    #[test]
    fn leading_int_parse() {
        assert_eq!(parse_leading_int("8080"), Some(8080));
        assert_eq!(parse_leading_int("  80abc"), Some(80));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(
            parse_leading_int("99999999999999999999999"),
            Some(i64::MAX)
        );
    }

    #[test]
    fn utf16_length_counts_surrogates() {
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("🔑"), 2);
    }
}
