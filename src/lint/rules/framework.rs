//! Framework-aware completeness checks.
//!
//! Framework usage is inferred from key names alone. These rules only look
//! at which keys exist, never at their values.

use crate::lint::{Issue, LintRule, RuleId, RulePhase, Severity};
use crate::parser::ParsedDocument;

/// Next.js apps are expected to configure NextAuth.
pub struct NextAuthSecretRule;

impl LintRule for NextAuthSecretRule {
    fn id(&self) -> RuleId {
        RuleId::new("nextauth-secret")
    }

    fn name(&self) -> &str {
        "NextAuth Secret"
    }

    fn description(&self) -> &str {
        "Suggests NEXTAUTH_SECRET when NEXT_PUBLIC_ variables are present"
    }

    fn default_severity(&self) -> Severity {
        Severity::Suggestion
    }

    fn phase(&self) -> RulePhase {
        RulePhase::File
    }

    fn check_document(&self, doc: &ParsedDocument) -> Vec<Issue> {
        let uses_next = doc.any_key(|k| k.starts_with("NEXT_PUBLIC_"));
        if !uses_next || doc.has_key("NEXTAUTH_SECRET") {
            return Vec::new();
        }

        vec![Issue::new(
            self.id(),
            self.default_severity(),
            "Next.js app detected. Consider adding NEXTAUTH_SECRET for authentication",
        )]
    }
}

/// Database tooling keys without the canonical DATABASE_URL.
pub struct DatabaseUrlMissingRule;

impl LintRule for DatabaseUrlMissingRule {
    fn id(&self) -> RuleId {
        RuleId::new("database-url-missing")
    }

    fn name(&self) -> &str {
        "Database URL Missing"
    }

    fn description(&self) -> &str {
        "Warns when database tooling keys exist without DATABASE_URL"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn phase(&self) -> RulePhase {
        RulePhase::File
    }

    fn check_document(&self, doc: &ParsedDocument) -> Vec<Issue> {
        let uses_db = doc.any_key(|k| k.contains("DATABASE_URL") || k.starts_with("PRISMA_"));
        if !uses_db || doc.has_key("DATABASE_URL") {
            return Vec::new();
        }

        vec![Issue::new(
            self.id(),
            self.default_severity(),
            "Convex usage detected but DATABASE_URL is missing",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn next_public_without_nextauth_suggests() {
        let issues = NextAuthSecretRule.check_document(&parse("NEXT_PUBLIC_APP_NAME=shop"));

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.starts_with("Next.js app detected"));
    }

    #[test]
    fn nextauth_present_passes() {
        let doc = parse("NEXT_PUBLIC_APP_NAME=shop\nNEXTAUTH_SECRET=abc");
        assert!(NextAuthSecretRule.check_document(&doc).is_empty());
    }

    #[test]
    fn no_next_keys_passes() {
        assert!(NextAuthSecretRule
            .check_document(&parse("VITE_APP=x"))
            .is_empty());
    }

    #[test]
    fn prisma_without_database_url_warns() {
        let issues = DatabaseUrlMissingRule.check_document(&parse("PRISMA_LOG=info"));

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn prefixed_database_url_alone_warns() {
        let doc = parse("SHADOW_DATABASE_URL=postgres://u:p@h/db");
        assert_eq!(DatabaseUrlMissingRule.check_document(&doc).len(), 1);
    }

    #[test]
    fn exact_database_url_passes() {
        let doc = parse("PRISMA_LOG=info\nDATABASE_URL=postgres://u:p@h/db");
        assert!(DatabaseUrlMissingRule.check_document(&doc).is_empty());
    }
}
