//! `DEPLOYMENT.md` checklist generation.

use super::frameworks;
use crate::lint::ValidationResults;
use crate::parser::ParsedDocument;

const ENVIRONMENT_CHECKS: &[&str] = &[
    "NODE_ENV is set to \"production\" in production",
    "All placeholder values have been replaced with real values",
    "Database URLs point to production databases",
    "API endpoints use HTTPS in production",
    "Secrets are properly generated and secure",
];

const PLATFORM_NOTES: &[(&str, &[&str])] = &[
    (
        "Vercel",
        &[
            "Add environment variables in Project Settings > Environment Variables",
            "Use different values for Preview and Production environments",
            "NEXT_PUBLIC_ variables are exposed to the client",
        ],
    ),
    (
        "Docker",
        &[
            "Use --env-file flag: `docker run --env-file .env your-image`",
            "Or use docker-compose.yml with env_file directive",
            "Never include .env in Docker images",
        ],
    ),
    (
        "Railway/Render/Heroku",
        &[
            "Set environment variables in the platform dashboard",
            "Use config vars instead of .env files",
            "Some platforms auto-set PORT variable",
        ],
    ),
];

const SECURITY_CHECKS: &[&str] = &[
    ".env files are in .gitignore",
    "No secrets in public environment variables",
    "Database credentials are properly secured",
    "API keys have appropriate permissions/scopes",
    "Secrets are rotated regularly",
];

fn push_checks(lines: &mut Vec<String>, checks: &[&str]) {
    lines.extend(checks.iter().map(|c| format!("- [ ] {}", c)));
}

/// Render the deployment checklist.
///
/// Errors and warnings from `results` are listed verbatim at the end;
/// suggestions are left out.
pub fn render(doc: &ParsedDocument, results: &ValidationResults) -> String {
    let mut lines = vec!["# Deployment Checklist".to_string(), String::new()];

    lines.push("## Environment Configuration".to_string());
    push_checks(&mut lines, ENVIRONMENT_CHECKS);
    lines.push(String::new());

    let detected = frameworks::detect(doc);
    if !detected.is_empty() {
        lines.push("## Framework-Specific Checks".to_string());
        for framework in detected {
            push_checks(&mut lines, framework.checks());
        }
        lines.push(String::new());
    }

    lines.push("## Platform Deployment Notes".to_string());
    lines.push(String::new());
    for (platform, notes) in PLATFORM_NOTES {
        lines.push(format!("### {}", platform));
        lines.extend(notes.iter().map(|n| format!("- {}", n)));
        lines.push(String::new());
    }

    lines.push("## Security Checklist".to_string());
    push_checks(&mut lines, SECURITY_CHECKS);
    lines.push(String::new());

    if results.has_errors() || results.has_warnings() {
        lines.push("## Issues to Address".to_string());
        lines.extend(
            results
                .errors
                .iter()
                .map(|i| format!("- [ ] ERROR: {}", i.message)),
        );
        lines.extend(
            results
                .warnings
                .iter()
                .map(|i| format!("- [ ] WARNING: {}", i.message)),
        );
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Issue, RuleId, Severity};
    use crate::parser::parse;

    #[test]
    fn static_sections_always_present() {
        let out = render(&parse(""), &ValidationResults::default());

        assert!(out.starts_with("# Deployment Checklist\n\n## Environment Configuration\n"));
        assert!(out.contains("### Railway/Render/Heroku"));
        assert!(out.ends_with("- [ ] Secrets are rotated regularly"));
        assert!(!out.contains("## Framework-Specific Checks"));
        assert!(!out.contains("## Issues to Address"));
    }

    #[test]
    fn framework_checks_follow_detection() {
        let doc = parse("NEXT_PUBLIC_A=1\nSTRIPE_SECRET_KEY=sk");
        let out = render(&doc, &ValidationResults::default());

        assert!(out.contains("## Framework-Specific Checks"));
        assert!(out.contains("- [ ] NEXTAUTH_SECRET is set for authentication"));
        assert!(out.contains("- [ ] Webhook endpoints are configured"));
        assert!(!out.contains("VITE_ variables"));
    }

    #[test]
    fn lists_errors_then_warnings_but_not_suggestions() {
        let mut results = ValidationResults::default();
        results.push(Issue::new(RuleId::new("w"), Severity::Warning, "warn one"));
        results.push(Issue::new(RuleId::new("e"), Severity::Error, "err one"));
        results.push(Issue::new(RuleId::new("s"), Severity::Suggestion, "sugg one"));

        let out = render(&parse(""), &results);

        assert!(out.ends_with("## Issues to Address\n- [ ] ERROR: err one\n- [ ] WARNING: warn one"));
        assert!(!out.contains("sugg one"));
    }

    #[test]
    fn suggestions_alone_do_not_add_issue_section() {
        let mut results = ValidationResults::default();
        results.push(Issue::new(RuleId::new("s"), Severity::Suggestion, "sugg"));

        assert!(!render(&parse(""), &results).contains("## Issues to Address"));
    }
}
