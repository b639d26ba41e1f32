//! Framework inference from key names.

use crate::parser::ParsedDocument;

/// A framework or platform an `.env` file appears to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    NextJs,
    Vite,
    Convex,
    Firebase,
    Stripe,
}

impl Framework {
    /// All frameworks in checklist order.
    pub const ALL: [Framework; 5] = [
        Framework::NextJs,
        Framework::Vite,
        Framework::Convex,
        Framework::Firebase,
        Framework::Stripe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Framework::NextJs => "Next.js",
            Framework::Vite => "Vite",
            Framework::Convex => "Convex",
            Framework::Firebase => "Firebase",
            Framework::Stripe => "Stripe",
        }
    }

    /// Whether a single key indicates this framework.
    pub fn matches_key(self, key: &str) -> bool {
        match self {
            Framework::NextJs => key.starts_with("NEXT_"),
            Framework::Vite => key.starts_with("VITE_"),
            Framework::Convex => key.contains("PRISMA") || key == "DATABASE_URL",
            Framework::Firebase => key.contains("FIREBASE"),
            Framework::Stripe => key.contains("STRIPE"),
        }
    }

    /// Deployment checklist items for this framework.
    pub fn checks(self) -> &'static [&'static str] {
        match self {
            Framework::NextJs => &[
                "NEXT_PUBLIC_ variables are properly prefixed for client exposure",
                "NEXTAUTH_SECRET is set for authentication",
                "NEXTAUTH_URL matches your domain in production",
            ],
            Framework::Vite => &[
                "VITE_ variables are properly prefixed for client exposure",
                "No sensitive data in VITE_ prefixed variables",
            ],
            Framework::Convex => &[
                "DATABASE_URL is properly formatted",
                "Database is accessible from deployment environment",
                "Convex migrations are run in production",
            ],
            Framework::Firebase => &[
                "Firebase config is properly structured",
                "Service account keys are secure",
                "Firebase rules are configured for production",
            ],
            Framework::Stripe => &[
                "Using correct Stripe keys for environment (test vs live)",
                "Webhook endpoints are configured",
                "Stripe publishable key matches secret key environment",
            ],
        }
    }
}

/// Detect every framework the document's keys point at, in checklist order.
pub fn detect(doc: &ParsedDocument) -> Vec<Framework> {
    let detected: Vec<_> = Framework::ALL
        .into_iter()
        .filter(|fw| doc.any_key(|key| fw.matches_key(key)))
        .collect();
    tracing::debug!(frameworks = ?detected, "framework inference");
    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn detects_in_fixed_order() {
        let doc = parse("STRIPE_SECRET_KEY=sk\nVITE_APP=x\nNEXT_PUBLIC_A=1");

        assert_eq!(
            detect(&doc),
            [Framework::NextJs, Framework::Vite, Framework::Stripe]
        );
    }

    #[test]
    fn convex_needs_exact_database_url() {
        assert_eq!(detect(&parse("DATABASE_URL=x")), [Framework::Convex]);
        assert!(detect(&parse("SHADOW_DATABASE_URL=x")).is_empty());
        assert_eq!(detect(&parse("PRISMA_LOG=x")), [Framework::Convex]);
    }

    #[test]
    fn next_prefix_is_broader_than_next_public() {
        assert_eq!(detect(&parse("NEXT_RUNTIME=x")), [Framework::NextJs]);
        assert!(detect(&parse("NEXTAUTH_URL=x")).is_empty());
    }

    #[test]
    fn nothing_detected_for_plain_file() {
        assert!(detect(&parse("PORT=3000")).is_empty());
    }

    #[test]
    fn every_framework_has_checks() {
        for fw in Framework::ALL {
            assert!(!fw.checks().is_empty(), "{} has no checks", fw.name());
        }
    }
}
