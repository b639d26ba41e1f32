//! `docker-compose.yml` stub generation.

use crate::parser::ParsedDocument;

const DEFAULT_PORT: &str = "3000";

const POSTGRES_SERVICE: &[&str] = &[
    "",
    "  postgres:",
    "    image: postgres:15",
    "    environment:",
    "      - POSTGRES_DB=myapp",
    "      - POSTGRES_USER=user",
    "      - POSTGRES_PASSWORD=password",
    "    volumes:",
    "      - postgres_data:/var/lib/postgresql/data",
    "",
    "volumes:",
    "  postgres_data:",
];

/// Render a compose file for the app, plus a Postgres service when
/// `DATABASE_URL` points at PostgreSQL.
///
/// The `PORT` value is used verbatim for both sides of the mapping, even
/// when it is empty or invalid.
pub fn render(doc: &ParsedDocument) -> String {
    let port = doc
        .find("PORT")
        .map(|e| e.value.as_str())
        .unwrap_or(DEFAULT_PORT);

    let mut lines = vec![
        "# docker-compose.yml".to_string(),
        "version: \"3.8\"".to_string(),
        String::new(),
        "services:".to_string(),
        "  app:".to_string(),
        "    build: .".to_string(),
        "    ports:".to_string(),
        format!("      - \"{port}:{port}\""),
        "    env_file:".to_string(),
        "      - .env".to_string(),
        "    environment:".to_string(),
        "      - NODE_ENV=production".to_string(),
    ];

    let wants_postgres = doc
        .find("DATABASE_URL")
        .is_some_and(|e| e.value.contains("postgresql"));
    if wants_postgres {
        lines.extend(POSTGRES_SERVICE.iter().map(|l| l.to_string()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn defaults_to_port_3000() {
        let out = render(&parse(""));

        assert!(out.contains("      - \"3000:3000\""));
        assert!(out.ends_with("      - NODE_ENV=production"));
    }

    #[test]
    fn uses_port_value() {
        assert!(render(&parse("PORT=8080")).contains("\"8080:8080\""));
    }

    #[test]
    fn first_port_declaration_wins() {
        assert!(render(&parse("PORT=4000\nPORT=5000")).contains("\"4000:4000\""));
    }

    #[test]
    fn adds_postgres_for_postgresql_url() {
        let out = render(&parse("DATABASE_URL=postgresql://u:p@localhost:5432/app"));

        assert!(out.contains("  postgres:\n    image: postgres:15"));
        assert!(out.ends_with("volumes:\n  postgres_data:"));
    }

    #[test]
    fn postgres_scheme_alias_does_not_count() {
        let out = render(&parse("DATABASE_URL=postgres://u:p@localhost:5432/app"));
        assert!(!out.contains("postgres:15"));
    }
}
