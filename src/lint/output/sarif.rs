//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub code scanning and VS Code.

use super::LintFormatter;
use crate::lint::{Severity, ValidationResults};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats validation output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<SarifRegion>,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
        }
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Suggestion => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write>(
        &self,
        source: &str,
        results: &ValidationResults,
        writer: &mut W,
    ) -> std::io::Result<()> {
        // Unique rule ids, sorted so output is stable
        let rule_ids: BTreeSet<_> = results.iter().map(|i| i.rule_id.as_str()).collect();

        let rules: Vec<_> = rule_ids
            .into_iter()
            .map(|id| SarifRule {
                id: id.to_string(),
                short_description: SarifMessage {
                    text: format!("Rule {}", id),
                },
            })
            .collect();

        let sarif_results: Vec<_> = results
            .iter()
            .map(|issue| SarifResult {
                rule_id: issue.rule_id.to_string(),
                level: Self::severity_to_level(issue.severity),
                message: SarifMessage {
                    text: issue.message.clone(),
                },
                // File-level issues still point at the file, just without a region.
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: source.to_string(),
                        },
                        region: (!issue.is_file_level()).then_some(SarifRegion {
                            start_line: issue.line,
                        }),
                    },
                }],
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results: sarif_results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &log).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Issue, RuleId};

    fn render(results: &ValidationResults) -> serde_json::Value {
        let mut output = Vec::new();
        SarifFormatter::new("envdoctor", "1.0.0")
            .format(".env", results, &mut output)
            .unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_sarif() {
        let mut results = ValidationResults::default();
        results.push(
            Issue::new(RuleId::new("duplicate-key"), Severity::Error, "Duplicate key")
                .with_line(15),
        );

        let parsed = render(&results);

        assert_eq!(parsed["version"], "2.1.0");
        assert!(parsed["runs"].is_array());
        assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "envdoctor");
    }

    #[test]
    fn maps_severity_to_sarif_level() {
        assert_eq!(SarifFormatter::severity_to_level(Severity::Error), "error");
        assert_eq!(
            SarifFormatter::severity_to_level(Severity::Warning),
            "warning"
        );
        assert_eq!(
            SarifFormatter::severity_to_level(Severity::Suggestion),
            "note"
        );
    }

    #[test]
    fn includes_unique_rule_definitions() {
        let mut results = ValidationResults::default();
        results.push(Issue::new(RuleId::new("rule2"), Severity::Warning, "msg2"));
        results.push(Issue::new(RuleId::new("rule1"), Severity::Error, "msg1"));
        results.push(Issue::new(RuleId::new("rule1"), Severity::Error, "msg3"));

        let parsed = render(&results);
        let rules = parsed["runs"][0]["tool"]["driver"]["rules"]
            .as_array()
            .unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0]["id"], "rule1");
    }

    #[test]
    fn includes_location_information() {
        let mut results = ValidationResults::default();
        results.push(Issue::new(RuleId::new("test"), Severity::Error, "msg").with_line(10));

        let parsed = render(&results);
        let location = &parsed["runs"][0]["results"][0]["locations"][0];

        assert_eq!(location["physicalLocation"]["artifactLocation"]["uri"], ".env");
        assert_eq!(location["physicalLocation"]["region"]["startLine"], 10);
    }

    #[test]
    fn file_level_issue_omits_region() {
        let mut results = ValidationResults::default();
        results.push(Issue::new(RuleId::new("test"), Severity::Suggestion, "msg"));

        let parsed = render(&results);
        let physical = &parsed["runs"][0]["results"][0]["locations"][0]["physicalLocation"];

        assert!(physical["region"].is_null());
        assert_eq!(parsed["runs"][0]["results"][0]["level"], "note");
    }
}
