//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub, VS Code, and other tools.

use std::collections::BTreeSet;
use std::io::Write;

use serde::Serialize;

use super::ReportFormatter;
use crate::lint::{FileValidation, RuleRegistry, Severity};

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats results as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    /// Rule ids and descriptions listed in the driver.
    rules: Vec<(String, String)>,
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
            rules: Vec::new(),
        }
    }

    /// List every rule of `registry` in the driver, in registry order.
    pub fn with_rules(mut self, registry: &RuleRegistry) -> Self {
        self.rules = registry
            .iter()
            .map(|r| (r.id().0, r.description().to_string()))
            .collect();
        self
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Driver rules: the registered ones, plus any id only seen in results.
    fn driver_rules(&self, validations: &[FileValidation]) -> Vec<SarifRule> {
        let mut rules: Vec<_> = self
            .rules
            .iter()
            .map(|(id, description)| SarifRule {
                id: id.clone(),
                short_description: SarifMessage {
                    text: description.clone(),
                },
            })
            .collect();

        let unlisted: BTreeSet<_> = validations
            .iter()
            .flat_map(|v| &v.issues)
            .map(|i| i.rule_id.as_str())
            .filter(|id| !self.rules.iter().any(|(known, _)| known == id))
            .collect();
        rules.extend(unlisted.into_iter().map(|id| SarifRule {
            id: id.to_string(),
            short_description: SarifMessage {
                text: format!("Rule {}", id),
            },
        }));

        rules
    }
}

impl ReportFormatter for SarifFormatter {
    fn format<W: Write>(
        &self,
        validations: &[FileValidation],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let results: Vec<_> = validations
            .iter()
            .flat_map(|v| v.issues.iter().map(move |issue| (v, issue)))
            .map(|(v, issue)| SarifResult {
                rule_id: issue.rule_id.0.clone(),
                level: Self::severity_to_level(issue.severity),
                message: SarifMessage {
                    text: issue.message.clone(),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: v.path.display().to_string(),
                        },
                        region: issue.line.map(|start_line| SarifRegion { start_line }),
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
                        rules: self.driver_rules(validations),
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &log).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}
