use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use super::LicenseSet;
use crate::error::{AuditError, Result};

/// Source of the root license set for a materialized repository.
pub trait LicenseDetector {
    fn detect(&self, root: &Path) -> Result<LicenseSet>;
}

/// Licenses supplied up front, e.g. from the command line.
#[derive(Debug, Clone)]
pub struct FixedLicenses(pub LicenseSet);

impl LicenseDetector for FixedLicenses {
    fn detect(&self, _root: &Path) -> Result<LicenseSet> {
        if self.0.is_empty() {
            return Err(AuditError::Detection("no license identifiers given".to_string()));
        }
        Ok(self.0.clone())
    }
}

/// Runs an external detector that prints `license-detector -f json` output.
#[derive(Debug, Clone)]
pub struct CommandDetector {
    pub program: String,
}

impl CommandDetector {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for CommandDetector {
    fn default() -> Self {
        Self::new("license-detector")
    }
}

impl LicenseDetector for CommandDetector {
    fn detect(&self, root: &Path) -> Result<LicenseSet> {
        tracing::info!("Detecting root licenses with {}", self.program);

        let output = Command::new(&self.program)
            .arg("-f")
            .arg("json")
            .arg(root)
            .output()
            .map_err(|e| {
                AuditError::Detection(format!(
                    "failed to run {}: {} (is it installed?)",
                    self.program, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AuditError::Detection(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        parse_detector_output(&String::from_utf8_lossy(&output.stdout))
    }
}

#[derive(Debug, Deserialize)]
struct DetectionResult {
    #[serde(default)]
    project: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    matches: Vec<DetectionMatch>,
}

#[derive(Debug, Deserialize)]
struct DetectionMatch {
    license: String,
    confidence: f32,
    file: String,
}

/// Reduce detector output to a license set.
///
/// A detector may report several candidate licenses for the same file; only
/// the highest-confidence candidate per file counts.
pub fn parse_detector_output(json: &str) -> Result<LicenseSet> {
    let results: Vec<DetectionResult> = serde_json::from_str(json)
        .map_err(|e| AuditError::Detection(format!("unreadable detector output: {}", e)))?;

    let mut licenses = LicenseSet::new();
    for result in &results {
        if let Some(error) = &result.error {
            tracing::warn!(
                "Detector reported an error for {}: {}",
                result.project.as_deref().unwrap_or("<unknown>"),
                error
            );
        }

        let mut best: HashMap<&str, &DetectionMatch> = HashMap::new();
        for candidate in &result.matches {
            match best.get(candidate.file.as_str()) {
                Some(current) if current.confidence >= candidate.confidence => {}
                _ => {
                    best.insert(candidate.file.as_str(), candidate);
                }
            }
        }

        for (file, found) in best {
            tracing::debug!("{}: {} ({:.2})", file, found.license, found.confidence);
            licenses.insert(found.license.clone());
        }
    }

    if licenses.is_empty() {
        return Err(AuditError::Detection("no root licenses found".to_string()));
    }
    Ok(licenses)
}
