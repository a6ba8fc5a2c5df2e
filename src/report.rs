use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::license::LicenseSet;

/// Relative path -> compliant flag, iterated in lexicographic path order.
pub type FileVerdict = BTreeMap<String, bool>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ComplianceReport {
    pub total_files: usize,
    pub compliant_files: usize,
    pub non_compliant_files: usize,
    /// Percentage of compliant files; 0.0 when there are no files
    pub score: f64,
}

impl ComplianceReport {
    pub fn from_verdicts(verdicts: &FileVerdict) -> Self {
        let total_files = verdicts.len();
        let compliant_files = verdicts.values().filter(|&&ok| ok).count();
        let score = if total_files == 0 {
            0.0
        } else {
            compliant_files as f64 / total_files as f64 * 100.0
        };

        Self {
            total_files,
            compliant_files,
            non_compliant_files: total_files - compliant_files,
            score,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_files == 0
    }
}

/// Everything a run produces, as handed to the output formatters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub project: String,
    pub licenses: LicenseSet,
    pub files: FileVerdict,
    pub summary: ComplianceReport,
}
