use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::error::{AuditError, Result};
use crate::ignore::{IgnorePolicy, IgnoreRules};
use crate::license::LicenseSet;
use crate::mapping::{evaluate_file, Mapping};
use crate::report::{ComplianceReport, FileVerdict};

/// The fixed inputs of a run: mapping, root licenses and ignore rules.
///
/// Evaluating the same directory twice gives identical results.
#[derive(Debug, Clone)]
pub struct Audit {
    mapping: Mapping,
    licenses: LicenseSet,
    rules: IgnoreRules,
}

impl Audit {
    pub fn new(mapping: Mapping, licenses: LicenseSet, policy: &IgnorePolicy) -> Result<Self> {
        if licenses.is_empty() {
            return Err(AuditError::Detection(
                "cannot evaluate compliance without at least one root license".to_string(),
            ));
        }
        Ok(Self {
            mapping,
            licenses,
            rules: policy.compile(),
        })
    }

    pub fn licenses(&self) -> &LicenseSet {
        &self.licenses
    }

    /// Walk `root` and record a verdict for every file that is not ignored.
    ///
    /// Symbolic links are not followed: a link is recorded like a file, by
    /// the extension of its own name. Ignored directories are pruned with
    /// their whole subtree. The first filesystem error on an entry that is
    /// not ignored aborts the walk, as does a file name that is not UTF-8.
    pub fn evaluate(&self, root: &Path) -> Result<(FileVerdict, ComplianceReport)> {
        if !root.is_dir() {
            return Err(AuditError::NotADirectory(root.to_path_buf()));
        }
        tracing::info!("Auditing {} against {}", root.display(), self.licenses);

        let mut verdicts = FileVerdict::new();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_skipped(root, entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if self.is_skipped_error(root, &e) => continue,
                Err(e) => {
                    return Err(AuditError::Traversal {
                        path: e.path().unwrap_or(root).to_path_buf(),
                        source: e,
                    })
                }
            };

            if entry.depth() == 0 || entry.file_type().is_dir() {
                continue;
            }

            let rel_path = relative_path(root, entry.path())
                .ok_or_else(|| AuditError::NonUtf8Path(entry.path().to_path_buf()))?;
            let compliant = evaluate_file(&rel_path, &self.licenses, &self.mapping);
            tracing::debug!(
                "{}: {}",
                rel_path,
                if compliant { "compliant" } else { "non-compliant" }
            );
            verdicts.insert(rel_path, compliant);
        }

        let report = ComplianceReport::from_verdicts(&verdicts);
        tracing::info!(
            "Evaluated {} files, {} compliant",
            report.total_files,
            report.compliant_files
        );
        Ok((verdicts, report))
    }

    fn is_skipped(&self, root: &Path, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let rel_path = lossy_relative_path(root, entry.path());
        let is_dir = entry.file_type().is_dir();
        let skipped = self.rules.skips(&rel_path, is_dir);
        if skipped && is_dir {
            tracing::debug!("Pruning {}/", rel_path);
        }
        skipped
    }

    /// Errors on entries the rules leave out are dropped with the entry.
    fn is_skipped_error(&self, root: &Path, error: &walkdir::Error) -> bool {
        let Some(path) = error.path() else {
            return false;
        };
        if error.depth() == 0 || path == root {
            return false;
        }
        let is_dir = fs::symlink_metadata(path).is_ok_and(|meta| meta.is_dir());
        let skipped = self.rules.skips(&lossy_relative_path(root, path), is_dir);
        if skipped {
            tracing::debug!("Ignoring error on skipped entry {}: {}", path.display(), error);
        }
        skipped
    }
}

/// Evaluate every file under `root`; see [`Audit::evaluate`].
pub fn evaluate_tree(
    root: &Path,
    licenses: &LicenseSet,
    mapping: &Mapping,
    policy: &IgnorePolicy,
) -> Result<(FileVerdict, ComplianceReport)> {
    Audit::new(mapping.clone(), licenses.clone(), policy)?.evaluate(root)
}

/// `path` relative to `root`, "/"-separated on every platform.
///
/// `None` when a component is not valid UTF-8: a lossy rendering could give
/// two distinct files the same key.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

/// Relative path for ignore decisions, where a lossy name is good enough.
fn lossy_relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
