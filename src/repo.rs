//! Where the audited tree comes from: a local directory, or a shallow clone
//! that lives exactly as long as the [`RepoSource`] value.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use crate::error::{AuditError, Result};

#[derive(Debug)]
pub enum RepoSource {
    Local(PathBuf),
    /// Removed from disk when dropped
    Cloned { url: String, dir: TempDir },
}

impl RepoSource {
    /// Resolve a CLI target. URLs are cloned, anything else must be a directory.
    pub fn open(target: &str) -> Result<Self> {
        if is_remote(target) {
            return Self::clone_shallow(target);
        }
        let path = PathBuf::from(target);
        if !path.is_dir() {
            return Err(AuditError::NotADirectory(path));
        }
        Ok(RepoSource::Local(path))
    }

    pub fn clone_shallow(url: &str) -> Result<Self> {
        let dir = TempDir::new().map_err(|e| AuditError::Clone {
            url: url.to_string(),
            message: format!("failed to create temp dir: {}", e),
        })?;

        tracing::info!("Shallow cloning {} -> {}", url, dir.path().display());

        let output = Command::new("git")
            .args(["clone", "--depth", "1", "--single-branch", url])
            .arg(dir.path())
            .output()
            .map_err(|e| AuditError::Clone {
                url: url.to_string(),
                message: format!("failed to run git: {} (is git installed?)", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AuditError::Clone {
                url: url.to_string(),
                message: format!("git clone failed: {}", stderr.trim()),
            });
        }

        Ok(RepoSource::Cloned {
            url: url.to_string(),
            dir,
        })
    }

    pub fn root(&self) -> &Path {
        match self {
            RepoSource::Local(path) => path,
            RepoSource::Cloned { dir, .. } => dir.path(),
        }
    }

    pub fn project_name(&self) -> String {
        match self {
            RepoSource::Local(path) => {
                let named = if path.file_name().is_some() {
                    path.clone()
                } else {
                    path.canonicalize().unwrap_or_else(|_| path.clone())
                };
                named
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| named.display().to_string())
            }
            RepoSource::Cloned { url, .. } => project_name_from_url(url),
        }
    }
}

fn is_remote(target: &str) -> bool {
    target.contains("://") || target.starts_with("git@")
}

/// Last segment of the URL up to its first ".": `.../serde.git` -> `serde`.
pub fn project_name_from_url(url: &str) -> String {
    let last = url
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(url);
    last.split('.').next().unwrap_or(last).to_string()
}
