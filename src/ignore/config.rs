use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::load_document;
use crate::error::{AuditError, Result};

/// Ignore document: a single ordered list of glob patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IgnoreConfig {
    #[serde(default, alias = "ignore")]
    pub patterns: Vec<String>,
}

/// How far an unanchored pattern may reach below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Nesting {
    /// Direct match, or a match under exactly one parent directory (`*/pattern`)
    #[default]
    OneLevel,
    /// Direct match, or a match under any number of directories (`**/pattern`)
    AnyDepth,
}

/// Everything that decides whether a walked entry is left out of the audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IgnorePolicy {
    /// Skip directories below the root whose name starts with "."
    #[serde(default)]
    pub skip_hidden_dirs: bool,
    /// Skip files that sit directly in the root (LICENSE, README.md, ...)
    #[serde(default)]
    pub skip_root_files: bool,
    #[serde(default)]
    pub nesting: Nesting,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl IgnorePolicy {
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Load the ignore document.
///
/// A missing file yields an empty pattern list unless `required` is set,
/// in which case it is a configuration error.
pub fn load_ignore_config<P: AsRef<Path>>(path: P, required: bool) -> Result<IgnoreConfig> {
    let path = path.as_ref();
    if !path.exists() {
        if required {
            return Err(AuditError::config(path, "ignore file not found"));
        }
        tracing::debug!("No ignore file at {}, nothing is ignored", path.display());
        return Ok(IgnoreConfig::default());
    }

    let config: IgnoreConfig = load_document(path)?;
    tracing::debug!("Loaded {} ignore patterns from {}", config.patterns.len(), path.display());
    Ok(config)
}
