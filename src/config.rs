use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};
use crate::ignore::Nesting;

pub const CONFIG_FILE: &str = "license-audit.toml";
pub const DEFAULT_MAPPING_FILE: &str = "mapping.json";
pub const DEFAULT_IGNORE_FILE: &str = "ignore.json";

/// Read a JSON or TOML document, chosen by the file extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| AuditError::config(path, format!("failed to read: {}", e)))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content)
            .map_err(|e| AuditError::config(path, format!("failed to parse TOML: {}", e)))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| AuditError::config(path, format!("failed to parse JSON: {}", e)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format (table, json)
    pub format: Option<String>,

    /// Path of the mapping document
    pub mapping: Option<PathBuf>,

    /// Path of the ignore document
    pub ignore: Option<PathBuf>,

    /// Skip directories whose name starts with "."
    pub skip_hidden_dirs: Option<bool>,

    /// Skip files directly in the repository root
    pub skip_root_files: Option<bool>,

    /// How far unanchored ignore patterns reach (one-level, any-depth)
    pub nesting: Option<Nesting>,

    /// License detector program
    pub detector: Option<String>,

    /// Fail when the score is below this percentage
    pub fail_under: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Some("table".to_string()),
            mapping: None,
            ignore: None,
            skip_hidden_dirs: Some(false),
            skip_root_files: Some(false),
            nesting: Some(Nesting::OneLevel),
            detector: Some("license-detector".to_string()),
            fail_under: None,
        }
    }
}

impl Config {
    pub fn mapping_path(&self) -> PathBuf {
        self.mapping
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPING_FILE))
    }

    /// Ignore document path and whether it was named explicitly.
    pub fn ignore_path(&self) -> (PathBuf, bool) {
        match &self.ignore {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_IGNORE_FILE), false),
        }
    }
}

/// Load license-audit.toml from the current directory.
pub fn load_config() -> Result<Config> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_config_from(&dir)
}

/// Load license-audit.toml from `dir`, defaults when it is absent.
///
/// Keys missing from the file keep their default values.
pub fn load_config_from(dir: &Path) -> Result<Config> {
    let config_path = dir.join(CONFIG_FILE);

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .map_err(|e| AuditError::config(&config_path, format!("failed to read: {}", e)))?;

    let file: Config = toml::from_str(&content)
        .map_err(|e| AuditError::config(&config_path, format!("failed to parse TOML: {}", e)))?;

    Ok(file.over(Config::default()))
}

impl Config {
    fn over(self, base: Config) -> Config {
        Config {
            format: self.format.or(base.format),
            mapping: self.mapping.or(base.mapping),
            ignore: self.ignore.or(base.ignore),
            skip_hidden_dirs: self.skip_hidden_dirs.or(base.skip_hidden_dirs),
            skip_root_files: self.skip_root_files.or(base.skip_root_files),
            nesting: self.nesting.or(base.nesting),
            detector: self.detector.or(base.detector),
            fail_under: self.fail_under.or(base.fail_under),
        }
    }
}
