use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_IGNORE_FILE, DEFAULT_MAPPING_FILE};

const MAPPING_PRESET: &str = include_str!("../presets/mapping.json");
const IGNORE_PRESET: &str = include_str!("../presets/ignore.json");

/// Write starter mapping.json and ignore.json into the current directory.
pub fn generate_config(force: bool) -> Result<Vec<PathBuf>> {
    generate_config_in(Path::new("."), force)
}

pub fn generate_config_in(dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let targets = [
        (dir.join(DEFAULT_MAPPING_FILE), MAPPING_PRESET),
        (dir.join(DEFAULT_IGNORE_FILE), IGNORE_PRESET),
    ];

    if !force {
        if let Some((existing, _)) = targets.iter().find(|(path, _)| path.exists()) {
            return Err(anyhow::anyhow!(
                "{} already exists. Use --force to overwrite it.",
                existing.display()
            ));
        }
    }

    let mut written = Vec::new();
    for (path, content) in targets {
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
