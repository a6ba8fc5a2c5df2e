use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::config::load_document;
use crate::error::{AuditError, Result};

/// One bucket of the mapping: the file types it covers and the licenses
/// under which those file types are acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Dotted extensions, e.g. ".py"
    pub extensions: Vec<String>,
    /// License identifiers, e.g. "MIT"
    pub licenses: Vec<String>,
}

impl Category {
    pub fn new<E, L>(extensions: E, licenses: L) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            licenses: licenses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }

    pub fn has_license(&self, license: &str) -> bool {
        self.licenses.iter().any(|l| l == license)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Software,
    Documentation,
    Multimedia,
    DataSetsAndModels,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CategoryKind::Software => "software",
            CategoryKind::Documentation => "documentation",
            CategoryKind::Multimedia => "multimedia",
            CategoryKind::DataSetsAndModels => "data_sets_and_models",
        };
        f.write_str(name)
    }
}

/// The category -> (extensions, licenses) table.
///
/// All four sections are required; an unknown section name is rejected so a
/// typo in the document cannot silently drop a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Mapping {
    pub software: Category,
    pub documentation: Category,
    pub multimedia: Category,
    pub data_sets_and_models: Category,
}

impl Mapping {
    pub fn categories(&self) -> [(CategoryKind, &Category); 4] {
        [
            (CategoryKind::Software, &self.software),
            (CategoryKind::Documentation, &self.documentation),
            (CategoryKind::Multimedia, &self.multimedia),
            (CategoryKind::DataSetsAndModels, &self.data_sets_and_models),
        ]
    }

    /// Reject extensions without a leading dot; they could never match
    /// anything the walker produces.
    pub fn validate(&self, source: &Path) -> Result<()> {
        for (kind, category) in self.categories() {
            if let Some(bad) = category
                .extensions
                .iter()
                .find(|ext| !ext.starts_with('.'))
            {
                return Err(AuditError::config(
                    source,
                    format!("extension '{}' in {} must start with '.'", bad, kind),
                ));
            }
            if category.extensions.is_empty() || category.licenses.is_empty() {
                tracing::warn!(
                    "Category '{}' can never match: it has no extensions or no licenses",
                    kind
                );
            }
        }
        Ok(())
    }
}

/// Load and validate the mapping document. JSON unless the file ends in `.toml`.
pub fn load_mapping<P: AsRef<Path>>(path: P) -> Result<Mapping> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AuditError::config(path, "mapping file not found"));
    }

    let mapping: Mapping = load_document(path)?;
    mapping.validate(path)?;

    tracing::debug!(
        "Loaded mapping from {} ({} extensions)",
        path.display(),
        mapping.categories().iter().map(|(_, c)| c.extensions.len()).sum::<usize>()
    );
    Ok(mapping)
}
