use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub mod detector;

// Re-export from detector
pub use detector::{CommandDetector, FixedLicenses, LicenseDetector};

/// License identifiers detected for the repository root.
///
/// Membership is all that matters, so duplicates reported by detection
/// collapse and iteration order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseSet(BTreeSet<String>);

impl LicenseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, license: impl Into<String>) -> bool {
        self.0.insert(license.into())
    }

    pub fn contains(&self, license: &str) -> bool {
        self.0.contains(license)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LicenseSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LicenseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(", "))
    }
}
