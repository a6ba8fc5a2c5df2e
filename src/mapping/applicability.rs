use super::config::{CategoryKind, Mapping};
use crate::license::LicenseSet;

impl Mapping {
    /// First category that lists `extension` and also accepts one of `licenses`.
    ///
    /// Both conditions must hold for the same category: an extension from one
    /// category and a license from another do not combine.
    pub fn matching_category(
        &self,
        extension: &str,
        licenses: &LicenseSet,
    ) -> Option<CategoryKind> {
        licenses.iter().find_map(|license| {
            self.categories()
                .into_iter()
                .find(|(_, category)| {
                    category.has_extension(extension) && category.has_license(license)
                })
                .map(|(kind, _)| kind)
        })
    }
}

/// Whether a file with `extension` is permitted under any of `licenses`.
pub fn is_applicable(extension: &str, licenses: &LicenseSet, mapping: &Mapping) -> bool {
    mapping.matching_category(extension, licenses).is_some()
}

/// Extension of the final path segment, from its last "." inclusive.
/// Empty when the segment has no ".".
pub fn extension_of(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// Verdict for one relative file path.
pub fn evaluate_file(path: &str, licenses: &LicenseSet, mapping: &Mapping) -> bool {
    is_applicable(extension_of(path), licenses, mapping)
}
