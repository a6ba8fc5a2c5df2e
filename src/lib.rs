pub mod config;
pub mod error;
pub mod ignore;
pub mod init;
pub mod license;
pub mod mapping;
pub mod output;
pub mod repo;
pub mod report;
pub mod walker;

// Re-export main types for easy access
pub use error::{AuditError, PatternSyntaxError};
pub use ignore::{should_ignore, IgnoreMatcher, IgnorePolicy, Nesting};
pub use license::{LicenseDetector, LicenseSet};
pub use mapping::{is_applicable, Category, CategoryKind, Mapping};
pub use report::{AuditReport, ComplianceReport, FileVerdict};
pub use walker::{evaluate_tree, Audit};
