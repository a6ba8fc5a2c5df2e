pub mod config;
pub mod applicability;

// Re-export main types
pub use config::{load_mapping, Category, CategoryKind, Mapping};
pub use applicability::{evaluate_file, extension_of, is_applicable};
