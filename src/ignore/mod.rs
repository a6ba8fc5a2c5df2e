pub mod config;
pub mod matcher;

// Re-export main types
pub use config::{load_ignore_config, IgnoreConfig, IgnorePolicy, Nesting};
pub use matcher::{should_ignore, IgnoreMatcher, IgnoreRules};
