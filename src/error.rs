use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these aborts the run before a report is produced.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Configuration error in {}: {message}", path.display())]
    Configuration { path: PathBuf, message: String },

    #[error("License detection failed: {0}")]
    Detection(String),

    #[error("Failed to walk {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to walk {}: file name is not valid UTF-8", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to materialize repository {url}: {message}")]
    Clone { url: String, message: String },
}

impl AuditError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AuditError::Configuration {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

/// An ignore pattern that failed to compile. Recovered by the matcher:
/// the pattern is logged and never matches.
#[derive(Error, Debug, Clone)]
#[error("Invalid ignore pattern '{pattern}': {reason}")]
pub struct PatternSyntaxError {
    pub pattern: String,
    pub reason: String,
}
