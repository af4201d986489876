//! Error types for alias injection

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an alias run. None of these are recovered from.
#[derive(Debug, Error)]
pub enum AliasError {
    /// A field is missing `name` or `type`
    #[error("missing key `{key}` at {path}")]
    MissingKey { key: &'static str, path: String },

    /// A key holds a value of the wrong JSON type
    #[error("expected `{key}` at {path} to be {expected}")]
    UnexpectedType {
        key: &'static str,
        expected: &'static str,
        path: String,
    },

    /// Reading or writing a schema file failed
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema file is not valid JSON
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for alias operations
pub type Result<T> = std::result::Result<T, AliasError>;
