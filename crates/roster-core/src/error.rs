//! Error types for roster-core

use std::path::PathBuf;

/// Result type for roster-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in roster-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No character is stored under the key
    #[error("Character not found: {key}")]
    NotFound { key: String },

    /// A character is already stored under the key
    #[error("Character already exists: {key}")]
    DuplicateKey { key: String },

    /// Faction is not part of the registry
    #[error("Invalid faction: {faction}")]
    InvalidFaction { faction: String },

    /// Keys must contain at least one non-whitespace character
    #[error("Character key must not be empty")]
    EmptyKey,

    /// The data file exists but does not hold a valid collection
    #[error("Corrupt character store at {path}: {message}")]
    CorruptStore { path: PathBuf, message: String },

    /// The configuration file could not be parsed
    #[error("Invalid configuration at {path}: {message}")]
    Config { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from roster-fs
    #[error(transparent)]
    Fs(#[from] roster_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }
}
