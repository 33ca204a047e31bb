//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for carecompare operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// One or both facilities were not supplied
    #[error("Incomplete input: {0}")]
    IncompleteInput(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error(transparent)]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn incomplete(message: impl Into<String>) -> Self {
        Self::IncompleteInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
