//! Core error types for petal-core.
//!
//! Load failures never surface here: the store degrades to the default
//! state instead. Everything that does reach the caller is one of these.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for petal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State file errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while persisting the day state.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The state could not be encoded
    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),

    /// The file (or its temporary sibling) could not be written
    #[error("Failed to write state to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Mood label outside the known set
    #[error("Unknown mood '{0}' (expected sleepy, motivated, angry or sad)")]
    UnknownMood(String),

    /// Growth stage outside 0..=2
    #[error("Growth stage {0} out of range (expected 0, 1 or 2)")]
    StageOutOfRange(u8),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
