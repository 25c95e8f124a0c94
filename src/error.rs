use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the roster crate
#[derive(Error, Debug)]
pub enum RosterError {
    /// Locale table errors
    #[error("Locale error: {0}")]
    Locale(String),

    /// Locale file not found
    #[error("Locale file not found: {path}")]
    LocaleNotFound { path: PathBuf },

    /// Invalid built-in or user-supplied pattern
    #[error("Invalid pattern '{name}': {message}")]
    Pattern { name: String, message: String },

    /// IO errors
    #[error("IO error: {context}: {source}")]
    Io {
        source: std::io::Error,
        context: String,
    },

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
