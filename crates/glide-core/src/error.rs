//! Error types for Glide

use thiserror::Error;

/// The main error type for Glide operations
#[derive(Debug, Error)]
pub enum GlideError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Glide operations
pub type Result<T> = std::result::Result<T, GlideError>;

impl From<toml::de::Error> for GlideError {
    fn from(err: toml::de::Error) -> Self {
        GlideError::TomlParseError(err.to_string())
    }
}
