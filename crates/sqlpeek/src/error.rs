//! Error types for sqlpeek

use thiserror::Error;

/// Result type alias for sqlpeek operations
pub type PeekResult<T> = Result<T, PeekError>;

/// Errors raised at configuration and input-conversion boundaries.
///
/// Minification, substitution and escaping never fail; only building their
/// inputs can.
#[derive(Debug, Error)]
pub enum PeekError {
    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// Parameter document could not be converted
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Keyword pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl PeekError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<serde_json::Error> for PeekError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
