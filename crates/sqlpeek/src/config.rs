use crate::error::{PeekError, PeekResult};
use serde::{Deserialize, Serialize};

/// Configuration for query minification.
///
/// Deserializes with per-field defaults, so a partial `[minify]` table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    /// Width of one display line, in characters. Default: 100.
    pub max_char_width: usize,
    /// Appended to values that were cut short. Default: `" [...]"`.
    pub truncation_marker: String,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            max_char_width: 100,
            truncation_marker: " [...]".to_string(),
        }
    }
}

impl MinifyConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display line width.
    pub fn with_max_char_width(mut self, width: usize) -> Self {
        self.max_char_width = width;
        self
    }

    /// Set the marker appended to truncated values.
    pub fn with_truncation_marker(mut self, marker: impl Into<String>) -> Self {
        self.truncation_marker = marker.into();
        self
    }

    pub fn validate(&self) -> PeekResult<()> {
        if self.max_char_width == 0 {
            return Err(PeekError::config("max_char_width must be at least 1"));
        }
        Ok(())
    }
}
