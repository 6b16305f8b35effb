//! Error types for configuration.
//!
//! Rendering itself cannot fail: malformed trees fall back to sensible
//! output instead. Only building a renderer from configuration can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing a renderer.
#[derive(Debug, Error)]
pub enum DumpError {
    /// A configuration value is out of range.
    #[error("invalid config `{field}`: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// The configuration text is not valid TOML for [`RenderConfig`](crate::RenderConfig).
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for dump operations.
pub type DumpResult<T> = Result<T, DumpError>;
