//! Error types for the fixture harness.

use layered_dump::DumpError;
use thiserror::Error;

/// Errors that can occur while loading or running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The fixture is not valid TOML, or is missing required keys.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// The fixture's render configuration was rejected.
    #[error("invalid render config: {0}")]
    Render(#[from] DumpError),
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
