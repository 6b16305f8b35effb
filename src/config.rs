//! Render configuration.

use crate::errors::{DumpError, DumpResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Narrowest box that still fits a one column ellipsis cut.
const MIN_HEADER_WIDTH: usize = 8;

/// Settings read once when a renderer is built.
///
/// ```toml
/// strlen_max = 40
/// header_width = 60
/// indent_width = 2
/// display_called_from = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum chars of a value before it is cut (0 = unlimited)
    pub strlen_max: usize,
    /// Width of the title box and footer rule
    pub header_width: usize,
    /// Spaces per depth level
    pub indent_width: usize,
    /// Show the "Called from" line in the footer
    pub display_called_from: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            strlen_max: 0,
            header_width: 80,
            indent_width: 4,
            display_called_from: true,
        }
    }
}

impl RenderConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> DumpResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        log::debug!("loaded render config: {:?}", config);
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> DumpResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| DumpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_strlen_max(mut self, max: usize) -> Self {
        self.strlen_max = max;
        self
    }

    pub fn with_header_width(mut self, width: usize) -> Self {
        self.header_width = width;
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_called_from(mut self, show: bool) -> Self {
        self.display_called_from = show;
        self
    }

    /// Reject settings that would produce malformed boxes or flat trees.
    pub fn validate(&self) -> DumpResult<()> {
        if self.header_width < MIN_HEADER_WIDTH {
            return Err(DumpError::InvalidConfig {
                field: "header_width",
                message: format!(
                    "must be at least {}, got {}",
                    MIN_HEADER_WIDTH, self.header_width
                ),
            });
        }
        if self.indent_width == 0 {
            return Err(DumpError::InvalidConfig {
                field: "indent_width",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_keys_use_defaults() {
        let config = RenderConfig::from_toml_str("strlen_max = 10").unwrap();
        assert_eq!(config, RenderConfig::new().with_strlen_max(10));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            RenderConfig::from_toml_str("").unwrap(),
            RenderConfig::default()
        );
    }

    #[test]
    fn narrow_header_is_rejected() {
        let err = RenderConfig::from_toml_str("header_width = 7").unwrap_err();
        assert!(matches!(
            err,
            DumpError::InvalidConfig {
                field: "header_width",
                ..
            }
        ));
    }

    #[test]
    fn zero_indent_is_rejected() {
        let err = RenderConfig::new().with_indent_width(0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config `indent_width`: must be positive"
        );
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = RenderConfig::from_toml_str("header_width = \"wide\"").unwrap_err();
        assert!(matches!(err, DumpError::ConfigParse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header_width = 40\ndisplay_called_from = false").unwrap();

        let config = RenderConfig::load(file.path()).unwrap();
        assert_eq!(config.header_width, 40);
        assert!(!config.display_called_from);
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RenderConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, DumpError::Io { .. }));
    }
}
