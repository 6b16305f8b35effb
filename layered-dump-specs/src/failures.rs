//! Expected failures tracking via TOML file.
//!
//! ```toml
//! [[known]]
//! fixture = "wide-title.toml"
//! reason = "ambiguous-width characters measure differently per terminal"
//!
//! [[pending]]
//! fixture = "trace-nested.toml"
//! added = "2024-03-02"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path relative to the fixtures directory.
    pub fixture: String,
    /// Human-readable reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
    /// Related issue URL.
    #[serde(default)]
    pub issue: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Check if a fixture failure is expected.
    pub fn is_expected(&self, fixture: &str) -> FailureState {
        if self.known.iter().any(|e| e.fixture == fixture) {
            return FailureState::Known;
        }

        if self.pending.iter().any(|e| e.fixture == fixture) {
            return FailureState::Pending;
        }

        FailureState::Regression
    }

    /// Count total expected failures.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Get entry for a specific fixture (if expected).
    pub fn get_entry(&self, fixture: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.fixture == fixture)
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default)]
pub struct HarnessResult {
    /// Total fixtures checked.
    pub total: usize,
    /// Passed fixtures.
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the exit code (0 = pass, 1 = regressions).
    pub fn exit_code(&self) -> i32 {
        if self.regressions > 0 {
            1
        } else {
            0
        }
    }

    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => self.expected_failures += 1,
            FailureState::Regression => self.regressions += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(fixture: &str) -> FailureEntry {
        FailureEntry {
            fixture: fixture.to_string(),
            reason: None,
            added: None,
            issue: None,
        }
    }

    #[test]
    fn test_load_empty() {
        let failures = ExpectedFailures::default();
        assert_eq!(failures.count(), 0);
    }

    #[test]
    fn test_is_expected() {
        let failures = ExpectedFailures {
            known: vec![entry("a.toml")],
            pending: vec![entry("b.toml")],
        };

        assert_eq!(failures.is_expected("a.toml"), FailureState::Known);
        assert_eq!(failures.is_expected("b.toml"), FailureState::Pending);
        assert_eq!(failures.is_expected("c.toml"), FailureState::Regression);
        assert!(failures.get_entry("b.toml").is_some());
        assert!(failures.get_entry("c.toml").is_none());
    }

    #[test]
    fn test_harness_result_record() {
        let mut result = HarnessResult::new();
        result.record_pass();
        result.record_failure(FailureState::Known);
        assert!(result.success());
        assert_eq!(result.exit_code(), 0);

        result.record_failure(FailureState::Regression);
        assert_eq!(result.total, 3);
        assert_eq!(result.expected_failures, 1);
        assert_eq!(result.regressions, 1);
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expected-failures.toml");
        fs::write(
            &path,
            r#"
[[known]]
fixture = "wide.toml"
reason = "terminal dependent"

[[pending]]
fixture = "trace.toml"
added = "2024-03-02"
"#,
        )
        .unwrap();

        let failures = ExpectedFailures::load(&path).unwrap();
        assert_eq!(failures.count(), 2);
        assert_eq!(
            failures.get_entry("wide.toml").unwrap().reason.as_deref(),
            Some("terminal dependent")
        );
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let failures = ExpectedFailures::load(Path::new("/nonexistent/expected.toml")).unwrap();
        assert_eq!(failures.count(), 0);
    }
}
