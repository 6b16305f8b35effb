#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven testing infrastructure for layered-dump.
//!
//! Each fixture is a `.toml` file holding a render configuration, an
//! optional call site, a value tree and the exact text it must render to.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture document types and parsing
//! - [`loader`] - Fixture file loading
//! - [`runner`] - Renders fixtures and compares against expectations
//! - [`formatter`] - Line diffs for mismatches and run summaries
//! - [`failures`] - Expected failures tracking via TOML
//! - [`errors`] - Error types for the harness

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, DumpFixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{run_all, run_fixture, FixtureOutcome, LineMismatch};

#[cfg(test)]
mod tests;
