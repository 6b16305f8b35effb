//! Renders fixtures and compares them against their expected text.

use crate::errors::SpecResult;
use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::DumpFixture;
use crate::formatter::format_failure;
use layered_dump::TextRenderer;

/// The first line where rendered output departs from the expectation.
///
/// Lines are 1-based. A side is `None` when that text ran out first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMismatch {
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// Result of rendering a single fixture.
#[derive(Debug, Clone)]
pub struct FixtureOutcome {
    /// Everything the renderer produced, footer included when requested.
    pub rendered: String,
    /// `None` when the output matched exactly.
    pub mismatch: Option<LineMismatch>,
}

impl FixtureOutcome {
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// Render a fixture with a fresh renderer.
pub fn run_fixture(fixture: &DumpFixture) -> SpecResult<FixtureOutcome> {
    let renderer =
        TextRenderer::new(fixture.config.clone())?.with_call_site(fixture.call_site.clone());

    let mut rendered = renderer.render(&fixture.root);
    if fixture.footer {
        rendered.push_str(&renderer.post_render());
    }

    let mismatch = first_mismatch(&fixture.expected, &rendered);
    Ok(FixtureOutcome { rendered, mismatch })
}

/// Run every fixture, classifying failures against `expected_failures`.
///
/// Returns the tally and a formatted report for each regression.
pub fn run_all(
    fixtures: &[(String, DumpFixture)],
    expected_failures: &ExpectedFailures,
) -> (HarnessResult, Vec<String>) {
    let mut result = HarnessResult::new();
    let mut reports = Vec::new();

    for (name, fixture) in fixtures {
        let report = match run_fixture(fixture) {
            Ok(outcome) if outcome.passed() => {
                result.record_pass();
                continue;
            }
            Ok(outcome) => format_failure(name, &outcome),
            Err(e) => format!("\nFAIL: {}\n\n  {}\n", name, e),
        };

        let state = expected_failures.is_expected(name);
        result.record_failure(state);
        if state == FailureState::Regression {
            log::warn!("fixture regression: {}", name);
            reports.push(report);
        } else {
            log::debug!("expected failure ({:?}): {}", state, name);
        }
    }

    (result, reports)
}

fn first_mismatch(expected: &str, actual: &str) -> Option<LineMismatch> {
    if expected == actual {
        return None;
    }

    let mut expected_lines = expected.split('\n');
    let mut actual_lines = actual.split('\n');
    let mut line = 1;

    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (Some(e), Some(a)) if e == a => line += 1,
            (None, None) => return None,
            (e, a) => {
                return Some(LineMismatch {
                    line,
                    expected: e.map(String::from),
                    actual: a.map(String::from),
                })
            }
        }
    }
}
