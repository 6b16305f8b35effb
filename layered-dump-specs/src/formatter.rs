//! Failure reports and run summaries.

use crate::runner::FixtureOutcome;

/// Format a fixture whose output differed from its expectation.
///
/// Shows the first differing line from both sides, then the full rendered
/// output with line numbers so whitespace problems are visible.
pub fn format_failure(fixture_name: &str, outcome: &FixtureOutcome) -> String {
    let mut output = format!("\nFAIL: {}\n\n", fixture_name);

    if let Some(mismatch) = &outcome.mismatch {
        output.push_str(&format!("  first difference at line {}:\n", mismatch.line));
        output.push_str(&format!("    - {}\n", show_line(mismatch.expected.as_deref())));
        output.push_str(&format!("    + {}\n", show_line(mismatch.actual.as_deref())));
        output.push('\n');
    }

    output.push_str("  rendered:\n");
    for (idx, line) in outcome.rendered.split('\n').enumerate() {
        output.push_str(&format!("  {:>3} | {}\n", idx + 1, line));
    }

    output
}

/// Format a summary of a harness run.
pub fn format_summary(passed: usize, failed: usize, expected_failures: usize, regressions: usize) -> String {
    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    format!(
        "\n{}: {} passed, {} failed ({} expected, {} regressions)\n",
        status, passed, failed, expected_failures, regressions
    )
}

/// Quote a line so trailing spaces show up; `<end of output>` when absent.
fn show_line(line: Option<&str>) -> String {
    match line {
        Some(line) => format!("{:?}", line),
        None => "<end of output>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::LineMismatch;

    #[test]
    fn test_format_failure() {
        let outcome = FixtureOutcome {
            rendered: "int 5\n".to_string(),
            mismatch: Some(LineMismatch {
                line: 1,
                expected: Some("int  5".into()),
                actual: Some("int 5".into()),
            }),
        };

        assert_eq!(
            format_failure("scalar.toml", &outcome),
            "\nFAIL: scalar.toml\n\n  first difference at line 1:\n    - \"int  5\"\n    + \"int 5\"\n\n  rendered:\n    1 | int 5\n    2 | \n"
        );
    }

    #[test]
    fn test_format_failure_end_of_output() {
        let outcome = FixtureOutcome {
            rendered: "a".to_string(),
            mismatch: Some(LineMismatch {
                line: 2,
                expected: Some("b".into()),
                actual: None,
            }),
        };

        let output = format_failure("short.toml", &outcome);
        assert!(output.contains("    + <end of output>\n"));
        assert!(output.contains("    - \"b\"\n"));
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(
            format_summary(3, 1, 1, 0),
            "\nPASS: 3 passed, 1 failed (1 expected, 0 regressions)\n"
        );
        assert!(format_summary(0, 2, 0, 2).starts_with("\nFAIL:"));
    }
}
