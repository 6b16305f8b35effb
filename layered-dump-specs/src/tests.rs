use crate::{
    format_summary, load_all_fixtures, load_fixture, run_all, run_fixture, DumpFixture,
    ExpectedFailures,
};
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn fixture(name: &str) -> DumpFixture {
    load_fixture(&fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

fn rendered(name: &str) -> String {
    run_fixture(&fixture(name)).unwrap().rendered
}

#[test]
fn test_all_fixtures_pass() {
    let fixtures = load_all_fixtures(&fixtures_dir()).unwrap();
    let expected = ExpectedFailures::load(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("expected-failures.toml"),
    )
    .unwrap();

    let (result, reports) = run_all(&fixtures, &expected);
    let summary = format_summary(
        result.passed,
        result.total - result.passed,
        result.expected_failures,
        result.regressions,
    );

    assert!(result.success(), "{}{}", reports.join(""), summary);
    assert_eq!(result.total, fixtures.len());
}

#[test]
fn test_regression_is_reported() {
    let mut broken = fixture("scalar-root.toml");
    broken.expected = broken.expected.replace("int 5", "int 6");
    let fixtures = vec![("scalar-root.toml".to_string(), broken)];

    let (result, reports) = run_all(&fixtures, &ExpectedFailures::default());
    assert_eq!(result.regressions, 1);
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("first difference at line 4:"));
    assert!(reports[0].contains("- \"int 6\""));
    assert!(reports[0].contains("+ \"int 5\""));
}

#[test]
fn test_known_failure_is_not_a_regression() {
    let mut broken = fixture("scalar-root.toml");
    broken.expected.push_str("extra");
    let fixtures = vec![("scalar-root.toml".to_string(), broken)];

    let expected: ExpectedFailures = toml::from_str(
        r#"
[[known]]
fixture = "scalar-root.toml"
"#,
    )
    .unwrap();

    let (result, reports) = run_all(&fixtures, &expected);
    assert!(result.success());
    assert_eq!(result.expected_failures, 1);
    assert!(reports.is_empty());
}

#[test]
fn test_nested_object_fixture() {
    insta::assert_snapshot!(rendered("nested-object.toml"), @r###"
    ┌──────────┐
    │ $user    │
    └──────────┘
    object (2) (
      public "id" -> int 7
      protected "tags" -> array (2) [
        "0" => string (3) "a"
        "1" => array (0) []
      ]
    )
    "###);
}

#[test]
fn test_footer_fixture() {
    let fixture = fixture("footer-called-from.toml");
    assert!(fixture.footer);
    assert!(fixture.config.display_called_from);

    insta::assert_snapshot!(run_fixture(&fixture).unwrap().rendered, @r###"
    ┌──────────┐
    │ $flag    │
    └──────────┘
    bool true
    ════════════
    Called from src/main.rs:42 [App->run()]
    "###);
}

#[test]
fn test_trace_fixture_frames() {
    let fixture = fixture("trace.toml");
    let frames = fixture.root.children();

    assert_eq!(frames.len(), 2);
    assert!(frames.iter().all(|frame| frame.depth == 1));
    assert_eq!(
        frames[0].trace.as_ref().and_then(|t| t.params.as_deref()),
        Some("Entity $e")
    );
    assert!(frames[1].trace.as_ref().map_or(false, |t| t.file.is_none()));
}
