//! Batch processing keeps files independent of each other

use adodoc::adodoc::batch::{process_file, process_files};
use adodoc::adodoc::formats::FormatRegistry;
use adodoc::adodoc::{AdodocError, DocstringPolicy, ExtractError, ExtractOptions, OutputError};
use std::fs;
use std::path::PathBuf;

fn write(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_failures_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(&dir, "good.ado", "program good\n/* \"\"\"\nGood.\n\"\"\" */\nend\n");
    let bad = write(&dir, "bad.ado", "program bad\ndisplay 1\n");
    let missing = dir.path().join("missing.ado");
    let other = write(&dir, "other.do", "display 1\n");

    let registry = FormatRegistry::with_defaults();
    let report = process_files(
        &[good.clone(), bad.clone(), missing.clone(), other.clone()],
        &ExtractOptions::default(),
        &registry,
        "markdown",
    );

    assert!(!report.is_success());
    let outputs: Vec<_> = report.outputs.iter().map(|o| o.path.clone()).collect();
    assert_eq!(outputs, vec![good, other]);
    assert_eq!(
        report.outputs[0].rendered,
        "# Documentation for `good.ado`\n\n## `good`\n\n#### Good.\n"
    );

    let failures: Vec<_> = report.failures.iter().map(|f| f.path.clone()).collect();
    assert_eq!(failures, vec![bad, missing]);
    assert!(matches!(
        report.failures[0].error,
        AdodocError::Extract(ExtractError::UnterminatedSubroutine { .. })
    ));
    assert!(matches!(report.failures[1].error, AdodocError::Load(_)));
}

#[test]
fn test_strict_policy_fails_only_that_file() {
    let dir = tempfile::tempdir().unwrap();
    let open = write(&dir, "open.ado", "program a\n/* \"\"\"\nx\nend\n");
    let registry = FormatRegistry::with_defaults();
    let options = ExtractOptions {
        docstring_policy: DocstringPolicy::Fail,
        ..ExtractOptions::default()
    };

    let err = process_file(&open, &options, &registry, "markdown").unwrap_err();
    assert!(matches!(
        err,
        AdodocError::Extract(ExtractError::UnterminatedDocumentationBlock { .. })
    ));

    let lenient = process_file(&open, &ExtractOptions::default(), &registry, "markdown").unwrap();
    assert_eq!(lenient.extraction.diagnostics.len(), 1);
    assert_eq!(lenient.rendered, "# Documentation for `open.ado`\n");
}

#[test]
fn test_unknown_format_is_a_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "a.ado", "program a\nend\n");
    let registry = FormatRegistry::with_defaults();
    let err = process_file(&path, &ExtractOptions::default(), &registry, "pdf").unwrap_err();
    assert!(matches!(err, AdodocError::Format(_)));
}

#[test]
fn test_shared_stems_keep_full_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let first = write(&dir, "clean.do", "program first\n/* \"\"\"\nFirst.\n\"\"\" */\nend\n");
    let second = write(&dir, "clean.ado", "program second\n/* \"\"\"\nSecond.\n\"\"\" */\nend\n");
    let out = tempfile::tempdir().unwrap();

    let registry = FormatRegistry::with_defaults();
    let mut report = process_files(
        &[first, second],
        &ExtractOptions::default(),
        &registry,
        "markdown",
    );
    let written = report.write_outputs(out.path(), "md");

    assert!(report.is_success());
    assert_eq!(
        written,
        vec![out.path().join("clean.do.md"), out.path().join("clean.ado.md")]
    );
    assert!(fs::read_to_string(&written[0]).unwrap().contains("## `first`"));
    assert!(fs::read_to_string(&written[1]).unwrap().contains("## `second`"));
    assert!(!out.path().join("clean.md").exists());
}

#[test]
fn test_same_file_name_in_two_directories_is_a_collision() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    let first = write(&dir, "a/x.ado", "program first\n/* \"\"\"\nFirst.\n\"\"\" */\nend\n");
    let second = write(&dir, "b/x.ado", "program second\nend\n");
    let out = tempfile::tempdir().unwrap();

    let registry = FormatRegistry::with_defaults();
    let mut report = process_files(
        &[first.clone(), second.clone()],
        &ExtractOptions::default(),
        &registry,
        "markdown",
    );
    let written = report.write_outputs(out.path(), "md");

    assert_eq!(written, vec![out.path().join("x.ado.md")]);
    assert!(fs::read_to_string(&written[0]).unwrap().contains("## `first`"));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, second);
    match &report.failures[0].error {
        AdodocError::Output(OutputError::Collision { earlier, .. }) => assert_eq!(earlier, &first),
        other => panic!("expected a collision, got {other:?}"),
    }
}

#[test]
fn test_write_failure_does_not_stop_other_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = write(&dir, "blocked.ado", "program blocked\nend\n");
    let good = write(&dir, "good.ado", "program good\nend\n");
    let bad = write(&dir, "bad.ado", "program bad\n");
    let out = tempfile::tempdir().unwrap();
    // A directory where the document should go makes the write fail.
    fs::create_dir(out.path().join("blocked.md")).unwrap();

    let registry = FormatRegistry::with_defaults();
    let mut report = process_files(
        &[blocked.clone(), good, bad.clone()],
        &ExtractOptions::default(),
        &registry,
        "markdown",
    );
    let written = report.write_outputs(out.path(), "md");

    assert_eq!(written, vec![out.path().join("good.md")]);
    let failures: Vec<_> = report.failures.iter().map(|f| f.path.clone()).collect();
    assert_eq!(failures, vec![bad, blocked]);
    assert!(matches!(
        report.failures[1].error,
        AdodocError::Output(OutputError::Io { .. })
    ));
}
