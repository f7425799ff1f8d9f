//! Snapshot tests for assembled documents built from fixture files

use adodoc::adodoc::loader::SourceLoader;
use adodoc::adodoc::ExtractOptions;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cleaning_markdown() {
    let loader = SourceLoader::from_path(fixture_path("cleaning.ado")).unwrap();
    let extraction = loader.extract(&ExtractOptions::default()).unwrap();

    let names: Vec<_> = extraction.table.names().collect();
    assert_eq!(names, vec!["clean_vars", "quiet_helper", "summarize_all"]);
    assert!(extraction.diagnostics.is_empty());

    insta::assert_snapshot!("cleaning_markdown", extraction.to_markdown());
}

#[test]
fn test_cleaning_markdown_with_signatures() {
    let loader = SourceLoader::from_path(fixture_path("cleaning.ado")).unwrap();
    let options = ExtractOptions {
        signatures: true,
        ..ExtractOptions::default()
    };
    let extraction = loader.extract(&options).unwrap();

    let clean_vars = extraction.signatures["clean_vars"].as_ref().unwrap();
    assert_eq!(clean_vars.before, "varlist(min=1) [if] [in]");
    assert_eq!(clean_vars.after, "GENerate(name) [replace]");
    assert!(extraction.signatures["quiet_helper"].is_err());

    insta::assert_snapshot!(
        "cleaning_markdown_with_signatures",
        extraction.to_markdown()
    );
}

#[test]
fn test_header_and_body_ranges() {
    let loader = SourceLoader::from_path(fixture_path("cleaning.ado")).unwrap();
    let extraction = loader.extract(&ExtractOptions::default()).unwrap();
    let table = &extraction.table;

    assert_eq!(table.header().body.end, 7);
    assert_eq!(table.get("clean_vars").unwrap().body.start, 7);
    assert_eq!(table.get("clean_vars").unwrap().body.end, 20);
    assert_eq!(table.get("clean_vars").unwrap().extent.end, 21);
    assert_eq!(table.get("quiet_helper").unwrap().documentation, None);
}
