//! Loading a content tree: `<root>/<locale>/manifest.json` plus record files.

use super::common::{spanish_records, write_locale, write_manifest};
use almanac::testing::sample_records;
use almanac::{build_index, Config, ContentSource, DirectorySource, SearchParams, SearchService, SourceError};
use std::fs;
use tempfile::TempDir;

fn content_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_locale(dir.path(), "en", &sample_records());
    write_locale(dir.path(), "es", &spanish_records());
    dir
}

#[test]
fn test_loads_records_in_manifest_order() {
    let tree = content_tree();
    let index = build_index(&DirectorySource::new(tree.path()), Some("en"));
    let slugs: Vec<&str> = index.entries().iter().map(|e| e.slug.as_str()).collect();
    let expected: Vec<String> = sample_records().into_iter().map(|r| r.slug).collect();
    assert_eq!(slugs, expected);
}

#[test]
fn test_discovers_locales_sorted() {
    let tree = content_tree();
    // a directory without a manifest is not a locale
    fs::create_dir(tree.path().join("drafts")).unwrap();
    let locales = DirectorySource::new(tree.path()).locales().unwrap();
    assert_eq!(locales, vec!["en", "es"]);
}

#[test]
fn test_default_locale_when_unspecified() {
    let tree = content_tree();
    let index = build_index(&DirectorySource::new(tree.path()), None);
    assert_eq!(index.locale(), "en");
    assert_eq!(index.len(), sample_records().len());
}

#[test]
fn test_bad_record_is_skipped() {
    let tree = content_tree();
    let es = tree.path().join("es");
    fs::write(es.join("broken.json"), "{ not json").unwrap();
    fs::write(
        es.join("unknown-topic.json"),
        r#"{"slug":"x","title":"X","summary":"S","topic":"astrology","level":"beginner","type":"qa"}"#,
    )
    .unwrap();

    let mut documents: Vec<String> = spanish_records()
        .iter()
        .map(|r| format!("{}.json", r.slug))
        .collect();
    documents.insert(1, "broken.json".to_string());
    documents.push("unknown-topic.json".to_string());
    documents.push("missing-file.json".to_string());
    write_manifest(tree.path(), "es", 1, &documents);

    let index = build_index(&DirectorySource::new(tree.path()), Some("es"));
    let slugs: Vec<&str> = index.entries().iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["what-is-bitcoin", "how-mining-works"]);
}

#[test]
fn test_record_without_tags_and_qa_spelling() {
    let tree = TempDir::new().unwrap();
    let en = tree.path().join("en");
    fs::create_dir(&en).unwrap();
    fs::write(
        en.join("fees.json"),
        r#"{"slug":"fees","title":"Fees","summary":"What you pay.","topic":"basics","level":"beginner","type":"q&a"}"#,
    )
    .unwrap();
    write_manifest(tree.path(), "en", 1, &["fees.json".to_string()]);

    let index = build_index(&DirectorySource::new(tree.path()), Some("en"));
    let entry = index.get("fees").unwrap();
    assert!(entry.tags.is_empty());
    assert_eq!(entry.content_type.as_str(), "qa");
}

#[test]
fn test_manifest_version_mismatch() {
    let tree = content_tree();
    write_manifest(tree.path(), "es", 2, &[]);
    let source = DirectorySource::new(tree.path());
    assert!(matches!(
        source.load("es"),
        Err(SourceError::ManifestVersion { found: 2, expected: 1 })
    ));
    assert!(build_index(&source, Some("es")).is_empty());
}

#[test]
fn test_missing_locale_builds_empty_index() {
    let tree = content_tree();
    let source = DirectorySource::new(tree.path());
    assert!(matches!(source.load("fr"), Err(SourceError::MissingLocale { .. })));
    let index = build_index(&source, Some("fr"));
    assert_eq!(index.locale(), "fr");
    assert!(index.is_empty());
}

#[test]
fn test_missing_root_is_an_error_for_discovery() {
    let source = DirectorySource::new("/definitely/not/here");
    assert!(matches!(source.locales(), Err(SourceError::Io { .. })));
}

#[test]
fn test_missing_root_discovers_nothing() {
    let source = DirectorySource::new("/definitely/not/here");
    assert!(source.discover_locales().is_empty());
}

#[test]
fn test_service_over_missing_root_serves_empty_results() {
    let source = DirectorySource::new("/definitely/not/here");
    let config = Config {
        locales: vec!["en".to_string()],
        ..Config::default()
    };
    let service = SearchService::from_source(&source, &config, &source.discover_locales());
    assert_eq!(service.locales(), vec!["en"]);

    let params = SearchParams {
        q: Some("bitcoin".to_string()),
        ..SearchParams::default()
    };
    let response = service.handle(&params).unwrap();
    assert!(response.results.is_empty());
}
