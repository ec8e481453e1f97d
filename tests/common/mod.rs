//! Shared test utilities and fixtures.

#![allow(dead_code)]

use almanac::testing::{make_record_full, sample_records};
use almanac::{
    index_records, ContentIndex, ContentRecord, DisplayLabels, LocaleLabels, SearchResult,
    SearchService, Topic, Level,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// Re-export canonical test utilities from almanac::testing
#[allow(unused_imports)]
pub use almanac::testing::{make_record, sample_index};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small Spanish corpus, deliberately overlapping the English slugs.
pub fn spanish_records() -> Vec<ContentRecord> {
    vec![
        make_record_full(
            "what-is-bitcoin",
            "¿Qué es Bitcoin?",
            "Una moneda digital sin bancos.",
            &["básico", "moneda"],
            Topic::Basics,
            Level::Beginner,
        ),
        make_record_full(
            "how-mining-works",
            "Cómo funciona la minería",
            "Los mineros compiten para añadir bloques.",
            &["prueba-de-trabajo", "minería"],
            Topic::Mining,
            Level::Intermediate,
        ),
    ]
}

pub fn spanish_index() -> ContentIndex {
    index_records("es", spanish_records())
}

/// Labels with a Spanish override for two topics and one level.
pub fn spanish_labels() -> DisplayLabels {
    let es = LocaleLabels {
        topics: BTreeMap::from([
            (Topic::Basics, "Fundamentos".to_string()),
            (Topic::Mining, "Minería".to_string()),
        ]),
        levels: BTreeMap::from([(Level::Beginner, "Principiante".to_string())]),
        level_colors: BTreeMap::new(),
    };
    DisplayLabels::new("en").with_locale("es", es)
}

/// English sample corpus plus the Spanish corpus behind one service.
pub fn bilingual_service() -> SearchService {
    SearchService::new(spanish_labels())
        .with_index(sample_index())
        .with_index(spanish_index())
}

// ============================================================================
// RESULT HELPERS
// ============================================================================

pub fn slugs(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.entry.slug.as_str()).collect()
}

pub fn all_sample_slugs() -> Vec<String> {
    sample_records().into_iter().map(|r| r.slug).collect()
}

// ============================================================================
// CONTENT DIRECTORIES
// ============================================================================

/// Write `<root>/<locale>/manifest.json` plus one JSON file per record,
/// listed in the given order.
pub fn write_locale(root: &Path, locale: &str, records: &[ContentRecord]) {
    let dir = root.join(locale);
    fs::create_dir_all(&dir).unwrap();
    let mut documents = Vec::new();
    for record in records {
        let filename = format!("{}.json", record.slug);
        fs::write(dir.join(&filename), serde_json::to_string(record).unwrap()).unwrap();
        documents.push(filename);
    }
    write_manifest(root, locale, 1, &documents);
}

pub fn write_manifest(root: &Path, locale: &str, version: u32, documents: &[String]) {
    let manifest = serde_json::json!({ "version": version, "documents": documents });
    fs::write(root.join(locale).join("manifest.json"), manifest.to_string()).unwrap();
}
