//! Highlights attached to search results.

use super::common::{sample_index, spanish_index};
use almanac::{highlight_text, search, SearchFilters};

#[test]
fn test_summary_highlight() {
    let index = sample_index();
    let results = search(&index, "bitcoin", &SearchFilters::new());
    let summary_hit = &results[1];
    assert_eq!(
        summary_hit.highlights.summary.as_deref(),
        Some("Miners compete to add blocks and secure the <mark>Bitcoin</mark> network.")
    );
    assert!(summary_hit.highlights.title.is_none());
}

#[test]
fn test_tags_highlighted_as_joined_list() {
    let index = sample_index();
    let results = search(&index, "currency", &SearchFilters::new());
    let h = &results[0].highlights;
    assert_eq!(h.summary.as_deref(), Some("A digital <mark>currency</mark> without banks."));
    assert_eq!(h.tags.as_deref(), Some("basics, <mark>currency</mark>"));
}

#[test]
fn test_highlights_match_matched_fields() {
    let index = sample_index();
    for query in ["bitcoin", "bitcoin mining", "wallet", "proof", "blocks"] {
        for result in search(&index, query, &SearchFilters::new()) {
            assert_eq!(result.highlights.fields(), result.matched_on, "query '{}'", query);
        }
    }
}

#[test]
fn test_multi_word_query_marks_whole_phrase_only() {
    let index = sample_index();
    let results = search(&index, "bitcoin mining", &SearchFilters::new());
    let top = &results[0];
    assert_eq!(top.entry.slug, "how-mining-works");
    // the words match separately, but the phrase occurs nowhere
    assert_eq!(top.highlights.title.as_deref(), Some("How Mining Works"));
    assert!(!top.highlights.summary.as_deref().unwrap_or_default().contains("<mark>"));
}

#[test]
fn test_unicode_highlight_keeps_source_casing() {
    let index = spanish_index();
    let results = search(&index, "qué", &SearchFilters::new());
    assert_eq!(
        results[0].highlights.title.as_deref(),
        Some("¿<mark>Qué</mark> es Bitcoin?")
    );
}

#[test]
fn test_markup_in_content_is_escaped() {
    assert_eq!(
        highlight_text("Use <b>cold</b> storage", "cold"),
        "Use &lt;b&gt;<mark>cold</mark>&lt;/b&gt; storage"
    );
}
