//! Blank queries, no matches, odd characters, empty indexes.

use super::common::sample_index;
use almanac::{search, ContentIndex, SearchFilters};

#[test]
fn test_blank_queries_return_nothing() {
    let index = sample_index();
    for query in ["", " ", "\t\n", "   \u{3000}  "] {
        assert!(
            search(&index, query, &SearchFilters::new()).is_empty(),
            "query {:?} should be blank",
            query
        );
    }
}

#[test]
fn test_no_match_returns_nothing() {
    let index = sample_index();
    assert!(search(&index, "xyzzyplugh", &SearchFilters::new()).is_empty());
}

#[test]
fn test_regex_metacharacters_do_not_panic() {
    let index = sample_index();
    for query in ["(", "[", "*", "a|b", "\\", ".*", "^$", "?", "{2}", "c++"] {
        let _ = search(&index, query, &SearchFilters::new());
    }
}

#[test]
fn test_punctuation_query_matches_literally() {
    let index = sample_index();
    let results = search(&index, "?", &SearchFilters::new());
    // two titles end with a question mark
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|r| r.highlights.title.as_deref().unwrap_or_default().contains("<mark>?</mark>")));
}

#[test]
fn test_empty_index() {
    let index = ContentIndex::empty("en");
    assert!(search(&index, "bitcoin", &SearchFilters::new()).is_empty());
}

#[test]
fn test_very_long_query() {
    let index = sample_index();
    let query = "bitcoin ".repeat(2_000);
    let results = search(&index, &query, &SearchFilters::new());
    assert_eq!(results[0].entry.slug, "what-is-bitcoin");
}
