//! Invariants of `search` over random corpora, queries and filters.

use almanac::{
    index_records, search, search_with_scores, ContentIndex, ContentRecord, ContentType, Level,
    MatchedField, SearchFilters, Topic,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

const VOCABULARY: &[&str] = &[
    "bitcoin", "mining", "wallet", "Lightning", "fees", "Halving", "node", "key", "seed",
    "privacy", "block", "chain", "Über", "café",
];

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(VOCABULARY).prop_map(str::to_string)
}

fn phrase(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..=max_words).prop_map(|w| w.join(" "))
}

fn record() -> impl Strategy<Value = ContentRecord> {
    (
        "[a-z]{1,6}",
        phrase(4),
        phrase(8),
        prop::collection::vec(word(), 0..3),
        prop::sample::select(Topic::ALL),
        prop::sample::select(Level::ALL),
        prop::sample::select(ContentType::ALL),
    )
        .prop_map(|(slug, title, summary, tags, topic, level, content_type)| ContentRecord {
            slug,
            title,
            summary,
            topic,
            level,
            content_type,
            tags,
        })
}

fn index() -> impl Strategy<Value = ContentIndex> {
    prop::collection::vec(record(), 0..20).prop_map(|records| index_records("en", records))
}

/// Vocabulary words in random case, sometimes with junk and regex syntax.
fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => phrase(3),
        1 => phrase(2).prop_map(|q| q.to_uppercase()),
        1 => "[a-z()*+?|\\[\\]\\\\.^$ ]{0,12}",
    ]
}

fn filters() -> impl Strategy<Value = SearchFilters> {
    (
        prop::option::of(prop::sample::select(Topic::ALL)),
        prop::option::of(prop::sample::select(ContentType::ALL)),
        prop::option::of(prop::sample::select(Level::ALL)),
        prop::option::of(1usize..10),
    )
        .prop_map(|(topic, content_type, level, limit)| SearchFilters {
            topic,
            content_type,
            level,
            limit,
        })
}

fn field_text(result: &almanac::SearchResult, field: MatchedField) -> String {
    match field {
        MatchedField::Title => result.entry.title.to_lowercase(),
        MatchedField::Summary => result.entry.summary.to_lowercase(),
        MatchedField::Tags => result.entry.tags.join("\u{0}").to_lowercase(),
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every result matched somewhere, and every matched field contains a
    /// query word.
    #[test]
    fn prop_matched_fields_contain_a_query_word(index in index(), query in query()) {
        let words: Vec<String> = query.to_lowercase().split_whitespace().map(String::from).collect();
        for result in search(&index, &query, &SearchFilters::new()) {
            prop_assert!(!result.matched_on.is_empty());
            for field in result.matched_on.iter() {
                let text = field_text(&result, field);
                prop_assert!(
                    words.iter().any(|w| text.contains(w.as_str())),
                    "{:?} of {} contains none of {:?}", field, result.entry.slug, words
                );
            }
        }
    }

    /// Scores are non-increasing down the list.
    #[test]
    fn prop_scores_non_increasing(index in index(), query in query()) {
        let scored = search_with_scores(&index, &query, &SearchFilters::new());
        for pair in scored.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    /// Filters hold for every result and the limit is respected.
    #[test]
    fn prop_filters_and_limit_respected(index in index(), query in query(), filters in filters()) {
        let results = search(&index, &query, &filters);
        if let Some(limit) = filters.limit {
            prop_assert!(results.len() <= limit);
        }
        for result in &results {
            prop_assert!(filters.admits(&result.entry));
        }
    }

    /// A limited search is a prefix of the unlimited one.
    #[test]
    fn prop_limit_is_prefix(index in index(), query in query(), limit in 1usize..10) {
        let all = search(&index, &query, &SearchFilters::new());
        let some = search(&index, &query, &SearchFilters::new().limit(limit));
        prop_assert_eq!(&all[..some.len()], &some[..]);
        prop_assert_eq!(some.len(), all.len().min(limit));
    }

    /// Highlights exist exactly for the matched fields, and mark nothing but
    /// the query.
    #[test]
    fn prop_highlights_follow_matched_on(index in index(), query in query()) {
        for result in search(&index, &query, &SearchFilters::new()) {
            prop_assert_eq!(result.highlights.fields(), result.matched_on);
            let trimmed = query.trim().to_lowercase();
            for field in result.matched_on.iter() {
                let marked = result.highlights.get(field).unwrap_or_default();
                for piece in marked.split("<mark>").skip(1) {
                    let inner = piece.split("</mark>").next().unwrap_or_default();
                    prop_assert_eq!(unescape(inner).to_lowercase(), trimmed.clone());
                }
            }
        }
    }

    /// Whitespace-only queries return nothing.
    #[test]
    fn prop_blank_query_empty(index in index(), blank in "[ \t\n]{0,6}") {
        prop_assert!(search(&index, &blank, &SearchFilters::new()).is_empty());
    }

    /// Results are a pure function of their inputs.
    #[test]
    fn prop_deterministic(index in index(), query in query()) {
        prop_assert_eq!(
            search(&index, &query, &SearchFilters::new()),
            search(&index, &query, &SearchFilters::new())
        );
    }

    /// Slugs are unique within one result list.
    #[test]
    fn prop_no_duplicate_slugs(index in index(), query in query()) {
        let results = search(&index, &query, &SearchFilters::new());
        let mut slugs: Vec<&str> = results.iter().map(|r| r.entry.slug.as_str()).collect();
        let total = slugs.len();
        slugs.sort_unstable();
        slugs.dedup();
        prop_assert_eq!(slugs.len(), total);
    }
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
