//! Topic, type, level and limit.

use super::common::{sample_index, slugs};
use almanac::{search, ContentType, Level, SearchFilters, Topic};

#[test]
fn test_level_filter() {
    let index = sample_index();
    let filters = SearchFilters::new().level(Level::Advanced);
    let results = search(&index, "mining", &filters);
    assert_eq!(slugs(&results), vec!["is-mining-wasteful"]);
}

#[test]
fn test_type_filter() {
    let index = sample_index();
    let filters = SearchFilters::new().content_type(ContentType::Qa);
    let results = search(&index, "mining", &filters);
    assert_eq!(slugs(&results), vec!["is-mining-wasteful"]);
}

#[test]
fn test_topic_filter_can_exclude_everything() {
    let index = sample_index();
    let filters = SearchFilters::new().topic(Topic::Wallets);
    assert!(search(&index, "mining", &filters).is_empty());
}

#[test]
fn test_filters_combine() {
    let index = sample_index();
    let filters = SearchFilters::new()
        .topic(Topic::Mining)
        .level(Level::Intermediate);
    let results = search(&index, "proof", &filters);
    assert_eq!(slugs(&results), vec!["how-mining-works"]);
}

#[test]
fn test_limit_truncates_after_ranking() {
    let index = sample_index();
    let results = search(&index, "mining", &SearchFilters::new().limit(1));
    assert_eq!(slugs(&results), vec!["how-mining-works"]);
}

#[test]
fn test_filter_applies_before_limit() {
    let index = sample_index();
    let filters = SearchFilters::new().level(Level::Intermediate).limit(1);
    let results = search(&index, "bitcoin", &filters);
    // the top "bitcoin" hit is a beginner article; the filter removes it
    // before the limit is taken
    assert_eq!(slugs(&results), vec!["how-mining-works"]);
}

#[test]
fn test_every_result_satisfies_filters() {
    let index = sample_index();
    for level in Level::ALL {
        let filters = SearchFilters::new().level(*level);
        for result in search(&index, "the", &filters) {
            assert_eq!(result.entry.level, *level);
        }
    }
}

#[test]
fn test_topic_filter_beats_strong_text_match() {
    let index = sample_index();
    let results = search(&index, "bitcoin", &SearchFilters::new().topic(Topic::Mining));
    // "What is Bitcoin?" has the strongest match but is a basics article
    assert_eq!(slugs(&results), vec!["how-mining-works"]);
    assert!(results.iter().all(|r| r.entry.topic == Topic::Mining));
}
