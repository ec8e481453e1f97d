// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution: filter, match, score, rank, highlight.
//!
//! A search is a pure function of (index, query, filters). The index is only
//! read, so any number of searches can run against the same index at once.
//!
//! The scan is linear over the index. That is plenty for a hand-written
//! knowledge base; a corpus large enough to notice should swap in an inverted
//! index behind the same `search` signature.

pub mod filters;
pub mod utils;

pub use filters::SearchFilters;
pub use utils::{parse_query, ParsedQuery};

use crate::highlight::Highlighter;
use crate::scoring::ranking::{rank, ScoredEntry};
use crate::scoring::score_fields;
use crate::types::{ContentIndex, SearchResult};

/// Search an index. Blank queries and zero matches both return `[]`.
pub fn search(index: &ContentIndex, query: &str, filters: &SearchFilters) -> Vec<SearchResult> {
    search_with_scores(index, query, filters)
        .into_iter()
        .map(|(result, _)| result)
        .collect()
}

/// Like `search`, but also hands back each result's score (for `--explain`
/// style debugging output). The score never becomes part of `SearchResult`.
pub fn search_with_scores(
    index: &ContentIndex,
    query: &str,
    filters: &SearchFilters,
) -> Vec<(SearchResult, u32)> {
    let Some(parsed) = parse_query(query) else {
        return Vec::new();
    };

    let ranked = rank(score_index(index, &parsed, filters), filters.limit);
    let highlighter = Highlighter::new(&parsed.raw);

    tracing::debug!(
        locale = index.locale(),
        query = %parsed.raw,
        results = ranked.len(),
        "search complete"
    );

    ranked
        .into_iter()
        .map(|scored| {
            let result = SearchResult {
                entry: scored.entry.clone(),
                matched_on: scored.matched_on,
                highlights: highlighter.highlight(scored.entry, scored.matched_on),
            };
            (result, scored.score)
        })
        .collect()
}

/// Filter first, then score; entries without a field match drop out.
fn score_index<'a>(
    index: &'a ContentIndex,
    query: &ParsedQuery,
    filters: &SearchFilters,
) -> Vec<ScoredEntry<'a>> {
    index
        .searchable()
        .enumerate()
        .filter(|(_, (entry, _))| filters.admits(entry))
        .filter_map(|(position, (entry, text))| {
            score_fields(text, query).map(|m| ScoredEntry {
                position,
                entry,
                matched_on: m.matched_on,
                score: m.score,
            })
        })
        .collect()
}
