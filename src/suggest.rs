// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! As-you-type assistance: suggestions, "did you mean", trending searches.
//!
//! All three read the same index the search uses and are deterministic for a
//! given index and input.
//!
//! # Did-you-mean
//!
//! The vocabulary is every alphanumeric term (3+ chars) of every title and
//! tag, folded, in first-appearance order. Each query word that matches
//! nothing is replaced by the nearest vocabulary term within:
//!
//! | Word length | Max edits |
//! |-------------|-----------|
//! | 3-4         | 1         |
//! | 5+          | 2         |
//!
//! Ties go to the smaller distance, then to the term seen first.

use std::collections::{HashMap, HashSet};

use crate::fuzzy::bounded_distance;
use crate::types::ContentIndex;
use crate::util::normalize::{normalize, terms};

/// Queries shorter than this get no suggestions.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Queries shorter than this get no correction.
pub const MIN_DID_YOU_MEAN_LEN: usize = 3;

/// Shortest vocabulary term considered for corrections.
pub const MIN_TERM_LEN: usize = 3;

/// Curated entry points, used when the index has no tags to derive from.
pub const DEFAULT_TRENDING: &[&str] = &[
    "what is bitcoin",
    "mining",
    "wallets",
    "halving",
    "lightning",
    "self-custody",
];

/// Titles and tags containing the query, deduplicated, original casing.
///
/// Scans each entry's title and then its tags, in index order, and stops at
/// `limit`.
pub fn search_suggestions(index: &ContentIndex, query: &str, limit: usize) -> Vec<String> {
    let needle = normalize(query);
    if needle.chars().count() < MIN_SUGGESTION_QUERY_LEN || limit == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = Vec::new();

    let candidates = index
        .entries()
        .iter()
        .flat_map(|e| std::iter::once(&e.title).chain(e.tags.iter()));

    for candidate in candidates {
        if candidate.to_lowercase().contains(&needle) && seen.insert(candidate.as_str()) {
            out.push(candidate.clone());
            if out.len() == limit {
                break;
            }
        }
    }
    out
}

/// A corrected query for a near-miss, or `None`.
///
/// `None` when the query is too short, when any of its words already matches
/// a title, summary or tag, or when no word has a close vocabulary term.
/// Never returns the query itself.
pub fn did_you_mean(index: &ContentIndex, query: &str) -> Option<String> {
    let normalized = normalize(query);
    if normalized.chars().count() < MIN_DID_YOU_MEAN_LEN {
        return None;
    }

    let words: Vec<&str> = normalized.split_whitespace().collect();
    let already_matches = index.searchable().any(|(_, text)| {
        words.iter().any(|w| {
            text.title.contains(w) || text.summary.contains(w) || text.tags.iter().any(|t| t.contains(w))
        })
    });
    if already_matches {
        return None;
    }

    let vocabulary = vocabulary(index);
    let mut changed = false;
    let corrected: Vec<&str> = words
        .iter()
        .map(|&word| match closest_term(word, &vocabulary) {
            Some(term) => {
                changed = true;
                term
            }
            None => word,
        })
        .collect();

    let corrected = corrected.join(" ");
    (changed && corrected != normalized).then_some(corrected)
}

/// Most frequent tags (case-insensitive count, first spelling kept), or the
/// curated defaults when the index has no tags.
pub fn trending_searches(index: &ContentIndex, limit: usize) -> Vec<String> {
    // folded tag -> (first spelling, first position, count)
    let mut counts: HashMap<String, (&str, usize, usize)> = HashMap::new();
    let tags = index.entries().iter().flat_map(|e| e.tags.iter());
    for (position, tag) in tags.enumerate() {
        counts
            .entry(tag.to_lowercase())
            .and_modify(|(_, _, count)| *count += 1)
            .or_insert((tag.as_str(), position, 1));
    }

    if counts.is_empty() {
        return DEFAULT_TRENDING
            .iter()
            .take(limit)
            .map(|s| s.to_string())
            .collect();
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts.into_values().collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.1.cmp(&b.1)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(tag, _, _)| tag.to_string())
        .collect()
}

fn max_edits(word: &str) -> usize {
    if word.chars().count() <= 4 {
        1
    } else {
        2
    }
}

/// Folded title and tag terms in first-appearance order.
fn vocabulary(index: &ContentIndex) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut vocab: Vec<&str> = Vec::new();
    for (_, text) in index.searchable() {
        let fields = std::iter::once(text.title.as_str()).chain(text.tags.iter().map(String::as_str));
        for term in fields.flat_map(terms) {
            if term.chars().count() >= MIN_TERM_LEN && seen.insert(term) {
                vocab.push(term);
            }
        }
    }
    vocab
}

fn closest_term<'v>(word: &str, vocabulary: &[&'v str]) -> Option<&'v str> {
    if word.chars().count() < MIN_TERM_LEN {
        return None;
    }
    let max = max_edits(word);
    vocabulary
        .iter()
        .enumerate()
        .filter_map(|(position, &term)| {
            bounded_distance(word, term, max)
                .filter(|&d| d > 0)
                .map(|d| (d, position, term))
        })
        .min_by_key(|&(d, position, _)| (d, position))
        .map(|(_, _, term)| term)
}
