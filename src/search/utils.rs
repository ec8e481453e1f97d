// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by matching, highlighting and suggestions.

use crate::util::normalize::normalize;

/// A query after normalization.
///
/// - `raw`: the caller's text, trimmed, original casing (what gets highlighted)
/// - `normalized`: trimmed and lowercased (the whole-phrase title test)
/// - `words`: distinct whitespace-separated words of `normalized`, first
///   occurrence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub raw: String,
    pub normalized: String,
    pub words: Vec<String>,
}

/// Parse a query string. Blank input yields `None`: search is opt-in.
///
/// # Example
///
/// ```ignore
/// let q = parse_query("  Bitcoin bitcoin Mining ").unwrap();
/// assert_eq!(q.words, vec!["bitcoin", "mining"]);
/// ```
pub fn parse_query(query: &str) -> Option<ParsedQuery> {
    let raw = query.trim();
    if raw.is_empty() {
        return None;
    }

    let normalized = normalize(raw);
    let mut words: Vec<String> = Vec::new();
    for word in normalized.split_whitespace() {
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }

    Some(ParsedQuery {
        raw: raw.to_string(),
        normalized,
        words,
    })
}
