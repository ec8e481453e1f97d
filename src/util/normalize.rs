// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text folding shared by indexing, matching and suggestions.
//!
//! Matching is a plain case-insensitive substring test, so folding is just
//! trim + Unicode lowercase. No diacritic stripping: a query word must appear
//! verbatim (modulo case) in the field it matched.

/// Trim and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split folded text into vocabulary terms: runs of alphanumeric characters,
/// with apostrophes kept inside a run so contractions stay whole.
///
/// Used to build the did-you-mean vocabulary from titles and tags, where
/// punctuation (`?`, `-`, `,`) should not glue words together.
pub fn terms(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || is_apostrophe(c)))
        .map(|t| t.trim_matches(is_apostrophe))
        .filter(|t| !t.is_empty())
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}
