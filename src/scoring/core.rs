// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field matching and the additive score.
//!
//! # Field rules
//!
//! A field matches when any query word is a substring of its folded text
//! (for tags: of any folded tag). An entry with no matching field is not a
//! result at all.
//!
//! # Constants
//!
//! | Field   | Bonus                                   |
//! |---------|-----------------------------------------|
//! | Title   | 10 if the whole query is in the title,  |
//! |         | otherwise 3 per matching word           |
//! | Summary | 2 per matching word                     |
//! | Tags    | 2 per word found in at least one tag    |
//!
//! The whole-phrase title bonus replaces the per-word title bonus; it does not
//! stack with it.

use crate::search::utils::ParsedQuery;
use crate::types::{FoldedText, MatchedField, MatchedOn};

/// Whole normalized query found inside the title.
pub const TITLE_PHRASE_BONUS: u32 = 10;

/// Each query word found in the title (when the phrase itself is not).
pub const TITLE_WORD_BONUS: u32 = 3;

/// Each query word found in the summary.
pub const SUMMARY_WORD_BONUS: u32 = 2;

/// Each query word found in at least one tag.
pub const TAG_WORD_BONUS: u32 = 2;

/// Which fields matched and what they were worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch {
    pub matched_on: MatchedOn,
    pub score: u32,
}

/// Score one entry against a parsed query. `None` means "not a result".
pub(crate) fn score_fields(text: &FoldedText, query: &ParsedQuery) -> Option<FieldMatch> {
    let mut matched_on = MatchedOn::empty();
    let mut score = 0;

    let title_words = count_words(&query.words, |w| text.title.contains(w));
    if title_words > 0 {
        matched_on.insert(MatchedField::Title);
        score += title_bonus(&text.title, &query.normalized, title_words);
    }

    let summary_words = count_words(&query.words, |w| text.summary.contains(w));
    if summary_words > 0 {
        matched_on.insert(MatchedField::Summary);
        score += SUMMARY_WORD_BONUS * summary_words;
    }

    let tag_words = count_words(&query.words, |w| text.tags.iter().any(|t| t.contains(w)));
    if tag_words > 0 {
        matched_on.insert(MatchedField::Tags);
        score += TAG_WORD_BONUS * tag_words;
    }

    if matched_on.is_empty() {
        None
    } else {
        Some(FieldMatch { matched_on, score })
    }
}

/// Title bonus given the folded title, the folded whole query and the
/// number of query words found in the title.
pub fn title_bonus(title: &str, phrase: &str, matching_words: u32) -> u32 {
    if title.contains(phrase) {
        TITLE_PHRASE_BONUS
    } else {
        TITLE_WORD_BONUS * matching_words
    }
}

fn count_words(words: &[String], mut hit: impl FnMut(&str) -> bool) -> u32 {
    words.iter().filter(|w| hit(w.as_str())).count() as u32
}
