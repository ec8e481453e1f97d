// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored entries get sorted.
//!
//! The score lives only in `ScoredEntry`, the intermediate tuple used while
//! ranking. Public results never carry it.

use crate::types::{ContentIndexEntry, MatchedOn};
use std::cmp::Ordering;

/// An entry that matched, with its score and index position.
#[derive(Debug, Clone, Copy)]
pub struct ScoredEntry<'a> {
    pub position: usize,
    pub entry: &'a ContentIndexEntry,
    pub matched_on: MatchedOn,
    pub score: u32,
}

/// Compare two scored entries for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Position** - index order, so equal scores keep source order and the
///    ranking is deterministic for a given index
pub fn compare_scored(a: &ScoredEntry<'_>, b: &ScoredEntry<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort by `compare_scored` and cut to `limit`.
pub fn rank<'a>(mut scored: Vec<ScoredEntry<'a>>, limit: Option<usize>) -> Vec<ScoredEntry<'a>> {
    scored.sort_by(compare_scored);
    if let Some(limit) = limit {
        scored.truncate(limit);
    }
    scored
}
