// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bounded edit distance.
//!
//! Used by "did you mean". Vocabularies here are a few thousand terms at most,
//! so a bounded DP per candidate is fast enough without an automaton.

mod levenshtein;

pub use levenshtein::*;
