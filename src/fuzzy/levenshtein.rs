// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so pairs whose
//! lengths differ by more than the bound are rejected before the DP runs.
//! Inside the DP, once every cell of a row exceeds the bound the answer can
//! only grow, so the scan stops there too.

/// Edit distance between `a` and `b` if it is at most `max`.
///
/// Counts Unicode scalar values, not bytes, so `café` vs `cafe` is one edit.
pub fn bounded_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b: Vec<char> = b.chars().collect();
    let b_len = b.len();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let distance = dp[b_len];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, max).is_some()
}
