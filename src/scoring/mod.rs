// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores are additive per matched field. A whole-phrase title hit is worth
//! more than any single word hit elsewhere, so exact titles float to the top.

mod core;
pub mod ranking;

pub use self::core::*;
