// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small string helpers that every stage of the pipeline needs.

pub mod normalize;
