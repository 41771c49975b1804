// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via a weighted edit distance.

pub mod edit;

pub use edit::{distance, distance_full, EditGrid};
