// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The inverted index: sparse word columns plus the document name registry.

mod column;
mod inverted;

pub use column::WordColumn;
pub use inverted::{IndexSnapshot, InvertedIndex};
