// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query engine: raw query strings in, documents out.
//!
//! Two entry points share the per-term lookup of
//! [`InvertedIndex::search`](crate::InvertedIndex::search):
//! - [`search`] ranks documents across all terms;
//! - [`exact_match`] returns the unranked set matched by every term.
//!
//! Queries are lower-cased and split on single spaces. Runs of spaces yield
//! empty terms, which are logged and skipped.

mod exact;
mod ranked;

pub use exact::exact_match;
pub use ranked::search;

fn split_terms(query: &str) -> std::str::Split<'_, char> {
    query.split(' ')
}
