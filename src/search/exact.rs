// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean AND over query terms.

use std::collections::HashSet;

use crate::index::InvertedIndex;

use super::split_terms;

/// Names of documents matched by every term of `needle`.
///
/// Each term goes through [`InvertedIndex::search`], so a term that is not
/// indexed matches through its nearest words. Failed terms are logged and do
/// not constrain the result.
pub fn exact_match(needle: &str, index: &InvertedIndex) -> HashSet<String> {
    let needle = needle.to_lowercase();
    let mut result: Option<HashSet<String>> = None;

    for term in split_terms(&needle) {
        if term.is_empty() {
            tracing::warn!(term, "exact match skipped empty term");
            continue;
        }
        let docs = match index.search(term) {
            Ok(docs) => docs,
            Err(err) => {
                tracing::warn!(term, error = %err, "exact match failed");
                continue;
            }
        };

        let matched: HashSet<String> = docs.into_iter().map(|doc| doc.document).collect();
        result = Some(match result {
            None => matched,
            Some(prev) => prev.intersection(&matched).cloned().collect(),
        });
    }

    result.unwrap_or_default()
}
