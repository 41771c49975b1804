// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-term ranked search.
//!
//! Each term is looked up on its own (exact or fuzzy). The first term seeds a
//! score per document; later terms add to documents that already have a
//! score. Only documents matched by the last successfully searched term are
//! returned. Lower rank means a better match.

use std::collections::{HashMap, HashSet};

use crate::fuzzy::distance;
use crate::index::InvertedIndex;
use crate::types::{Score, ScoreList};

use super::split_terms;

/// Rank every document that matches `query`.
///
/// Term failures are logged and skipped; they never fail the query.
pub fn search(query: &str, index: &InvertedIndex) -> ScoreList {
    if query.is_empty() {
        return ScoreList::new();
    }

    let query = query.to_lowercase();
    let mut scores: HashMap<String, usize> = HashMap::new();
    let mut active: HashSet<String> = HashSet::new();

    for (i, term) in split_terms(&query).enumerate() {
        if term.is_empty() {
            tracing::warn!(term, position = i, "search skipped empty term");
            continue;
        }
        let docs = match index.search(term) {
            Ok(docs) => docs,
            Err(err) => {
                tracing::warn!(term, error = %err, "search failed");
                continue;
            }
        };

        let mut matched = HashSet::with_capacity(docs.len());
        for doc in docs {
            let contribution = doc.distance + doc.rank;
            if i == 0 {
                scores.insert(doc.document.clone(), contribution);
            } else if let Some(score) = scores.get_mut(&doc.document) {
                *score += contribution;
            }
            matched.insert(doc.document);
        }
        active = matched;
    }

    let query_len = query.chars().count() as isize;
    let mut list: ScoreList = scores
        .into_iter()
        .filter(|(document, _)| active.contains(document))
        .map(|(document, rank)| {
            let name_len = document.chars().count() as isize;
            let name_distance = distance(&query, &document) as isize - (name_len - query_len);
            Score {
                document,
                rank,
                name_distance,
            }
        })
        .collect();

    // Rank decides; name distance (then name) only orders equal ranks.
    list.sort_unstable_by(|a, b| {
        a.name_distance
            .cmp(&b.name_distance)
            .then_with(|| a.document.cmp(&b.document))
    });
    list.sort_by_key(|score| score.rank);

    list
}
