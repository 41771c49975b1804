// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary documents and queries at the index and query engine to
//! check they never panic and never return duplicate or out-of-order
//! results. Emoji, RTL text, null bytes and runs of spaces included.

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mdindexer::{exact_match, search, Document, InvertedIndex};

#[derive(Debug, Arbitrary)]
struct Input {
    docs: Vec<(u8, Vec<(String, u8)>)>,
    query: String,
}

fuzz_target!(|input: Input| {
    if input.query.len() > 256 || input.docs.len() > 32 {
        return;
    }

    let index = InvertedIndex::new(input.docs.len());
    for (name, words) in input.docs {
        let word_count = words
            .into_iter()
            .filter(|(word, _)| word.len() <= 64)
            .map(|(word, count)| (word, u32::from(count)))
            .collect();
        // Few distinct names, so re-indexing paths get exercised.
        index.update(&Document::new(format!("doc{}", name % 8), word_count));
    }

    let results = search(&input.query, &index);
    let mut seen = HashSet::new();
    for pair in results.windows(2) {
        assert!(pair[0].rank <= pair[1].rank);
    }
    for score in &results {
        assert!(seen.insert(score.document.clone()));
    }

    let matched = exact_match(&input.query, &index);
    assert!(matched.len() <= index.document_count());
});
