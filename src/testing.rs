// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::collections::HashMap;

use crate::index::InvertedIndex;
use crate::types::Document;

/// `foo.md`: one "hello", one "world".
pub fn foo_md() -> Document {
    Document::from_words("foo.md", ["hello", "world"])
}

/// `bar.md`: one "ciao", one "world".
pub fn bar_md() -> Document {
    Document::from_words("bar.md", ["ciao", "world"])
}

/// `baz.md` with the given words, each counted once per occurrence.
pub fn baz_md(words: &[&str]) -> Document {
    Document::from_words("baz.md", words.iter().copied())
}

/// Document with explicit counts.
pub fn doc_with_counts(name: &str, counts: &[(&str, u32)]) -> Document {
    let word_count: HashMap<String, u32> =
        counts.iter().map(|&(word, count)| (word.to_string(), count)).collect();
    Document::new(name, word_count)
}

/// Index holding `docs`, applied in order.
pub fn index_of(docs: &[Document]) -> InvertedIndex {
    let index = InvertedIndex::new(docs.len());
    for doc in docs {
        index.update(doc);
    }
    index
}
