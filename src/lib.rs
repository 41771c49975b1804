// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy inverted index over a tree of text files.
//!
//! Files are tokenized into lower-cased identifier counts, folded into a
//! word × document frequency matrix, and queried with multi-term search that
//! falls back to the closest indexed words when a term is unknown.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │   build/     │────▶│    index/     │────▶│   search/    │
//! │ (discover,   │     │ (WordColumn,  │     │ (search,     │
//! │  tokenize,   │     │ InvertedIndex)│     │  exact_match)│
//! │  ingest)     │     └───────────────┘     └──────────────┘
//! └──────────────┘             │                     │
//!                              ▼                     ▼
//!                      ┌───────────────┐     ┌──────────────┐
//!                      │   binary/     │     │   fuzzy/     │
//!                      │ (.mdix files) │     │ (distance)   │
//!                      └───────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use mdindexer::{search, Document, InvertedIndex};
//!
//! let index = InvertedIndex::new(2);
//! index.update(&Document::from_words("foo.md", ["hello", "world"]));
//! index.update(&Document::from_words("bar.md", ["ciao", "world"]));
//!
//! let results = search("wrld", &index);
//! assert_eq!(results.len(), 2);
//! ```

pub mod binary;
pub mod build;
mod error;
pub mod fuzzy;
mod index;
mod search;
pub mod testing;
mod types;

pub use error::{IndexError, Result};
pub use fuzzy::{distance, distance_full, EditGrid};
pub use index::{IndexSnapshot, InvertedIndex, WordColumn};
pub use search::{exact_match, search};
pub use types::{DocList, DocRelevance, Document, Score, ScoreList};
