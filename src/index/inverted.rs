// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word × document frequency matrix.
//!
//! The index is a sparse matrix: one [`WordColumn`] per word, one position
//! per document name. Positions are handed out in registration order and are
//! never reused, so a column entry stays meaningful for the life of the index.
//!
//! All state sits behind one `RwLock`. [`InvertedIndex::update`] takes the
//! write half for its whole sweep, so readers never observe a half-replaced
//! document.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **WORD_LIVE**: a word is in `words` iff some document has a positive
//!    count for it.
//! 2. **POSITION_STABLE**: `names[p]` never changes once assigned, and
//!    `positions[names[p]] == p`.
//! 3. **FULL_REPLACEMENT**: after `update(doc)`, the words with a live entry
//!    at `doc`'s position are exactly the positive-count words of `doc`.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};
use crate::fuzzy::distance;
use crate::index::WordColumn;
use crate::types::{DocList, DocRelevance, Document};

/// Serializable form of the index.
///
/// Column position maps and the name lookup table are derived data and are
/// rebuilt on restore.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub names: Vec<String>,
    pub words: Vec<WordColumn>,
}

#[derive(Debug, Default)]
struct IndexState {
    capacity: usize,
    names: Vec<String>,
    positions: HashMap<String, usize>,
    words: HashMap<String, WordColumn>,
}

#[derive(Debug, Default)]
pub struct InvertedIndex {
    state: RwLock<IndexState>,
}

impl InvertedIndex {
    /// Index sized for `size` documents.
    pub fn new(size: usize) -> Self {
        Self {
            state: RwLock::new(IndexState {
                capacity: size,
                names: Vec::with_capacity(size),
                positions: HashMap::with_capacity(size),
                words: HashMap::new(),
            }),
        }
    }

    /// Number of documents the name registry holds without growing past the
    /// requested size.
    pub fn capacity(&self) -> usize {
        let state = self.state.read();
        state.capacity.max(state.names.len())
    }

    /// Number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.state.read().words.len()
    }

    /// Number of registered document names, including fully emptied ones.
    pub fn document_count(&self) -> usize {
        self.state.read().names.len()
    }

    /// Name registered at `position`.
    pub fn document_name(&self, position: usize) -> Option<String> {
        self.state.read().names.get(position).cloned()
    }

    /// Position of a registered document name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.state.read().positions.get(name).copied()
    }

    /// Whether `word` currently has a column.
    pub fn contains_word(&self, word: &str) -> bool {
        self.state.read().words.contains_key(word)
    }

    /// Replace the indexed word counts of `doc`.
    pub fn update(&self, doc: &Document) {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let (position, first_time) = match state.positions.get(&doc.name) {
            Some(&position) => (position, false),
            None => {
                let position = state.names.len();
                state.names.push(doc.name.clone());
                state.positions.insert(doc.name.clone(), position);
                (position, true)
            }
        };

        for (word, &count) in &doc.word_count {
            match state.words.get_mut(word) {
                Some(column) => column.upsert(position, count),
                // Zero counts never create a column (WORD_LIVE).
                None if count > 0 => {
                    let mut column = WordColumn::new(word.as_str());
                    column.upsert(position, count);
                    state.words.insert(word.clone(), column);
                }
                None => {}
            }
        }

        // A new document has nothing stale to sweep.
        if !first_time {
            state.words.retain(|word, column| {
                if doc.word_count.contains_key(word) {
                    return true;
                }
                column.remove(position);
                !column.is_empty()
            });
        }

        tracing::debug!(
            document = %doc.name,
            position,
            first_time,
            words = doc.word_count.len(),
            vocabulary = state.words.len(),
            "index updated"
        );
    }

    /// Documents containing `term`, or the words closest to it.
    ///
    /// An indexed term matches itself at distance 0. Otherwise every word at
    /// the minimum edit distance from `term` is a candidate. Results are
    /// sorted by ascending count; `rank` is the resulting ordinal.
    pub fn search(&self, term: &str) -> Result<DocList> {
        let state = self.state.read();
        if state.words.is_empty() {
            return Err(IndexError::WordNotIndexed);
        }

        let candidates: Vec<(&str, usize)> = if state.words.contains_key(term) {
            vec![(term, 0)]
        } else {
            let candidates = closest_words(&state.words, term);
            tracing::debug!(
                term,
                candidates = candidates.len(),
                distance = candidates.first().map(|c| c.1),
                "fuzzy match"
            );
            candidates
        };

        // position -> index into `docs`
        let mut seen: HashMap<usize, usize> = HashMap::new();
        let mut docs: DocList = Vec::new();
        for (word, word_distance) in candidates {
            let column = &state.words[word];
            column.apply(|position, count| match seen.get(&position) {
                Some(&at) => {
                    let entry = &mut docs[at];
                    if word_distance < entry.distance {
                        entry.count = count;
                        entry.distance = word_distance;
                    }
                }
                None => {
                    seen.insert(position, docs.len());
                    docs.push(DocRelevance {
                        document: state.names[position].clone(),
                        count,
                        distance: word_distance,
                        rank: 0,
                    });
                }
            });
        }

        docs.sort_by_key(|doc| doc.count);
        for (rank, doc) in docs.iter_mut().enumerate() {
            doc.rank = rank;
        }

        Ok(docs)
    }

    /// Copy of the persistent state. Columns are sorted by word so the
    /// serialized form is deterministic.
    pub fn snapshot(&self) -> IndexSnapshot {
        let state = self.state.read();
        let mut words: Vec<WordColumn> = state.words.values().cloned().collect();
        words.sort_by(|a, b| a.name().cmp(b.name()));
        IndexSnapshot {
            names: state.names.clone(),
            words,
        }
    }

    /// Rebuild an index from a snapshot.
    ///
    /// Rejects snapshots that would break the index invariants: duplicate
    /// names or words, positions past the name registry, positions with more
    /// than one live slot in a column, and columns without live entries.
    pub fn from_snapshot(snapshot: IndexSnapshot) -> Result<Self> {
        let IndexSnapshot { names, words: columns } = snapshot;

        let mut positions = HashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), position).is_some() {
                return Err(IndexError::Corrupt(format!("duplicate document name {name:?}")));
            }
        }

        let mut words = HashMap::with_capacity(columns.len());
        for column in columns {
            if let Some(&(position, _)) = column.slots().iter().find(|(p, _)| *p >= names.len()) {
                return Err(IndexError::Corrupt(format!(
                    "word {:?} references position {} but only {} documents are registered",
                    column.name(),
                    position,
                    names.len()
                )));
            }
            let mut live = HashSet::new();
            if let Some(&(position, _)) = column
                .slots()
                .iter()
                .find(|&&(p, count)| count > 0 && !live.insert(p))
            {
                return Err(IndexError::Corrupt(format!(
                    "word {:?} has more than one live entry for position {}",
                    column.name(),
                    position
                )));
            }
            if column.is_empty() {
                return Err(IndexError::Corrupt(format!(
                    "word {:?} has no live entries",
                    column.name()
                )));
            }
            let word = column.name().to_string();
            if words.insert(word.clone(), column).is_some() {
                return Err(IndexError::Corrupt(format!("duplicate word {word:?}")));
            }
        }

        Ok(Self {
            state: RwLock::new(IndexState {
                capacity: names.len(),
                names,
                positions,
                words,
            }),
        })
    }
}

/// Every indexed word at the minimum edit distance from `term`, ordered by
/// word so ties resolve the same way on every run.
fn closest_words<'a>(words: &'a HashMap<String, WordColumn>, term: &str) -> Vec<(&'a str, usize)> {
    let mut scored: Vec<(&str, usize)> = words
        .par_iter()
        .map(|(word, _)| (word.as_str(), distance(term, word)))
        .collect();
    scored.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    if let Some(&(_, min)) = scored.first() {
        let end = scored.iter().position(|&(_, d)| d > min).unwrap_or(scored.len());
        scored.truncate(end);
    }
    scored
}
