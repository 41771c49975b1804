// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sparse per-word document vector.
//!
//! A column records which documents contain one word and how often. Entries
//! are `(position, count)` pairs in insertion order. Removing a document
//! zeroes its slot instead of shifting the vector, so slot indices handed out
//! earlier stay valid.
//!
//! # INVARIANTS
//!
//! 1. **LIVE_INDEXED**: every position with a slot whose count is > 0 is in
//!    `idx`, and `idx[position]` is that slot.
//! 2. **TOMBSTONE_UNINDEXED**: removed positions are absent from `idx`; their
//!    slot stays in `docs` with count 0.
//!
//! `idx` is never serialized. It is `None` after construction and after
//! deserialization, and is rebuilt from `docs` by the first mutation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Initial slot capacity for a new column.
const INITIAL_SLOTS: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordColumn {
    name: String,
    docs: Vec<(usize, u32)>,
    #[serde(skip)]
    idx: Option<HashMap<usize, usize>>,
}

impl WordColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::with_capacity(INITIAL_SLOTS),
            idx: None,
        }
    }

    /// The word this column counts.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw slots, tombstones included.
    pub fn slots(&self) -> &[(usize, u32)] {
        &self.docs
    }

    /// Set the count for `position`.
    ///
    /// A count of 0 is ignored: removal goes through [`WordColumn::remove`].
    pub fn upsert(&mut self, position: usize, count: u32) {
        if count < 1 {
            return;
        }
        let docs = &mut self.docs;
        let idx = self.idx.get_or_insert_with(|| live_slots(docs));

        match idx.get(&position) {
            Some(&slot) => docs[slot] = (position, count),
            None => {
                idx.insert(position, docs.len());
                docs.push((position, count));
            }
        }
    }

    /// Tombstone the live slot for `position`, if any.
    pub fn remove(&mut self, position: usize) {
        let docs = &mut self.docs;
        let idx = self.idx.get_or_insert_with(|| live_slots(docs));

        if let Some(slot) = idx.remove(&position) {
            docs[slot] = (position, 0);
        }
    }

    /// Visit every live `(position, count)` in storage order.
    pub fn apply<F>(&self, mut visit: F)
    where
        F: FnMut(usize, u32),
    {
        for &(position, count) in &self.docs {
            if count > 0 {
                visit(position, count);
            }
        }
    }

    /// Count for `position`, or `None` if it has no live slot.
    pub fn count(&self, position: usize) -> Option<u32> {
        self.docs
            .iter()
            .find(|&&(pos, count)| pos == position && count > 0)
            .map(|&(_, count)| count)
    }

    /// True when no slot has a positive count.
    pub fn is_empty(&self) -> bool {
        !self.docs.iter().any(|&(_, count)| count > 0)
    }

    /// Whether the position index has been built.
    pub fn is_indexed(&self) -> bool {
        self.idx.is_some()
    }
}

fn live_slots(docs: &[(usize, u32)]) -> HashMap<usize, usize> {
    docs.iter()
        .enumerate()
        .filter(|(_, entry)| entry.1 > 0)
        .map(|(slot, &(position, _))| (position, slot))
        .collect()
}
