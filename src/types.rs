// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: documents going into the index, relevance records coming
//! out of it.

use std::collections::HashMap;

use serde::Serialize;

/// A parsed document: its unique name and per-word occurrence counts.
///
/// Words are expected to be tokenized, lower-cased and stop-word filtered
/// already. The index consumes a document once and keeps only the counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub word_count: HashMap<String, u32>,
}

impl Document {
    pub fn new(name: impl Into<String>, word_count: HashMap<String, u32>) -> Self {
        Self {
            name: name.into(),
            word_count,
        }
    }

    /// Document where each listed word occurs once. Repeated words add up.
    pub fn from_words<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut word_count = HashMap::new();
        for word in words {
            *word_count.entry(word.into()).or_insert(0) += 1;
        }
        Self::new(name, word_count)
    }
}

/// One document matched by a single-term index lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRelevance {
    pub document: String,
    /// Occurrences of the matched word in the document.
    pub count: u32,
    /// Edit distance between the searched term and the matched word.
    pub distance: usize,
    /// Position of this entry in the count-ascending result list.
    pub rank: usize,
}

pub type DocList = Vec<DocRelevance>;

/// One document in a ranked multi-term query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    pub document: String,
    /// Accumulated `distance + rank` over the query terms. Lower is better.
    pub rank: usize,
    /// Tie breaker: how closely the document name resembles the query.
    pub name_distance: isize,
}

pub type ScoreList = Vec<Score>;
