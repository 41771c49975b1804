// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stop words: tokens too common to be worth indexing.
//!
//! Stop words are configuration, not global state. The ingestion pipeline
//! receives a [`StopWords`] value built from presets and/or a user file.
//!
//! File format: one word per line. Blank lines and lines starting with `#`
//! are ignored. Words are lower-cased on load, matching how the tokenizer
//! lower-cases identifiers before the lookup.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::{IndexError, Result};

const ENGLISH: &str = include_str!("../../data/stop_words/english.txt");
const JAVA: &str = include_str!("../../data/stop_words/java.txt");

/// Built-in stop word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StopWordPreset {
    /// Common English function words
    English,
    /// Java reserved words
    Java,
    /// No stop words
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = Self::new();
        for word in words {
            stop_words.insert(word.as_ref());
        }
        stop_words
    }

    pub fn preset(preset: StopWordPreset) -> Self {
        match preset {
            StopWordPreset::English => Self::parse(ENGLISH),
            StopWordPreset::Java => Self::parse(JAVA),
            StopWordPreset::None => Self::new(),
        }
    }

    /// Union of several presets.
    pub fn presets(presets: &[StopWordPreset]) -> Self {
        let mut stop_words = Self::new();
        for &preset in presets {
            stop_words.extend(Self::preset(preset));
        }
        stop_words
    }

    /// Parse the one-word-per-line format.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    pub fn extend(&mut self, other: StopWords) {
        self.words.extend(other.words);
    }

    /// `word` must already be lower-case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
