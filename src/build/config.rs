// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validated build configuration.
//!
//! Everything that can be wrong with a build request is checked here, before
//! any file is read, so a bad flag fails fast instead of halfway through.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{IndexError, Result};

use super::{IngestConfig, StopWordPreset, StopWords};

/// Default output file for `index`.
pub const DEFAULT_OUTPUT: &str = "index.mdix";

/// A build request that has passed validation.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub root: PathBuf,
    pub pattern: Regex,
    pub output: PathBuf,
    pub stop_words: StopWords,
    pub ingest: IngestConfig,
}

impl BuildConfig {
    /// Validate `root` and compile `pattern`.
    ///
    /// Stop words default to none, output to [`DEFAULT_OUTPUT`].
    pub fn new(root: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let root = root.into();
        check_root(&root)?;
        Ok(Self {
            root,
            pattern: compile_pattern(pattern)?,
            output: PathBuf::from(DEFAULT_OUTPUT),
            stop_words: StopWords::new(),
            ingest: IngestConfig::default(),
        })
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_ingest(mut self, ingest: IngestConfig) -> Self {
        self.ingest = ingest;
        self
    }
}

/// Stop words from presets plus an optional word file.
pub fn resolve_stop_words(presets: &[StopWordPreset], file: Option<&Path>) -> Result<StopWords> {
    let mut stop_words = StopWords::presets(presets);
    if let Some(path) = file {
        stop_words.extend(StopWords::load(path)?);
    }
    Ok(stop_words)
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    if pattern.is_empty() {
        return Err(IndexError::EmptyPattern);
    }
    Regex::new(pattern).map_err(|source| IndexError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn check_root(root: &Path) -> Result<()> {
    let meta = fs::metadata(root).map_err(|source| IndexError::Read {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(IndexError::Config(format!(
            "root {} is not a directory",
            root.display()
        )));
    }
    Ok(())
}
