// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building an index file from a directory tree.
//!
//! `run_build` is the whole pipeline: discover files, ingest them in
//! parallel, write the result. Each stage lives in its own module so tests
//! and benches can drive them separately.

pub mod config;
pub mod discover;
pub mod document;
pub mod parallel;
pub mod stop_words;

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};

use crate::binary::write_index;
use crate::error::Result;
use crate::index::InvertedIndex;

pub use config::{resolve_stop_words, BuildConfig, DEFAULT_OUTPUT};
pub use discover::document_list;
pub use document::{identifiers, read_document, word_frequency};
pub use parallel::{ingest, IngestConfig, IngestStats};
pub use stop_words::{StopWordPreset, StopWords};

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub index: InvertedIndex,
    pub stats: IngestStats,
    pub output: PathBuf,
    pub bytes_written: usize,
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Build with a progress bar on stderr.
pub fn run_build(config: &BuildConfig) -> Result<BuildReport> {
    let progress = ProgressBar::new(0);
    progress.set_style(progress_style());
    progress.set_prefix("Indexing");
    let report = run_build_with_progress(config, &progress)?;
    progress.finish_with_message(format!("{} documents", report.stats.indexed));
    Ok(report)
}

/// Build, reporting per-file progress to `progress`.
pub fn run_build_with_progress(config: &BuildConfig, progress: &ProgressBar) -> Result<BuildReport> {
    let files = document_list(&config.root, &config.pattern)?;
    tracing::info!(
        root = %config.root.display(),
        files = files.len(),
        "discovered documents"
    );
    progress.set_length(files.len() as u64);

    let index = InvertedIndex::new(files.len());
    let stats = ingest(&files, &index, &config.stop_words, &config.ingest, progress);
    tracing::info!(
        documents = stats.indexed,
        failed = stats.failed,
        words = index.word_count(),
        elapsed = ?stats.elapsed,
        "ingestion finished"
    );

    let bytes_written = write_index(&config.output, &index)?;
    tracing::info!(path = %config.output.display(), bytes = bytes_written, "index written");

    Ok(BuildReport {
        index,
        stats,
        output: config.output.clone(),
        bytes_written,
    })
}
