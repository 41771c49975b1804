// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel ingestion: many readers, one writer.
//!
//! Reading and tokenizing files is embarrassingly parallel; updating the
//! index is not, because every update of an existing document sweeps the
//! whole vocabulary. So the pipeline fans out and back in:
//!
//! ```text
//!             ┌──────────┐
//!   paths ──▶ │ worker 1 │ ──┐
//!  (bounded)  │   ...    │   ├──▶ documents ──▶ writer ──▶ InvertedIndex::update
//!             │ worker N │ ──┘    (bounded)
//!             └──────────┘
//! ```
//!
//! Each worker owns a clone of the document sender. The document queue closes
//! when the last clone is dropped, which can only happen once, after every
//! worker has finished. The writer then drains what is left and exits.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam::channel;
use indicatif::ProgressBar;

use crate::index::InvertedIndex;
use crate::types::Document;

use super::{read_document, StopWords};

/// Worker pool sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestConfig {
    /// Number of reader threads.
    pub workers: usize,
    /// Capacity of each of the two queues.
    pub queue_depth: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        let cpus = thread::available_parallelism().map_or(1, |n| n.get());
        Self {
            workers: cpus * 2,
            queue_depth: cpus * 4,
        }
    }
}

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Documents passed to the index.
    pub indexed: usize,
    /// Files that could not be read and were skipped.
    pub failed: usize,
    pub elapsed: Duration,
}

/// Read every file in `files` and fold it into `index`.
///
/// Unreadable files are logged and counted, never fatal. Returns once every
/// document has been applied.
pub fn ingest(
    files: &[PathBuf],
    index: &InvertedIndex,
    stop_words: &StopWords,
    config: &IngestConfig,
    progress: &ProgressBar,
) -> IngestStats {
    let started = Instant::now();
    let workers = config.workers.max(1);
    let depth = config.queue_depth.max(1);

    let (path_tx, path_rx) = channel::bounded::<&Path>(depth);
    let (doc_tx, doc_rx) = channel::bounded::<Document>(depth);
    let failed = AtomicUsize::new(0);

    let indexed = thread::scope(|scope| {
        for _ in 0..workers {
            let path_rx = path_rx.clone();
            let doc_tx = doc_tx.clone();
            let failed = &failed;
            scope.spawn(move || {
                for path in path_rx {
                    match read_document(path, stop_words) {
                        Ok(doc) => {
                            if doc_tx.send(doc).is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            failed.fetch_add(1, Ordering::Relaxed);
                            progress.inc(1);
                            tracing::warn!(path = %path.display(), error = %err, "skipping document");
                        }
                    }
                }
            });
        }
        // Only the workers may keep the document queue open.
        drop(doc_tx);
        drop(path_rx);

        let writer = scope.spawn(move || {
            let mut indexed = 0;
            for doc in doc_rx {
                index.update(&doc);
                indexed += 1;
                progress.inc(1);
            }
            indexed
        });

        for path in files {
            if path_tx.send(path.as_path()).is_err() {
                break;
            }
        }
        drop(path_tx);

        writer
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    });

    IngestStats {
        indexed,
        failed: failed.into_inner(),
        elapsed: started.elapsed(),
    }
}
