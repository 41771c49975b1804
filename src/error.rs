// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types shared by the index, the ingestion pipeline and the file format.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    /// The index holds no words at all.
    #[error("index does not contain word")]
    WordNotIndexed,

    #[error("file pattern is empty")]
    EmptyPattern,

    #[error("invalid file pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid index payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("corrupt index file: {0}")]
    Corrupt(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;
