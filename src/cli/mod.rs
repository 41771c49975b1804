// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the mdindexer command-line interface.
//!
//! Three subcommands: `index` walks a directory and writes an index file,
//! `search` queries one (or runs an interactive console when no query is
//! given), and `inspect` prints an index file's header.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mdindexer::build::{StopWordPreset, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(
    name = "mdindexer",
    about = "Fuzzy inverted index for source and documentation trees",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index from every matching file under a directory
    Index {
        /// Directory to walk
        #[arg(short, long)]
        root: PathBuf,

        /// Regular expression matched against file names
        #[arg(short, long)]
        pattern: String,

        /// Index file to write
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Built-in stop word lists to apply
        #[arg(long, value_enum, value_delimiter = ',', default_value = "none")]
        stop_words: Vec<StopWordPreset>,

        /// Extra stop words, one per line
        #[arg(long)]
        stop_words_file: Option<PathBuf>,

        /// Reader threads (default: 2 × CPUs)
        #[arg(long)]
        workers: Option<usize>,

        /// Queue capacity between stages (default: 4 × CPUs)
        #[arg(long)]
        queue_depth: Option<usize>,
    },

    /// Query an index file
    Search {
        /// Path to the index file
        file: PathBuf,

        /// Search query; reads queries from stdin when omitted
        query: Option<String>,

        /// Only documents matching every term, unranked
        #[arg(long)]
        exact: bool,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect an index file header
    Inspect {
        /// Path to the index file
        file: PathBuf,
    },
}
