// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use mdindexer::binary::{from_bytes, read_header, read_index, read_index_bytes};
use mdindexer::build::{resolve_stop_words, run_build, BuildConfig, IngestConfig, StopWordPreset};
use mdindexer::{exact_match, search, InvertedIndex, Result, ScoreList};

mod cli;
use cli::display::{self, BOLD, GREEN, RED};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mdindexer=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Index {
            root,
            pattern,
            output,
            stop_words,
            stop_words_file,
            workers,
            queue_depth,
        } => run_index(IndexArgs {
            root,
            pattern,
            output,
            stop_words,
            stop_words_file,
            workers,
            queue_depth,
        }),
        Commands::Search {
            file,
            query,
            exact,
            limit,
            json,
        } => run_search(&file, query.as_deref(), exact, limit, json),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "aborting");
        eprintln!("{} {}", display::styled(&[BOLD, RED], "error:"), err);
        process::exit(1);
    }
}

struct IndexArgs {
    root: PathBuf,
    pattern: String,
    output: PathBuf,
    stop_words: Vec<StopWordPreset>,
    stop_words_file: Option<PathBuf>,
    workers: Option<usize>,
    queue_depth: Option<usize>,
}

fn run_index(args: IndexArgs) -> Result<()> {
    let defaults = IngestConfig::default();
    let ingest = IngestConfig {
        workers: args.workers.unwrap_or(defaults.workers),
        queue_depth: args.queue_depth.unwrap_or(defaults.queue_depth),
    };
    let stop_words = resolve_stop_words(&args.stop_words, args.stop_words_file.as_deref())?;
    let config = BuildConfig::new(args.root, &args.pattern)?
        .with_output(args.output)
        .with_stop_words(stop_words)
        .with_ingest(ingest);

    let report = run_build(&config)?;

    println!("{}", display::title("Index built"));
    println!("{}", display::field("documents", report.stats.indexed));
    println!("{}", display::field("skipped", report.stats.failed));
    println!("{}", display::field("words", report.index.word_count()));
    println!("{}", display::field("file", report.output.display()));
    println!("{}", display::field("size", display::format_size(report.bytes_written)));
    println!("{}", display::field("elapsed", display::timing(report.stats.elapsed)));
    Ok(())
}

#[derive(Serialize)]
struct JsonResults<'a, T> {
    docs: &'a [T],
}

/// Answer to one query: names only for `--exact`, full scores otherwise.
enum Hits {
    Exact(Vec<String>),
    Ranked(ScoreList),
}

impl Hits {
    fn find(index: &InvertedIndex, query: &str, exact: bool) -> Self {
        if exact {
            let mut names: Vec<String> = exact_match(query, index).into_iter().collect();
            names.sort_unstable();
            Hits::Exact(names)
        } else {
            Hits::Ranked(search(query, index))
        }
    }

    fn len(&self) -> usize {
        match self {
            Hits::Exact(names) => names.len(),
            Hits::Ranked(scores) => scores.len(),
        }
    }

    fn to_json(&self, limit: usize) -> Result<String> {
        let shown = self.len().min(limit);
        let out = match self {
            Hits::Exact(names) => serde_json::to_string(&JsonResults { docs: &names[..shown] })?,
            Hits::Ranked(scores) => serde_json::to_string(&JsonResults { docs: &scores[..shown] })?,
        };
        Ok(out)
    }

    fn lines(&self, limit: usize) -> Vec<String> {
        match self {
            Hits::Exact(names) => names
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, name)| display::result_line(i + 1, name, None))
                .collect(),
            Hits::Ranked(scores) => scores
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, score)| display::result_line(i + 1, &score.document, Some(score.rank)))
                .collect(),
        }
    }
}

fn run_search(file: &Path, query: Option<&str>, exact: bool, limit: usize, json: bool) -> Result<()> {
    let index = read_index(file)?;

    if let Some(query) = query {
        return answer(&index, query, exact, limit, json);
    }

    // Console mode: one query per line until EOF.
    if !json {
        eprintln!(
            "{} documents, {} words. One query per line, Ctrl-D to quit.",
            index.document_count(),
            index.word_count()
        );
    }
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let query = line.trim_end_matches('\r');
        if query.is_empty() {
            continue;
        }
        answer(&index, query, exact, limit, json)?;
        io::stdout().flush()?;
    }
    Ok(())
}

fn answer(index: &InvertedIndex, query: &str, exact: bool, limit: usize, json: bool) -> Result<()> {
    let started = Instant::now();
    let hits = Hits::find(index, query, exact);
    let elapsed = started.elapsed();

    if json {
        println!("{}", hits.to_json(limit)?);
        return Ok(());
    }

    println!(
        "{} {} result(s) in {}",
        display::styled(&[BOLD, GREEN], query),
        hits.len(),
        display::timing(elapsed)
    );
    for line in hits.lines(limit) {
        println!("{line}");
    }
    if hits.len() > limit {
        println!("  ... {} more", hits.len() - limit);
    }
    Ok(())
}

fn run_inspect(file: &Path) -> Result<()> {
    let bytes = read_index_bytes(file)?;
    let header = read_header(&bytes)?;
    let index = from_bytes(&bytes)?;
    let size = bytes.len();

    println!("{}", display::title(&file.display().to_string()));
    println!("{}", display::field("version", header.version));
    println!(
        "{}",
        display::field(
            "payload",
            format!(
                "{} ({})",
                display::format_size(header.payload_len as usize),
                if header.flags.is_brotli() { "brotli" } else { "plain" }
            )
        )
    );
    println!("{}", display::field("file size", display::format_size(size)));
    println!("{}", display::field("documents", header.doc_count));
    println!("{}", display::field("words", header.word_count));
    println!("{}", display::field("loaded", format!("{} documents, {} words", index.document_count(), index.word_count())));
    Ok(())
}
