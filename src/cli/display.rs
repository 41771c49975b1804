// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display helpers for the mdindexer CLI.
//!
//! Plain ANSI colors, dropped entirely when `NO_COLOR` is set or stdout is
//! not a terminal, so piped output stays clean.

use std::time::Duration;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if colors are enabled, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    paint(use_colors(), styles, text)
}

fn paint(enabled: bool, styles: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}", styles.concat(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Section title, e.g. `── Header ──`
pub fn title(text: &str) -> String {
    styled(&[BOLD, CYAN], &format!("── {text} ──"))
}

/// Aligned `label: value` line.
pub fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {} {}", styled(&[DIM], &format!("{label:<12}")), value)
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Color-coded elapsed time (green=fast, yellow=medium, red=slow)
pub fn timing(elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    let text = format!("{ms:.3} ms");
    let color = if ms < 5.0 {
        GREEN
    } else if ms < 50.0 {
        YELLOW
    } else {
        RED
    };
    styled(&[color], &text)
}

/// One ranked result line: `  1. path  (rank 3)`
pub fn result_line(ordinal: usize, document: &str, rank: Option<usize>) -> String {
    let number = styled(&[DIM], &format!("{ordinal:>3}."));
    match rank {
        Some(rank) => format!("{number} {document}  {}", styled(&[DIM], &format!("(rank {rank})"))),
        None => format!("{number} {document}"),
    }
}
