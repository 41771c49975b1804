// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning files into [`Document`]s.
//!
//! The scanner recognizes identifiers the way most programming languages do:
//! a letter or `_`, followed by letters, digits or `_`. Numbers are consumed
//! whole and dropped, so `2nd` does not yield `nd` and `1e10` yields nothing.
//! Every other character separates tokens.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::types::Document;

use super::StopWords;

/// Read `path` and count its words. The document is named by its path.
pub fn read_document(path: &Path, stop_words: &StopWords) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document::new(
        path.to_string_lossy().into_owned(),
        word_frequency(&text, stop_words),
    ))
}

/// Lower-cased identifier counts for `text`, without stop words.
pub fn word_frequency(text: &str, stop_words: &StopWords) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for word in identifiers(text) {
        let word = word.to_lowercase();
        if stop_words.contains(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Identifier tokens of `text`, in order, as written.
pub fn identifiers(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, ch) = chars[i];
        if is_ident_start(ch) {
            i += 1;
            while i < chars.len() && is_ident_continue(chars[i].1) {
                i += 1;
            }
            let end = chars.get(i).map_or(text.len(), |&(offset, _)| offset);
            tokens.push(&text[start..end]);
        } else if ch.is_ascii_digit() {
            i = skip_number(&chars, i);
        } else {
            i += 1;
        }
    }

    tokens
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Index just past the number starting at `i`: decimal or hex digits, an
/// optional fraction and an optional exponent.
fn skip_number(chars: &[(usize, char)], mut i: usize) -> usize {
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);

    if at(i) == Some('0') && matches!(at(i + 1), Some('x' | 'X')) {
        i += 2;
        while at(i).is_some_and(|c| c.is_ascii_hexdigit() || c == '_') {
            i += 1;
        }
        return i;
    }

    while at(i).is_some_and(|c| c.is_ascii_digit() || c == '_') {
        i += 1;
    }
    if at(i) == Some('.') && at(i + 1).is_some_and(|c| c.is_ascii_digit()) {
        i += 1;
        while at(i).is_some_and(|c| c.is_ascii_digit()) {
            i += 1;
        }
    }
    if matches!(at(i), Some('e' | 'E')) {
        let mut j = i + 1;
        if matches!(at(j), Some('+' | '-')) {
            j += 1;
        }
        if at(j).is_some_and(|c| c.is_ascii_digit()) {
            i = j;
            while at(i).is_some_and(|c| c.is_ascii_digit()) {
                i += 1;
            }
        }
    }
    // Trailing letters belong to the literal (`10px`, `2nd`, `1u32`).
    while at(i).is_some_and(is_ident_continue) {
        i += 1;
    }
    i
}
