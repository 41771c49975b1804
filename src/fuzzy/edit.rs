// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted edit distance.
//!
//! Insertions and deletions cost 1, a substitution costs 2. A substitution is
//! therefore never cheaper than deleting one character and inserting another,
//! which makes the metric behave like an LCS distance: `distance(a, b)` is
//! `|a| + |b| - 2 * lcs(a, b)`.
//!
//! Two implementations compute the same grid:
//! - [`EditGrid`] keeps every cell, which makes it easy to inspect in tests.
//! - [`distance`] keeps two alternating rows over the shorter string. This is
//!   the one the index calls for every vocabulary word during fuzzy lookup.
//!
//! Both operate on Unicode scalar values, not bytes.

/// Cost of replacing one character with a different one.
pub const SUBSTITUTION_COST: usize = 2;

/// Cost of inserting or deleting one character.
pub const INDEL_COST: usize = 1;

/// Full (|a|+1) × (|b|+1) dynamic programming grid.
///
/// Cell `(i, j)` holds the cheapest way to turn the first `i` characters of
/// `a` into the first `j` characters of `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditGrid {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl EditGrid {
    pub fn build(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0; rows * cols];

        for j in 0..cols {
            cells[j] = j;
        }
        for i in 1..rows {
            cells[i * cols] = i;
        }

        for i in 1..rows {
            let ch = a[i - 1];
            for j in 1..cols {
                let diagonal = cells[(i - 1) * cols + (j - 1)]
                    + if ch == b[j - 1] { 0 } else { SUBSTITUTION_COST };
                let up = cells[(i - 1) * cols + j] + INDEL_COST;
                let left = cells[i * cols + (j - 1)] + INDEL_COST;
                cells[i * cols + j] = diagonal.min(up).min(left);
            }
        }

        Self { rows, cols, cells }
    }

    /// Value of cell `(i, j)`, or `None` outside the grid.
    pub fn cell(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        Some(self.cells[i * self.cols + j])
    }

    /// Number of rows (`|a| + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`|b| + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The bottom-right cell: the distance between the full strings.
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

/// Edit distance computed over the full grid.
pub fn distance_full(a: &str, b: &str) -> usize {
    EditGrid::build(a, b).distance()
}

/// Edit distance using two rows of length `min(|a|, |b|) + 1`.
///
/// The cost model is symmetric, so the shorter string always indexes the
/// columns.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut row = vec![0; short.len() + 1];

    for (i, &ch) in long.iter().enumerate() {
        row[0] = i + 1;
        for j in 1..=short.len() {
            let diagonal = prev[j - 1] + if ch == short[j - 1] { 0 } else { SUBSTITUTION_COST };
            let up = prev[j] + INDEL_COST;
            let left = row[j - 1] + INDEL_COST;
            row[j] = diagonal.min(up).min(left);
        }
        std::mem::swap(&mut prev, &mut row);
    }

    prev[short.len()]
}
