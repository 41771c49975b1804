// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit distance.
//!
//! Both implementations must agree, and the result must stay within the
//! bounds any LCS-style distance obeys.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mdindexer::{distance, distance_full};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    a: &'a str,
    b: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    // The full grid is quadratic in memory.
    if input.a.len() > 512 || input.b.len() > 512 {
        return;
    }
    let rolling = distance(input.a, input.b);
    assert_eq!(rolling, distance_full(input.a, input.b));
    assert_eq!(rolling, distance(input.b, input.a));

    let la = input.a.chars().count();
    let lb = input.b.chars().count();
    assert!(rolling <= la + lb);
    assert!(rolling >= la.abs_diff(lb));
});
