// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index file decoding.
//!
//! Arbitrary bytes must produce an error or a well-formed index, never a
//! panic. Most inputs die at the checksum, so the target also re-frames the
//! input as a payload with a valid header and footer to reach the JSON and
//! snapshot validation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mdindexer::binary::{from_bytes, FormatFlags, IndexFooter, IndexHeader, VERSION};

fn frame(payload: &[u8], flags: FormatFlags, doc_count: u32, word_count: u32) -> Vec<u8> {
    let header = IndexHeader {
        version: VERSION,
        flags,
        doc_count,
        word_count,
        payload_len: payload.len() as u32,
    };
    let mut bytes = Vec::new();
    header.write(&mut bytes).unwrap();
    bytes.extend_from_slice(payload);
    let footer = IndexFooter {
        crc32: IndexFooter::compute_crc32(&bytes),
    };
    footer.write(&mut bytes).unwrap();
    bytes
}

fuzz_target!(|data: &[u8]| {
    let _ = from_bytes(data);

    let (counts, payload) = data.split_at(data.len().min(2));
    let doc_count = counts.first().copied().unwrap_or(0) as u32;
    let word_count = counts.get(1).copied().unwrap_or(0) as u32;
    for flags in [FormatFlags::new(), FormatFlags::new().with_brotli()] {
        if let Ok(index) = from_bytes(&frame(payload, flags, doc_count, word_count)) {
            // Whatever decodes must be queryable.
            let _ = index.search("a");
            let snapshot = index.snapshot();
            assert_eq!(snapshot.names.len(), index.document_count());
        }
    }
});
