// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk index format.
//!
//! The payload is the JSON form of an [`IndexSnapshot`]. Words and document
//! names repeat constantly in that JSON, which is exactly what brotli is good
//! at, so the payload is compressed by default.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER (20 bytes): magic "MDIX", version, flags, counts,   │
//! │                    payload length                          │
//! ├────────────────────────────────────────────────────────────┤
//! │ PAYLOAD: JSON {names, words}, brotli if flags bit 0        │
//! ├────────────────────────────────────────────────────────────┤
//! │ FOOTER (8 bytes): crc32 + magic "XIDM"                     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Column position maps are not stored; they are rebuilt lazily after load.

mod header;

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::index::{IndexSnapshot, InvertedIndex};

pub use header::{
    FormatFlags, IndexFooter, IndexHeader, FOOTER_MAGIC, MAGIC, MAX_FILE_SIZE, MAX_PAYLOAD_SIZE,
    VERSION,
};

/// Serialize `index` with a brotli-compressed payload.
pub fn to_bytes(index: &InvertedIndex) -> Result<Vec<u8>> {
    to_bytes_with(index, FormatFlags::new().with_brotli())
}

/// Serialize `index` with the given payload encoding.
pub fn to_bytes_with(index: &InvertedIndex, flags: FormatFlags) -> Result<Vec<u8>> {
    let snapshot = index.snapshot();
    let json = serde_json::to_vec(&snapshot)?;
    check_limit(json.len(), MAX_PAYLOAD_SIZE, "decoded payload")?;

    let payload = if flags.is_brotli() {
        let mut compressed = Vec::new();
        {
            let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
            encoder.write_all(&json)?;
        }
        compressed
    } else {
        json
    };

    let header = IndexHeader {
        version: VERSION,
        flags,
        doc_count: count_u32(snapshot.names.len(), "documents")?,
        word_count: count_u32(snapshot.words.len(), "words")?,
        payload_len: count_u32(payload.len(), "payload bytes")?,
    };

    let total = IndexHeader::SIZE + payload.len() + IndexFooter::SIZE;
    check_limit(total, MAX_FILE_SIZE, "index file")?;

    let mut buf = Vec::with_capacity(total);
    header.write(&mut buf)?;
    buf.extend_from_slice(&payload);
    let footer = IndexFooter {
        crc32: IndexFooter::compute_crc32(&buf),
    };
    footer.write(&mut buf)?;
    Ok(buf)
}

/// Refuse to write what `from_bytes` would refuse to read.
fn check_limit(len: usize, max: usize, what: &str) -> Result<()> {
    if len > max {
        return Err(IndexError::Config(format!(
            "{what} would be {len} bytes (max {max})"
        )));
    }
    Ok(())
}

fn count_u32(n: usize, what: &str) -> Result<u32> {
    u32::try_from(n).map_err(|_| IndexError::Config(format!("too many {what} for index file: {n}")))
}

/// Validate the frame of an index file and return its header.
///
/// Checks size limits, footer magic, checksum, header magic and version,
/// and that the payload length matches the file. Does not decode the payload.
pub fn read_header(bytes: &[u8]) -> Result<IndexHeader> {
    if bytes.len() > MAX_FILE_SIZE {
        return Err(IndexError::Corrupt(format!(
            "file too large: {} bytes (max {MAX_FILE_SIZE})",
            bytes.len()
        )));
    }
    let min_size = IndexHeader::SIZE + IndexFooter::SIZE;
    if bytes.len() < min_size {
        return Err(IndexError::Corrupt(format!(
            "file too small: {} bytes (minimum {min_size})",
            bytes.len()
        )));
    }

    let footer = IndexFooter::read(bytes)?;
    let content = &bytes[..bytes.len() - IndexFooter::SIZE];
    let computed = IndexFooter::compute_crc32(content);
    if footer.crc32 != computed {
        return Err(IndexError::Corrupt(format!(
            "CRC32 mismatch: expected {:#010x}, got {computed:#010x}",
            footer.crc32
        )));
    }

    let header = IndexHeader::read(content)?;
    let actual = content.len() - IndexHeader::SIZE;
    if header.payload_len as usize != actual {
        return Err(IndexError::Corrupt(format!(
            "payload length {} does not match file ({actual} bytes)",
            header.payload_len
        )));
    }
    Ok(header)
}

/// Decode an index from bytes produced by [`to_bytes`].
pub fn from_bytes(bytes: &[u8]) -> Result<InvertedIndex> {
    let header = read_header(bytes)?;
    let body = &bytes[IndexHeader::SIZE..bytes.len() - IndexFooter::SIZE];

    let snapshot: IndexSnapshot = if header.flags.is_brotli() {
        let mut json = Vec::new();
        brotli::Decompressor::new(body, 4096)
            .take(MAX_PAYLOAD_SIZE as u64 + 1)
            .read_to_end(&mut json)
            .map_err(|err| IndexError::Corrupt(format!("payload decompression failed: {err}")))?;
        if json.len() > MAX_PAYLOAD_SIZE {
            return Err(IndexError::Corrupt(format!(
                "decompressed payload exceeds {MAX_PAYLOAD_SIZE} bytes"
            )));
        }
        serde_json::from_slice(&json)?
    } else {
        serde_json::from_slice(body)?
    };

    if snapshot.names.len() != header.doc_count as usize
        || snapshot.words.len() != header.word_count as usize
    {
        return Err(IndexError::Corrupt(format!(
            "header declares {} documents and {} words, payload has {} and {}",
            header.doc_count,
            header.word_count,
            snapshot.names.len(),
            snapshot.words.len()
        )));
    }

    InvertedIndex::from_snapshot(snapshot)
}

/// Serialize `index` to `path`. Returns the number of bytes written.
pub fn write_index(path: &Path, index: &InvertedIndex) -> Result<usize> {
    let bytes = to_bytes(index)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &bytes)?;
    Ok(bytes.len())
}

/// Load an index written by [`write_index`].
pub fn read_index(path: &Path) -> Result<InvertedIndex> {
    let bytes = read_index_bytes(path)?;
    let index = from_bytes(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        documents = index.document_count(),
        words = index.word_count(),
        "index loaded"
    );
    Ok(index)
}

/// Raw bytes of an index file, for callers that want both [`read_header`]
/// and [`from_bytes`] without reading the file twice.
pub fn read_index_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })
}
