// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index file header and footer.
//!
//! The header is 20 bytes of fixed-size fields, readable before anything
//! else, so `inspect` can report on a file without decoding its payload.
//!
//! The footer is 8 bytes: a CRC32 over everything before it, plus the header
//! magic reversed ("XIDM"). A bad footer means the file was truncated or
//! damaged, and nothing else in it should be trusted.

use std::io::{self, Write};

use crc32fast::Hasher as Crc32Hasher;

use crate::error::{IndexError, Result};

/// Header magic: "MDIX"
pub const MAGIC: [u8; 4] = *b"MDIX";

/// Footer magic: "XIDM"
pub const FOOTER_MAGIC: [u8; 4] = *b"XIDM";

pub const VERSION: u8 = 1;

/// Largest file `from_bytes` will look at: 256 MB.
pub const MAX_FILE_SIZE: usize = 256 * 1024 * 1024;

/// Largest decompressed payload: 1 GB.
pub const MAX_PAYLOAD_SIZE: usize = 1024 * 1024 * 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags(pub(crate) u8);

impl FormatFlags {
    pub const BROTLI: u8 = 0b0000_0001;
    const KNOWN: u8 = Self::BROTLI;

    pub fn new() -> Self {
        Self(0)
    }

    pub fn with_brotli(mut self) -> Self {
        self.0 |= Self::BROTLI;
        self
    }

    pub fn is_brotli(self) -> bool {
        self.0 & Self::BROTLI != 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

/// Fixed-size file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHeader {
    pub version: u8,
    pub flags: FormatFlags,
    pub doc_count: u32,
    pub word_count: u32,
    pub payload_len: u32,
}

impl IndexHeader {
    // 4 (magic) + 1 (version) + 1 (flags) + 2 (reserved) + 3*4 (u32s) = 20
    pub const SIZE: usize = 20;

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&[self.version, self.flags.0])?;
        w.write_all(&[0u8; 2])?; // reserved
        w.write_all(&self.doc_count.to_le_bytes())?;
        w.write_all(&self.word_count.to_le_bytes())?;
        w.write_all(&self.payload_len.to_le_bytes())?;
        Ok(())
    }

    /// Parse and validate the header at the start of `bytes`.
    pub fn read(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(IndexError::Corrupt(format!(
                "file too short for header: {} bytes",
                bytes.len()
            )));
        }
        if bytes[..4] != MAGIC {
            return Err(IndexError::Corrupt(format!(
                "invalid magic: expected MDIX, got {:?}",
                &bytes[..4]
            )));
        }

        let version = bytes[4];
        if version != VERSION {
            return Err(IndexError::Corrupt(format!(
                "unsupported version {version} (expected {VERSION})"
            )));
        }
        let flags = FormatFlags(bytes[5]);
        if flags.0 & !FormatFlags::KNOWN != 0 {
            return Err(IndexError::Corrupt(format!("unknown flags {:#04x}", flags.0)));
        }
        // bytes[6..8] is reserved

        Ok(Self {
            version,
            flags,
            doc_count: read_u32(bytes, 8),
            word_count: read_u32(bytes, 12),
            payload_len: read_u32(bytes, 16),
        })
    }
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// CRC32 checksum and end magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexFooter {
    pub crc32: u32,
}

impl IndexFooter {
    pub const SIZE: usize = 8;

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&FOOTER_MAGIC)?;
        Ok(())
    }

    /// Read the footer from the last 8 bytes of `bytes`.
    pub fn read(bytes: &[u8]) -> Result<Self> {
        let start = bytes
            .len()
            .checked_sub(Self::SIZE)
            .ok_or_else(|| IndexError::Corrupt("file too short for footer".into()))?;

        if bytes[start + 4..] != FOOTER_MAGIC {
            return Err(IndexError::Corrupt(format!(
                "invalid footer magic: expected XIDM, got {:?} (truncated?)",
                &bytes[start + 4..]
            )));
        }
        Ok(Self {
            crc32: read_u32(bytes, start),
        })
    }

    pub fn compute_crc32(data: &[u8]) -> u32 {
        let mut hasher = Crc32Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}
