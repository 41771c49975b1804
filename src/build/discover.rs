// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Finding the files to index.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{IndexError, Result};

/// Directories never descended into.
pub const SKIPPED_DIRS: &[&str] = &["target"];

/// Files under `root` whose file name matches `pattern`.
///
/// The walk is depth-first in lexical order, so the result is deterministic.
/// Symlinks are not followed; a symlink whose name matches is returned like
/// a file.
pub fn document_list(root: &Path, pattern: &Regex) -> Result<Vec<PathBuf>> {
    let mut docs = Vec::new();
    walk(root, pattern, &mut docs)?;
    Ok(docs)
}

fn walk(dir: &Path, pattern: &Regex, docs: &mut Vec<PathBuf>) -> Result<()> {
    let read_err = |source| IndexError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| IndexError::Read {
            path: path.clone(),
            source,
        })?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if file_type.is_dir() {
            if SKIPPED_DIRS.contains(&name.as_ref()) {
                tracing::debug!(path = %path.display(), "skipping directory");
                continue;
            }
            walk(&path, pattern, docs)?;
        } else if pattern.is_match(&name) {
            docs.push(path);
        }
    }

    Ok(())
}
