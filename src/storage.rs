// SPDX-License-Identifier: GPL-3.0-only

//! Storage utilities for captured media files
//!
//! The capture core never writes media itself; these helpers exist for
//! launcher implementations that have to place files on behalf of the
//! platform capture UI.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::FALLBACK_NAME_FORMAT;

/// Resolve the directory a capture should be stored in
///
/// Joins the relative capture directory under `root`, falling back to the
/// platform pictures directory, and creates it if missing.
pub fn resolve_media_dir(root: Option<&Path>, relative: &Path) -> io::Result<PathBuf> {
    let base = match root {
        Some(root) => root.to_path_buf(),
        None => dirs::picture_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no pictures directory available")
        })?,
    };

    let dir = base.join(relative);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Pick a free path in `dir` for a new media file
///
/// Uses the file-name hint when the path is free, otherwise appends `_1`,
/// `_2`, … until one is. A hint that sanitizes away to nothing gets a
/// timestamped name instead.
pub fn unique_media_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    let stem = sanitize_stem(name)
        .unwrap_or_else(|| chrono::Local::now().format(FALLBACK_NAME_FORMAT).to_string());

    let candidate = dir.join(format!("{}.{}", stem, extension));
    if !candidate.exists() {
        return candidate;
    }

    let mut counter = 1u32;
    loop {
        let candidate = dir.join(format!("{}_{}.{}", stem, counter, extension));
        if !candidate.exists() {
            debug!(path = %candidate.display(), "name hint taken, using suffixed path");
            return candidate;
        }
        counter += 1;
    }
}

/// Reduce a file-name hint to a bare stem, stripping any directory
/// components or extension the caller smuggled in
fn sanitize_stem(name: &str) -> Option<String> {
    let stem = Path::new(name.trim())
        .file_stem()?
        .to_string_lossy()
        .trim()
        .to_string();

    if stem.is_empty() { None } else { Some(stem) }
}
