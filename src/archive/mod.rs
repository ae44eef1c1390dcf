// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Zip archiving of the assembled pack.
//!
//! ```text
//! zip_directory(dist/<pack>, dist/<pack>-v<VERSION>.zip)
//!   walk_files(all)                sorted, hidden files included
//!   ZipWriter<BufWriter<tmp>>      Deflate level 9, '/' entry names
//!   finish -> flush -> sync_all
//!   NamedTempFile::persist(dest)   archive appears only when complete
//! ```
//!
//! Entries carry the zip epoch as their timestamp, so two builds of the
//! same tree produce identical archives.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ArchiveError, Result};
use crate::utility::fs::walk::{WalkOptions, walk_files};

/// Deflate level used for every entry.
pub const COMPRESSION_LEVEL: i64 = 9;

/// Result of a successful [`zip_directory`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    path: PathBuf,
    entries: usize,
}

impl ArchiveSummary {
    /// Final archive location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of files written.
    #[must_use]
    pub const fn entries(&self) -> usize {
        self.entries
    }
}

/// Name of `path` inside the archive: relative to `base`, `/`-separated.
fn entry_name(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}

/// Compress every file under `src` into a zip archive at `dest`.
///
/// Entry names are relative to `src`, so `src` itself does not appear in the
/// archive. `dest` is replaced if it exists. Runs synchronously; async
/// callers should use `spawn_blocking`.
///
/// # Errors
///
/// Returns an error if `src` cannot be walked, an input cannot be read, or
/// the archive cannot be written, flushed or moved into place.
pub fn zip_directory(src: &Path, dest: &Path) -> Result<ArchiveSummary> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| ArchiveError::Io { path, source }
    };

    let files = walk_files(src, &WalkOptions::all())?;

    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(io_err(parent))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".modpack-")
        .suffix(".zip.tmp")
        .tempfile_in(parent)
        .map_err(io_err(parent))?;

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    let mut zip = ZipWriter::new(BufWriter::new(tmp.as_file_mut()));
    let mut entries = 0;

    for path in &files {
        let Some(name) = entry_name(src, path) else {
            continue;
        };

        trace!(entry = %name, "adding to archive");
        zip.start_file(name, options).map_err(ArchiveError::from)?;

        let mut input = File::open(path).map_err(io_err(path))?;
        std::io::copy(&mut input, &mut zip).map_err(io_err(path))?;
        entries += 1;
    }

    let mut writer = zip.finish().map_err(ArchiveError::from)?;
    writer.flush().map_err(io_err(dest))?;
    let file = writer
        .into_inner()
        .map_err(|e| io_err(dest)(e.into_error()))?;
    file.sync_all().map_err(io_err(dest))?;

    tmp.persist(dest).map_err(|e| ArchiveError::Persist {
        path: dest.to_path_buf(),
        source: e.error,
    })?;

    debug!(archive = %dest.display(), entries, "archive written");

    Ok(ArchiveSummary {
        path: dest.to_path_buf(),
        entries,
    })
}

#[cfg(test)]
mod tests;
