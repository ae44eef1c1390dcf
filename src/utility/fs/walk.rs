// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result};
use bon::Builder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use wax::{Glob, Program};

/// Options for directory traversal.
///
/// Ignore files (`.gitignore`, `.ignore`) are never consulted, so a mod's
/// selection does not depend on the repository it is checked out in.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Every file, dot-files included.
    ///
    /// Used for mod sources, where the selector decides about dot-files, and
    /// for the assembled pack.
    #[must_use]
    pub fn all() -> Self {
        Self::builder().with_include_hidden(true).build()
    }
}

/// Builds a `WalkBuilder` with the given options and stable name ordering.
fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.standard_filters(false);
    builder.hidden(!options.include_hidden());
    builder.sort_by_file_name(|a, b| a.cmp(b));

    builder
}

/// Lists every file under `root`, depth first with siblings in name order.
///
/// The order is deterministic so plans, copies and archive entries come out
/// the same on every run.
///
/// # Errors
///
/// Returns an error if the root directory does not exist or an entry cannot
/// be read.
///
/// # Example
/// ```no_run
/// use rwp_modpack::utility::fs::walk::{walk_files, WalkOptions};
///
/// let files = walk_files("mods/Foo", &WalkOptions::all())?;
/// println!("Found {} files", files.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn walk_files<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(FsError::NotFound(root.to_path_buf()).into());
    }

    let mut files = Vec::new();
    for entry in build_walker(root, options).build() {
        let entry = entry.map_err(|e| FsError::IoError {
            path: root.to_path_buf(),
            source: std::io::Error::other(e),
        })?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Returns true if `glob` matches `relative` or one of its parent directories
/// and `accept` allows the matched path.
///
/// A pattern naming a directory therefore selects everything below it.
#[must_use]
pub fn matches_path_or_parent(
    glob: &Glob<'_>,
    relative: &Path,
    accept: impl Fn(&Path) -> bool,
) -> bool {
    relative
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .any(|p| glob.is_match(p) && accept(p))
}

/// Finds files under `root` whose path relative to `root` matches a glob.
///
/// Dot-files and dot-directories are skipped.
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
///
/// # Example
/// ```no_run
/// use rwp_modpack::utility::fs::walk::find_files;
///
/// let configs = find_files("overrides/Foo/custom_files", "**/*.cfg")?;
/// for file in configs {
///     println!("{}", file.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_files<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    let files = walk_files(root, &WalkOptions::default())?
        .into_iter()
        .filter(|path| {
            path.strip_prefix(root)
                .is_ok_and(|rel| glob.is_match(rel))
        })
        .collect();

    Ok(files)
}
