// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod discovery, metadata and file selection.
//!
//! ```text
//! discover_mods(layout)            mods/<name>/ directories, name order
//!        |
//!        v
//! ModDescriptor::load(layout, name)
//!   settings.json     src_path / dest_path
//!   include_list.txt  Option<PatternList>
//!   exclude_list.txt  Option<PatternList>
//!   custom_files/**   allowlisted extensions
//!        |
//!        v
//! select_files(layout, &descriptor) --> CopyPlan
//!   candidates = include ? union(include) : allowlist
//!   candidates -= exclude
//!   plan = candidates.map(PathMapper) ++ custom.map(PathMapper)
//! ```

pub mod descriptor;
pub mod paths;
pub mod select;


use crate::config::paths::Layout;
use crate::error::{FsError, Result};

pub use descriptor::{ModDescriptor, ModSettings, PatternList};
pub use paths::PathMapper;
pub use select::{CopyItem, CopyPlan, Origin, select_files};

/// Modpack version baked into the archive name.
pub const VERSION: &str = "0.0.1";

/// File extensions copied when a mod has no include list.
pub const RECOGNIZED_EXTENSIONS: &[&str] =
    &["png", "dds", "cfg", "mu", "dll", "version", "txt", "md"];

/// Glob matching any file with a recognized extension, at any depth.
#[must_use]
pub fn allowlist_pattern() -> String {
    format!("**/*.{{{}}}", RECOGNIZED_EXTENSIONS.join(","))
}

/// Lists the mods to build: every directory directly under `mods/`, sorted
/// by name. Plain files in `mods/` are skipped.
///
/// # Errors
///
/// Returns an error if the mods directory is missing or cannot be read.
pub fn discover_mods(layout: &Layout) -> Result<Vec<String>> {
    let mods_dir = layout.mods_dir();
    let io_err = |source| FsError::IoError {
        path: mods_dir.to_path_buf(),
        source,
    };

    if !mods_dir.is_dir() {
        return Err(FsError::NotFound(mods_dir.to_path_buf()).into());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(mods_dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if !entry.file_type().map_err(io_err)?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => {
                tracing::warn!(name = ?name, "skipping mod directory with non UTF-8 name");
            }
        }
    }

    names.sort();
    Ok(names)
}
