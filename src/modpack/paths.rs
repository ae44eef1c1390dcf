// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source to destination path mapping.
//!
//! ```text
//! mods/<name>/<src_path>/Parts/a.cfg            --+
//!                                                 +--> dist/<pack>/GameData/<dest>/Parts/a.cfg
//! overrides/<name>/custom_files/Parts/a.cfg     --+
//! ```
//!
//! Paths are compared as `/`-separated segment lists, so `\` separated input
//! maps the same way and `mods/Foo` never strips a prefix from `mods/FooBar`.

use std::path::{Path, PathBuf};

use super::descriptor::ModDescriptor;
use crate::config::paths::Layout;

/// Maps one mod's source and custom files into the output tree.
///
/// Construction captures everything the mapping depends on, so
/// [`PathMapper::destination`] is a pure function of its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapper {
    root: Vec<String>,
    source_prefix: Vec<String>,
    custom_prefix: Vec<String>,
    dest_dir: PathBuf,
}

impl PathMapper {
    #[must_use]
    pub fn new(layout: &Layout, descriptor: &ModDescriptor) -> Self {
        let root = segments(&layout.root().to_string_lossy());
        let relative = |path: &Path| strip_segments(&root, segments(&path.to_string_lossy()));

        let source_prefix = relative(&descriptor.source_dir(layout));
        let custom_prefix = relative(&descriptor.custom_files_dir(layout));

        let mut dest_dir = layout.game_data_dir();
        dest_dir.extend(segments(descriptor.dest_subpath()));

        Self {
            root,
            source_prefix,
            custom_prefix,
            dest_dir,
        }
    }

    /// `dist/<pack>/GameData/<dest>`
    #[must_use]
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Destination of `source` in the output tree.
    ///
    /// The mod's source prefix is stripped if present, otherwise its custom
    /// files prefix; the remainder is joined onto [`Self::dest_dir`]. A path
    /// outside both keeps its whole project-relative form.
    #[must_use]
    pub fn destination(&self, source: &Path) -> PathBuf {
        let path = strip_segments(&self.root, segments(&source.to_string_lossy()));

        let rest = if path.starts_with(&self.source_prefix) {
            &path[self.source_prefix.len()..]
        } else if path.starts_with(&self.custom_prefix) {
            &path[self.custom_prefix.len()..]
        } else {
            &path[..]
        };

        let mut dest = self.dest_dir.clone();
        dest.extend(rest);
        dest
    }
}

/// Split on both separator styles, dropping empty and `.` segments.
fn segments(path: &str) -> Vec<String> {
    path.split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .map(str::to_string)
        .collect()
}

fn strip_segments(prefix: &[String], path: Vec<String>) -> Vec<String> {
    if !prefix.is_empty() && path.starts_with(prefix) {
        path[prefix.len()..].to_vec()
    } else {
        path
    }
}
