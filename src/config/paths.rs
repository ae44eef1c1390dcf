// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolved project layout.
//!
//! ```text
//! root/
//!   mods/<name>/...
//!   overrides/<name>/{settings.json,include_list.txt,exclude_list.txt,custom_files/}
//!   README.md
//!   dist/
//!     <pack>/
//!       GameData/<dest>/...
//!       README.md
//!     <pack>-v<VERSION>.zip
//! ```

use std::path::{Path, PathBuf};

use super::types::{LayoutConfig, PackConfig};
use crate::modpack::VERSION;

/// Absolute locations used by a build, derived from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    mods: PathBuf,
    overrides: PathBuf,
    dist: PathBuf,
    readme: PathBuf,
    pack_name: String,
    game_data: String,
}

impl Layout {
    /// Resolve every configured path against `root`. Absolute paths are kept.
    #[must_use]
    pub fn resolve(root: &Path, layout: &LayoutConfig, pack: &PackConfig) -> Self {
        let join = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                root.join(p)
            }
        };

        Self {
            root: root.to_path_buf(),
            mods: join(&layout.mods),
            overrides: join(&layout.overrides),
            dist: join(&layout.dist),
            readme: join(&layout.readme),
            pack_name: pack.name.clone(),
            game_data: pack.game_data.clone(),
        }
    }

    /// Layout with all defaults under `root`.
    #[must_use]
    pub fn with_defaults(root: &Path) -> Self {
        Self::resolve(root, &LayoutConfig::default(), &PackConfig::default())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn mods_dir(&self) -> &Path {
        &self.mods
    }

    #[must_use]
    pub fn dist_dir(&self) -> &Path {
        &self.dist
    }

    #[must_use]
    pub fn readme(&self) -> &Path {
        &self.readme
    }

    /// `mods/<name>`
    #[must_use]
    pub fn mod_dir(&self, name: &str) -> PathBuf {
        self.mods.join(name)
    }

    /// `overrides/<name>`
    #[must_use]
    pub fn mod_overrides_dir(&self, name: &str) -> PathBuf {
        self.overrides.join(name)
    }

    /// `dist/<pack>`
    #[must_use]
    pub fn pack_dir(&self) -> PathBuf {
        self.dist.join(&self.pack_name)
    }

    /// `dist/<pack>/GameData`
    #[must_use]
    pub fn game_data_dir(&self) -> PathBuf {
        self.pack_dir().join(&self.game_data)
    }

    /// `dist/<pack>-v<VERSION>.zip`
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.dist.join(format!("{}-v{VERSION}.zip", self.pack_name))
    }
}
