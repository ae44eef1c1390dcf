// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-mod metadata read from `overrides/<name>/`.
//!
//! Every file is optional. A missing settings file means defaults, a missing
//! include list means "allowlisted extensions", a missing exclude list means
//! "exclude nothing". A present but empty include list selects nothing.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::allowlist_pattern;
use crate::config::paths::Layout;
use crate::error::{FsError, Result, SettingsError};
use crate::utility::fs::walk::find_files;

pub const SETTINGS_FILE: &str = "settings.json";
pub const INCLUDE_LIST_FILE: &str = "include_list.txt";
pub const EXCLUDE_LIST_FILE: &str = "exclude_list.txt";
pub const CUSTOM_FILES_DIR: &str = "custom_files";

/// Contents of `settings.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModSettings {
    /// Part of the mod directory treated as its source root.
    pub src_path: Option<String>,
    /// Folder under `GameData/` receiving the mod's files (default: mod name).
    pub dest_path: Option<String>,
}

impl ModSettings {
    /// Parse and validate settings JSON. `path` is only used for messages.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Parse` for malformed JSON or unknown keys, and
    /// `SettingsError::InvalidPath` for absolute or escaping paths.
    pub fn from_json(content: &str, path: &Path) -> std::result::Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(content).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        for (key, value) in [("src_path", &settings.src_path), ("dest_path", &settings.dest_path)] {
            if let Some(value) = value {
                validate_relative(value).map_err(|message| SettingsError::InvalidPath {
                    path: path.to_path_buf(),
                    key,
                    message: message.to_string(),
                })?;
            }
        }

        Ok(settings)
    }
}

fn validate_relative(value: &str) -> std::result::Result<(), &'static str> {
    let normalized = value.replace('\\', "/");
    let p = Path::new(&normalized);
    if p.has_root() || p.is_absolute() {
        return Err("must be a relative path");
    }
    if p.components().any(|c| matches!(c, Component::ParentDir | Component::Prefix(_))) {
        return Err("must not contain '..'");
    }
    Ok(())
}

/// Patterns from an include or exclude list, with the file they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternList {
    source: PathBuf,
    patterns: Vec<String>,
}

impl PatternList {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        Self {
            source: source.into(),
            patterns,
        }
    }

    /// Parse list text: one pattern per line, blank lines skipped.
    ///
    /// Lines are trimmed (which also drops `\r` from CRLF files) and
    /// backslashes become `/`. Patterns are relative to the mod directory, so
    /// leading `/` and `./`, trailing `/`, repeated `/` and `.` segments are
    /// dropped: `/Plugins//` reads as `Plugins`.
    #[must_use]
    pub fn parse(source: impl Into<PathBuf>, content: &str) -> Self {
        let patterns = content
            .lines()
            .map(|line| {
                line.trim()
                    .replace('\\', "/")
                    .split('/')
                    .filter(|segment| !segment.is_empty() && *segment != ".")
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .filter(|line| !line.is_empty())
            .collect();
        Self::new(source, patterns)
    }

    /// Read a list file, returning `None` when it does not exist.
    ///
    /// A UTF-8 byte-order mark is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(FsError::IoError {
                    path: path.to_path_buf(),
                    source,
                }
                .into());
            }
        };
        let (content, _had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
        Ok(Some(Self::parse(path, &content)))
    }

    /// File the patterns were read from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Everything known about one mod before its files are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModDescriptor {
    name: String,
    settings: ModSettings,
    include: Option<PatternList>,
    exclude: Option<PatternList>,
    custom_files: Vec<PathBuf>,
}

impl ModDescriptor {
    /// Descriptor with default settings and no lists or custom files.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: ModSettings::default(),
            include: None,
            exclude: None,
            custom_files: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ModSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_include(mut self, include: Option<PatternList>) -> Self {
        self.include = include;
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: Option<PatternList>) -> Self {
        self.exclude = exclude;
        self
    }

    #[must_use]
    pub fn with_custom_files(mut self, custom_files: Vec<PathBuf>) -> Self {
        self.custom_files = custom_files;
        self
    }

    /// Read the mod's settings, lists and custom files from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if `settings.json` is malformed or invalid, or if an
    /// existing file cannot be read.
    pub fn load(layout: &Layout, name: &str) -> Result<Self> {
        let meta_dir = layout.mod_overrides_dir(name);

        let settings = read_settings(&meta_dir.join(SETTINGS_FILE))?;
        let include = PatternList::read(&meta_dir.join(INCLUDE_LIST_FILE))?;
        let exclude = PatternList::read(&meta_dir.join(EXCLUDE_LIST_FILE))?;

        let custom_dir = meta_dir.join(CUSTOM_FILES_DIR);
        let custom_files = if custom_dir.is_dir() {
            find_files(&custom_dir, &allowlist_pattern())?
        } else {
            Vec::new()
        };

        debug!(
            mod_name = name,
            src_path = ?settings.src_path,
            dest_path = ?settings.dest_path,
            include = include.as_ref().map(|l| l.patterns().len()),
            exclude = exclude.as_ref().map(|l| l.patterns().len()),
            custom = custom_files.len(),
            "loaded mod metadata"
        );

        Ok(Self::new(name)
            .with_settings(settings)
            .with_include(include)
            .with_exclude(exclude)
            .with_custom_files(custom_files))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn settings(&self) -> &ModSettings {
        &self.settings
    }

    /// Source sub-path inside the mod directory, empty for the mod root.
    #[must_use]
    pub fn source_subpath(&self) -> &str {
        self.settings.src_path.as_deref().unwrap_or("")
    }

    /// Destination folder under `GameData/`, the mod name unless overridden.
    #[must_use]
    pub fn dest_subpath(&self) -> &str {
        self.settings.dest_path.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub const fn include(&self) -> Option<&PatternList> {
        self.include.as_ref()
    }

    #[must_use]
    pub const fn exclude(&self) -> Option<&PatternList> {
        self.exclude.as_ref()
    }

    #[must_use]
    pub fn custom_files(&self) -> &[PathBuf] {
        &self.custom_files
    }

    /// `mods/<name>/<src_path>`
    #[must_use]
    pub fn source_dir(&self, layout: &Layout) -> PathBuf {
        let subpath = self.source_subpath();
        let dir = layout.mod_dir(&self.name);
        if subpath.is_empty() {
            dir
        } else {
            dir.join(subpath.replace('\\', "/"))
        }
    }

    /// `overrides/<name>/custom_files`
    #[must_use]
    pub fn custom_files_dir(&self, layout: &Layout) -> PathBuf {
        layout.mod_overrides_dir(&self.name).join(CUSTOM_FILES_DIR)
    }
}

fn read_settings(path: &Path) -> Result<ModSettings> {
    let content = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ModSettings::default()),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into());
        }
    };
    let (content, _had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&content);
    Ok(ModSettings::from_json(&content, path)?)
}
