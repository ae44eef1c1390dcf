// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for rwp-modpack.
//!
//! ```text
//! Config: GlobalConfig, LayoutConfig, PackConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. Unset or empty disables file logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

impl GlobalConfig {
    /// The log file path, ignoring an empty value.
    #[must_use]
    pub fn log_file(&self) -> Option<&std::path::Path> {
        self.log_file
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

/// Input and output locations, relative to the project root unless absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// One directory per mod.
    pub mods: PathBuf,
    /// Per-mod settings, include/exclude lists and custom files.
    pub overrides: PathBuf,
    /// Output directory, wiped at the start of every build.
    pub dist: PathBuf,
    /// Readme copied into the pack root.
    pub readme: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mods: PathBuf::from("mods"),
            overrides: PathBuf::from("overrides"),
            dist: PathBuf::from("dist"),
            readme: PathBuf::from("README.md"),
        }
    }
}

/// Naming of the assembled pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackConfig {
    /// Pack directory under `dist/` and archive name prefix.
    pub name: String,
    /// Game data folder inside the pack that receives mod files.
    pub game_data: String,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            name: "RWP_Modpack".to_string(),
            game_data: "GameData".to_string(),
        }
    }
}
