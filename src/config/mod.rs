// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for rwp-modpack.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/modpack.toml (optional)
//! 3. --config FILE (repeatable)
//! 4. MODPACK_* env vars
//! 5. CLI overrides (log levels, log file)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODPACK_LAYOUT__DIST=out            → layout.dist = "out"
//! MODPACK_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! ```
//!
//! Every key is optional; an empty configuration builds `dist/RWP_Modpack`
//! from `mods/` and `overrides/` exactly like a bare invocation.

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::Layout;
use types::{GlobalConfig, LayoutConfig, PackConfig};

/// Name of the optional configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "modpack.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MODPACK";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Input and output directories.
    pub layout: LayoutConfig,
    /// Pack naming.
    pub pack: PackConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rwp_modpack::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modpack.toml")
    ///     .with_env_prefix("MODPACK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, does not match the
    /// `Config` structure or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty or nested pack name
    /// or game data folder.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [("name", &self.pack.name), ("game_data", &self.pack.game_data)] {
            if value.trim().is_empty() {
                return Err(invalid_pack_value(key, "must not be empty").into());
            }
            if value.contains(['/', '\\']) || value == ".." {
                return Err(invalid_pack_value(key, "must be a single folder name").into());
            }
        }
        Ok(())
    }

    /// Resolve the configured directories against the project root.
    #[must_use]
    pub fn layout(&self, root: &Path) -> Layout {
        Layout::resolve(root, &self.layout, &self.pack)
    }
}

fn invalid_pack_value(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "pack".to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
