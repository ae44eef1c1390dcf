// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for rwp-modpack using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! rwp-modpack [global options] [command]
//! build           (default)
//! plan [mods...]
//! version
//! ```

pub mod global;
pub mod plan;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::plan::PlanArgs;
use clap::{Parser, Subcommand};

/// RWP Modpack Build Tool
///
/// Assembles the modpack from per-mod sources and overrides, then archives it.
#[derive(Debug, Parser)]
#[command(
    name = "rwp-modpack",
    author,
    version,
    about = "RWP Modpack Build Tool",
    long_about = "rwp-modpack Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Assembles the modpack from per-mod sources and overrides.\n\n\
                  Invoking `rwp-modpack` without a command builds everything:\n\
                  dist/ is recreated, every mod under mods/ is copied into\n\
                  GameData/, README.md is added and the result is zipped.\n\
                  Use `rwp-modpack plan` to inspect what would be copied.",
    after_help = "CONFIGURATION:\n\n\
                  rwp-modpack looks for `modpack.toml` in the project root. Files\n\
                  given with --config are loaded after it, then MODPACK_*\n\
                  environment variables (for example MODPACK_LAYOUT__DIST=out).\n\
                  Log level flags override all of these."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Builds the modpack and its archive (default).
    Build,

    /// Prints the copy plan of each mod without building.
    Plan(PlanArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
