// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plan command arguments.

use clap::Args;

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PlanArgs {
    /// Mods to show. All mods when omitted.
    #[arg(value_name = "MOD")]
    pub mods: Vec<String>,
}
