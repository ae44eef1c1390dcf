// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plan command: prints what a build would copy, without touching `dist/`.

use std::fmt::Write as _;
use std::path::Path;

use crate::cli::plan::PlanArgs;
use crate::config::paths::Layout;
use crate::error::Result;
use crate::modpack::{CopyPlan, ModDescriptor, Origin, discover_mods, select_files};

/// Main handler for plan command.
///
/// # Errors
///
/// Returns an error if a requested mod does not exist, or if a mod's metadata
/// or patterns are invalid.
pub fn run_plan_command(args: &PlanArgs, layout: &Layout) -> Result<()> {
    let names = resolve_mod_names(&args.mods, discover_mods(layout)?)?;

    if names.is_empty() {
        println!("No mods found in {}", layout.mods_dir().display());
        return Ok(());
    }

    for name in &names {
        let descriptor = ModDescriptor::load(layout, name)?;
        let plan = select_files(layout, &descriptor)?;
        print!("{}", format_plan(&plan, layout.root()));
    }
    Ok(())
}

/// Picks the requested mods out of `available`, keeping the request order.
/// An empty request selects every mod.
pub(crate) fn resolve_mod_names(requested: &[String], available: Vec<String>) -> Result<Vec<String>> {
    if requested.is_empty() {
        return Ok(available);
    }

    requested
        .iter()
        .map(|name| {
            if available.contains(name) {
                Ok(name.clone())
            } else {
                Err(anyhow::anyhow!(
                    "unknown mod '{name}' (available: {})",
                    available.join(", ")
                ))
            }
        })
        .collect()
}

/// Renders a plan with paths relative to `root`.
///
/// ```text
/// Foo (2 files, 1 custom)
///   mods/Foo/a.png -> dist/RWP_Modpack/GameData/Foo/a.png
///   overrides/Foo/custom_files/a.png -> dist/RWP_Modpack/GameData/Foo/a.png [custom]
/// ```
#[must_use]
pub fn format_plan(plan: &CopyPlan, root: &Path) -> String {
    let mut out = format!(
        "{} ({} files, {} custom)\n",
        plan.mod_name(),
        plan.count(Origin::Mod),
        plan.count(Origin::Custom)
    );

    if plan.is_empty() {
        out.push_str("  (nothing to copy)\n");
    }

    for item in plan {
        let _ = write!(
            out,
            "  {} -> {}",
            display_relative(item.source(), root),
            display_relative(item.destination(), root)
        );
        if item.origin() == Origin::Custom {
            out.push_str(" [custom]");
        }
        out.push('\n');
    }
    out
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
