// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command: assembles `dist/<pack>/` and archives it.
//!
//! ```text
//! Clean --> Copying(mod_0 .. mod_n) --> Readme --> Archiving --> Done
//!   |            |                        |           |
//!   +------------+------------------------+-----------+--> error (run aborts)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::{debug, info, trace};

use crate::archive::{ArchiveSummary, zip_directory};
use crate::config::paths::Layout;
use crate::error::{FsError, Result};
use crate::modpack::{CopyPlan, ModDescriptor, Origin, discover_mods, select_files};
use crate::utility::fs::copy::{copy_file_async, remove_dir_if_exists};

/// Stages of a build, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Clean,
    Copying,
    Readme,
    Archiving,
    Done,
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clean => "clean",
            Self::Copying => "copying",
            Self::Readme => "readme",
            Self::Archiving => "archiving",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Files copied for one mod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModSummary {
    pub name: String,
    pub files: usize,
    pub custom: usize,
}

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub mods: Vec<ModSummary>,
    pub archive: ArchiveSummary,
    pub elapsed: Duration,
}

impl BuildSummary {
    /// Total number of copy operations, custom overrides included.
    #[must_use]
    pub fn files_copied(&self) -> usize {
        self.mods.iter().map(|m| m.files + m.custom).sum()
    }
}

fn enter(phase: BuildPhase) {
    debug!(%phase, "entering build phase");
}

/// Main handler for build command.
///
/// # Errors
///
/// Returns the first error from any phase: removing `dist/`, loading a mod's
/// metadata, selecting or copying its files, copying the readme, or writing
/// the archive. Nothing is rolled back.
pub async fn run_build_command(layout: &Layout) -> Result<BuildSummary> {
    let started = Instant::now();
    let pack_dir = layout.pack_dir();

    enter(BuildPhase::Clean);
    if remove_dir_if_exists(layout.dist_dir()).await? {
        debug!(dir = %layout.dist_dir().display(), "removed previous output");
    }

    enter(BuildPhase::Copying);
    let mut mods = Vec::new();
    for name in discover_mods(layout)? {
        info!("Copying {name}");
        let descriptor = ModDescriptor::load(layout, &name)
            .with_context(|| format!("failed to load metadata for mod '{name}'"))?;
        let plan = select_files(layout, &descriptor)
            .with_context(|| format!("failed to select files for mod '{name}'"))?;
        apply_plan(&plan).await?;

        mods.push(ModSummary {
            files: plan.count(Origin::Mod),
            custom: plan.count(Origin::Custom),
            name,
        });
    }

    enter(BuildPhase::Readme);
    copy_readme(layout, &pack_dir).await?;

    enter(BuildPhase::Archiving);
    info!("Archiving {}", pack_dir.display());
    let archive_started = Instant::now();
    let archive_path = layout.archive_path();
    let archive = tokio::task::spawn_blocking(move || zip_directory(&pack_dir, &archive_path))
        .await
        .context("archive task panicked")??;
    info!(
        entries = archive.entries(),
        "Archived to {} in {:.2?}",
        archive.path().display(),
        archive_started.elapsed()
    );

    enter(BuildPhase::Done);
    let elapsed = started.elapsed();
    info!(mods = mods.len(), "Build finished in {elapsed:.2?}");
    info!("All done! Fly dangerously!");

    Ok(BuildSummary {
        mods,
        archive,
        elapsed,
    })
}

/// Copies every item of `plan` in order, so later items replace earlier
/// ones at the same destination.
///
/// # Errors
///
/// Returns the first copy failure.
pub async fn apply_plan(plan: &CopyPlan) -> Result<usize> {
    for item in plan {
        trace!(
            origin = %item.origin(),
            from = %item.source().display(),
            to = %item.destination().display(),
            "copy"
        );
        copy_file_async(item.source(), item.destination())
            .await
            .with_context(|| format!("failed to copy files for mod '{}'", plan.mod_name()))?;
    }
    Ok(plan.len())
}

async fn copy_readme(layout: &Layout, pack_dir: &Path) -> Result<PathBuf> {
    let readme = layout.readme();
    if !readme.is_file() {
        return Err(FsError::NotFound(readme.to_path_buf()).into());
    }

    let file_name = readme
        .file_name()
        .map_or_else(|| PathBuf::from("README.md"), PathBuf::from);
    let dest = pack_dir.join(file_name);
    copy_file_async(readme, &dest).await?;
    Ok(dest)
}
