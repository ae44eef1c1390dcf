// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::build::{BuildPhase, apply_plan, run_build_command};
use super::plan::{format_plan, resolve_mod_names};
use crate::config::paths::Layout;
use crate::error::FsError;
use crate::modpack::{ModDescriptor, select_files};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn baz_project(root: &Path) {
    write(root, "README.md", "# RWP");
    write(root, "mods/Baz/configs/main.cfg", "original");
    write(root, "mods/Baz/other/skip.cfg", "skip");
    write(root, "overrides/Baz/include_list.txt", "configs/*.cfg\n");
    write(root, "overrides/Baz/custom_files/configs/main.cfg", "custom");
}

// ============================================================================
// Plan
// ============================================================================

#[test]
fn test_format_plan() {
    let temp = temp_dir();
    baz_project(temp.path());
    let layout = Layout::with_defaults(temp.path());
    let descriptor = ModDescriptor::load(&layout, "Baz").unwrap();
    let plan = select_files(&layout, &descriptor).unwrap();

    assert_eq!(
        format_plan(&plan, temp.path()),
        "Baz (1 files, 1 custom)\n\
         \x20 mods/Baz/configs/main.cfg -> dist/RWP_Modpack/GameData/Baz/configs/main.cfg\n\
         \x20 overrides/Baz/custom_files/configs/main.cfg -> dist/RWP_Modpack/GameData/Baz/configs/main.cfg [custom]\n"
    );
}

#[test]
fn test_format_empty_plan() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join("mods/Empty")).unwrap();
    let layout = Layout::with_defaults(temp.path());
    let plan = select_files(&layout, &ModDescriptor::new("Empty")).unwrap();

    assert_eq!(
        format_plan(&plan, temp.path()),
        "Empty (0 files, 0 custom)\n  (nothing to copy)\n"
    );
}

#[test]
fn test_resolve_mod_names() {
    let available = vec!["Bar".to_string(), "Foo".to_string()];

    assert_eq!(resolve_mod_names(&[], available.clone()).unwrap(), ["Bar", "Foo"]);
    assert_eq!(
        resolve_mod_names(&["Foo".to_string()], available.clone()).unwrap(),
        ["Foo"]
    );

    let err = resolve_mod_names(&["Nope".to_string()], available).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unknown mod 'Nope' (available: Bar, Foo)");
}

// ============================================================================
// Build
// ============================================================================

#[test]
fn test_build_phase_display() {
    let phases = [
        BuildPhase::Clean,
        BuildPhase::Copying,
        BuildPhase::Readme,
        BuildPhase::Archiving,
        BuildPhase::Done,
    ];
    let names: Vec<_> = phases.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["clean", "copying", "readme", "archiving", "done"]);
}

#[tokio::test]
async fn test_apply_plan_custom_wins() {
    let temp = temp_dir();
    baz_project(temp.path());
    let layout = Layout::with_defaults(temp.path());
    let descriptor = ModDescriptor::load(&layout, "Baz").unwrap();
    let plan = select_files(&layout, &descriptor).unwrap();

    let copied = apply_plan(&plan).await.unwrap();

    assert_eq!(copied, 2);
    let main = layout.game_data_dir().join("Baz/configs/main.cfg");
    assert_eq!(std::fs::read_to_string(main).unwrap(), "custom");
    assert!(!layout.game_data_dir().join("Baz/other").exists());
}

#[tokio::test]
async fn test_run_build_command() {
    let temp = temp_dir();
    baz_project(temp.path());
    write(temp.path(), "dist/stale.txt", "old");
    let layout = Layout::with_defaults(temp.path());

    let summary = run_build_command(&layout).await.unwrap();

    assert_eq!(summary.mods.len(), 1);
    assert_eq!(summary.mods[0].name, "Baz");
    assert_eq!(summary.files_copied(), 2);
    assert_eq!(summary.archive.entries(), 2);
    assert_eq!(summary.archive.path(), layout.archive_path());
    assert!(layout.archive_path().is_file());
    assert!(layout.pack_dir().join("README.md").is_file());
    assert!(!temp.path().join("dist/stale.txt").exists());
}

#[tokio::test]
async fn test_run_build_command_missing_readme() {
    let temp = temp_dir();
    write(temp.path(), "mods/Foo/a.cfg", "");
    let layout = Layout::with_defaults(temp.path());

    let err = run_build_command(&layout).await.unwrap_err();

    assert!(matches!(err.downcast_ref::<FsError>(), Some(FsError::NotFound(_))));
    assert!(!layout.archive_path().exists());
}
