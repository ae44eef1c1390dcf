// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{entry_name, zip_directory};
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn read_archive(path: &Path) -> Vec<(String, String)> {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            let mut content = String::new();
            entry.read_to_string(&mut content).unwrap();
            (entry.name().to_string(), content)
        })
        .collect()
}

fn populate(pack: &Path) {
    std::fs::create_dir_all(pack.join("GameData/Foo/Parts")).unwrap();
    std::fs::write(pack.join("README.md"), "# Pack").unwrap();
    std::fs::write(pack.join("GameData/Foo/a.png"), "png").unwrap();
    std::fs::write(pack.join("GameData/Foo/Parts/engine.cfg"), "PART {}").unwrap();
}

#[test]
fn test_entry_name() {
    let base = Path::new("/dist/RWP_Modpack");
    assert_eq!(
        entry_name(base, Path::new("/dist/RWP_Modpack/GameData/Foo/a.png")),
        Some("GameData/Foo/a.png".to_string())
    );
    assert_eq!(entry_name(base, Path::new("/dist/RWP_Modpack")), None);
    assert_eq!(entry_name(base, Path::new("/elsewhere/a.png")), None);
}

#[test]
fn test_zip_directory_contents() {
    let temp = temp_dir();
    let pack = temp.path().join("RWP_Modpack");
    populate(&pack);
    let dest = temp.path().join("RWP_Modpack-v0.0.1.zip");

    let summary = zip_directory(&pack, &dest).unwrap();

    assert_eq!(summary.entries(), 3);
    assert_eq!(summary.path(), dest.as_path());
    assert_eq!(
        read_archive(&dest),
        vec![
            ("GameData/Foo/Parts/engine.cfg".to_string(), "PART {}".to_string()),
            ("GameData/Foo/a.png".to_string(), "png".to_string()),
            ("README.md".to_string(), "# Pack".to_string()),
        ]
    );
}

#[test]
fn test_zip_directory_uses_deflate() {
    let temp = temp_dir();
    let pack = temp.path().join("pack");
    std::fs::create_dir_all(&pack).unwrap();
    std::fs::write(pack.join("big.txt"), "modpack ".repeat(4096)).unwrap();
    let dest = temp.path().join("pack.zip");

    zip_directory(&pack, &dest).unwrap();

    let mut archive = zip::ZipArchive::new(std::fs::File::open(&dest).unwrap()).unwrap();
    let entry = archive.by_index(0).unwrap();
    assert_eq!(entry.compression(), zip::CompressionMethod::Deflated);
    assert!(entry.compressed_size() < entry.size());
}

#[test]
fn test_zip_directory_is_reproducible() {
    let temp = temp_dir();
    let pack = temp.path().join("RWP_Modpack");
    populate(&pack);

    let first = temp.path().join("first.zip");
    let second = temp.path().join("second.zip");
    zip_directory(&pack, &first).unwrap();
    zip_directory(&pack, &second).unwrap();

    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}

#[test]
fn test_zip_directory_replaces_existing_archive() {
    let temp = temp_dir();
    let pack = temp.path().join("RWP_Modpack");
    populate(&pack);
    let dest = temp.path().join("out.zip");
    std::fs::write(&dest, "stale").unwrap();

    zip_directory(&pack, &dest).unwrap();

    assert_eq!(read_archive(&dest).len(), 3);
    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".zip.tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_zip_directory_missing_source() {
    let temp = temp_dir();
    let result = zip_directory(&temp.path().join("missing"), &temp.path().join("x.zip"));
    assert!(result.is_err());
    assert!(!temp.path().join("x.zip").exists());
}
