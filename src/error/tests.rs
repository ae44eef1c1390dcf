// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{ConfigError, FsError, ModpackError, ModpackResult, PatternError, SettingsError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "pack".to_string(),
        key: "name".to_string(),
        message: "must not be empty".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'name' in section '[pack]': must not be empty"
    );
}

#[test]
fn test_pattern_error_display() {
    let err = ModpackError::from(PatternError::Invalid {
        list: "overrides/Baz/include_list.txt".to_string(),
        pattern: "configs/**.cfg".to_string(),
        message: "bad tree".to_string(),
    });
    insta::assert_snapshot!(
        err.to_string(),
        @"pattern error: invalid pattern 'configs/**.cfg' in overrides/Baz/include_list.txt: bad tree"
    );
}

#[test]
fn test_settings_invalid_path_display() {
    let err = SettingsError::InvalidPath {
        path: PathBuf::from("settings.json"),
        key: "dest_path",
        message: "must not contain '..'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'dest_path' in 'settings.json': must not contain '..'"
    );
}

#[test]
fn test_io_error_is_boxed() {
    let err: ModpackError = std::io::Error::other("disk full").into();
    assert!(matches!(err, ModpackError::Io(_)));

    let fs: ModpackError = FsError::NotFound(PathBuf::from("README.md")).into();
    assert_eq!(fs.to_string(), "filesystem error: path not found: README.md");
}

#[test]
fn test_modpack_error_size() {
    // Every variant is a thin Box: pointer + discriminant
    let size = std::mem::size_of::<ModpackError>();
    assert!(size <= 16, "ModpackError is {size} bytes, expected <= 16");
}

#[test]
fn test_modpack_result_size() {
    let size = std::mem::size_of::<ModpackResult<()>>();
    assert!(size <= 24, "ModpackResult<()> is {size} bytes, expected <= 24");
}
