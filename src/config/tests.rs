// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, Layout};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.layout.dist, PathBuf::from("dist"));
    assert_eq!(config.layout.readme, PathBuf::from("README.md"));
    assert_eq!(config.pack.name, "RWP_Modpack");
}

#[test]
fn test_empty_config_parses_to_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.layout.mods, PathBuf::from("mods"));
    assert_eq!(config.layout.overrides, PathBuf::from("overrides"));
    assert_eq!(config.pack.game_data, "GameData");
    assert!(config.global.log_file().is_none());
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "logs/modpack.log"

[layout]
dist = "out"

[pack]
name = "TestPack"
"#;

    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file(),
        Some(Path::new("logs/modpack.log"))
    );
    assert_eq!(config.layout.dist, PathBuf::from("out"));
    assert_eq!(config.layout.mods, PathBuf::from("mods"));
    assert_eq!(config.pack.name, "TestPack");
}

#[test]
fn test_empty_log_file_disables_file_logging() {
    let config = Config::parse("[global]\nlog_file = \"\"\n").unwrap();
    assert!(config.global.log_file().is_none());
}

#[test]
fn test_unknown_key_rejected() {
    assert!(Config::parse("[layout]\nmodz = \"mods\"\n").is_err());
    assert!(Config::parse("[packaging]\nname = \"x\"\n").is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_empty_pack_name_rejected() {
    let err = Config::parse("[pack]\nname = \"\"\n").unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    insta::assert_snapshot!(
        config_err.to_string(),
        @"invalid value for 'name' in section '[pack]': must not be empty"
    );
}

#[test]
fn test_nested_game_data_rejected() {
    assert!(Config::parse("[pack]\ngame_data = \"Game/Data\"\n").is_err());
}

#[test]
fn test_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\noutput_log_level = 2\n")
        .set("global.output_log_level", 5)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
}

#[test]
fn test_loader_missing_required_file() {
    let result = ConfigLoader::new()
        .add_toml_file("/definitely/not/here/modpack.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_loader_tracks_optional_files() {
    let temp = tempfile::tempdir().unwrap();
    let present = temp.path().join("modpack.toml");
    std::fs::write(&present, "[pack]\nname = \"FromFile\"\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(temp.path().join("absent.toml"))
        .add_toml_file_optional(&present);
    assert_eq!(loader.loaded_files(), &[present.clone()]);

    let config = loader.build().unwrap();
    assert_eq!(config.pack.name, "FromFile");
}

#[test]
fn test_layout_resolve() {
    let config = Config::parse("[layout]\ndist = \"/tmp/out\"\n").unwrap();
    let layout = config.layout(Path::new("/project"));

    assert_eq!(layout.mods_dir(), Path::new("/project/mods"));
    assert_eq!(layout.dist_dir(), Path::new("/tmp/out"));
    assert_eq!(layout.pack_dir(), PathBuf::from("/tmp/out/RWP_Modpack"));
    assert_eq!(
        layout.game_data_dir(),
        PathBuf::from("/tmp/out/RWP_Modpack/GameData")
    );
    assert_eq!(
        layout.archive_path(),
        PathBuf::from("/tmp/out/RWP_Modpack-v0.0.1.zip")
    );
}

#[test]
fn test_layout_defaults() {
    let layout = Layout::with_defaults(Path::new("/project"));
    assert_eq!(layout.mod_dir("Foo"), PathBuf::from("/project/mods/Foo"));
    assert_eq!(
        layout.mod_overrides_dir("Foo"),
        PathBuf::from("/project/overrides/Foo")
    );
    assert_eq!(layout.readme(), Path::new("/project/README.md"));
}
