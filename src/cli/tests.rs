// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[test]
fn test_cli_definition() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_no_arguments() {
    let cli = Cli::try_parse_from(["rwp-modpack"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.global.root.is_none());
    assert!(cli.global.configs.is_empty());
    assert!(cli.global.to_config_overrides().is_empty());
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["rwp-modpack", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_build_with_globals() {
    let cli = Cli::try_parse_from([
        "rwp-modpack",
        "-C",
        "/tmp/pack",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-l",
        "4",
        "build",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Build)));
    assert_eq!(cli.global.root, Some(PathBuf::from("/tmp/pack")));
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.log_level, Some(4));
}

#[test]
fn test_parse_plan_mods() {
    let cli = Cli::try_parse_from(["rwp-modpack", "plan", "Foo", "Bar"]).unwrap();
    match cli.command {
        Some(Command::Plan(args)) => assert_eq!(args.mods, ["Foo", "Bar"]),
        other => panic!("expected plan command, got {other:?}"),
    }
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["rwp-modpack", "-l", "7"]).is_err());
    assert!(Cli::try_parse_from(["rwp-modpack", "--file-log-level", "9"]).is_err());
}

#[test]
fn test_config_overrides_file_level_falls_back() {
    let cli = Cli::try_parse_from(["rwp-modpack", "-l", "2", "--log-file", "build.log"]).unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        [
            ("global.output_log_level", "2".to_string()),
            ("global.file_log_level", "2".to_string()),
            ("global.log_file", "build.log".to_string()),
        ]
    );
}

#[test]
fn test_config_overrides_explicit_file_level() {
    let cli = Cli::try_parse_from(["rwp-modpack", "-l", "1", "--file-log-level", "5"]).unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        [
            ("global.output_log_level", "1".to_string()),
            ("global.file_log_level", "5".to_string()),
        ]
    );
}
