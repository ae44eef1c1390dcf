// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Build (default) | Plan | Version
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rwp_modpack::cli::global::GlobalOptions;
use rwp_modpack::cli::plan::PlanArgs;
use rwp_modpack::cli::{self, Command};
use rwp_modpack::cmd::build::run_build_command;
use rwp_modpack::cmd::plan::run_plan_command;
use rwp_modpack::config::loader::ConfigLoader;
use rwp_modpack::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use rwp_modpack::logging::{LogConfig, init_logging};
use rwp_modpack::modpack::VERSION;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    // Version needs neither config nor logging.
    let plan_args = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(Command::Plan(args)) => Some(args),
        Some(Command::Build) | None => None,
    };

    let root = match resolve_root(&cli.global) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let (config, config_files) = match load_config(&cli.global, &root) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config, &root);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(root = %root.display(), files = ?config_files, "configuration loaded");

    dispatch_command(plan_args, &config, &root).await
}

fn resolve_root(global: &GlobalOptions) -> rwp_modpack::error::Result<PathBuf> {
    let root = global.root.clone().unwrap_or_else(|| PathBuf::from("."));
    Ok(std::path::absolute(&root)?)
}

fn build_config_loader(global: &GlobalOptions, root: &Path) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(root.join(CONFIG_FILE_NAME));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(
    global: &GlobalOptions,
    root: &Path,
) -> rwp_modpack::error::Result<(Config, Vec<PathBuf>)> {
    let mut loader = build_config_loader(global, root);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    let files = loader.loaded_files().to_vec();
    Ok((loader.build()?, files))
}

fn build_log_config(config: &Config, root: &Path) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file().map(|p| root.join(p)))
        .build()
}

async fn dispatch_command(
    plan_args: Option<&PlanArgs>,
    config: &Config,
    root: &Path,
) -> ExitCode {
    let layout = config.layout(root);

    let result = match plan_args {
        Some(args) => run_plan_command(args, &layout),
        None => run_build_command(&layout).await.map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("rwp-modpack {}", env!("CARGO_PKG_VERSION"));
    println!("modpack v{VERSION}");
}
