// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             ModpackError (16 bytes)
//!                     |
//!   +--------+--------+-------+-------+-------+
//!   |        |        |       |       |       |
//!   v        v        v       v       v       v
//! Settings Pattern   Fs    Archive  Config   Io
//!   Box      Box     Box     Box     Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Settings  Read, Parse, InvalidPath
//!   Pattern   Invalid
//!   Fs        NotFound, IoError
//!   Archive   Zip, Io, Persist
//!   Config    ParseError, InvalidValue
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModpackError`].
pub type ModpackResult<T> = std::result::Result<T, ModpackError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum ModpackError {
    /// Per-mod settings could not be loaded.
    #[error("settings error: {0}")]
    Settings(#[from] Box<SettingsError>),

    /// An include or exclude pattern could not be compiled.
    #[error("pattern error: {0}")]
    Pattern(#[from] Box<PatternError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Archive could not be written.
    #[error("archive error: {0}")]
    Archive(#[from] Box<ArchiveError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModpackError {
                fn from(err: $error) -> Self {
                    ModpackError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SettingsError => Settings,
    PatternError => Pattern,
    FsError => Fs,
    ArchiveError => Archive,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Settings Errors ---

/// Errors raised while reading `overrides/<mod>/settings.json`.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON or has unexpected keys.
    #[error("failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A path setting escapes the mod directory or is absolute.
    #[error("invalid value for '{key}' in '{path}': {message}")]
    InvalidPath {
        path: PathBuf,
        key: &'static str,
        message: String,
    },
}

// --- Pattern Errors ---

/// Errors raised while compiling include/exclude patterns.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern is not a valid glob.
    #[error("invalid pattern '{pattern}' in {list}: {message}")]
    Invalid {
        list: String,
        pattern: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Archive Errors ---

/// Errors raised while writing the distributable archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Error from the zip writer.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error on an archive input or output.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished temporary archive could not be moved into place.
    #[error("failed to persist archive to '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
