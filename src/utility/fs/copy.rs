// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result};
use std::path::Path;
use tokio::fs;

/// Copies one file, creating the destination's parent directories and
/// replacing any file already at `dst`.
///
/// # Example
/// ```no_run
/// use rwp_modpack::utility::fs::copy::copy_file_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_file_async(
///     Path::new("mods/Foo/Parts/engine.cfg"),
///     Path::new("dist/RWP_Modpack/GameData/Foo/Parts/engine.cfg"),
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the copy fails.
pub async fn copy_file_async(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| FsError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs::copy(src, dst).await.map_err(|source| FsError::IoError {
        path: src.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Removes `dir` and everything below it. A missing directory is not an error.
///
/// Returns whether anything was removed.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be removed.
pub async fn remove_dir_if_exists(dir: &Path) -> Result<bool> {
    match fs::remove_dir_all(dir).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(FsError::IoError {
            path: dir.to_path_buf(),
            source,
        }
        .into()),
    }
}
