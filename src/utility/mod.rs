// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:  walk_files(), find_files(), WalkOptions
//!   copy:  copy_file_async(), remove_dir_if_exists()
//! ```

pub mod fs;
