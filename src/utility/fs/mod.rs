// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities: ordered traversal and async copy.
//!
//! ```text
//! walk:  walk_files()              ignore::Walk, sorted by name
//!        find_files()              wax glob over relative paths
//!        matches_path_or_parent()  directory patterns select their contents
//!        WalkOptions               hidden files on or off, no ignore files
//! copy:  copy_file_async()         tokio::fs copy, creates parents, overwrites
//!        remove_dir_if_exists()    clean slate for dist/
//! ```

pub mod copy;
pub mod walk;
