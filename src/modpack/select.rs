// rwp-modpack: RWP Modpack Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File selection: turns a [`ModDescriptor`] into an ordered [`CopyPlan`].
//!
//! ```text
//! source files (sorted walk of mods/<name>/<src_path>)
//!     | include list?  yes: any include glob matches
//!     |                no:  **/*.{png,dds,cfg,mu,dll,version,txt,md}
//!     |                dot-paths only when a pattern names a dot-segment
//!     v
//! candidates (BTreeSet, duplicates collapse)
//!     | exclude list?  drop any exclude glob match
//!     v
//! mod items ++ custom items   (custom last so it overwrites)
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use wax::{Glob, Program};

use super::allowlist_pattern;
use super::descriptor::{ModDescriptor, PatternList};
use super::paths::PathMapper;
use crate::config::paths::Layout;
use crate::error::{PatternError, Result};
use crate::utility::fs::walk::{WalkOptions, matches_path_or_parent, walk_files};

/// Where a planned file comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    /// Selected from `mods/<name>/`.
    Mod,
    /// Override from `overrides/<name>/custom_files/`.
    Custom,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mod => write!(f, "mod"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// One file to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyItem {
    source: PathBuf,
    destination: PathBuf,
    origin: Origin,
}

impl CopyItem {
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }
}

/// Ordered copy plan for one mod. Mod items come first, custom items last,
/// so applying the plan in order lets overrides replace selected files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    mod_name: String,
    items: Vec<CopyItem>,
}

impl CopyPlan {
    #[must_use]
    pub fn mod_name(&self) -> &str {
        &self.mod_name
    }

    #[must_use]
    pub fn items(&self) -> &[CopyItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items with the given origin.
    #[must_use]
    pub fn count(&self, origin: Origin) -> usize {
        self.items.iter().filter(|i| i.origin == origin).count()
    }

    /// Distinct destinations, as they exist once the plan has been applied.
    #[must_use]
    pub fn destinations(&self) -> BTreeSet<&Path> {
        self.items.iter().map(CopyItem::destination).collect()
    }
}

impl<'a> IntoIterator for &'a CopyPlan {
    type Item = &'a CopyItem;
    type IntoIter = std::slice::Iter<'a, CopyItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Compiled patterns from one list file.
struct GlobSet {
    globs: Vec<ListGlob>,
}

struct ListGlob {
    glob: Glob<'static>,
    /// Pattern spells out a dot-segment, so it may select hidden paths.
    names_hidden: bool,
}

impl GlobSet {
    fn compile(list: &PatternList) -> std::result::Result<Self, PatternError> {
        let globs = list
            .patterns()
            .iter()
            .map(|pattern| {
                let glob = Glob::new(&escape_literals(pattern))
                    .map(Glob::into_owned)
                    .map_err(|e| PatternError::Invalid {
                        list: list.source().display().to_string(),
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })?;
                Ok(ListGlob {
                    glob,
                    names_hidden: pattern.split('/').any(|segment| segment.starts_with('.')),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { globs })
    }

    /// A directory match selects everything below it, dot-files included,
    /// like a directory copy would.
    fn matches(&self, relative: &Path) -> bool {
        self.globs.iter().any(|g| {
            matches_path_or_parent(&g.glob, relative, |matched| {
                g.names_hidden || !is_hidden(matched)
            })
        })
    }
}

/// Escapes characters that list files use literally but wax reads as syntax:
/// `$ : < > ( )` anywhere and `,` outside of `{...}`. Character classes are
/// left alone since wax reads those characters literally inside them.
pub(super) fn escape_literals(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    let mut braces = 0usize;
    let mut in_class = false;

    for c in pattern.chars() {
        match c {
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '{' if !in_class => braces += 1,
            '}' if !in_class => braces = braces.saturating_sub(1),
            '$' | ':' | '<' | '>' | '(' | ')' if !in_class => escaped.push('\\'),
            ',' if !in_class && braces == 0 => escaped.push('\\'),
            _ => {}
        }
        escaped.push(c);
    }

    escaped
}

/// True if any component of `relative` is a dot-file or dot-directory.
fn is_hidden(relative: &Path) -> bool {
    relative
        .components()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
}

/// Build the copy plan for a mod.
///
/// # Errors
///
/// Returns an error if an include or exclude pattern is not a valid glob, or
/// if the source directory cannot be walked.
pub fn select_files(layout: &Layout, descriptor: &ModDescriptor) -> Result<CopyPlan> {
    let candidates = select_candidates(layout, descriptor)?;
    let mapper = PathMapper::new(layout, descriptor);

    let mod_items = candidates.into_iter().map(|source| CopyItem {
        destination: mapper.destination(&source),
        source,
        origin: Origin::Mod,
    });

    let custom_items = descriptor
        .custom_files()
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|source| CopyItem {
            destination: mapper.destination(source),
            source: source.clone(),
            origin: Origin::Custom,
        });

    let plan = CopyPlan {
        mod_name: descriptor.name().to_string(),
        items: mod_items.chain(custom_items).collect(),
    };

    debug!(
        mod_name = descriptor.name(),
        files = plan.count(Origin::Mod),
        custom = plan.count(Origin::Custom),
        "selected files"
    );

    Ok(plan)
}

/// Source files after include/allowlist and exclude filtering.
fn select_candidates(layout: &Layout, descriptor: &ModDescriptor) -> Result<BTreeSet<PathBuf>> {
    let source_dir = descriptor.source_dir(layout);
    if !source_dir.is_dir() {
        warn!(
            mod_name = descriptor.name(),
            path = %source_dir.display(),
            "source directory does not exist, no mod files selected"
        );
        return Ok(BTreeSet::new());
    }

    // Dot-files are walked too: only patterns that name them select them.
    let files = walk_files(&source_dir, &WalkOptions::all())?;
    let relative = |path: &Path| path.strip_prefix(&source_dir).map(Path::to_path_buf);

    let mut candidates = BTreeSet::new();
    match descriptor.include() {
        Some(list) => {
            let include = GlobSet::compile(list)?;
            for path in files {
                if relative(&path).is_ok_and(|rel| include.matches(&rel)) {
                    candidates.insert(path);
                }
            }
        }
        None => {
            let pattern = allowlist_pattern();
            let allowlist = Glob::new(&pattern)
                .map_err(|e| anyhow::anyhow!("invalid allowlist pattern '{pattern}': {e}"))?;
            for path in files {
                let selected = relative(&path)
                    .is_ok_and(|rel| !is_hidden(&rel) && allowlist.is_match(rel.as_path()));
                if selected {
                    candidates.insert(path);
                }
            }
        }
    }

    if let Some(list) = descriptor.exclude() {
        let exclude = GlobSet::compile(list)?;
        candidates.retain(|path| !relative(path).is_ok_and(|rel| exclude.matches(&rel)));
    }

    Ok(candidates)
}
