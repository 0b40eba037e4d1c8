//! # Lambda Kit Directory Tree Renderer
//!
//! File: cli/src/common/fs/tree.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Renders a directory as `tree`-style lines. `lambda-kit layer describe`
//! uses it to show what a layer's `python/` payload contains, and
//! `count_files` to summarise payloads too deep to list in full.
//!
//! - Directories first, then files, each group sorted by name
//! - Hidden entries (names starting with `.`) skipped
//! - Symlink cycles detected through canonical paths and marked, not followed
//! - Recursion bounded by `max_depth` (installed packages can be very deep)
//!
//! Example output:
//!
//! ```text
//! python/
//! ├── requests/
//! │   ├── __init__.py
//! │   └── api.py
//! └── six.py
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};
use walkdir::WalkDir;

const TEE: &str = "├── ";
const ELBOW: &str = "└── ";
const PIPE: &str = "│   ";
const SPACER: &str = "    ";

struct DirEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

/// Renders `root_path` as a list of tree lines, the first being `display_name/`.
///
/// Only `max_depth` levels below the root are listed; deeper directories are
/// shown but not expanded.
pub fn directory_tree_lines(
    root_path: &Path,
    display_name: &str,
    max_depth: usize,
) -> Result<Vec<String>> {
    if !root_path.is_dir() {
        anyhow::bail!(
            "Cannot render tree: '{}' is not a directory.",
            root_path.display()
        );
    }

    let mut ancestors = HashSet::new();
    match root_path.canonicalize() {
        Ok(canonical_root) => {
            ancestors.insert(canonical_root);
        }
        Err(e) => warn!(
            "Could not canonicalize root path '{}': {}. Cycle detection might be affected.",
            root_path.display(),
            e
        ),
    }

    let mut lines = vec![format!("{}/", display_name)];
    walk(
        root_path,
        &mut String::new(),
        1,
        max_depth,
        &mut ancestors,
        &mut lines,
    )
    .context("Failed while rendering directory tree")?;
    Ok(lines)
}

fn walk(
    dir: &Path,
    prefix: &mut String,
    depth: usize,
    max_depth: usize,
    ancestors: &mut HashSet<PathBuf>,
    lines: &mut Vec<String>,
) -> Result<()> {
    if depth > max_depth {
        return Ok(());
    }
    let entries = read_and_sort_dir_entries(dir)?;
    let num_entries = entries.len();

    for (index, entry) in entries.into_iter().enumerate() {
        let is_last_entry = index + 1 == num_entries;
        let connector = if is_last_entry { ELBOW } else { TEE };
        let suffix = if entry.is_dir { "/" } else { "" };
        lines.push(format!("{}{}{}{}", prefix, connector, entry.name, suffix));

        if !entry.is_dir {
            continue;
        }

        let prefix_component = if is_last_entry { SPACER } else { PIPE };
        prefix.push_str(prefix_component);

        // Only directories on the current path count, so two links to the same
        // sibling directory are both listed.
        match entry.path.canonicalize() {
            Ok(canonical_path) => {
                if ancestors.contains(&canonical_path) {
                    warn!(
                        "Detected symlink cycle at '{}'. Skipping subtree.",
                        entry.path.display()
                    );
                    lines.push(format!("{}{}-> [CYCLE DETECTED]", prefix, ELBOW));
                } else {
                    ancestors.insert(canonical_path.clone());
                    let walked =
                        walk(&entry.path, prefix, depth + 1, max_depth, ancestors, lines);
                    ancestors.remove(&canonical_path);
                    walked?;
                }
            }
            Err(e) => {
                warn!(
                    "Could not canonicalize path '{}': {}. Skipping cycle check.",
                    entry.path.display(),
                    e
                );
                walk(&entry.path, prefix, depth + 1, max_depth, ancestors, lines)?;
            }
        }

        prefix.truncate(prefix.len() - prefix_component.len());
    }
    Ok(())
}

fn read_and_sort_dir_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut collected_entries = Vec::new();
    let read_dir_iter = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory entries from '{}'", dir.display()))?;

    for entry_result in read_dir_iter {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to process directory entry in '{}': {}. Skipping.",
                    dir.display(),
                    e
                );
                continue;
            }
        };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            debug!("Skipping hidden entry: {}", path.display());
            continue;
        }
        // `Path::is_dir` follows symlinks; cycles are caught in `walk`.
        let is_dir = path.is_dir();
        collected_entries.push(DirEntry { path, name, is_dir });
    }

    collected_entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    Ok(collected_entries)
}

/// Counts the regular files below `root`, skipping hidden entries.
pub fn count_files(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!("Failed to access entry under '{}': {}", root.display(), e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .count()
}
