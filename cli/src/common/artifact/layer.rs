//! # Layer Artifact Detection
//!
//! File: cli/src/common/artifact/layer.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! A directory is a layer artifact when it holds both:
//! - `python/` (directory): the payload extracted under `/opt/python` at runtime
//! - `requirements.txt` (file): the dependency manifest
//!
//! The entries are checked in that order and the check stops at the first one
//! that is missing. Neither entry's contents are inspected.
//!
use crate::common::fs::io::validate_directory;
use crate::core::error::Result;
use crate::core::report::Report;
use std::path::Path;
use tracing::debug;

/// Directory holding the layer's importable packages.
pub const PAYLOAD_DIR: &str = "python";
/// The layer's dependency manifest.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    fn label(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }

    fn matches(self, path: &Path) -> bool {
        match self {
            EntryKind::Directory => path.is_dir(),
            EntryKind::File => path.is_file(),
        }
    }
}

const REQUIRED_ENTRIES: [(&str, EntryKind); 2] = [
    (PAYLOAD_DIR, EntryKind::Directory),
    (REQUIREMENTS_FILE, EntryKind::File),
];

/// Determines whether `directory` looks like a Python Lambda layer.
///
/// Emits one `Found required ...` line per entry present and, on the first
/// missing entry, a `Missing required ...` line before returning `false`.
pub fn detect_layer(directory: &Path, report: &mut dyn Report) -> Result<bool> {
    let directory = validate_directory(directory)?;

    for (name, kind) in REQUIRED_ENTRIES {
        let entry_path = directory.join(name);
        if kind.matches(&entry_path) {
            report.line(&format!(
                "Found required {}: {}",
                kind.label(),
                entry_path.display()
            ));
        } else {
            debug!("Layer check failed at '{}'", entry_path.display());
            report.line(&format!(
                "Missing required {}: {}",
                kind.label(),
                entry_path.display()
            ));
            return Ok(false);
        }
    }

    report.line(&format!(
        "{} appears to be a Python Lambda layer.",
        directory.display()
    ));
    Ok(true)
}

/// Number of requirement lines in a `requirements.txt` body, ignoring blank
/// lines and comments.
pub fn count_requirements(manifest: &str) -> usize {
    manifest
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .count()
}
