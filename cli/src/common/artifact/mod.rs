//! # Lambda Kit Artifact Utilities (`common::artifact`)
//!
//! File: cli/src/common/artifact/mod.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!

//! ## Overview
//!
//! An *artifact* is a directory lambda-kit can reason about: either a
//! **function** (holds a deployable handler-style entry point) or a **layer**
//! (holds shared dependencies under `python/` plus a `requirements.txt`).
//!
//! - **`function`**: Detects function artifacts by scanning top-level `.py`
//!   files for a handler-shaped signature.
//! - **`layer`**: Detects layer artifacts by checking their two required entries.
//! - **`scaffold`**: Creates new function and layer artifacts from templates.
//!
//! Every operation validates its directory first (see
//! `common::fs::io::validate_directory`) and writes its trace lines to the
//! `Report` it is given.
//!

/// Function artifact detection.
pub mod function;
/// Layer artifact detection.
pub mod layer;
/// Template-based scaffolding for new artifacts.
pub mod scaffold;

use std::path::Path;

/// Display name for an artifact directory: its final path component.
///
/// Trailing separators are ignored; `.` and `..` resolve to the name of the
/// directory they point at when it can be determined.
pub fn artifact_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string())
}
