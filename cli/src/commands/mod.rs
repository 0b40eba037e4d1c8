//! # Lambda Kit Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Aggregates the top-level command groups of the `lambda-kit` CLI so that
//! `main.rs` can route to them.
//!
//! ## Command Groups
//!
//! - `function`: `init`, `describe` and `pack` for Lambda function directories
//! - `layer`: `init`, `describe` and `pack` for Lambda layer directories
//!
//! Each group defines its own arguments structure and a synchronous handler
//! that dispatches to the subcommand modules. The `pack` subcommand is shared
//! by both groups and lives in `pack.rs`.
//!

/// Command group for Lambda functions. Includes `init`, `describe`, `pack`.
pub mod function;
/// Command group for Lambda layers. Includes `init`, `describe`, `pack`.
pub mod layer;
/// Arguments and diagnostics shared by `function pack` and `layer pack`.
pub mod pack;

use std::env;
use std::path::Path;

/// `path` relative to the current directory when that can be computed,
/// otherwise `path` as given.
pub(crate) fn relative_display(path: &Path) -> String {
    match env::current_dir() {
        Ok(cwd) => pathdiff::diff_paths(path, &cwd)
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| path.display().to_string()),
        Err(_) => path.display().to_string(),
    }
}
