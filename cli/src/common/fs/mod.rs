//! # Lambda Kit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!

//! ## Overview
//!
//! Filesystem helpers shared by the detectors, the scaffolder and the
//! `describe` commands.
//!
//! - **`io`**: Directory validation, create-new-directory semantics, and
//!   read/write wrappers with context.
//! - **`tree`**: Renders a directory as `tree`-style lines, used by
//!   `lambda-kit layer describe` to show a layer's `python/` payload.
//!
//! Import the specific submodule you need (e.g. `crate::common::fs::io::validate_directory`).
//!

/// Directory validation and basic file I/O.
pub mod io;
/// `tree`-style rendering of a directory's contents.
pub mod tree;
