//! # Lambda Kit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!

//! ## Overview
//!
//! Shared building blocks used by the command handlers. Command-specific
//! argument parsing and output lives in `commands::`; process-wide
//! infrastructure (errors, configuration, templating, report sinks) in `core::`.
//!
//! ## Architecture
//!
//! - **`artifact`**: Function and layer detection, plus scaffolding of new artifacts.
//! - **`fs`**: Directory validation, file I/O helpers and the directory tree renderer.
//! - **`python`**: Tree-sitter based scan for handler-shaped function definitions.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{artifact, fs};
//! use crate::core::report::Stdout;
//!
//! let dir = fs::io::validate_directory(Path::new("./my_layer"))?;
//! let is_layer = artifact::layer::detect_layer(&dir, &mut Stdout)?;
//! ```
//!

/// Detection and scaffolding of Lambda function and layer directories.
pub mod artifact;
/// Filesystem helpers (validation, I/O, tree rendering).
pub mod fs;
/// Python source scanning.
pub mod python;
