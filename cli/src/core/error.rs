//! # Lambda Kit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! This module defines the error types shared by the validator, the artifact
//! detectors, the scaffolder and the command handlers.
//!
//! ## Architecture
//!
//! The error system consists of two parts:
//! - `LambdaKitError`: a `thiserror` enum naming every failure the CLI reports
//!   to the user as a single line.
//! - `Result<T>`: an alias for `anyhow::Result<T>` so call sites can attach
//!   context with `.with_context(..)` and still be downcast later.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error kind
//! if path.exists() {
//!     return Err(LambdaKitError::AlreadyExists { path: path.to_path_buf() }.into());
//! }
//!
//! // Recover the kind further up the stack
//! let already_there = err
//!     .downcast_ref::<LambdaKitError>()
//!     .is_some_and(|e| matches!(e, LambdaKitError::AlreadyExists { .. }));
//! ```
//!
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The two artifact shapes the tool knows how to recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Function,
    Layer,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Function => write!(f, "function"),
            ArtifactKind::Layer => write!(f, "layer"),
        }
    }
}

/// Custom error type for lambda-kit.
#[derive(Error, Debug)]
pub enum LambdaKitError {
    #[error("Directory cannot be empty.")]
    EmptyPath,

    #[error("{} is not a valid directory.", path.display())]
    NotADirectory { path: PathBuf },

    #[error("The directory '{}' already exists.", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("{} does not appear to be a Python Lambda {kind}.", path.display())]
    NotRecognizedArtifact { path: PathBuf, kind: ArtifactKind },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Python parser error: {0}")]
    Parser(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
