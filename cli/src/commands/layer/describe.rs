//! # Lambda Kit Layer Describe Command
//!
//! File: cli/src/commands/layer/describe.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Implements `lambda-kit layer describe`. Runs the layer check and, when it
//! passes, prints the layout of the `python/` payload and a count of the
//! requirements declared in `requirements.txt`.
//!
//! ## Examples
//!
//! ```bash
//! lambda-kit layer describe --source-dir ./shared
//! ```
//!
//! ```
//! Found required directory: ./shared/python
//! Found required file: ./shared/requirements.txt
//! ./shared appears to be a Python Lambda layer.
//!
//! python/
//! └── helpers/
//!     └── __init__.py
//!
//! 1 file(s) in python/, 2 declared requirement(s).
//! ```
//!
//! The tree stops expanding after `TREE_DEPTH` levels; the file count always
//! covers the whole payload.
//!
use crate::common::artifact::layer;
use crate::common::fs::{io, tree};
use crate::core::error::{ArtifactKind, LambdaKitError, Result};
use crate::core::report::{Report, Stdout};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// Levels of `python/` listed before directories are collapsed.
const TREE_DEPTH: usize = 3;

/// # Layer Describe Arguments (`DescribeArgs`)
#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Directory holding the layer.
    #[arg(long, value_name = "DIR")]
    source_dir: PathBuf,
}

/// # Handle Layer Describe (`handle_describe`)
pub fn handle_describe(args: DescribeArgs) -> Result<()> {
    info!("Handling layer describe for '{}'", args.source_dir.display());
    describe_layer(&args.source_dir, &mut Stdout)
}

fn describe_layer(source_dir: &Path, report: &mut dyn Report) -> Result<()> {
    let source_dir = io::validate_directory(source_dir)?;
    if !layer::detect_layer(&source_dir, report)? {
        return Err(LambdaKitError::NotRecognizedArtifact {
            path: source_dir,
            kind: ArtifactKind::Layer,
        }
        .into());
    }

    let payload = source_dir.join(layer::PAYLOAD_DIR);
    report.line("");
    for line in tree::directory_tree_lines(&payload, layer::PAYLOAD_DIR, TREE_DEPTH)? {
        report.line(&line);
    }

    let manifest = io::read_file_to_string(&source_dir.join(layer::REQUIREMENTS_FILE))?;
    report.line("");
    report.line(&format!(
        "{} file(s) in {}/, {} declared requirement(s).",
        tree::count_files(&payload),
        layer::PAYLOAD_DIR,
        layer::count_requirements(&manifest)
    ));
    Ok(())
}
