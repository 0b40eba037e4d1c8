//! # Lambda Kit Pack Command
//!
//! File: cli/src/commands/pack.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Implements `lambda-kit function pack` and `lambda-kit layer pack`. Both
//! validate the source directory, print what would be packaged and run the
//! matching detector. Archive creation is not implemented: a successful run
//! only confirms that the source has the right shape, and nothing is written
//! to the output directory.
//!
//! ## Examples
//!
//! ```bash
//! lambda-kit function pack --source-dir ./orders --output-dir ./dist
//! lambda-kit layer pack --source-dir ./shared --output-dir ./dist --name shared-deps
//! ```
//!
//! Example output:
//!
//! ```
//! Packaging Lambda function: orders
//! Source directory: ./orders
//! Output directory: ./dist
//! Scanning 1 Python source file(s) in ./orders
//! Found Lambda handler 'lambda_handler' in ./orders/handler.py (line 12)
//! ./orders appears to be a Python Lambda function.
//! Archive creation is not implemented; nothing was written to ./dist.
//! ```
//!
use crate::common::artifact::{artifact_name, function, layer};
use crate::common::fs::io::validate_directory;
use crate::core::config::Config;
use crate::core::error::{ArtifactKind, LambdaKitError, Result};
use crate::core::report::Report;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # Pack Arguments (`PackArgs`)
#[derive(Parser, Debug)]
pub struct PackArgs {
    /// Directory holding the artifact to package.
    #[arg(long, value_name = "DIR")]
    pub source_dir: PathBuf,

    /// Directory the archive would be written to. Need not exist.
    #[arg(long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Name of the package. Defaults to the source directory's name.
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Runs the pack diagnostics for an artifact of `kind`.
///
/// Returns `NotRecognizedArtifact` when the detector rejects the source
/// directory, after its trace lines have been reported.
pub fn run_pack(
    args: &PackArgs,
    kind: ArtifactKind,
    cfg: &Config,
    report: &mut dyn Report,
) -> Result<()> {
    let source_dir = validate_directory(&args.source_dir)?;
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| artifact_name(&source_dir));
    info!("Packing Lambda {} '{}'", kind, name);

    report.line(&format!("Packaging Lambda {}: {}", kind, name));
    report.line(&format!("Source directory: {}", source_dir.display()));
    report.line(&format!("Output directory: {}", args.output_dir.display()));

    let recognized = match kind {
        ArtifactKind::Function => {
            function::detect_function(&source_dir, &cfg.detector.handler_rules(), report)?
        }
        ArtifactKind::Layer => layer::detect_layer(&source_dir, report)?,
    };
    if !recognized {
        return Err(LambdaKitError::NotRecognizedArtifact {
            path: source_dir,
            kind,
        }
        .into());
    }

    report.line(&format!(
        "Archive creation is not implemented; nothing was written to {}.",
        args.output_dir.display()
    ));
    Ok(())
}
