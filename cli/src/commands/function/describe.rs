//! # Lambda Kit Function Describe Command
//!
//! File: cli/src/commands/function/describe.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Implements `lambda-kit function describe`: scans the top-level `.py` files
//! of `--source-dir` and lists every handler-shaped definition, instead of
//! stopping at the first one like `pack` does.
//!
//! ## Examples
//!
//! ```bash
//! lambda-kit function describe --source-dir ./orders
//! ```
//!
//! ```
//! Lambda function: orders
//! Scanning 2 Python source file(s) in ./orders
//! Found Lambda handler 'lambda_handler' in ./orders/handler.py (line 12)
//!
//! Handler 'lambda_handler' in handler.py (line 12)
//! 1 handler(s) found.
//! ```
//!
use crate::common::artifact::{artifact_name, function, function::HandlerLocation};
use crate::common::fs::io::validate_directory;
use crate::common::python::HandlerRules;
use crate::core::config;
use crate::core::error::{ArtifactKind, LambdaKitError, Result};
use crate::core::report::{Report, Stdout};
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// # Function Describe Arguments (`DescribeArgs`)
#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Directory holding the function's Python sources.
    #[arg(long, value_name = "DIR")]
    source_dir: PathBuf,
}

/// # Handle Function Describe (`handle_describe`)
pub fn handle_describe(args: DescribeArgs) -> Result<()> {
    info!("Handling function describe for '{}'", args.source_dir.display());
    let cfg = config::load_config().context("Failed to load lambda-kit configuration")?;
    describe_function(&args.source_dir, &cfg.detector.handler_rules(), &mut Stdout)
}

fn describe_function(
    source_dir: &Path,
    rules: &HandlerRules,
    report: &mut dyn Report,
) -> Result<()> {
    let source_dir = validate_directory(source_dir)?;
    report.line(&format!("Lambda function: {}", artifact_name(&source_dir)));

    let handlers = function::find_handlers(&source_dir, rules, report)?;
    if handlers.is_empty() {
        return Err(LambdaKitError::NotRecognizedArtifact {
            path: source_dir,
            kind: ArtifactKind::Function,
        }
        .into());
    }

    report.line("");
    for handler in &handlers {
        report.line(&handler_summary(&source_dir, handler));
    }
    report.line(&format!("{} handler(s) found.", handlers.len()));
    Ok(())
}

fn handler_summary(source_dir: &Path, handler: &HandlerLocation) -> String {
    let file = handler
        .file
        .strip_prefix(source_dir)
        .unwrap_or(handler.file.as_path());
    format!(
        "Handler '{}' in {} (line {})",
        handler.definition.name,
        file.display(),
        handler.definition.line
    )
}
