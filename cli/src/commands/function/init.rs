//! # Lambda Kit Function Init Command
//!
//! File: cli/src/commands/function/init.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Implements `lambda-kit function init`. Creates `--source-dir` and writes a
//! single `handler.py` rendered from `lambda_function_template.tera` (the
//! built-in copy, or the one in the configured templates directory).
//!
//! The target must not exist. Running the command twice against the same
//! directory fails the second time and leaves the first scaffold untouched.
//!
//! ## Examples
//!
//! ```bash
//! lambda-kit function init --source-dir ./orders
//! ```
//!
//! ```
//! Initializing a new Lambda function.
//! Lambda function initialized in ./orders.
//! Edit orders/handler.py to implement your handler.
//! ```
//!
use crate::commands::relative_display;
use crate::common::artifact::scaffold;
use crate::core::config;
use crate::core::error::Result;
use crate::core::report::{Report, Stdout};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # Function Init Arguments (`InitArgs`)
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to create for the new function. Must not exist yet.
    #[arg(long, value_name = "DIR")]
    source_dir: PathBuf,
}

/// # Handle Function Init (`handle_init`)
pub fn handle_init(args: InitArgs) -> Result<()> {
    info!("Handling function init for '{}'", args.source_dir.display());
    let cfg = config::load_config().context("Failed to load lambda-kit configuration")?;

    let mut out = Stdout;
    let handler =
        scaffold::initialize_function(&args.source_dir, &cfg.templates.source(), &mut out)?;
    out.line(&format!(
        "Edit {} to implement your handler.",
        relative_display(&handler)
    ));
    Ok(())
}
