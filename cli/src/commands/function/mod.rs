//! # Lambda Kit Function Command Group
//!
//! File: cli/src/commands/function/mod.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Entry point and router for `lambda-kit function`. Defines the available
//! subcommands and delegates to their handlers.
//!
//! ## Architecture
//!
//! - `FunctionArgs`: Top-level arguments for the command group.
//! - `FunctionCommand`: Enum of the function subcommands.
//! - `handle_function`: Dispatches to the subcommand handler.
//!
//! ## Examples
//!
//! ```bash
//! # Scaffold a new function with a single handler.py
//! lambda-kit function init --source-dir ./orders
//!
//! # List the handlers found in a directory
//! lambda-kit function describe --source-dir ./orders
//!
//! # Check a function directory before packaging it
//! lambda-kit function pack --source-dir ./orders --output-dir ./dist
//! ```
//!
use crate::commands::pack::{self, PackArgs};
use crate::core::config;
use crate::core::error::{ArtifactKind, Result};
use crate::core::report::Stdout;
use anyhow::Context;
use clap::{Parser, Subcommand};

/// Handler and arguments for `lambda-kit function describe`.
mod describe;
/// Handler and arguments for `lambda-kit function init`.
mod init;

/// # Function Command Group Arguments (`FunctionArgs`)
#[derive(Parser, Debug)]
pub struct FunctionArgs {
    #[command(subcommand)]
    command: FunctionCommand,
}

/// # Function Subcommands (`FunctionCommand`)
#[derive(Subcommand, Debug)]
enum FunctionCommand {
    /// Create a new Lambda function directory with a handler.py.
    Init(init::InitArgs),
    /// List the Lambda handlers defined in a directory.
    Describe(describe::DescribeArgs),
    /// Check that a directory is a Lambda function and report what would be packaged.
    Pack(PackArgs),
}

/// # Handle Function Command (`handle_function`)
///
/// Dispatches `lambda-kit function <subcommand>` to its handler.
pub fn handle_function(args: FunctionArgs) -> Result<()> {
    match args.command {
        FunctionCommand::Init(args) => init::handle_init(args)?,
        FunctionCommand::Describe(args) => describe::handle_describe(args)?,
        FunctionCommand::Pack(args) => {
            let cfg = config::load_config().context("Failed to load lambda-kit configuration")?;
            pack::run_pack(&args, ArtifactKind::Function, &cfg, &mut Stdout)?
        }
    }
    Ok(())
}
