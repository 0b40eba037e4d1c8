//! # Lambda Kit Layer Command Group
//!
//! File: cli/src/commands/layer/mod.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Entry point and router for `lambda-kit layer`. A layer directory holds a
//! `python/` payload and a `requirements.txt` manifest.
//!
//! ## Examples
//!
//! ```bash
//! lambda-kit layer init --source-dir ./shared
//! lambda-kit layer describe --source-dir ./shared
//! lambda-kit layer pack --source-dir ./shared --output-dir ./dist
//! ```
//!
use crate::commands::pack::{self, PackArgs};
use crate::core::config;
use crate::core::error::{ArtifactKind, Result};
use crate::core::report::Stdout;
use anyhow::Context;
use clap::{Parser, Subcommand};

/// Handler and arguments for `lambda-kit layer describe`.
mod describe;
/// Handler and arguments for `lambda-kit layer init`.
mod init;

/// # Layer Command Group Arguments (`LayerArgs`)
#[derive(Parser, Debug)]
pub struct LayerArgs {
    #[command(subcommand)]
    command: LayerCommand,
}

/// # Layer Subcommands (`LayerCommand`)
#[derive(Subcommand, Debug)]
enum LayerCommand {
    /// Create a new Lambda layer directory with python/ and requirements.txt.
    Init(init::InitArgs),
    /// Show the contents of a Lambda layer directory.
    Describe(describe::DescribeArgs),
    /// Check that a directory is a Lambda layer and report what would be packaged.
    Pack(PackArgs),
}

/// # Handle Layer Command (`handle_layer`)
pub fn handle_layer(args: LayerArgs) -> Result<()> {
    match args.command {
        LayerCommand::Init(args) => init::handle_init(args)?,
        LayerCommand::Describe(args) => describe::handle_describe(args)?,
        LayerCommand::Pack(args) => {
            let cfg = config::load_config().context("Failed to load lambda-kit configuration")?;
            pack::run_pack(&args, ArtifactKind::Layer, &cfg, &mut Stdout)?
        }
    }
    Ok(())
}
