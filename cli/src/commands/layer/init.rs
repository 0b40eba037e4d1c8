//! # Lambda Kit Layer Init Command
//!
//! File: cli/src/commands/layer/init.rs
//!
//! ## Overview
//!
//! Implements `lambda-kit layer init`: creates `--source-dir` with an empty
//! `python/` payload directory and a `requirements.txt` rendered from
//! `requirements_template.tera`. The target must not exist.
//!
use crate::common::artifact::scaffold;
use crate::core::config;
use crate::core::error::Result;
use crate::core::report::{Report, Stdout};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # Layer Init Arguments (`InitArgs`)
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to create for the new layer. Must not exist yet.
    #[arg(long, value_name = "DIR")]
    source_dir: PathBuf,
}

/// # Handle Layer Init (`handle_init`)
pub fn handle_init(args: InitArgs) -> Result<()> {
    info!("Handling layer init for '{}'", args.source_dir.display());
    let cfg = config::load_config().context("Failed to load lambda-kit configuration")?;

    let mut out = Stdout;
    scaffold::initialize_layer(&args.source_dir, &cfg.templates.source(), &mut out)?;
    out.line("Add packages under python/ and list them in requirements.txt.");
    Ok(())
}
