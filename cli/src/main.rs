//! # Lambda Kit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Entry point for the `lambda-kit` CLI, a helper for scaffolding, inspecting
//! and (eventually) packaging Python AWS Lambda functions and layers.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command group handlers
//!
//! ## Examples
//!
//! ```bash
//! lambda-kit --help
//! lambda-kit function init --source-dir ./orders
//! lambda-kit -vv layer pack --source-dir ./shared --output-dir ./dist
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command group handler
//! 4. Print any error as a single `Error: ...` line and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command groups (function, layer)
mod common; // Shared utilities (artifact detection, fs, python scanning)
mod core; // Core infrastructure (errors, config, templating, report sinks)

use crate::core::error::LambdaKitError;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "lambda-kit",
    about = "Scaffold, inspect and package Python AWS Lambda functions and layers",
    long_about = "Create new Lambda function and layer directories, check that existing\n\
                  directories have the expected shape, and prepare them for packaging.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Available top-level command groups.
#[derive(Parser, Debug)]
enum Commands {
    /// Work with Lambda functions.
    #[command(alias = "f")]
    Function(commands::function::FunctionArgs),
    /// Work with Lambda layers.
    #[command(alias = "l")]
    Layer(commands::layer::LayerArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Function(args) => commands::function::handle_function(args),
        Commands::Layer(args) => commands::layer::handle_layer(args),
    };

    if let Err(e) = command_result {
        tracing::debug!("Command execution failed: {:?}", e);
        // Known error kinds print their own message, not the outermost context.
        match e.downcast_ref::<LambdaKitError>() {
            Some(known) => eprintln!("Error: {}", known),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}
