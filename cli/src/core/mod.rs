//! # Lambda Kit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! This module aggregates the infrastructure the command handlers build on:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//! - `report`: The line-oriented output sink passed to detectors and the scaffolder
//! - `templating`: Template lookup and rendering for scaffolding
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{LambdaKitError, Result}; // For error handling
//! use crate::core::report::{Report, Stdout}; // For user-facing output
//! use crate::core::templating; // For scaffold template rendering
//! ```
//!
pub mod config;
pub mod error;
pub mod report;
pub mod templating;
