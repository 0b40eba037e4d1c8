//! # Lambda Kit Report Sink
//!
//! File: cli/src/core/report.rs
//!
//! ## Overview
//!
//! Detectors and the scaffolder describe what they checked as plain lines of
//! text. Instead of printing directly, they write those lines to a `Report`
//! handed in by the caller. The command handlers pass `Stdout`; tests pass a
//! closure that collects the lines into a `Vec<String>`.
//!
//! Diagnostics that are only interesting when debugging still go through
//! `tracing`; a `Report` carries user-facing output only.
//!
use std::io::Write;

/// A line-oriented output sink.
pub trait Report {
    /// Emit one line of user-facing output (without a trailing newline).
    fn line(&mut self, message: &str);
}

/// Any `FnMut(&str)` closure is a report sink.
impl<F> Report for F
where
    F: FnMut(&str),
{
    fn line(&mut self, message: &str) {
        self(message)
    }
}

/// Writes each line to standard output.
#[derive(Debug, Default)]
pub struct Stdout;

impl Report for Stdout {
    fn line(&mut self, message: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout (e.g. `| head`) must not abort the command.
        if let Err(e) = writeln!(out, "{}", message) {
            tracing::debug!("Failed to write report line to stdout: {}", e);
        }
    }
}
