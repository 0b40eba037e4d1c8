//! # Function Artifact Detection
//!
//! File: cli/src/common/artifact/function.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! A directory is a function artifact when at least one `.py` file directly
//! inside it (the scan is not recursive) parses as Python and defines, at its
//! top level, a function whose signature looks like a Lambda handler:
//!
//! ```python
//! def lambda_handler(event: dict, context: lambda_context.Context): ...
//! ```
//!
//! Files that fail to parse are skipped with a trace line. Unannotated
//! handlers (`def handler(event, context)`) do not count: the check needs
//! both annotations to tell a handler apart from any other two-argument
//! function.
//!
//! ## Usage
//!
//! ```rust
//! let is_function = function::detect_function(&source_dir, &rules, &mut Stdout)?;
//! let handlers = function::find_handlers(&source_dir, &rules, &mut Stdout)?;
//! ```
//!
use crate::common::fs::io::validate_directory;
use crate::common::python::{HandlerDefinition, HandlerRules, PythonScanner, SourceScan};
use crate::core::error::Result;
use crate::core::report::Report;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of the source files considered by the scan.
pub const SOURCE_EXTENSION: &str = "py";

/// A handler-shaped definition and the file it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerLocation {
    pub file: PathBuf,
    pub definition: HandlerDefinition,
}

/// Determines whether `directory` looks like a Python Lambda function.
///
/// Stops at the first handler found.
///
/// # Errors
///
/// Propagates `validate_directory` failures and I/O errors while listing or
/// reading the directory. Unparseable files are not errors.
pub fn detect_function(
    directory: &Path,
    rules: &HandlerRules,
    report: &mut dyn Report,
) -> Result<bool> {
    let directory = validate_directory(directory)?;
    let found = scan_directory(&directory, rules, report, true)?;
    if found.is_empty() {
        report.line(&format!("No Lambda handler found in {}.", directory.display()));
        Ok(false)
    } else {
        report.line(&format!(
            "{} appears to be a Python Lambda function.",
            directory.display()
        ));
        Ok(true)
    }
}

/// Lists every handler-shaped definition in the top-level `.py` files of
/// `directory`, ordered by file name and then by position in the file.
pub fn find_handlers(
    directory: &Path,
    rules: &HandlerRules,
    report: &mut dyn Report,
) -> Result<Vec<HandlerLocation>> {
    let directory = validate_directory(directory)?;
    scan_directory(&directory, rules, report, false)
}

fn scan_directory(
    directory: &Path,
    rules: &HandlerRules,
    report: &mut dyn Report,
    stop_at_first: bool,
) -> Result<Vec<HandlerLocation>> {
    let candidates = candidate_sources(directory)?;
    report.line(&format!(
        "Scanning {} Python source file(s) in {}",
        candidates.len(),
        directory.display()
    ));
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let mut scanner = PythonScanner::new()?;
    let mut found = Vec::new();
    for file in candidates {
        let bytes =
            fs::read(&file).with_context(|| format!("Failed to read file '{}'", file.display()))?;
        let Ok(source) = String::from_utf8(bytes) else {
            warn!("Skipping non UTF-8 source file: {}", file.display());
            report.line(&format!("Skipping {}: not valid UTF-8.", file.display()));
            continue;
        };

        let handlers = match scanner.scan(&source, rules)? {
            SourceScan::InvalidSyntax => {
                report.line(&format!("Skipping {}: invalid Python syntax.", file.display()));
                continue;
            }
            SourceScan::Parsed(handlers) => handlers,
        };
        if handlers.is_empty() {
            debug!("No handler-shaped definitions in {}", file.display());
        }
        for definition in handlers {
            report.line(&format!(
                "Found Lambda handler '{}' in {} (line {})",
                definition.name,
                file.display(),
                definition.line
            ));
            found.push(HandlerLocation {
                file: file.clone(),
                definition,
            });
            if stop_at_first {
                return Ok(found);
            }
        }
    }
    Ok(found)
}

/// Regular `.py` files directly inside `directory`, sorted by name.
fn candidate_sources(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to list directory '{}'", directory.display()))?;
    let mut files = Vec::new();
    for entry_result in entries {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to read directory entry in '{}': {}. Skipping.",
                    directory.display(),
                    e
                );
                continue;
            }
        };
        let path = entry.path();
        let is_source = path
            .extension()
            .is_some_and(|ext| ext == SOURCE_EXTENSION);
        if is_source && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
