//! # Artifact Scaffolding
//!
//! File: cli/src/common/artifact/scaffold.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! Creates new, minimal function and layer artifacts from the fixed-name
//! templates in `core::templating`.
//!
//! - `initialize_function` writes `<target>/handler.py` and nothing else.
//! - `initialize_layer` creates `<target>/python/` and `<target>/requirements.txt`.
//!
//! Both reject an empty target and refuse to touch an existing path
//! (`LambdaKitError::AlreadyExists`), so a second run against the same target
//! always fails. Templates are rendered before anything is created; a
//! rendering failure leaves the filesystem as it was.
//!
use crate::common::artifact::{artifact_name, layer};
use crate::common::fs::io;
use crate::core::error::{LambdaKitError, Result};
use crate::core::report::Report;
use crate::core::templating::{self, TemplateSource};
use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// File written into a new function artifact.
pub const HANDLER_FILE_NAME: &str = "handler.py";

/// Variables available to `lambda_function_template.tera`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerTemplateContext {
    pub description: String,
    pub status_code: u16,
    pub body_message: String,
}

impl Default for HandlerTemplateContext {
    fn default() -> Self {
        HandlerTemplateContext {
            description: "A new Lambda function".to_string(),
            status_code: 200,
            body_message: "Hello, World!".to_string(),
        }
    }
}

/// Variables available to `requirements_template.tera`.
#[derive(Debug, Clone, Serialize)]
struct RequirementsTemplateContext {
    layer_name: String,
}

fn check_target(target: &Path) -> Result<()> {
    if target.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(LambdaKitError::EmptyPath.into());
    }
    if target.exists() {
        return Err(LambdaKitError::AlreadyExists {
            path: target.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

/// Scaffolds a new function artifact at `target` and returns the path of the
/// generated handler file.
pub fn initialize_function(
    target: &Path,
    templates: &TemplateSource,
    report: &mut dyn Report,
) -> Result<PathBuf> {
    check_target(target)?;

    let rendered = templating::render_template(
        templates,
        templating::HANDLER_TEMPLATE_NAME,
        &HandlerTemplateContext::default(),
    )
    .context("Failed to render the Lambda function template")?;

    report.line("Initializing a new Lambda function.");
    io::create_new_directory(target)?;
    let handler_path = target.join(HANDLER_FILE_NAME);
    io::write_string_to_file(&handler_path, &rendered)?;

    info!("Scaffolded function handler at {}", handler_path.display());
    report.line(&format!(
        "Lambda function initialized in {}.",
        target.display()
    ));
    Ok(handler_path)
}

/// Scaffolds a new layer artifact at `target`.
pub fn initialize_layer(
    target: &Path,
    templates: &TemplateSource,
    report: &mut dyn Report,
) -> Result<()> {
    check_target(target)?;

    let context = RequirementsTemplateContext {
        layer_name: artifact_name(target),
    };
    let rendered = templating::render_template(
        templates,
        templating::REQUIREMENTS_TEMPLATE_NAME,
        &context,
    )
    .context("Failed to render the requirements template")?;

    report.line("Initializing a new Lambda layer.");
    io::create_new_directory(target)?;
    io::ensure_dir_exists(&target.join(layer::PAYLOAD_DIR))?;
    io::write_string_to_file(&target.join(layer::REQUIREMENTS_FILE), &rendered)?;

    report.line(&format!("Lambda layer initialized in {}.", target.display()));
    Ok(())
}
