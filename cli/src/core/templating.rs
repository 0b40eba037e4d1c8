//! # Lambda Kit Template System
//!
//! File: cli/src/core/templating.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! This module renders the fixed-name templates used by the scaffolder. Each
//! template ships inside the binary; a configured templates directory may
//! override any of them by holding a file with the same name.
//!
//! ## Architecture
//!
//! Rendering takes three steps:
//! 1. Resolve the template text from its `TemplateSource` (override file first,
//!    built-in copy otherwise)
//! 2. Serialise the caller's context struct into a `tera::Context`
//! 3. Render with `Tera::one_off` (autoescape off, since the output is Python
//!    source and plain text, not HTML)
//!
//! Rendering never touches the target directory, so callers can render first
//! and only create files once every template has succeeded.
//!
//! ## Examples
//!
//! ```rust
//! #[derive(Serialize)]
//! struct Ctx { description: String, status_code: u16, body_message: String }
//!
//! let text = templating::render_template(
//!     &TemplateSource::BuiltIn,
//!     templating::HANDLER_TEMPLATE_NAME,
//!     &ctx,
//! )?;
//! ```
//!
use crate::core::error::{LambdaKitError, Result};
use anyhow::{anyhow, Context};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tera::Tera;
use tracing::{debug, info, warn};

/// Template rendered into `handler.py` by `function init`.
pub const HANDLER_TEMPLATE_NAME: &str = "lambda_function_template.tera";
/// Template rendered into `requirements.txt` by `layer init`.
pub const REQUIREMENTS_TEMPLATE_NAME: &str = "requirements_template.tera";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        HANDLER_TEMPLATE_NAME,
        include_str!("../../templates/lambda_function_template.tera"),
    ),
    (
        REQUIREMENTS_TEMPLATE_NAME,
        include_str!("../../templates/requirements_template.tera"),
    ),
];

/// Where template text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Only the templates compiled into the binary.
    BuiltIn,
    /// A directory whose files shadow the built-ins of the same name.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Returns the raw text of the template called `name`.
    pub fn load(&self, name: &str) -> Result<String> {
        if let TemplateSource::Directory(dir) = self {
            let candidate = dir.join(name);
            if candidate.is_file() {
                info!("Using template override: {}", candidate.display());
                return fs::read_to_string(&candidate).with_context(|| {
                    format!("Failed to read template file '{}'", candidate.display())
                });
            }
            warn!(
                "Template '{}' not found in '{}', falling back to the built-in copy.",
                name,
                dir.display()
            );
        }
        builtin_template(name)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("No built-in template named '{}'", name))
    }
}

fn builtin_template(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(builtin_name, _)| *builtin_name == name)
        .map(|(_, text)| *text)
}

/// Renders template `name` from `source` with the fields of `context`.
pub fn render_template<C: Serialize>(
    source: &TemplateSource,
    name: &str,
    context: &C,
) -> Result<String> {
    let template_content = source.load(name)?;
    let tera_context = tera::Context::from_serialize(context).map_err(|e| {
        anyhow!(LambdaKitError::Template { source: e })
            .context("Failed to create Tera context from template variables")
    })?;
    let rendered = Tera::one_off(&template_content, &tera_context, false).map_err(|e| {
        anyhow!(LambdaKitError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })?;
    debug!("Rendered template '{}' ({} bytes)", name, rendered.len());
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Greeting {
        name: String,
        count: u32,
    }

    #[test]
    fn test_builtin_templates_are_registered() {
        assert!(TemplateSource::BuiltIn.load(HANDLER_TEMPLATE_NAME).is_ok());
        assert!(TemplateSource::BuiltIn
            .load(REQUIREMENTS_TEMPLATE_NAME)
            .is_ok());
        assert!(TemplateSource::BuiltIn.load("nope.tera").is_err());
    }

    #[test]
    fn test_directory_override_wins() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("greeting.tera"),
            "Hello {{ name }} x{{ count }}",
        )?;
        let source = TemplateSource::Directory(dir.path().to_path_buf());
        let ctx = Greeting {
            name: "Lambda".into(),
            count: 3,
        };

        let rendered = render_template(&source, "greeting.tera", &ctx)?;
        assert_eq!(rendered, "Hello Lambda x3");
        Ok(())
    }

    #[test]
    fn test_directory_without_override_falls_back() -> Result<()> {
        let dir = tempdir()?;
        let source = TemplateSource::Directory(dir.path().to_path_buf());
        let from_dir = source.load(REQUIREMENTS_TEMPLATE_NAME)?;
        let builtin = TemplateSource::BuiltIn.load(REQUIREMENTS_TEMPLATE_NAME)?;
        assert_eq!(from_dir, builtin);
        Ok(())
    }

    #[test]
    fn test_render_invalid_template_syntax() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("invalid.tera"), "Hello {{ name")?;
        let source = TemplateSource::Directory(dir.path().to_path_buf());
        let mut ctx = HashMap::new();
        ctx.insert("name", "test");

        let result = render_template(&source, "invalid.tera", &ctx);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Tera rendering failed"));
        assert!(err.to_string().contains("invalid.tera"));
        assert!(matches!(
            err.downcast_ref::<LambdaKitError>(),
            Some(LambdaKitError::Template { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_no_html_escaping() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("quote.tera"), "body = \"{{ name }}\"")?;
        let source = TemplateSource::Directory(dir.path().to_path_buf());
        let mut ctx = HashMap::new();
        ctx.insert("name", "<b>&</b>");

        let rendered = render_template(&source, "quote.tera", &ctx)?;
        assert_eq!(rendered, "body = \"<b>&</b>\"");
        Ok(())
    }
}
