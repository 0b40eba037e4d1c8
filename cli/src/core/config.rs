//! # Lambda Kit Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!
//! ## Overview
//!
//! This module loads, merges, expands and validates the optional configuration
//! that tunes the scaffolder and the handler detector. Everything has a
//! built-in default, so running without any config file is the normal case.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.lambda-kit.toml` in the current directory or ancestors
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/lambda-kit/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [templates]
//! directory = "~/lambda-templates"
//!
//! [detector]
//! mapping_types = ["dict", "Mapping"]
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let rules = cfg.detector.handler_rules();
//! let templates = cfg.templates.source();
//! ```
//!
use crate::common::python::HandlerRules;
use crate::core::error::{LambdaKitError, Result};
use crate::core::templating::TemplateSource;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
}

/// Where user-supplied scaffolding templates live.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory searched for `lambda_function_template.tera` and
    /// `requirements_template.tera` (can use ~). Built-ins are used when unset.
    pub directory: Option<String>,
}

impl TemplatesConfig {
    pub fn source(&self) -> TemplateSource {
        match &self.directory {
            Some(dir) => TemplateSource::Directory(PathBuf::from(dir)),
            None => TemplateSource::BuiltIn,
        }
    }
}

/// Tuning for the Python handler signature scan.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DetectorConfig {
    /// Bare type names accepted as the annotation of the handler's event
    /// parameter. Unset means the built-in list.
    #[serde(default)]
    pub mapping_types: Option<Vec<String>>,
}

impl DetectorConfig {
    pub fn handler_rules(&self) -> HandlerRules {
        let defaults = HandlerRules::default();
        match &self.mapping_types {
            Some(types) => HandlerRules {
                mapping_types: types.clone(),
                ..defaults
            },
            None => defaults,
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".lambda-kit.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "LambdaKit", "lambda-kit") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({PROJECT_CONFIG_FILENAME}) found in current \
             directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let project_config = dir.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    if let Some(base) = path.parent() {
        anchor_relative_paths(&mut config, base);
    }
    Ok(config)
}

/// Relative paths in a config file are relative to the file, not to the
/// directory the tool runs in.
fn anchor_relative_paths(config: &mut Config, base: &Path) {
    if let Some(dir) = config.templates.directory.as_mut() {
        let expanded = PathBuf::from(shellexpand::tilde(dir.as_str()).as_ref());
        if expanded.is_relative() {
            *dir = base.join(expanded).to_string_lossy().into_owned();
            debug!("Templates directory resolved against config file: {}", dir);
        }
    }
}

/// Project values win over user values; a field the project file leaves
/// unset falls back to the user's setting.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        templates: TemplatesConfig {
            directory: project_cfg.templates.directory.or(user.templates.directory),
        },
        detector: DetectorConfig {
            mapping_types: project_cfg
                .detector
                .mapping_types
                .or(user.detector.mapping_types),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(dir) = config.templates.directory.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded templates directory: {}", dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(dir) = &config.templates.directory {
        let dir = PathBuf::from(dir);
        if !dir.exists() {
            warn!(
                "Configured templates directory '{}' does not exist; \
                 built-in templates will be used.",
                dir.display()
            );
        } else if !dir.is_dir() {
            return Err(anyhow!(LambdaKitError::Config(format!(
                "Configured templates path '{}' exists but is not a directory.",
                dir.display()
            ))));
        }
    }
    let Some(mapping_types) = &config.detector.mapping_types else {
        debug!("Configuration validation successful.");
        return Ok(());
    };
    if mapping_types.is_empty() {
        return Err(anyhow!(LambdaKitError::Config(
            "detector.mapping_types must name at least one type.".to_string()
        )));
    }
    for name in mapping_types {
        if !is_python_identifier(name) {
            return Err(anyhow!(LambdaKitError::Config(format!(
                "Invalid mapping type name: '{}'. Expected a bare Python identifier.",
                name
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

fn is_python_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [templates]
            directory = "~/lambda-templates"

            [detector]
            mapping_types = ["dict", "Mapping"]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(
            config.templates.directory.as_deref(),
            Some("~/lambda-templates")
        ); // Not yet expanded
        assert_eq!(
            config.detector.mapping_types,
            Some(vec!["dict".to_string(), "Mapping".to_string()])
        );
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").expect("Failed to parse TOML");
        assert_eq!(config, Config::default());
        assert_eq!(config.detector.mapping_types, None);
        assert!(config
            .detector
            .handler_rules()
            .mapping_types
            .contains(&"dict".to_string()));
        assert_eq!(config.templates.source(), TemplateSource::BuiltIn);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[detector]\nfoo = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            templates: TemplatesConfig {
                directory: Some("~/tpl_test".to_string()),
            },
            ..Default::default()
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.templates.directory.unwrap(),
            home_dir.join("tpl_test").to_string_lossy()
        );
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user = Config {
            templates: TemplatesConfig {
                directory: Some("/user/templates".into()),
            },
            detector: DetectorConfig {
                mapping_types: Some(vec!["Mapping".into()]),
            },
        };
        let project = Config {
            templates: TemplatesConfig {
                directory: Some("/project/templates".into()),
            },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));
        assert_eq!(
            merged.templates.directory.as_deref(),
            Some("/project/templates")
        );
        // Project left the detector unset, so the user's value survives.
        assert_eq!(merged.detector.mapping_types, Some(vec!["Mapping".to_string()]));
    }

    #[test]
    fn test_merge_explicit_project_default_overrides_user() {
        let user = Config {
            detector: DetectorConfig {
                mapping_types: Some(vec!["Event".into()]),
            },
            ..Default::default()
        };
        let project: Config = toml::from_str(concat!(
            "[detector]\n",
            "mapping_types = [\"dict\", \"Dict\", \"Mapping\", \"MutableMapping\"]\n",
        ))
        .unwrap();

        let merged = merge_configs(user, Some(project));
        assert_eq!(
            merged.detector.handler_rules().mapping_types,
            HandlerRules::default().mapping_types
        );
    }

    #[test]
    fn test_relative_templates_dir_follows_config_file() {
        let root = tempdir().unwrap();
        let config_path = root.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "[templates]\ndirectory = \"tpl\"\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.templates.directory.map(PathBuf::from),
            Some(root.path().join("tpl"))
        );
    }

    #[test]
    fn test_absolute_and_home_templates_dirs_are_kept() {
        let root = tempdir().unwrap();
        let config_path = root.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "[templates]\ndirectory = \"~/tpl\"\n").unwrap();
        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.templates.directory.as_deref(), Some("~/tpl"));

        let absolute = root.path().join("abs");
        let mut config = Config {
            templates: TemplatesConfig {
                directory: Some(absolute.to_string_lossy().into_owned()),
            },
            ..Default::default()
        };
        anchor_relative_paths(&mut config, Path::new("/elsewhere"));
        assert_eq!(config.templates.directory.map(PathBuf::from), Some(absolute));
    }

    #[test]
    fn test_find_project_config_stops_at_git() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        let nested = repo.join("a/b");
        fs::create_dir_all(&nested).unwrap();

        // The file above the repository root is not picked up.
        assert_eq!(find_project_config_path(&nested), None);

        fs::write(repo.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(repo.join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_validate_config_templates_path_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let config = Config {
            templates: TemplatesConfig {
                directory: Some(file_path.to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a directory"));
    }

    #[test]
    fn test_validate_config_missing_templates_dir_is_ok() {
        let config = Config {
            templates: TemplatesConfig {
                directory: Some("/definitely/not/here".into()),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_bad_mapping_types() {
        let empty = Config {
            detector: DetectorConfig {
                mapping_types: Some(vec![]),
            },
            ..Default::default()
        };
        assert!(validate_config(&empty).is_err());

        let dotted = Config {
            detector: DetectorConfig {
                mapping_types: Some(vec!["typing.Dict".into()]),
            },
            ..Default::default()
        };
        let err = validate_config(&dotted).unwrap_err();
        assert!(err.to_string().contains("Invalid mapping type name"));
    }
}
