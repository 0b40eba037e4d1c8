//! # Lambda Kit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!

//! ## Overview
//!
//! This module centralizes the filesystem operations the detectors and the
//! scaffolder rely on, wrapping `std::fs` with consistent error kinds and
//! context messages.
//!
//! ## Architecture
//!
//! - **`validate_directory`**: The gate in front of every detector and packaging
//!   step. Rejects blank paths (`LambdaKitError::EmptyPath`) and paths that are
//!   not existing directories (`LambdaKitError::NotADirectory`).
//! - **`create_new_directory`**: Creates a directory that must not exist yet.
//!   The final component is created with `fs::create_dir`, so when two callers
//!   race for the same path exactly one wins and the other gets
//!   `LambdaKitError::AlreadyExists`.
//! - **`ensure_dir_exists`**: `mkdir -p` that also rejects a file in the way.
//! - **`read_file_to_string`** / **`write_string_to_file`**: `std::fs` wrappers with context.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let source = io::validate_directory(Path::new(" ./my_function "))?; // trimmed
//! io::create_new_directory(Path::new("./new_function"))?;
//! io::write_string_to_file(Path::new("./new_function/handler.py"), "...")?;
//! ```
//!
use crate::core::error::{LambdaKitError, Result};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Validates that `path` names an existing directory.
///
/// Surrounding whitespace is ignored; the trimmed path is returned so callers
/// work with the same path that was checked.
///
/// # Errors
///
/// - `LambdaKitError::EmptyPath` if the trimmed path is empty.
/// - `LambdaKitError::NotADirectory` if it does not resolve to a directory.
pub fn validate_directory(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LambdaKitError::EmptyPath.into());
    }

    // Keep the original OsStr when nothing was trimmed so non-UTF-8 names survive.
    let candidate = if trimmed.len() == raw.len() {
        path.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    };

    if !candidate.is_dir() {
        return Err(LambdaKitError::NotADirectory { path: candidate }.into());
    }
    debug!("Validated directory: {}", candidate.display());
    Ok(candidate)
}

/// Creates `path` as a new directory, creating missing parents on the way.
///
/// # Errors
///
/// Returns `LambdaKitError::AlreadyExists` if anything (file or directory)
/// already occupies `path`, including when another process created it first.
pub fn create_new_directory(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(LambdaKitError::AlreadyExists {
            path: path.to_path_buf(),
        }
        .into());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    match fs::create_dir(path) {
        Ok(()) => {
            info!("Created directory: {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(LambdaKitError::AlreadyExists {
            path: path.to_path_buf(),
        }
        .into()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to create directory '{}'", path.display()))
        }
    }
}

/// Ensures that a directory exists at the specified path, creating it and
/// any missing parents if needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// the directory fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
        info!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        return Err(LambdaKitError::NotADirectory {
            path: path.to_path_buf(),
        })
        .context(format!(
            "Path exists but is not a directory: '{}'",
            path.display()
        ));
    } else {
        debug!("Directory already exists: {}", path.display());
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", path.display()))
}

/// Writes `content` to `path`, creating the parent directory if necessary.
/// An existing file is overwritten.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file '{}'", path.display()))?;
    info!("Created file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn error_kind(err: &anyhow::Error) -> Option<&LambdaKitError> {
        err.downcast_ref::<LambdaKitError>()
    }

    #[test]
    fn test_validate_directory_valid() -> Result<()> {
        let dir = tempdir()?;
        let validated = validate_directory(dir.path())?;
        assert_eq!(validated, dir.path());
        Ok(())
    }

    #[test]
    fn test_validate_directory_empty_and_blank() {
        for blank in ["", "   ", "\t\n"] {
            let err = validate_directory(Path::new(blank)).unwrap_err();
            assert!(
                matches!(error_kind(&err), Some(LambdaKitError::EmptyPath)),
                "expected EmptyPath for {:?}",
                blank
            );
            assert_eq!(err.to_string(), "Directory cannot be empty.");
        }
    }

    #[test]
    fn test_validate_directory_non_existent() {
        let err = validate_directory(Path::new("non_existent_directory")).unwrap_err();
        assert!(matches!(
            error_kind(&err),
            Some(LambdaKitError::NotADirectory { .. })
        ));
        assert_eq!(
            err.to_string(),
            "non_existent_directory is not a valid directory."
        );
    }

    #[test]
    fn test_validate_directory_file_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("handler.py");
        fs::write(&file, "")?;
        let err = validate_directory(&file).unwrap_err();
        assert!(matches!(
            error_kind(&err),
            Some(LambdaKitError::NotADirectory { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_validate_directory_trims_whitespace() -> Result<()> {
        let dir = tempdir()?;
        let padded = format!("  {}  ", dir.path().display());
        let validated = validate_directory(Path::new(&padded))?;
        assert_eq!(validated, dir.path());
        Ok(())
    }

    #[test]
    fn test_create_new_directory_with_parents() -> Result<()> {
        let base = tempdir()?;
        let target = base.path().join("nested/new_function");
        create_new_directory(&target)?;
        assert!(target.is_dir());
        Ok(())
    }

    #[test]
    fn test_create_new_directory_refuses_existing() -> Result<()> {
        let base = tempdir()?;
        let err = create_new_directory(base.path()).unwrap_err();
        assert!(matches!(
            error_kind(&err),
            Some(LambdaKitError::AlreadyExists { .. })
        ));

        let file = base.path().join("occupied");
        fs::write(&file, "x")?;
        let err = create_new_directory(&file).unwrap_err();
        assert!(matches!(
            error_kind(&err),
            Some(LambdaKitError::AlreadyExists { .. })
        ));
        assert_eq!(fs::read_to_string(&file)?, "x");
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base = tempdir()?;
        let file_path = base.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_read_write_string_to_file() -> Result<()> {
        let base = tempdir()?;
        let file_path = base.path().join("deep/test_rw.txt");
        write_string_to_file(&file_path, "Hello, Lambda!")?;
        assert_eq!(read_file_to_string(&file_path)?, "Hello, Lambda!");
        Ok(())
    }
}
