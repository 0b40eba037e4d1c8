//! # Lambda Kit CLI Layer Integration Tests
//!
//! File: cli/tests/layer.rs
//!
//! ## Overview
//!
//! Integration tests for `lambda-kit layer` (`init`, `describe`, `pack`).
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_layer_init_then_pack() {
    let temp = tempdir().unwrap();
    isolated_cmd(temp.path())
        .args(["layer", "init", "--source-dir", "shared"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lambda layer initialized in shared."));
    assert!(temp.path().join("shared/python").is_dir());
    assert!(temp.path().join("shared/requirements.txt").is_file());

    isolated_cmd(temp.path())
        .args(["l", "pack", "--source-dir", "shared", "--output-dir", "dist", "-n", "deps"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Packaging Lambda layer: deps")
                .and(predicate::str::contains("Found required directory: shared/python"))
                .and(predicate::str::contains("Found required file: shared/requirements.txt"))
                .and(predicate::str::contains("shared appears to be a Python Lambda layer.")),
        );
}

#[test]
fn test_layer_init_existing_target_fails() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();

    isolated_cmd(temp.path())
        .args(["layer", "init", "--source-dir", "taken"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_dir(temp.path().join("taken")).unwrap().count(), 0);
}

#[test]
fn test_layer_pack_reports_missing_requirements() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("partial/python")).unwrap();

    isolated_cmd(temp.path())
        .args(["layer", "pack", "--source-dir", "partial", "--output-dir", "dist"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Missing required file: partial/requirements.txt",
        ))
        .stderr(predicate::str::contains(
            "Error: partial does not appear to be a Python Lambda layer.",
        ));
}

#[test]
fn test_layer_pack_stops_at_missing_payload() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("bare")).unwrap();
    fs::write(temp.path().join("bare/requirements.txt"), "").unwrap();

    isolated_cmd(temp.path())
        .args(["layer", "pack", "--source-dir", "bare", "--output-dir", "dist"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("Missing required directory: bare/python")
                .and(predicate::str::contains("requirements.txt").not()),
        );
}

#[test]
fn test_layer_describe_shows_payload() {
    let temp = tempdir().unwrap();
    let layer = temp.path().join("shared");
    fs::create_dir_all(layer.join("python/helpers")).unwrap();
    fs::write(layer.join("python/helpers/__init__.py"), "").unwrap();
    fs::write(layer.join("requirements.txt"), "requests==2.32.3\n").unwrap();

    isolated_cmd(temp.path())
        .args(["layer", "describe", "--source-dir", "shared"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("└── helpers/")
                .and(predicate::str::contains("    └── __init__.py"))
                .and(predicate::str::contains(
                    "1 file(s) in python/, 1 declared requirement(s).",
                )),
        );
}
