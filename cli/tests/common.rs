//! # Lambda Kit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`function.rs`, `layer.rs`,
//! `main_tests.rs`). Each other `.rs` file in `cli/tests/` is compiled as its
//! own test crate and runs the compiled `lambda-kit` binary.
//!

#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// A `lambda-kit` command for the binary built by this test run.
pub fn lambda_kit_cmd() -> Command {
    Command::cargo_bin("lambda-kit").expect("Failed to find lambda-kit binary for testing")
}

/// A `lambda-kit` command that runs inside `workdir` and cannot see the
/// developer's own user configuration.
pub fn isolated_cmd(workdir: &Path) -> Command {
    let mut cmd = lambda_kit_cmd();
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

pub const HANDLER_SOURCE: &str = r#"import json


def lambda_handler(event: dict, context: lambda_context.Context) -> dict:
    return {"statusCode": 200, "body": json.dumps({})}
"#;
