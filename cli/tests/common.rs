//! # CyberBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`chat.rs`, `ask.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and
//! pulls these in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get CyberBot Command (`cyberbot_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `cyberbot` binary,
/// isolated from the developer's setup:
/// - `CYBERBOT_CONFIG` and `RUST_LOG` are removed
/// - `HOME` and `XDG_CONFIG_HOME` point at an empty test home, so no user
///   `config.toml` is found
/// - the working directory is that home, which carries a `.git` marker so the
///   `.cyberbot.toml` search never climbs above it
///
/// Tests can still override any of these on the returned command.
///
/// ## Panics
/// Panics if the `cyberbot` binary cannot be found via `Command::cargo_bin`
/// or the test home cannot be created.
pub fn cyberbot_cmd() -> Command {
    let home = isolated_home();
    let mut cmd = Command::cargo_bin("cyberbot").expect("Failed to find cyberbot binary for testing");
    cmd.env_remove("CYBERBOT_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .current_dir(&home);
    cmd
}

/// Empty directory used as `HOME` and working directory by `cyberbot_cmd`.
/// Shared by every test and never written to after creation.
pub fn isolated_home() -> PathBuf {
    let home = std::env::temp_dir().join("cyberbot-test-home");
    std::fs::create_dir_all(home.join(".git")).expect("Failed to create test home");
    std::fs::create_dir_all(home.join(".config")).expect("Failed to create test home");
    home
}

/// Writes `contents` to `cyberbot.toml` inside `dir` and returns its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("cyberbot.toml");
    std::fs::write(&path, contents).expect("Failed to write test config");
    path
}
