//! # CyberBot Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! A thin wrapper around `std::process::Command` for running an external
//! program to completion. CyberBot only needs this for the audio greeting,
//! where playback is handed to a system player (`aplay`, `afplay`, ...).
//!
//! The child's output is captured rather than inherited so a noisy player
//! cannot scribble over the chat transcript. On failure the captured stderr
//! becomes part of the error message.
//!
use crate::core::error::Result;
use anyhow::{bail, Context};
use std::ffi::OsStr;
use std::process::Command;
use tracing::debug;

/// Runs `cmd` with `args`, blocking until it exits.
///
/// # Errors
///
/// Returns an error if the program cannot be started (e.g. it is not on
/// `PATH`) or if it exits with a non-zero status.
pub fn run_command_quiet<S: AsRef<OsStr>>(cmd: &str, args: &[S]) -> Result<()> {
    debug!(
        "Running: {} {:?}",
        cmd,
        args.iter().map(|a| a.as_ref()).collect::<Vec<_>>()
    );
    let output = Command::new(cmd)
        .args(args)
        .output()
        .with_context(|| format!("Failed to start '{}'", cmd))?;

    debug!(
        "'{}' finished: status={}, stderr='{}'",
        cmd,
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    );

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            bail!("'{}' exited with {}", cmd, output.status);
        }
        bail!("'{}' exited with {}: {}", cmd, output.status, stderr);
    }
    Ok(())
}
