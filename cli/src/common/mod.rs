//! # CyberBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared, cross-cutting helpers used by the commands. None of them know
//! anything about how replies are chosen.
//!
//! - **`audio`**: Best-effort playback of the startup greeting.
//! - **`process`**: Running an external program to completion.
//! - **`ui`**: Console input/output, colors, typewriter effect and the banner.
//!

/// Best-effort audio greeting.
pub mod audio;
/// Blocking execution of external programs.
pub mod process;
/// Terminal presentation helpers.
pub mod ui;
