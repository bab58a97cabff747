//! # CyberBot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout CyberBot. The
//! conversation engine itself never fails for user input (every line gets a
//! reply), so the errors here cover the edges of the program: configuration,
//! the built-in knowledge tables, the terminal input stream and the optional
//! audio greeting.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `BotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use cyberbot::core::error::{BotError, Result};
//! use anyhow::Context;
//!
//! fn load(path: &std::path::Path) -> Result<String> {
//!     if !path.exists() {
//!         return Err(BotError::Config(format!("Config file not found: {}", path.display())).into());
//!     }
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read file: {}", path.display()))
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the CyberBot application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed knowledge table: {0}")]
    MalformedTable(String),

    #[error("Input closed before the session could continue.")]
    InputClosed,

    #[error("Audio greeting failed: {0}")]
    Audio(String),

    #[error("Question cannot be empty.")]
    EmptyQuestion,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
