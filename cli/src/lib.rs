//! # CyberBot
//!
//! File: cli/src/lib.rs
//!
//! A terminal chatbot that answers cybersecurity-awareness questions from
//! static tables, with a little per-session memory.
//!
//! - `bot`: the response engine (knowledge tables, session memory, router)
//! - `commands`: the `chat`, `ask` and `topics` commands
//! - `common`: console, banner, audio greeting and process helpers
//! - `core`: configuration and error types
//!
//! The binary in `main.rs` only parses arguments, sets up logging and
//! dispatches to `commands`.

pub mod bot;
pub mod commands;
pub mod common;
pub mod core;
