//! # CyberBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The top-level commands of the `cyberbot` binary. Each module defines its
//! own clap arguments struct and a `handle_*` function called from `main.rs`.
//!
//! - `chat`: Interactive session (the default command)
//! - `ask`: One question, one answer
//! - `topics`: Lists topics, feeling words and known questions
//!

/// One-shot question answering.
pub mod ask;
/// The interactive session loop.
pub mod chat;
/// Listing of what the bot understands.
pub mod topics;
