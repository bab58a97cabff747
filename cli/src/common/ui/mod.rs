//! # CyberBot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal presentation for the interactive session. Nothing in here decides
//! what the bot says; it only reads lines and renders strings.
//!
//! - **`console`**: line input, colored output and the typewriter effect,
//!   generic over any `BufRead`/`Write` pair so sessions can be driven from
//!   tests with in-memory buffers.
//! - **`banner`**: the ASCII-art header and the personalized welcome box.
//!

/// Banner and welcome screen rendering.
pub mod banner;
/// Prompting, colored lines and typewriter output over arbitrary streams.
pub mod console;

pub use console::{Console, ConsoleSettings};
