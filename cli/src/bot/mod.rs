//! # CyberBot Conversation Engine
//!
//! File: cli/src/bot/mod.rs
//!
//! ## Overview
//!
//! The decision-making part of CyberBot. Everything that chooses *what* to say
//! lives here; the `commands` and `common::ui` modules only decide *how* it is
//! shown.
//!
//! ## Architecture
//!
//! - `knowledge`: the static tables (Q&A bank, topic tips, sentiment replies, follow-ups)
//! - `memory`: per-session state (stated interest, last tipped topic)
//! - `router`: the ordered matching pipeline that picks one reply per input line
//!
//! A `KnowledgeBase` is immutable and can be shared by any number of sessions.
//! Each session owns its own `SessionMemory`.
//!

/// Static question/answer, tip, sentiment and follow-up tables.
pub mod knowledge;
/// Per-session memory of the user's interest and the last discussed topic.
pub mod memory;
/// Ordered strategy pipeline turning an input line into a reply.
pub mod router;

pub use knowledge::KnowledgeBase;
pub use memory::SessionMemory;
pub use router::{Reply, ResponseRouter, Strategy};
