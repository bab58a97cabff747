//! # CyberBot Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! Answers a single question and exits. Runs the same router as the
//! interactive session with a fresh, empty session memory, which makes it
//! handy for scripts:
//!
//! ```bash
//! cyberbot ask what is ransomware
//! cyberbot ask --seed 1 "any password tips?"
//! ```
//!
use crate::bot::{Reply, SessionMemory};
use crate::commands::chat::build_router;
use crate::core::error::{BotError, Result};
use clap::Parser;
use tracing::info;

/// Arguments for `cyberbot ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Name used in the "didn't understand" reply.
    #[arg(long, default_value = "friend")]
    pub name: String,

    /// Seed for tip selection.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn handle_ask(args: AskArgs) -> Result<()> {
    let reply = answer(&args)?;
    info!("Answered with strategy {}", reply.strategy);
    println!("{}", reply.text);
    Ok(())
}

/// Routes the joined question through a fresh session.
pub fn answer(args: &AskArgs) -> Result<Reply> {
    let question = args.question.join(" ");
    if question.trim().is_empty() {
        return Err(BotError::EmptyQuestion.into());
    }
    let mut router = build_router(args.seed)?;
    let mut memory = SessionMemory::new();
    Ok(router.route(&question, &mut memory, &args.name))
}
