//! # CyberBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `cyberbot chat`, the interactive session (and the
//! default when no command is given). It is the presenter around the
//! `ResponseRouter`: it reads lines, filters out empty ones and `exit`, and
//! prints whatever the router answers.
//!
//! ## Session Flow
//!
//! 1. Best-effort audio greeting (a notice is printed if it is skipped)
//! 2. ASCII banner, then a short pause
//! 3. Name prompt, repeated until a non-empty name is given
//! 4. Welcome box
//! 5. Read loop on `> ` until `exit` or end of input
//!
//! ## Examples
//!
//! ```bash
//! cyberbot
//! cyberbot chat --name Ada --no-audio
//! printf 'Ada\nwhat is malware\nexit\n' | cyberbot chat --no-audio
//! ```
//!
use crate::bot::{KnowledgeBase, ResponseRouter, SessionMemory};
use crate::common::audio;
use crate::common::ui::{banner, Console, ConsoleSettings};
use crate::core::config::Config;
use crate::core::error::{BotError, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, info};

const EXIT_COMMAND: &str = "exit";
const EMPTY_INPUT_REMINDER: &str = "Please enter a question or 'exit'.";
const FAREWELL: &str = "Goodbye! Stay safe online.";

/// # Chat Arguments (`ChatArgs`)
///
/// Options for the interactive session.
#[derive(Parser, Debug, Default, Clone)]
pub struct ChatArgs {
    /// Your display name. Skips the name prompt.
    #[arg(long)]
    pub name: Option<String>,

    /// Do not play the audio greeting.
    #[arg(long)]
    pub no_audio: bool,

    /// Print replies instantly instead of typing them out.
    #[arg(long)]
    pub no_typing: bool,

    /// Seed for tip selection, for reproducible sessions.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Builds a router from the built-in knowledge base, seeded if requested.
pub fn build_router(seed: Option<u64>) -> Result<ResponseRouter> {
    let knowledge = KnowledgeBase::builtin()?;
    Ok(match seed {
        Some(seed) => ResponseRouter::with_seed(knowledge, seed),
        None => ResponseRouter::new(knowledge),
    })
}

/// # Handle Chat Command (`handle_chat`)
///
/// Wires the session to the real terminal and runs it.
///
/// ## Errors
///
/// Returns an error if the knowledge base fails validation, stdin/stdout fail,
/// or input ends before a name was entered.
pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Handling chat command...");
    debug!("Chat args: {:?}", args);

    let mut router = build_router(args.seed)?;

    let interactive = io::stdout().is_terminal();
    let settings = ConsoleSettings::from_config(&config.chat, interactive, !args.no_typing);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), settings);

    if !args.no_audio {
        if let Some(notice) = audio::greet(&config.greeting) {
            console.line(&notice)?;
        }
    }

    let turns = run_session(&mut console, &mut router, args.name)?;
    info!("Session ended after {} turn(s).", turns);
    Ok(())
}

/// Runs one session over `console`: banner, name, welcome, then the read loop.
///
/// Returns the number of lines that were answered by the router.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    router: &mut ResponseRouter,
    name: Option<String>,
) -> Result<usize> {
    banner::show_banner(console)?;

    let name = match name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => ask_name(console)?,
    };
    banner::show_welcome(console, &name)?;

    let mut memory = SessionMemory::new();
    let mut turns = 0;
    loop {
        let Some(line) = console.read_line("\n> ")? else {
            debug!("Input closed, ending session.");
            console.line("")?;
            console.line(FAREWELL)?;
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            console.line(EMPTY_INPUT_REMINDER)?;
            continue;
        }
        if input.eq_ignore_ascii_case(EXIT_COMMAND) {
            console.line(FAREWELL)?;
            break;
        }

        let reply = router.respond(input, &mut memory, &name);
        console.type_out(&reply)?;
        turns += 1;
    }
    Ok(turns)
}

/// Prompts until a non-empty name is entered.
fn ask_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    let mut prompt = "\nWhat is your name? ";
    loop {
        let line = console.read_line(prompt)?.ok_or(BotError::InputClosed)?;
        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        prompt = "Please enter a valid name: ";
    }
}
