//! # CyberBot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the CyberBot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # Start a session (same as `cyberbot chat`)
//! cyberbot
//!
//! # One-off question with debug logging on stderr
//! cyberbot -vv ask what is a strong password
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration
//! 4. Route to the command handler (`chat` when none is given)
//! 5. Format and display any errors that occur
//!
use clap::Parser;
use cyberbot::commands;
use cyberbot::core::config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cyberbot",
    about = "Cybersecurity awareness chatbot for the terminal",
    long_about = "Ask about phishing, passwords, privacy and other security basics.\n\
                  Runs an interactive chat session when no command is given.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user/project files.
    #[arg(long, global = true, env = "CYBERBOT_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive chat session (default).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single question and exit.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the topics, feeling words and questions the bot understands.
    #[command(alias = "t")]
    Topics(commands::topics::TopicsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = run(cli);

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = config::load_config(cli.config.as_deref())?;
    match cli.command {
        Some(Commands::Chat(args)) => commands::chat::handle_chat(args, &cfg),
        Some(Commands::Ask(args)) => commands::ask::handle_ask(args),
        Some(Commands::Topics(args)) => commands::topics::handle_topics(args),
        None => commands::chat::handle_chat(commands::chat::ChatArgs::default(), &cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_chat() {
        let cli = Cli::try_parse_from(["cyberbot"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cyberbot", "ask", "-vv", "--config", "x.toml", "hi"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Some(Commands::Ask(_))));
    }
}
