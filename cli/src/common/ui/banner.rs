//! # CyberBot Banner (`common::ui::banner`)
//!
//! File: cli/src/common/ui/banner.rs
//!
//! The ASCII header shown at startup and the personalized welcome box shown
//! once the user has told us their name.
//!
use crate::common::ui::Console;
use crate::core::error::Result;
use crossterm::style::Color;
use std::io::{BufRead, Write};

const ASCII_ART: &str = r#"
   _____              _
  / ____|            | |
 | (___   _ __   ___ | |_ _ __ ___  ___ _ __
  \___ \ | '_ \ / _ \| __| '__/ _ \/ _ \ '__|
  ____) || | | | (_) | |_| | |  __/  __/ |
 |_____/ |_| |_|\___/ \__|_|  \___|\___|_|"#;

const WELCOME_BOX: [&str; 3] = [
    "  ╔════════════════════════════════════╗",
    "  ║   CYBERSECURITY AWARENESS BOT      ║",
    "  ╚════════════════════════════════════╝",
];

/// Prints the ASCII art header in blue, then pauses briefly.
pub fn show_banner<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.colored_line(ASCII_ART, Color::Blue)?;
    console.banner_pause()
}

/// Prints the welcome box and the greeting for `name`.
pub fn show_welcome<R: BufRead, W: Write>(console: &mut Console<R, W>, name: &str) -> Result<()> {
    console.line("")?;
    for row in WELCOME_BOX {
        console.colored_line(row, Color::Cyan)?;
    }
    console.line("")?;
    console.colored_line(
        &format!("Welcome, {}! I'm here to help you stay safe online.", name),
        Color::Yellow,
    )?;
    console.line("")?;
    console.colored_line(
        "Ask me about phishing, passwords, privacy, or any security topic.",
        Color::Magenta,
    )
}
