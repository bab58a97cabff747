//! # CyberBot Console (`common::ui::console`)
//!
//! File: cli/src/common/ui/console.rs
//!
//! ## Overview
//!
//! `Console` pairs an input stream with an output stream and knows how to
//! prompt, print colored lines and "type" replies one character at a time.
//! It is generic so the same session code runs against the real terminal
//! (`StdinLock` / `StdoutLock`) and against byte buffers in tests.
//!
//! Colors come from `crossterm` and are only emitted when enabled; the
//! typewriter delay is skipped entirely when it is zero.
//!
use crate::core::config::ChatConfig;
use crate::core::error::Result;
use anyhow::Context;
use crossterm::style::{style, Color, Stylize};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// How output should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub color: bool,
    pub typing_delay: Duration,
    pub banner_pause: Duration,
}

impl ConsoleSettings {
    /// No colors, no delays. Used whenever output is not a terminal.
    pub fn plain() -> Self {
        Self {
            color: false,
            typing_delay: Duration::ZERO,
            banner_pause: Duration::ZERO,
        }
    }

    /// Settings for a session. Colors and delays only apply when `interactive`
    /// (stdout is a terminal); `typing` can switch the typewriter effect off.
    pub fn from_config(chat: &ChatConfig, interactive: bool, typing: bool) -> Self {
        if !interactive {
            return Self::plain();
        }
        Self {
            color: chat.color,
            typing_delay: if typing {
                Duration::from_millis(chat.typing_delay_ms)
            } else {
                Duration::ZERO
            },
            banner_pause: Duration::from_millis(chat.banner_pause_ms),
        }
    }
}

/// An input/output pair with rendering settings.
pub struct Console<R, W> {
    input: R,
    output: W,
    settings: ConsoleSettings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: ConsoleSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Writes `prompt` (no newline) and reads one line.
    ///
    /// Returns `Ok(None)` at end of input. The trailing line terminator is
    /// removed; other whitespace is left for the caller to judge.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Writes a plain line.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to stdout")
    }

    /// Writes a line in `color` (plain when colors are off).
    pub fn colored_line(&mut self, text: &str, color: Color) -> Result<()> {
        let written = if self.settings.color {
            writeln!(self.output, "{}", style(text).with(color))
        } else {
            writeln!(self.output, "{}", text)
        };
        written.context("Failed to write to stdout")
    }

    /// Writes `text` one character at a time, then a newline.
    pub fn type_out(&mut self, text: &str) -> Result<()> {
        let delay = self.settings.typing_delay;
        if delay.is_zero() {
            return self.line(text);
        }
        for ch in text.chars() {
            write!(self.output, "{}", ch).context("Failed to write to stdout")?;
            self.output.flush().context("Failed to flush stdout")?;
            thread::sleep(delay);
        }
        writeln!(self.output).context("Failed to write to stdout")
    }

    /// Sleeps for the configured banner pause.
    pub fn banner_pause(&mut self) -> Result<()> {
        self.output.flush().context("Failed to flush stdout")?;
        if !self.settings.banner_pause.is_zero() {
            thread::sleep(self.settings.banner_pause);
        }
        Ok(())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
