//! # CyberBot Audio Greeting (`common::audio`)
//!
//! File: cli/src/common/audio.rs
//!
//! ## Overview
//!
//! Plays the welcome recording at startup. This is strictly best-effort: a
//! missing file, a missing player or a failing player never stops the
//! session. The caller gets back a short notice to show instead.
//!
use crate::common::process;
use crate::core::config::GreetingConfig;
use crate::core::error::{BotError, Result};
use tracing::{info, warn};

/// Plays the configured greeting and waits for playback to finish.
///
/// # Errors
///
/// Returns `BotError::Audio` when the file does not exist or the player fails.
pub fn play_greeting(greeting: &GreetingConfig) -> Result<()> {
    let path = greeting.audio_path();
    if !path.is_file() {
        return Err(BotError::Audio("file not found".to_string()).into());
    }
    let player = greeting.player_command();
    process::run_command_quiet(player, &[&path])
        .map_err(|e| BotError::Audio(format!("{:#}", e)))?;
    info!("Played greeting {}", path.display());
    Ok(())
}

/// Attempts the greeting if enabled. Returns the notice to display when it
/// was skipped because of an error, `None` otherwise.
pub fn greet(greeting: &GreetingConfig) -> Option<String> {
    if !greeting.enabled {
        return None;
    }
    match play_greeting(greeting) {
        Ok(()) => None,
        Err(e) => {
            let reason = match e.downcast_ref::<BotError>() {
                Some(BotError::Audio(reason)) => reason.clone(),
                _ => e.to_string(),
            };
            warn!("Audio greeting skipped: {}", reason);
            Some(format!(
                "(Audio skipped [{}]: {})",
                greeting.audio_path().display(),
                reason
            ))
        }
    }
}
