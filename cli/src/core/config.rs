//! # CyberBot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module handles loading, merging and validating CyberBot's settings.
//! None of them change what the bot answers; they only tune the presentation
//! (typing speed, banner pause, colors) and the optional audio greeting.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (or `CYBERBOT_CONFIG`). When given,
//!    it is the only file read and it must exist.
//! 2. Project-specific `.cyberbot.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `<config dir>/cyberbot/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! typing_delay_ms = 10
//! banner_pause_ms = 0
//! color = false
//!
//! [greeting]
//! enabled = true
//! audio_file = "~/sounds/Welcome.wav"
//! player = "paplay"
//! ```
//!
use crate::core::error::{BotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".cyberbot.toml";
const DEFAULT_AUDIO_FILENAME: &str = "Welcome.wav";
const MAX_TYPING_DELAY_MS: u64 = 1_000;
const MAX_BANNER_PAUSE_MS: u64 = 10_000;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub greeting: GreetingConfig,
}

/// Presentation settings for the interactive session.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Delay between characters of a reply, in milliseconds. 0 prints replies at once.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    /// Pause after the banner, in milliseconds.
    #[serde(default = "default_banner_pause_ms")]
    pub banner_pause_ms: u64,
    /// Use colors when stdout is a terminal.
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Settings for the audio greeting played at startup.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GreetingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// WAV file to play (can use ~). Defaults to `Welcome.wav` beside the executable.
    pub audio_file: Option<String>,
    /// External player command. Defaults to `afplay` on macOS, `aplay` elsewhere.
    pub player: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            banner_pause_ms: default_banner_pause_ms(),
            color: true,
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            audio_file: None,
            player: None,
        }
    }
}

impl GreetingConfig {
    /// The audio file to play, falling back to `Welcome.wav` next to the executable.
    pub fn audio_path(&self) -> PathBuf {
        match &self.audio_file {
            Some(file) => PathBuf::from(file),
            None => std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_default()
                .join(DEFAULT_AUDIO_FILENAME),
        }
    }

    /// The player command to run.
    pub fn player_command(&self) -> &str {
        match &self.player {
            Some(player) => player.as_str(),
            None if cfg!(target_os = "macos") => "afplay",
            None => "aplay",
        }
    }
}

fn default_typing_delay_ms() -> u64 {
    20
}
fn default_banner_pause_ms() -> u64 {
    800
}
fn default_true() -> bool {
    true
}

/// Loads the effective configuration.
///
/// With `explicit` set, only that file is read. Otherwise the user and
/// project files are merged on top of the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(anyhow!(BotError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                ))));
            }
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "CyberBot", "cyberbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.cyberbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let project_config = dir.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();

    merged.chat.typing_delay_ms = if project.chat.typing_delay_ms != defaults.chat.typing_delay_ms {
        project.chat.typing_delay_ms
    } else {
        user.chat.typing_delay_ms
    };
    merged.chat.banner_pause_ms = if project.chat.banner_pause_ms != defaults.chat.banner_pause_ms {
        project.chat.banner_pause_ms
    } else {
        user.chat.banner_pause_ms
    };
    merged.chat.color = if project.chat.color != defaults.chat.color {
        project.chat.color
    } else {
        user.chat.color
    };
    merged.greeting.enabled = if project.greeting.enabled != defaults.greeting.enabled {
        project.greeting.enabled
    } else {
        user.greeting.enabled
    };
    merged.greeting.audio_file = project.greeting.audio_file.or(user.greeting.audio_file);
    merged.greeting.player = project.greeting.player.or(user.greeting.player);
    merged
}

fn expand_config_paths(config: &mut Config) {
    if let Some(file) = &config.greeting.audio_file {
        let expanded = shellexpand::tilde(file).into_owned();
        debug!("Expanded audio file path: {}", expanded);
        config.greeting.audio_file = Some(expanded);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.chat.typing_delay_ms > MAX_TYPING_DELAY_MS {
        return Err(anyhow!(BotError::Config(format!(
            "typing_delay_ms must be at most {} (got {}).",
            MAX_TYPING_DELAY_MS, config.chat.typing_delay_ms
        ))));
    }
    if config.chat.banner_pause_ms > MAX_BANNER_PAUSE_MS {
        return Err(anyhow!(BotError::Config(format!(
            "banner_pause_ms must be at most {} (got {}).",
            MAX_BANNER_PAUSE_MS, config.chat.banner_pause_ms
        ))));
    }
    if let Some(player) = &config.greeting.player {
        if player.trim().is_empty() {
            return Err(anyhow!(BotError::Config(
                "greeting.player cannot be empty.".to_string()
            )));
        }
    }
    if let Some(file) = &config.greeting.audio_file {
        if file.trim().is_empty() {
            return Err(anyhow!(BotError::Config(
                "greeting.audio_file cannot be empty.".to_string()
            )));
        }
    }
    Ok(())
}
