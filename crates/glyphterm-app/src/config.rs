//! Configuration management
//!
//! Handles loading and saving the TOML configuration file.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use glyphterm_core::{Color, Cursor, Modifiers, Position, Size, StyleSet};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    NoConfigDir,

    #[error("Invalid terminal size {0}: both dimensions must be at least 1")]
    InvalidSize(Size),
}

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Grid settings
    pub terminal: TerminalConfig,
    /// Style applied to newly written glyphs
    pub style: StyleConfig,
    /// Headless rendering settings
    pub render: RenderConfig,
}

impl Config {
    /// Reject settings the terminal cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.terminal.size();
        if size.is_empty() {
            return Err(ConfigError::InvalidSize(size));
        }
        Ok(())
    }
}

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub columns: usize,
    pub rows: usize,
    /// Show the cursor
    pub cursor_visible: bool,
    /// Cursor blink
    pub cursor_blink: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        let size = Size::default();
        Self {
            columns: size.columns,
            rows: size.rows,
            cursor_visible: true,
            cursor_blink: true,
        }
    }
}

impl TerminalConfig {
    pub fn size(&self) -> Size {
        Size::new(self.columns, self.rows)
    }

    /// Initial cursor state at the origin
    pub fn cursor(&self) -> Cursor {
        Cursor {
            position: Position::ORIGIN,
            visible: self.cursor_visible,
            blink: self.cursor_blink,
        }
    }
}

/// Default style settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub foreground: Color,
    pub background: Color,
    pub modifiers: Modifiers,
}

impl StyleConfig {
    pub fn style_set(&self) -> StyleSet {
        StyleSet::new(self.foreground, self.background, self.modifiers)
    }
}

/// Headless rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Minimum time between frames in milliseconds
    pub frame_interval_ms: u64,
    /// Draw the cursor as a block glyph in rendered text
    pub show_cursor: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            show_cursor: false,
        }
    }
}

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "glyphterm", "glyphterm").map(|p| p.config_dir().to_path_buf())
}

/// Get the config file path
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Load configuration from the default location
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    load_config_from(&path)
}

/// Load configuration from `path`, falling back to defaults if it is missing
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save configuration to the default location
pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    std::fs::create_dir_all(&dir)?;
    save_config_to(config, &dir.join("config.toml"))
}

/// Save configuration to `path`
pub fn save_config_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    config.validate()?;
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
