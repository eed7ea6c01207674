//! Theme configuration for semantic messages.
//!
//! Centralizes the color, styles and glyph used by each message level.
//! A theme can be loaded from TOML; every field falls back to the defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ThemeError;
use crate::paint::{ColorToken, Paint};

/// Message severity, each with its own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Success,
    Warning,
    Error,
    Info,
}

impl Level {
    /// Name of the level's table in a theme file.
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Color of a level: a palette name (`"red"`) or a raw SGR code (`38`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Code(u8),
    Name(String),
}

impl From<&ThemeColor> for ColorToken {
    fn from(color: &ThemeColor) -> Self {
        match color {
            ThemeColor::Code(code) => ColorToken::from(*code),
            ThemeColor::Name(name) => ColorToken::from(name.as_str()),
        }
    }
}

impl From<&str> for ThemeColor {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Color, styles and glyph for one message level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTheme {
    /// Unknown palette names render without color.
    pub color: ThemeColor,
    pub styles: Vec<String>,
    /// Leading glyph; empty means none.
    pub emoji: String,
}

impl LevelTheme {
    fn new(color: &str, styles: &[&str], emoji: &str) -> Self {
        Self {
            color: ThemeColor::from(color),
            styles: styles.iter().map(|s| s.to_string()).collect(),
            emoji: emoji.to_string(),
        }
    }

    /// Build the paint this level renders with.
    pub fn paint(&self) -> Paint {
        Paint::new()
            .color(&self.color)
            .styles(&self.styles)
            .emoji(self.emoji.as_str())
    }
}

/// A `[level]` table from a theme file. Absent keys keep the level default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelOverride {
    color: Option<ThemeColor>,
    styles: Option<Vec<String>>,
    emoji: Option<String>,
}

impl LevelOverride {
    fn apply_to(self, level: &mut LevelTheme) {
        if let Some(color) = self.color {
            level.color = color;
        }
        if let Some(styles) = self.styles {
            level.styles = styles;
        }
        if let Some(emoji) = self.emoji {
            level.emoji = emoji;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    success: LevelOverride,
    warning: LevelOverride,
    error: LevelOverride,
    info: LevelOverride,
}

/// Theme configuration for all message levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub success: LevelTheme,
    pub warning: LevelTheme,
    pub error: LevelTheme,
    pub info: LevelTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: LevelTheme::new("green", &["bold"], "✅"),
            warning: LevelTheme::new("yellow", &["bold"], "⚠️"),
            error: LevelTheme::new("red", &["bold"], "❌"),
            info: LevelTheme::new("blue", &[], "ℹ️"),
        }
    }
}

impl Theme {
    /// Settings for one level.
    pub fn level(&self, level: Level) -> &LevelTheme {
        match level {
            Level::Success => &self.success,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
            Level::Info => &self.info,
        }
    }

    /// Parse a theme from TOML. Missing tables and keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(content)?;
        let mut theme = Self::default();
        file.success.apply_to(&mut theme.success);
        file.warning.apply_to(&mut theme.warning);
        file.error.apply_to(&mut theme.error);
        file.info.apply_to(&mut theme.info);
        Ok(theme)
    }

    /// Load a theme file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded theme from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// `<config dir>/termcolorx/theme.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("termcolorx").join("theme.toml"))
    }

    /// Load the theme at `path`, or the defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ThemeError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
