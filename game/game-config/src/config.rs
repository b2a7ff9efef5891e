use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_CHAT_LINES: u32 = 100;
pub const MAX_CHAT_INPUT_LEN: u32 = 256;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("{field} must be within {min}..={max}, but was {val}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        val: f64,
    },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

fn ensure_range(
    field: &'static str,
    val: f64,
    min: f64,
    max: f64,
) -> Result<(), ConfigValidationError> {
    if (min..=max).contains(&val) {
        Ok(())
    } else {
        Err(ConfigValidationError::OutOfRange {
            field,
            min,
            max,
            val,
        })
    }
}

fn ensure_non_empty(field: &'static str, val: &str) -> Result<(), ConfigValidationError> {
    if val.trim().is_empty() {
        Err(ConfigValidationError::Empty { field })
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigFont {
    /// The font family
    pub family: String,
    /// The font size in canvas units
    pub size: f32,
}

impl Default for ConfigFont {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigChat {
    /// How many of the latest chat lines are shown
    pub max_lines: u32,
    /// Seconds until a chat line is hidden while the chat input is closed
    pub fade_secs: f64,
    /// Maximum characters of the chat input
    pub max_input_len: u32,
}

impl Default for ConfigChat {
    fn default() -> Self {
        Self {
            max_lines: 10,
            fade_secs: 10.0,
            max_input_len: 64,
        }
    }
}

/// Key chains in bind syntax, e.g. `tab` or `control_left+t`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigHudBinds {
    /// Hold to show the player list
    pub player_list: String,
    /// Opens the chat input
    pub chat: String,
    /// Opens the chat input prefilled with `/`
    pub command: String,
}

impl Default for ConfigHudBinds {
    fn default() -> Self {
        Self {
            player_list: "tab".to_string(),
            chat: "t".to_string(),
            command: "slash".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ConfigHud {
    /// Hides the whole heads up display
    pub hide_gui: bool,
    /// The font of the player list
    pub player_list_font: ConfigFont,
    pub chat: ConfigChat,
    pub binds: ConfigHudBinds,
}

impl ConfigHud {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        ensure_non_empty("player_list_font.family", &self.player_list_font.family)?;
        ensure_range(
            "player_list_font.size",
            self.player_list_font.size as f64,
            4.0,
            128.0,
        )?;
        ensure_range(
            "chat.max_lines",
            self.chat.max_lines as f64,
            1.0,
            MAX_CHAT_LINES as f64,
        )?;
        ensure_range("chat.fade_secs", self.chat.fade_secs, 0.0, 3600.0)?;
        ensure_range(
            "chat.max_input_len",
            self.chat.max_input_len as f64,
            1.0,
            MAX_CHAT_INPUT_LEN as f64,
        )?;
        ensure_non_empty("binds.player_list", &self.binds.player_list)?;
        ensure_non_empty("binds.chat", &self.binds.chat)?;
        ensure_non_empty("binds.command", &self.binds.command)?;
        Ok(())
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::info!(target: "config", "loaded hud config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json_string()?)
            .with_context(|| format!("failed to write config {}", path.display()))
    }
}
