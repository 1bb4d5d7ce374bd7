//! Game configuration loaded from TOML
//!
//! Every section is optional; a missing file yields the defaults below.
//! Narrator credentials never live in the file, only the name of the
//! environment variable holding them.

use crate::core::error::{BargainError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for the external narrator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarratorConfig {
    /// Whether descriptive commands may be delegated at all
    pub enabled: bool,
    /// Endpoint; the wire format is picked from the host
    pub api_url: String,
    pub model: String,
    /// Upper bound on generated tokens per narration
    pub max_tokens: u32,
    /// Seconds to wait before a narration counts as failed
    pub timeout_secs: u64,
    /// Environment variable that holds the API key
    pub api_key_env: String,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://api.anthropic.com/v1/messages".into(),
            model: "claude-3-haiku-20240307".into(),
            max_tokens: 512,
            timeout_secs: 30,
            api_key_env: "LLM_API_KEY".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file, appended to. The game screen owns stdout.
    pub file: String,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: "blackout_bargain.log".into(),
            filter: "blackout_bargain=info".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    /// Redraw the whole screen every turn instead of scrolling
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub narrator: NarratorConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| BargainError::ConfigError(format!("Failed to parse config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            BargainError::ConfigError(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let narrator = &self.narrator;
        if !narrator.enabled {
            return Ok(());
        }

        if narrator.api_url.trim().is_empty() {
            return Err(BargainError::ConfigError(
                "narrator.api_url must not be empty".into(),
            ));
        }
        if narrator.max_tokens == 0 {
            return Err(BargainError::ConfigError(
                "narrator.max_tokens must be positive".into(),
            ));
        }
        if narrator.timeout_secs == 0 {
            return Err(BargainError::ConfigError(
                "narrator.timeout_secs must be positive".into(),
            ));
        }

        Ok(())
    }
}
