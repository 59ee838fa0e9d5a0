use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_BASE_URL, DEFAULT_GENERATION_TAG, DEFAULT_MODEL, DEFAULT_SEPARATOR,
};
use crate::domain::Settings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration file
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Preferences {
    #[serde(default = "default_inline_separator")]
    pub inline_separator: String,
    #[serde(default = "default_generation_tag")]
    pub generation_tag: String,
}

// Default value functions
fn default_model() -> String { DEFAULT_MODEL.to_string() }
fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_inline_separator() -> String { DEFAULT_SEPARATOR.to_string() }
fn default_generation_tag() -> String { DEFAULT_GENERATION_TAG.to_string() }

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            inline_separator: default_inline_separator(),
            generation_tag: default_generation_tag(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/flashcards-llm/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join("config.toml"))
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Resolve run settings.
    ///
    /// `env_api_key` is only used when the file carries no key.
    pub fn into_settings(self, env_api_key: Option<String>) -> Settings {
        let api_key = if self.openai.api_key.trim().is_empty() {
            env_api_key.unwrap_or_default()
        } else {
            self.openai.api_key
        };

        Settings {
            api_key,
            model: self.openai.model,
            inline_separator: self.preferences.inline_separator,
            generation_tag: self.preferences.generation_tag,
            base_url: self.openai.base_url,
        }
    }
}
