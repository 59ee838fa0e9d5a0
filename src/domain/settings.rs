// src/domain/settings.rs
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_GENERATION_TAG, DEFAULT_MODEL, DEFAULT_SEPARATOR};
use crate::domain::DomainError;

/// Resolved settings for one run, passed explicitly into every use case.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub inline_separator: String,
    pub generation_tag: String,
    pub base_url: String,
}

impl Settings {
    /// Fails when no API key is configured
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.api_key.trim().is_empty() {
            return Err(DomainError::MissingApiKey);
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            inline_separator: DEFAULT_SEPARATOR.to_string(),
            generation_tag: DEFAULT_GENERATION_TAG.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("model", &self.model)
            .field("inline_separator", &self.inline_separator)
            .field("generation_tag", &self.generation_tag)
            .field("base_url", &self.base_url)
            .finish()
    }
}
