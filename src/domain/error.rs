// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("API key is not set. Run `flashcards-llm init` and edit the config file, or export OPENAI_API_KEY")]
    MissingApiKey,
    #[error("No response received from OpenAI API")]
    NoResponse,
    #[error("API error: {0}")]
    Api(String),
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Note store error: {0}")]
    Store(String),
}
