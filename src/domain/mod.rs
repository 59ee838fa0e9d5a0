// src/domain/mod.rs
pub mod chat;
pub mod error;
pub mod flashcards;
pub mod outcome;
pub mod settings;

pub use chat::{ChatMessage, ChatRequest, Role};
pub use error::DomainError;
pub use flashcards::GeneratedCards;
pub use outcome::NoteOutcome;
pub use settings::Settings;
