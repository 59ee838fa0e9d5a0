// src/infrastructure/mod.rs
pub mod config;
pub mod note_store;
pub mod openai;

pub use config::Config;
pub use note_store::FsNoteStore;
pub use openai::OpenAiClient;
