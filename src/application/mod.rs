// src/application/mod.rs
pub mod flashcard_generator;
pub mod note_processor;

pub use flashcard_generator::{CompletionClient, FlashcardGenerator};
pub use note_processor::{MarkerTag, NoteProcessor, NoteStore, Notifier};
