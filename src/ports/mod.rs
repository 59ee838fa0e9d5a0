// src/ports/mod.rs
pub mod console;

pub use console::ConsoleNotifier;
