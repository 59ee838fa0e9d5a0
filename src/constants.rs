// src/constants.rs
//
// Fixed strings and defaults shared across the codebase.
// Each constant is documented with its purpose and usage context.

/// Heading appended once above the first batch of generated flashcards.
///
/// The leading blank line separates the section from the note body. Presence of
/// this exact string is what prevents a second header on later runs.
///
/// Used in: `application/note_processor.rs`
pub const FLASHCARDS_HEADER: &str = "\n\n### Generated Flashcards\n";

/// Classification tag line marking a note as containing flashcards.
///
/// Used in: `application/note_processor.rs`
pub const FLASHCARDS_TAG_LINE: &str = "#flashcards\n";

/// Default token separating question from answer inside one flashcard line.
pub const DEFAULT_SEPARATOR: &str = "::";

/// Default marker tag flagging a note for generation.
pub const DEFAULT_GENERATION_TAG: &str = "#generate";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Models offered out of the box. Other names are accepted with a warning.
pub const SUPPORTED_MODELS: &[&str] = &["gpt-3.5-turbo", "gpt-4"];

/// Default base URL of the OpenAI-compatible API.
///
/// Used in: `infrastructure/config.rs`, `infrastructure/openai.rs`
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable consulted when the config file carries no API key.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Timeout for a single chat-completion request.
///
/// Generation for long notes can take a while, but a stalled endpoint must not
/// block the folder run forever.
///
/// Used in: `infrastructure/openai.rs`
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Directory name below the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "flashcards-llm";

/// File extension of notes picked up when scanning a folder.
pub const NOTE_EXTENSION: &str = "md";
