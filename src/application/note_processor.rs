// src/application/note_processor.rs
use crate::application::{CompletionClient, FlashcardGenerator};
use crate::constants::{FLASHCARDS_HEADER, FLASHCARDS_TAG_LINE};
use crate::domain::{DomainError, GeneratedCards, NoteOutcome, Settings};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

/// Storage holding the notes
pub trait NoteStore {
    fn read(&self, path: &Path) -> Result<String, DomainError>;

    fn write(&mut self, path: &Path, text: &str) -> Result<(), DomainError>;

    /// Notes inside `folder`, direct children only unless `recursive`
    fn list_notes(&self, folder: &Path, recursive: bool) -> Result<Vec<PathBuf>, DomainError>;
}

/// Short transient messages for the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

lazy_static! {
    static ref TAG_LINE_REGEX: Regex = Regex::new(r"\n#flashcards.*\n")
        .expect("Failed to compile tag line regex");
}

/// True if the generated-flashcards heading was inserted before
pub fn has_flashcards_header(text: &str) -> bool {
    text.contains(FLASHCARDS_HEADER)
}

/// True if a line starting with `#flashcards` follows a newline
pub fn has_flashcards_tag(text: &str) -> bool {
    TAG_LINE_REGEX.is_match(text)
}

/// Append header, tag line and cards to `text`.
///
/// Header and tag line are only added when the probes found them missing.
pub fn append_flashcards(
    text: &str,
    cards: &GeneratedCards,
    has_header: bool,
    has_tag: bool,
) -> String {
    let mut block = String::new();
    if !has_header {
        block.push_str(FLASHCARDS_HEADER);
    }
    if !has_tag {
        block.push_str(FLASHCARDS_TAG_LINE);
    }
    block.push_str("\n\n");
    block.push_str(&cards.to_block());

    format!("{}{}", text, block)
}

/// The configured marker tag and the pattern removing it
#[derive(Debug, Clone)]
pub struct MarkerTag {
    tag: String,
    regex: Regex,
}

impl MarkerTag {
    pub fn new(tag: &str) -> Result<Self, DomainError> {
        if tag.is_empty() {
            return Err(DomainError::InvalidSettings(
                "generation tag must not be empty".to_string(),
            ));
        }
        // The tag plus one whitespace character, or the tag at end of text
        let regex = Regex::new(&format!(r"{}(\s|$)", regex::escape(tag)))
            .map_err(|e| DomainError::InvalidSettings(format!("generation tag: {}", e)))?;

        Ok(Self {
            tag: tag.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.tag
    }

    pub fn is_present(&self, text: &str) -> bool {
        text.contains(&self.tag)
    }

    /// Remove every occurrence followed by whitespace or end of text
    pub fn strip(&self, text: &str) -> String {
        self.regex.replace_all(text, "").into_owned()
    }
}

/// Use case turning marked notes into notes with appended flashcards
pub struct NoteProcessor<C: CompletionClient, S: NoteStore, N: Notifier> {
    generator: FlashcardGenerator<C>,
    store: S,
    notifier: N,
    settings: Settings,
    marker: MarkerTag,
}

impl<C: CompletionClient, S: NoteStore, N: Notifier> NoteProcessor<C, S, N> {
    pub fn new(
        generator: FlashcardGenerator<C>,
        store: S,
        notifier: N,
        settings: Settings,
    ) -> Result<Self, DomainError> {
        let marker = MarkerTag::new(&settings.generation_tag)?;
        Ok(Self {
            generator,
            store,
            notifier,
            settings,
            marker,
        })
    }

    pub fn generator(&self) -> &FlashcardGenerator<C> {
        &self.generator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Process every note of `folder`, one after the other.
    ///
    /// Only listing the folder can fail; per-note failures are notified and
    /// show up as [`NoteOutcome::Failed`].
    pub fn process_folder(
        &mut self,
        folder: &Path,
        recursive: bool,
    ) -> Result<Vec<NoteOutcome>, DomainError> {
        let notes = self.store.list_notes(folder, recursive)?;
        debug!(count = notes.len(), ?folder, "Found notes");

        let mut outcomes = Vec::with_capacity(notes.len());
        for note in notes {
            outcomes.push(self.process_note(&note));
        }
        Ok(outcomes)
    }

    /// Run one read, generate, patch, write cycle on a single note
    #[instrument(level = "debug", skip(self))]
    pub fn process_note(&mut self, path: &Path) -> NoteOutcome {
        let text = match self.store.read(path) {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, ?path, "Failed to read note");
                self.notifier
                    .notify(&format!("Could not read {}: {}", path.display(), e));
                return NoteOutcome::Failed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                };
            }
        };

        if !self.marker.is_present(&text) {
            debug!(?path, tag = self.marker.as_str(), "No generation tag, skipping");
            return NoteOutcome::Skipped {
                path: path.to_path_buf(),
            };
        }

        let has_header = has_flashcards_header(&text);
        let has_tag = has_flashcards_tag(&text);
        debug!(has_header, has_tag, "Probed existing markers");

        self.notifier
            .notify(&format!("Generating flashcards for {}...", display_name(path)));

        let result = self.generator.generate(
            &text,
            &self.settings.api_key,
            &self.settings.model,
            &self.settings.inline_separator,
        );

        let (updated, outcome) = match result {
            Ok(response) => {
                let cards = GeneratedCards::from_response(&response);
                let patched = append_flashcards(&text, &cards, has_header, has_tag);
                let patched = self.marker.strip(&patched);
                info!(?path, cards = cards.count(), "Flashcards generated");
                self.notifier.notify("Flashcards successfully generated!");
                (
                    patched,
                    NoteOutcome::Generated {
                        path: path.to_path_buf(),
                        cards: cards.count(),
                    },
                )
            }
            Err(e) => {
                error!(error = %e, ?path, "Error generating flashcards");
                self.notifier.notify(&format!(
                    "Error generating flashcards for {}. Check the log output for details.",
                    display_name(path)
                ));
                (
                    text,
                    NoteOutcome::Failed {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    },
                )
            }
        };

        // Written back on failure too, unchanged in that case
        if let Err(e) = self.store.write(path, &updated) {
            error!(error = %e, ?path, "Failed to write note");
            self.notifier
                .notify(&format!("Could not write {}: {}", path.display(), e));
            return NoteOutcome::Failed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            };
        }

        outcome
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
