// src/domain/flashcards.rs

/// Flashcard lines returned by the model.
///
/// Lines are opaque `question SEP answer` strings; they are trimmed but never
/// parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCards {
    lines: Vec<String>,
}

impl GeneratedCards {
    /// Split a raw completion on newlines and trim every line.
    ///
    /// Empty lines are kept, so blank lines in the response survive as
    /// additional spacing in the note.
    pub fn from_response(response: &str) -> Self {
        let lines = response
            .split('\n')
            .map(|line| line.trim().to_string())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of non-empty lines
    pub fn count(&self) -> usize {
        self.lines.iter().filter(|l| !l.is_empty()).count()
    }

    /// Lines joined with a blank line between entries
    pub fn to_block(&self) -> String {
        self.lines.join("\n\n")
    }
}
