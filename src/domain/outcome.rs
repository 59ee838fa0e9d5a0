// src/domain/outcome.rs
use std::path::PathBuf;

/// Result of one processing pass over a single note
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    /// Marker tag absent, note untouched
    Skipped { path: PathBuf },
    /// Cards appended and marker removed
    Generated { path: PathBuf, cards: usize },
    /// Generation or I/O failed, marker left in place
    Failed { path: PathBuf, reason: String },
}

impl NoteOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            NoteOutcome::Skipped { path }
            | NoteOutcome::Generated { path, .. }
            | NoteOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, NoteOutcome::Generated { .. })
    }
}
