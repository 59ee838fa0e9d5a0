// src/infrastructure/note_store.rs
use crate::application::NoteStore;
use crate::constants::NOTE_EXTENSION;
use crate::domain::DomainError;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Notes as markdown files on the local file system
#[derive(Debug, Default, Clone)]
pub struct FsNoteStore;

impl FsNoteStore {
    pub fn new() -> Self {
        Self
    }
}

fn is_note(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(NOTE_EXTENSION)
}

impl NoteStore for FsNoteStore {
    fn read(&self, path: &Path) -> Result<String, DomainError> {
        std::fs::read_to_string(path)
            .map_err(|e| DomainError::Store(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<(), DomainError> {
        trace!(?path, bytes = text.len(), "Writing note");
        std::fs::write(path, text)
            .map_err(|e| DomainError::Store(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn list_notes(&self, folder: &Path, recursive: bool) -> Result<Vec<PathBuf>, DomainError> {
        if !folder.is_dir() {
            return Err(DomainError::Store(format!(
                "Path is not a directory: {}",
                folder.display()
            )));
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut notes = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && is_note(path) {
                notes.push(path.to_path_buf());
            }
        }

        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_markdown_file_when_reading_then_returns_content() {
        // Create temp file
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.md");

        let content = "# Test\n\nSome content #generate";
        fs::write(&file_path, content).unwrap();

        // Read file
        let result = FsNoteStore::new().read(&file_path).unwrap();

        assert_eq!(result, content);
    }

    #[test]
    fn given_file_with_comments_when_reading_then_preserves_them() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.md");

        let content = "<!--hidden-->\nVisible";
        fs::write(&file_path, content).unwrap();

        let result = FsNoteStore::new().read(&file_path).unwrap();

        assert_eq!(result, content);
    }

    #[test]
    fn given_nonexistent_file_when_reading_then_returns_error() {
        let result = FsNoteStore::new().read(Path::new("/nonexistent/path/file.md"));

        assert!(matches!(result, Err(DomainError::Store(_))));
    }

    #[test]
    fn given_text_when_writing_then_replaces_file_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("note.md");
        fs::write(&file_path, "old").unwrap();

        FsNoteStore::new().write(&file_path, "new").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
    }

    #[test]
    fn given_mixed_folder_when_listing_then_returns_sorted_markdown_children() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.md"), "b").unwrap();
        fs::write(temp_dir.path().join("a.md"), "a").unwrap();
        fs::write(temp_dir.path().join("image.png"), "png").unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("sub/c.md"), "c").unwrap();

        // Act
        let notes = FsNoteStore::new()
            .list_notes(temp_dir.path(), false)
            .unwrap();

        // Assert
        assert_eq!(
            notes,
            vec![temp_dir.path().join("a.md"), temp_dir.path().join("b.md")]
        );
    }

    #[test]
    fn given_nested_folder_when_listing_recursively_then_includes_subfolders() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.md"), "a").unwrap();
        fs::create_dir_all(temp_dir.path().join("sub/deeper")).unwrap();
        fs::write(temp_dir.path().join("sub/deeper/c.md"), "c").unwrap();

        let notes = FsNoteStore::new().list_notes(temp_dir.path(), true).unwrap();

        assert_eq!(notes.len(), 2);
        assert!(notes.contains(&temp_dir.path().join("sub/deeper/c.md")));
    }

    #[test]
    fn given_file_path_when_listing_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("note.md");
        fs::write(&file_path, "x").unwrap();

        let result = FsNoteStore::new().list_notes(&file_path, false);

        assert!(result.is_err());
    }
}
