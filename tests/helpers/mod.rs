use anyhow::{Context, Result};
use flashcards_llm::domain::Settings;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for a temporary folder of markdown notes
#[allow(dead_code)]
pub struct TestVault {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestVault {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()
            .context("Failed to create temporary directory")?;
        let root = temp_dir.path().to_path_buf();

        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    /// Write a note relative to the vault root, creating folders as needed
    pub fn add_note(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create note folder")?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn read_note(&self, relative: &str) -> Result<String> {
        read(&self.root.join(relative))
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Settings with a dummy key and plugin defaults
#[allow(dead_code)]
pub fn test_settings() -> Settings {
    Settings {
        api_key: "sk-test".to_string(),
        ..Default::default()
    }
}

/// Known note bodies
#[allow(dead_code)]
pub mod notes {
    pub const TAGGED: &str = "# Chemistry\n\nWater is H2O. #generate\n";
    pub const UNTAGGED: &str = "# History\n\nRome was not built in a day.\n";
    pub const WITH_COMMENT: &str = "# Physics #generate\n<!--private remark-->\nF = m * a\n";
}
