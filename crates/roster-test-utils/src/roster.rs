//! [`TestRoster`] fixture for repository scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use roster_core::{AuditLog, Character, CharacterRepository, JsonFileStore, RosterConfig};
use tempfile::TempDir;

/// Data file name used inside the fixture directory.
pub const DATA_FILE: &str = "Archivos_administratum.json";

/// Audit log name used inside the fixture directory.
pub const AUDIT_FILE: &str = "log.txt";

/// A temporary directory holding a data file and an audit log.
///
/// # Example
///
/// ```rust,no_run
/// use roster_test_utils::TestRoster;
///
/// let roster = TestRoster::new();
/// roster.repository().create("Guilliman", TestRoster::guilliman()).unwrap();
/// roster.assert_data_contains("\"nombre\": \"Roboute Guilliman\"");
/// assert_eq!(roster.audit_lines().len(), 1);
/// ```
pub struct TestRoster {
    temp_dir: TempDir,
}

impl Default for TestRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoster {
    /// Create an empty temporary directory. No data file exists yet.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_path(&self) -> PathBuf {
        self.root().join(DATA_FILE)
    }

    pub fn audit_path(&self) -> PathBuf {
        self.root().join(AUDIT_FILE)
    }

    /// Configuration pointing at this fixture's files.
    pub fn config(&self) -> RosterConfig {
        RosterConfig::default()
            .with_data_file(self.data_path())
            .with_audit_log(self.audit_path())
    }

    /// A fresh file-backed repository over this fixture.
    pub fn repository(&self) -> CharacterRepository<JsonFileStore, AuditLog> {
        CharacterRepository::open(&self.config())
    }

    /// Overwrite the data file with raw content.
    pub fn write_data(&self, content: &str) {
        fs::write(self.data_path(), content)
            .unwrap_or_else(|e| panic!("TestRoster::write_data: {e}"));
    }

    /// Raw data file content.
    ///
    /// # Panics
    /// Panics if the data file does not exist.
    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data_path())
            .unwrap_or_else(|e| panic!("TestRoster::read_data: {e}"))
    }

    pub fn data_exists(&self) -> bool {
        self.data_path().exists()
    }

    /// Audit log lines, or an empty list when no entry was written yet.
    pub fn audit_lines(&self) -> Vec<String> {
        match fs::read_to_string(self.audit_path()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Assert that the data file contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_data_contains(&self, content: &str) {
        let data = self.read_data();
        assert!(
            data.contains(content),
            "Data file does not contain expected content.\nExpected: {}\nActual: {}",
            content,
            data
        );
    }

    /// The record used throughout the scenarios.
    pub fn guilliman() -> Character {
        Character::new(
            "Roboute Guilliman",
            "Ultramarines",
            "Primarca",
            "Espada del Emperador",
            "Activo",
        )
    }
}
