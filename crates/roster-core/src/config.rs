//! Configuration parsing for roster.toml
//!
//! ```toml
//! [storage]
//! data_file = "Archivos_administratum.json"
//! audit_log = "log.txt"
//! ```
//!
//! Every key is optional. Relative paths are resolved against the directory
//! the configuration was loaded from.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "roster.toml";

fn default_data_file() -> PathBuf {
    PathBuf::from("Archivos_administratum.json")
}

fn default_audit_log() -> PathBuf {
    PathBuf::from("log.txt")
}

/// Storage locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSection {
    /// JSON file holding the character collection
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Append-only audit log
    #[serde(default = "default_audit_log")]
    pub audit_log: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            audit_log: default_audit_log(),
        }
    }
}

/// Parsed roster.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub storage: StorageSection,
}

impl RosterConfig {
    /// Parse configuration from TOML content.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_core::RosterConfig;
    ///
    /// let config = RosterConfig::parse(r#"
    /// [storage]
    /// data_file = "characters.json"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.data_path(), std::path::Path::new("characters.json"));
    /// assert_eq!(config.audit_path(), std::path::Path::new("log.txt"));
    /// ```
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. Relative storage paths are resolved against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let Some(content) = roster_fs::read_text_optional(path)? else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default().resolve(base));
        };

        let config = Self::parse(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config.resolve(base))
    }

    /// Make relative storage paths relative to `base`.
    pub fn resolve(mut self, base: &Path) -> Self {
        self.storage.data_file = base.join(&self.storage.data_file);
        self.storage.audit_log = base.join(&self.storage.audit_log);
        self
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage.data_file = path.into();
        self
    }

    pub fn with_audit_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage.audit_log = path.into();
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.storage.data_file
    }

    pub fn audit_path(&self) -> &Path {
        &self.storage.audit_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty_config_uses_default_file_names() {
        let config = RosterConfig::parse("").unwrap();
        assert_eq!(config.data_path(), Path::new("Archivos_administratum.json"));
        assert_eq!(config.audit_path(), Path::new("log.txt"));
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let config = RosterConfig::default()
            .with_data_file("/srv/roster/data.json")
            .resolve(Path::new("/etc/roster"));
        assert_eq!(config.data_path(), Path::new("/srv/roster/data.json"));
        assert_eq!(config.audit_path(), Path::new("/etc/roster/log.txt"));
    }

    #[test]
    fn load_missing_file_resolves_defaults_next_to_it() {
        let dir = tempdir().unwrap();
        let config = RosterConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(
            config.data_path(),
            dir.path().join("Archivos_administratum.json")
        );
    }

    #[test]
    fn load_reads_storage_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[storage]\ndata_file = \"data/characters.json\"\naudit_log = \"audit.log\"\n",
        )
        .unwrap();

        let config = RosterConfig::load(&path).unwrap();
        assert_eq!(config.data_path(), dir.path().join("data/characters.json"));
        assert_eq!(config.audit_path(), dir.path().join("audit.log"));
    }

    #[test]
    fn malformed_config_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[storage\n").unwrap();

        let err = RosterConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }), "got: {:?}", err);
    }
}
