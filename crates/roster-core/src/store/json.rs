//! JSON file adapter

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use super::CharacterStore;
use crate::{Collection, Error, Result};

/// Stores the collection as a single pretty-printed JSON object.
///
/// The layout matches legacy catalog files: four-space indentation,
/// non-ASCII text written verbatim, no trailing newline. Saves go through
/// [`roster_fs::write_atomic`], so a failed save leaves the previous file
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize a collection to the exact bytes written by [`save`](CharacterStore::save).
    pub fn encode(collection: &Collection) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        collection.serialize(&mut serializer)?;
        Ok(buf)
    }

    fn corrupt(&self, message: impl ToString) -> Error {
        Error::CorruptStore {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

impl CharacterStore for JsonFileStore {
    fn load(&self) -> Result<Collection> {
        let content = match roster_fs::read_text_optional(&self.path) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!(path = %self.path.display(), "data file absent, starting empty");
                return Ok(Collection::new());
            }
            Err(roster_fs::Error::Io { source, .. }) if source.kind() == ErrorKind::InvalidData => {
                return Err(self.corrupt(source));
            }
            Err(e) => return Err(e.into()),
        };

        let collection: Collection =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;
        debug!(path = %self.path.display(), records = collection.len(), "loaded characters");
        Ok(collection)
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        let bytes = Self::encode(collection)?;
        roster_fs::write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), records = collection.len(), "saved characters");
        Ok(())
    }
}
