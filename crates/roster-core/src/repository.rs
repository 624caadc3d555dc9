//! Character repository
//!
//! Every operation is a full round trip against the store: load the
//! snapshot, validate, mutate, save once, then append one audit entry.
//! Validation happens before anything is written, so a rejected call leaves
//! the persisted collection exactly as it was.
//!
//! Only one process is expected to operate on a data file at a time. Two
//! processes writing concurrently race last-writer-wins.

use tracing::{info, warn};

use crate::audit::{AuditLog, AuditSink};
use crate::config::RosterConfig;
use crate::store::{CharacterStore, JsonFileStore};
use crate::{Character, CharacterPatch, Collection, Error, FactionRegistry, Result};

/// Outcome of a successful mutating operation.
#[derive(Debug)]
pub struct Receipt {
    pub key: String,
    /// The record after the mutation; for a delete, the removed record.
    pub record: Character,
    /// Set when the mutation was saved but could not be written to the audit log.
    pub audit_error: Option<Error>,
}

impl Receipt {
    pub fn audited(&self) -> bool {
        self.audit_error.is_none()
    }
}

/// Create/read/update/delete over a [`CharacterStore`], audited through an
/// [`AuditSink`].
#[derive(Debug)]
pub struct CharacterRepository<S = JsonFileStore, A = AuditLog> {
    store: S,
    audit: A,
    factions: FactionRegistry,
}

impl CharacterRepository {
    /// File-backed repository at the paths named by `config`.
    pub fn open(config: &RosterConfig) -> Self {
        Self::new(
            JsonFileStore::new(config.data_path()),
            AuditLog::new(config.audit_path()),
        )
    }
}

impl<S: CharacterStore, A: AuditSink> CharacterRepository<S, A> {
    pub fn new(store: S, audit: A) -> Self {
        Self {
            store,
            audit,
            factions: FactionRegistry::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }

    /// Add a new character under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyKey`] for a blank key, [`Error::DuplicateKey`] when the
    /// key is taken, [`Error::InvalidFaction`] when the faction is not in the
    /// registry. Nothing is written in those cases.
    pub fn create(&self, key: impl Into<String>, character: Character) -> Result<Receipt> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::EmptyKey);
        }

        let mut collection = self.store.load()?;
        if collection.contains_key(&key) {
            return Err(Error::DuplicateKey { key });
        }
        self.check_faction(&character.faction)?;

        collection.insert(key.clone(), character.clone());
        self.store.save(&collection)?;
        info!(key = %key, "character created");

        let audit_error = self.record(&format!("created: {}", character.name));
        Ok(Receipt {
            key,
            record: character,
            audit_error,
        })
    }

    /// Fetch the character stored under `key`.
    pub fn read(&self, key: &str) -> Result<Character> {
        let mut collection = self.store.load()?;
        collection.remove(key).ok_or_else(|| Error::not_found(key))
    }

    /// Apply `patch` to the character under `key`.
    ///
    /// Fields the patch leaves unset (or sets to an empty string) keep their
    /// value. A supplied faction is validated first; if it is rejected no
    /// field changes. An empty patch still saves and is still audited.
    pub fn update(&self, key: &str, patch: &CharacterPatch) -> Result<Receipt> {
        let mut collection = self.store.load()?;
        let current = collection.get_mut(key).ok_or_else(|| Error::not_found(key))?;
        if let Some(faction) = patch.new_faction() {
            self.check_faction(faction)?;
        }

        let previous_name = current.name.clone();
        patch.apply_to(current);
        let record = current.clone();

        self.store.save(&collection)?;
        info!(key = %key, noop = patch.is_empty(), "character updated");

        let audit_error = self.record(&format!("updated: {previous_name}"));
        Ok(Receipt {
            key: key.to_string(),
            record,
            audit_error,
        })
    }

    /// Soft delete: mark the character as inactive and keep the record.
    pub fn deactivate(&self, key: &str) -> Result<Receipt> {
        let mut collection = self.store.load()?;
        let current = collection.get_mut(key).ok_or_else(|| Error::not_found(key))?;
        current.status = Character::INACTIVE_STATUS.to_string();
        let record = current.clone();

        self.store.save(&collection)?;
        info!(key = %key, "character deactivated");

        let audit_error = self.record(&format!("deactivated: {}", record.name));
        Ok(Receipt {
            key: key.to_string(),
            record,
            audit_error,
        })
    }

    /// Hard delete: remove the key and its record.
    pub fn delete(&self, key: &str) -> Result<Receipt> {
        let mut collection = self.store.load()?;
        let record = collection.remove(key).ok_or_else(|| Error::not_found(key))?;

        self.store.save(&collection)?;
        info!(key = %key, "character deleted");

        let audit_error = self.record(&format!("deleted: {}", record.name));
        Ok(Receipt {
            key: key.to_string(),
            record,
            audit_error,
        })
    }

    /// Full snapshot in insertion order.
    pub fn list(&self) -> Result<Collection> {
        self.store.load()
    }

    fn check_faction(&self, faction: &str) -> Result<()> {
        if self.factions.is_valid(faction) {
            Ok(())
        } else {
            Err(Error::InvalidFaction {
                faction: faction.to_string(),
            })
        }
    }

    fn record(&self, message: &str) -> Option<Error> {
        match self.audit.append(message) {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, audit_message = message, "audit entry not recorded");
                Some(e)
            }
        }
    }
}
