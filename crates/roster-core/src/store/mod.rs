//! Persistence adapters
//!
//! A [`CharacterStore`] loads and saves the whole [`Collection`] in one
//! round trip. Nothing is cached between calls: the backing medium is the
//! source of truth between repository operations.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::{Collection, Result};

/// Whole-collection persistence.
pub trait CharacterStore {
    /// Load the full collection. A store that has never been saved to
    /// yields an empty collection.
    fn load(&self) -> Result<Collection>;

    /// Replace the persisted collection with `collection`.
    ///
    /// On error the previously persisted collection must still be intact.
    fn save(&self, collection: &Collection) -> Result<()>;
}

impl<S: CharacterStore + ?Sized> CharacterStore for &S {
    fn load(&self) -> Result<Collection> {
        (**self).load()
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        (**self).save(collection)
    }
}
