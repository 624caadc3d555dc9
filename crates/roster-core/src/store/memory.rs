//! In-process adapter

use std::cell::{Cell, RefCell};

use super::CharacterStore;
use crate::{Collection, Result};

/// Keeps the collection in memory. Load hands out a copy, so the stored
/// snapshot only changes through [`save`](CharacterStore::save).
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: RefCell<Collection>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection: RefCell::new(collection),
            saves: Cell::new(0),
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn snapshot(&self) -> Collection {
        self.collection.borrow().clone()
    }
}

impl CharacterStore for MemoryStore {
    fn load(&self) -> Result<Collection> {
        Ok(self.snapshot())
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        *self.collection.borrow_mut() = collection.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
