//! Core record repository for Roster
//!
//! This crate implements the character catalog:
//!
//! - **Faction registry**: the closed set of valid factions
//! - **Data model**: [`Character`], [`CharacterPatch`] and the ordered [`Collection`]
//! - **Persistence**: [`CharacterStore`] adapters, with atomic whole-file saves
//! - **Audit log**: append-only, timestamped trail of mutations
//! - **Repository**: validated create/read/update/deactivate/delete
//! - **Reports**: pure renderings of a snapshot
//!
//! # Architecture
//!
//! ```text
//!                 roster-cli
//!                     |
//!               roster-core
//!     +-------+-------+--------+-------+
//!     |       |       |        |       |
//!  faction  store   audit   report  config
//!             \       /
//!             roster-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use roster_core::{Character, CharacterRepository, RosterConfig};
//!
//! fn example() -> roster_core::Result<()> {
//!     let repo = CharacterRepository::open(&RosterConfig::default());
//!     repo.create(
//!         "Guilliman",
//!         Character::new("Roboute Guilliman", "Ultramarines", "Primarca", "Espada del Emperador", "Activo"),
//!     )?;
//!     let guilliman = repo.read("Guilliman")?;
//!     assert_eq!(guilliman.faction, "Ultramarines");
//!     Ok(())
//! }
//! ```

pub mod audit;
pub mod character;
pub mod collection;
pub mod config;
pub mod error;
pub mod faction;
pub mod report;
pub mod repository;
pub mod store;

pub use audit::{AuditEntry, AuditLog, AuditSink};
pub use character::{Character, CharacterPatch};
pub use collection::Collection;
pub use config::{CONFIG_FILE_NAME, RosterConfig, StorageSection};
pub use error::{Error, Result};
pub use faction::{FACTIONS, FactionRegistry};
pub use repository::{CharacterRepository, Receipt};
pub use store::{CharacterStore, JsonFileStore, MemoryStore};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn corrupt_store_error_displays_path() {
        let error = Error::CorruptStore {
            path: PathBuf::from("/data/Archivos_administratum.json"),
            message: "expected value at line 1 column 1".to_string(),
        };

        let display = error.to_string();
        assert!(
            display.contains("/data/Archivos_administratum.json"),
            "Error display should contain the path, got: {}",
            display
        );
        assert!(display.contains("line 1"), "got: {}", display);
    }
}
