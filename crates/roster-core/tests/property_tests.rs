use proptest::prelude::*;
use roster_core::{
    Character, CharacterPatch, CharacterRepository, CharacterStore, Collection, Error, FACTIONS,
    JsonFileStore, MemoryStore,
};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Default)]
struct CountingSink {
    entries: RefCell<usize>,
}

impl roster_core::AuditSink for CountingSink {
    fn append(&self, _message: &str) -> roster_core::Result<()> {
        *self.entries.borrow_mut() += 1;
        Ok(())
    }
}

fn character() -> impl Strategy<Value = Character> {
    (
        "\\PC{0,24}",
        prop::sample::select(FACTIONS.to_vec()),
        "\\PC{0,16}",
        "\\PC{0,16}",
        "\\PC{0,10}",
    )
        .prop_map(|(name, faction, role, weapon, status)| {
            Character::new(name, faction, role, weapon, status)
        })
}

fn collection() -> impl Strategy<Value = Collection> {
    prop::collection::vec(("\\PC{1,12}", character()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_save_then_load_round_trips(collection in collection()) {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("data.json"));

        store.save(&collection).unwrap();

        prop_assert_eq!(store.load().unwrap(), collection);
    }

    #[test]
    fn test_second_create_always_duplicate(
        key in "\\PC{1,12}".prop_filter("key must not be blank", |k| !k.trim().is_empty()),
        first in character(),
        second in character(),
    ) {
        let repo = CharacterRepository::new(MemoryStore::new(), CountingSink::default());
        repo.create(key.clone(), first.clone()).unwrap();

        let err = repo.create(key.clone(), second).unwrap_err();

        prop_assert!(matches!(err, Error::DuplicateKey { .. }), "got {:?}", err);
        prop_assert_eq!(repo.read(&key).unwrap(), first);
    }

    #[test]
    fn test_unknown_faction_never_accepted(
        faction in "\\PC{0,20}".prop_filter("must not be a registry faction", |f| !FACTIONS.contains(&f.as_str())),
        base in character(),
    ) {
        let repo = CharacterRepository::new(MemoryStore::new(), CountingSink::default());
        repo.create("k", base.clone()).unwrap();
        let snapshot = repo.store().load().unwrap();

        let created = repo.create("other", Character { faction: faction.clone(), ..base.clone() });
        prop_assert!(
            matches!(created, Err(Error::InvalidFaction { .. })),
            "got {:?}",
            created
        );

        // An empty faction in a patch means "keep", so it is not a rejection.
        if !faction.is_empty() {
            let updated = repo.update("k", &CharacterPatch::new().faction(faction).name("changed"));
            prop_assert!(
                matches!(updated, Err(Error::InvalidFaction { .. })),
                "got {:?}",
                updated
            );
        }

        prop_assert_eq!(repo.store().load().unwrap(), snapshot);
        prop_assert_eq!(*repo.audit().entries.borrow(), 1);
    }
}
