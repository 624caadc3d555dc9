//! Faction registry
//!
//! The closed, ordered set of factions a character may belong to. The set
//! is fixed at compile time and never mutated.

/// Every valid faction, in display order.
pub const FACTIONS: [&str; 31] = [
    "Ultramarines",
    "Black Legion",
    "Aeldari",
    "Orkos",
    "Necrones",
    "Imperial Fists",
    "Blood Angels",
    "Dark Angels",
    "Space Wolves",
    "Iron Hands",
    "Salamanders",
    "Raven Guard",
    "White Scars",
    "Death Guard",
    "Thousand Sons",
    "World Eaters",
    "Emperor's Children",
    "Tau Empire",
    "Tyranids",
    "Drukhari",
    "Craftworld Eldar",
    "Harlequins",
    "Ynnari",
    "Chaos Space Marines",
    "Daemons",
    "Imperial Guard",
    "Adeptus Mechanicus",
    "Sisters of Battle",
    "Grey Knights",
    "Deathwatch",
    "Custodes",
];

/// Membership and enumeration queries over [`FACTIONS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FactionRegistry;

impl FactionRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Exact, case-sensitive membership check.
    pub fn is_valid(&self, name: &str) -> bool {
        FACTIONS.contains(&name)
    }

    /// Iterate over all factions in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + Clone {
        FACTIONS.iter().copied()
    }

    pub fn len(&self) -> usize {
        FACTIONS.len()
    }

    pub fn is_empty(&self) -> bool {
        FACTIONS.is_empty()
    }

    /// Look up a faction by its 1-based position.
    pub fn get(&self, position: usize) -> Option<&'static str> {
        position
            .checked_sub(1)
            .and_then(|idx| FACTIONS.get(idx))
            .copied()
    }

    /// Resolve user input that is either a faction name or its 1-based
    /// position in the registry.
    pub fn resolve(&self, input: &str) -> Option<&'static str> {
        let input = input.trim();
        if let Some(name) = self.iter().find(|f| *f == input) {
            return Some(name);
        }
        input.parse::<usize>().ok().and_then(|n| self.get(n))
    }
}
