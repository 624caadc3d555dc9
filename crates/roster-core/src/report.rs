//! Read-only reports over a collection snapshot
//!
//! Every function here is a pure rendering of its input.

use std::fmt::Write;

use crate::Collection;

const RULE_WIDTH: usize = 100;

/// One line per character: `key: name (faction) - Status: status`.
pub fn render_summary(collection: &Collection) -> String {
    let mut out = String::new();
    for (key, c) in collection.iter() {
        let _ = writeln!(out, "{}: {} ({}) - Status: {}", key, c.name, c.faction, c.status);
    }
    out
}

/// Fixed-width table of every field.
pub fn render_table(collection: &Collection) -> String {
    let mut out = String::new();
    let rule = "-".repeat(RULE_WIDTH);

    let _ = writeln!(
        out,
        "{:<12} {:<25} {:<18} {:<15} {:<20} {:<10}",
        "Key", "Name", "Faction", "Role", "Weapon", "Status"
    );
    let _ = writeln!(out, "{rule}");
    for (key, c) in collection.iter() {
        let _ = writeln!(
            out,
            "{:<12} {:<25} {:<18} {:<15} {:<20} {:<10}",
            key, c.name, c.faction, c.role, c.weapon, c.status
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Number of characters per faction, in order of first appearance.
pub fn faction_counts(collection: &Collection) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for c in collection.values() {
        match counts.iter_mut().find(|(faction, _)| *faction == c.faction) {
            Some((_, n)) => *n += 1,
            None => counts.push((c.faction.clone(), 1)),
        }
    }
    counts
}

pub fn render_faction_counts(collection: &Collection) -> String {
    let mut out = String::new();
    for (faction, count) in faction_counts(collection) {
        let _ = writeln!(out, "{faction}: {count}");
    }
    out
}

/// Names of characters whose status counts as active.
pub fn active_names(collection: &Collection) -> Vec<&str> {
    collection
        .values()
        .filter(|c| c.is_active())
        .map(|c| c.name.as_str())
        .collect()
}

/// Active-character report, suitable for writing to a file.
pub fn render_active(collection: &Collection) -> String {
    let mut out = String::from("=== Active Characters ===\n");
    for name in active_names(collection) {
        let _ = writeln!(out, "- {name}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Character;
    use pretty_assertions::assert_eq;

    fn sample() -> Collection {
        [
            (
                "Guilliman",
                Character::new(
                    "Roboute Guilliman",
                    "Ultramarines",
                    "Primarca",
                    "Espada",
                    "Activo",
                ),
            ),
            (
                "Ghaz",
                Character::new("Ghazghkull", "Orkos", "Warboss", "Klaw", "Inactive"),
            ),
            (
                "Calgar",
                Character::new(
                    "Marneus Calgar",
                    "Ultramarines",
                    "Chapter Master",
                    "Gauntlets",
                    "Vivo",
                ),
            ),
        ]
        .into_iter()
        .map(|(k, c)| (k.to_string(), c))
        .collect()
    }

    #[test]
    fn summary_has_one_line_per_character() {
        let summary = render_summary(&sample());
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Guilliman: Roboute Guilliman (Ultramarines) - Status: Activo"
        );
    }

    #[test]
    fn table_columns_are_fixed_width() {
        let table = render_table(&sample());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "-".repeat(100));
        assert_eq!(lines[5], "-".repeat(100));
        assert!(lines[0].starts_with("Key          Name                      Faction"));
        assert_eq!(&lines[2][..13], "Guilliman    ");
        assert_eq!(&lines[2][13..39], "Roboute Guilliman         ");
    }

    #[test]
    fn counts_follow_first_appearance() {
        assert_eq!(
            faction_counts(&sample()),
            vec![("Ultramarines".to_string(), 2), ("Orkos".to_string(), 1)]
        );
        assert_eq!(
            render_faction_counts(&sample()),
            "Ultramarines: 2\nOrkos: 1\n"
        );
    }

    #[test]
    fn active_report_lists_active_names() {
        assert_eq!(active_names(&sample()), vec!["Roboute Guilliman", "Marneus Calgar"]);
        assert_eq!(
            render_active(&sample()),
            "=== Active Characters ===\n- Roboute Guilliman\n- Marneus Calgar\n"
        );
    }

    #[test]
    fn empty_collection_renders_headers_only() {
        let empty = Collection::new();
        assert_eq!(render_summary(&empty), "");
        assert_eq!(render_table(&empty).lines().count(), 3);
        assert!(faction_counts(&empty).is_empty());
        assert_eq!(render_active(&empty), "=== Active Characters ===\n");
    }
}
