//! Create, show, update, deactivate, delete and list characters

use colored::Colorize;
use roster_core::{
    Character, CharacterPatch, CharacterRepository, FactionRegistry, RosterConfig, report,
};

use super::warn_unaudited;
use crate::cli::{CreateFields, UpdateFields};
use crate::error::Result;

/// Map a registry number to its faction name. Anything else is passed
/// through unchanged so the repository can reject it.
fn resolve_faction(input: String) -> String {
    match FactionRegistry::new().resolve(&input) {
        Some(name) => name.to_string(),
        None => input,
    }
}

/// Run the create command
pub fn run_create(config: &RosterConfig, key: String, fields: CreateFields) -> Result<()> {
    let repo = CharacterRepository::open(config);
    let character = Character::new(
        fields.name,
        resolve_faction(fields.faction),
        fields.role,
        fields.weapon,
        fields.status,
    );

    let receipt = repo.create(key, character)?;
    println!(
        "{} Character {} created.",
        "OK".green().bold(),
        receipt.key.cyan()
    );
    warn_unaudited(&receipt);
    Ok(())
}

/// Run the show command
pub fn run_show(config: &RosterConfig, key: &str) -> Result<()> {
    let repo = CharacterRepository::open(config);
    let character = repo.read(key)?;

    println!("{}", key.cyan().bold());
    println!("  {:<8} {}", "Name:".dimmed(), character.name);
    println!("  {:<8} {}", "Faction:".dimmed(), character.faction);
    println!("  {:<8} {}", "Role:".dimmed(), character.role);
    println!("  {:<8} {}", "Weapon:".dimmed(), character.weapon);
    println!("  {:<8} {}", "Status:".dimmed(), character.status);
    Ok(())
}

/// Run the update command
pub fn run_update(config: &RosterConfig, key: &str, fields: UpdateFields) -> Result<()> {
    let repo = CharacterRepository::open(config);
    let patch = CharacterPatch {
        name: fields.name,
        faction: fields.faction.map(resolve_faction),
        role: fields.role,
        weapon: fields.weapon,
        status: fields.status,
    };
    if patch.is_empty() {
        tracing::debug!(key, "update without changes");
    }

    let receipt = repo.update(key, &patch)?;
    println!(
        "{} Character {} updated.",
        "OK".green().bold(),
        receipt.key.cyan()
    );
    warn_unaudited(&receipt);
    Ok(())
}

/// Run the deactivate command
pub fn run_deactivate(config: &RosterConfig, key: &str) -> Result<()> {
    let repo = CharacterRepository::open(config);
    let receipt = repo.deactivate(key)?;
    println!(
        "{} Character {} marked {}.",
        "OK".green().bold(),
        receipt.key.cyan(),
        receipt.record.status
    );
    warn_unaudited(&receipt);
    Ok(())
}

/// Run the delete command
pub fn run_delete(config: &RosterConfig, key: &str) -> Result<()> {
    let repo = CharacterRepository::open(config);
    let receipt = repo.delete(key)?;
    println!(
        "{} Character {} deleted.",
        "OK".green().bold(),
        receipt.key.cyan()
    );
    warn_unaudited(&receipt);
    Ok(())
}

/// Run the list command
pub fn run_list(config: &RosterConfig, json: bool) -> Result<()> {
    let repo = CharacterRepository::open(config);
    let collection = repo.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&collection)?);
        return Ok(());
    }

    if collection.is_empty() {
        println!("No characters registered.");
        return Ok(());
    }

    print!("{}", report::render_summary(&collection));
    println!();
    println!("{} {} characters.", "Total:".dimmed(), collection.len());
    Ok(())
}
