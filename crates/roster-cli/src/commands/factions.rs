//! Faction registry listing

use colored::Colorize;
use roster_core::FactionRegistry;

use crate::error::Result;

/// Run the factions command
pub fn run_factions() -> Result<()> {
    let registry = FactionRegistry::new();

    println!("{}", "Factions".bold());
    println!();
    for (position, name) in registry.iter().enumerate() {
        println!("  {:>2}. {}", position + 1, name);
    }
    println!();
    println!(
        "{} Pass a name or its number to {}.",
        "Hint:".dimmed(),
        "--faction".cyan()
    );
    Ok(())
}
