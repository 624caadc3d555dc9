//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Roster - Manage a catalog of characters and their factions
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./roster.toml when present)
    #[arg(long, global = true, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Character data file, overriding the configuration
    #[arg(long, global = true, env = "ROSTER_DATA")]
    pub data: Option<PathBuf>,

    /// Audit log file, overriding the configuration
    #[arg(long, global = true, env = "ROSTER_AUDIT_LOG")]
    pub audit_log: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a new character
    ///
    /// Examples:
    ///   roster create Guilliman --name "Roboute Guilliman" --faction Ultramarines \
    ///       --role Primarca --weapon "Espada del Emperador"
    ///   roster create Trazyn --name "Trazyn" --faction 5 --role Archeologist --weapon Staff
    Create {
        /// Unique key for the character
        key: String,

        #[command(flatten)]
        fields: CreateFields,
    },

    /// Show one character
    Show {
        /// Character key
        key: String,
    },

    /// Update fields of a character; omitted fields keep their value
    Update {
        /// Character key
        key: String,

        #[command(flatten)]
        fields: UpdateFields,
    },

    /// Mark a character as inactive without removing it
    Deactivate {
        /// Character key
        key: String,
    },

    /// Permanently remove a character
    Delete {
        /// Character key
        key: String,
    },

    /// List all characters
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print a report
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },

    /// List valid factions with their numbers
    Factions,

    /// Show the audit log
    Log,
}

/// Fields required to create a character
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CreateFields {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Faction name or its number from `roster factions`
    #[arg(long)]
    pub faction: String,

    /// Role
    #[arg(long)]
    pub role: String,

    /// Weapon
    #[arg(long)]
    pub weapon: String,

    /// Status
    #[arg(long, default_value = roster_core::Character::DEFAULT_STATUS)]
    pub status: String,
}

/// Optional replacements for an existing character
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFields {
    /// New full name
    #[arg(long)]
    pub name: Option<String>,

    /// New faction name or number
    #[arg(long)]
    pub faction: Option<String>,

    /// New role
    #[arg(long)]
    pub role: Option<String>,

    /// New weapon
    #[arg(long)]
    pub weapon: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,
}

/// Report variants
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    /// Every field of every character as a fixed-width table
    Table,

    /// Number of characters per faction
    Factions,

    /// Names of active characters
    Active {
        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a report file written earlier with `report active --output`
    Show {
        /// Report file to read
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_defaults_status() {
        let cli = Cli::try_parse_from([
            "roster", "create", "Guilliman", "--name", "Roboute Guilliman", "--faction",
            "Ultramarines", "--role", "Primarca", "--weapon", "Espada",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Create { key, fields }) => {
                assert_eq!(key, "Guilliman");
                assert_eq!(fields.status, "Active");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_update_with_partial_fields() {
        let cli = Cli::try_parse_from(["roster", "update", "Guilliman", "--status", "Inactive"])
            .unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Update {
                key: "Guilliman".to_string(),
                fields: UpdateFields {
                    status: Some("Inactive".to_string()),
                    ..UpdateFields::default()
                },
            })
        );
    }

    #[test]
    fn parse_global_paths_after_subcommand() {
        let cli =
            Cli::try_parse_from(["roster", "list", "--data", "/tmp/x.json", "--json"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x.json")));
        assert_eq!(cli.command, Some(Commands::List { json: true }));
    }

    #[test]
    fn parse_report_show() {
        let cli = Cli::try_parse_from(["roster", "report", "show", "active.txt"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Report {
                kind: ReportKind::Show {
                    file: PathBuf::from("active.txt"),
                },
            })
        );
    }

    #[test]
    fn create_requires_fields() {
        assert!(Cli::try_parse_from(["roster", "create", "Guilliman"]).is_err());
    }
}
