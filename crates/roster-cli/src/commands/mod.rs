//! Command implementations for roster-cli

pub mod character;
pub mod factions;
pub mod log;
pub mod report;

pub use character::{run_create, run_deactivate, run_delete, run_list, run_show, run_update};
pub use factions::run_factions;
pub use log::run_log;
pub use report::run_report;

use colored::Colorize;
use roster_core::Receipt;

/// Surface an audit failure without failing the command: the change itself
/// was saved.
fn warn_unaudited(receipt: &Receipt) {
    if let Some(e) = &receipt.audit_error {
        eprintln!(
            "{} change saved but not recorded in the audit log: {}",
            "warning:".yellow().bold(),
            e
        );
    }
}
