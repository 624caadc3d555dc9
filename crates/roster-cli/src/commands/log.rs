//! Audit log viewer

use colored::Colorize;
use roster_core::{AuditLog, RosterConfig};

use crate::error::Result;

/// Run the log command
pub fn run_log(config: &RosterConfig) -> Result<()> {
    let log = AuditLog::new(config.audit_path());
    let entries = log.entries()?;

    if entries.is_empty() {
        println!("No operations recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{} {}", entry.recorded_at.dimmed(), entry.message);
    }
    Ok(())
}
