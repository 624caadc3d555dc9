//! Storage location resolution
//!
//! Precedence, lowest to highest: built-in defaults, `roster.toml` in the
//! working directory (or the file named by `--config`), then the `--data`
//! and `--audit-log` overrides.

use std::path::{Path, PathBuf};

use roster_core::{CONFIG_FILE_NAME, RosterConfig};

use crate::error::{CliError, Result};

/// Path overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverrides {
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub audit_log: Option<PathBuf>,
}

/// Build the effective configuration for a command run from `cwd`.
pub fn resolve_config(cwd: &Path, overrides: &PathOverrides) -> Result<RosterConfig> {
    let mut config = match &overrides.config {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(CliError::user(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            RosterConfig::load(&path)?
        }
        None => RosterConfig::load(&cwd.join(CONFIG_FILE_NAME))?,
    };

    if let Some(data) = &overrides.data {
        config = config.with_data_file(cwd.join(data));
    }
    if let Some(audit_log) = &overrides.audit_log {
        config = config.with_audit_log(cwd.join(audit_log));
    }

    tracing::debug!(
        data = %config.data_path().display(),
        audit_log = %config.audit_path().display(),
        "resolved storage paths"
    );
    Ok(config)
}
