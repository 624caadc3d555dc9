//! Report rendering

use std::path::Path;

use colored::Colorize;
use roster_core::{CharacterRepository, RosterConfig, report};

use crate::cli::ReportKind;
use crate::error::{CliError, Result};

/// Run the report command
///
/// Relative `--output` and `show` paths are taken from the working directory.
pub fn run_report(config: &RosterConfig, cwd: &Path, kind: ReportKind) -> Result<()> {
    let snapshot = || CharacterRepository::open(config).list();

    match kind {
        ReportKind::Table => print!("{}", report::render_table(&snapshot()?)),
        ReportKind::Factions => {
            let collection = snapshot()?;
            if collection.is_empty() {
                println!("No characters registered.");
            } else {
                print!("{}", report::render_faction_counts(&collection));
            }
        }
        ReportKind::Active { output: None } => print!("{}", report::render_active(&snapshot()?)),
        ReportKind::Active {
            output: Some(output),
        } => {
            let path = cwd.join(output);
            roster_fs::write_text(&path, &report::render_active(&snapshot()?))?;
            println!(
                "{} Report written to {}.",
                "OK".green().bold(),
                path.display().to_string().cyan()
            );
        }
        ReportKind::Show { file } => show_report_file(cwd, &file)?,
    }
    Ok(())
}

fn show_report_file(cwd: &Path, file: &Path) -> Result<()> {
    let path = cwd.join(file);
    let Some(content) = roster_fs::read_text_optional(&path)? else {
        return Err(CliError::user(format!(
            "Report not found: {}. Write it first with `roster report active --output {}`.",
            path.display(),
            file.display()
        )));
    };

    println!("{}", format!("=== {} ===", file.display()).bold());
    print!("{content}");
    Ok(())
}
