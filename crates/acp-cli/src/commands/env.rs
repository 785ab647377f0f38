//! Environment checking command

use std::path::Path;

use colored::Colorize;

use acp_loader::{EnvReport, EnvSnapshot, check_manifest_env, load_manifest};

use crate::error::Result;

/// Build the snapshot used for environment checks: the process
/// environment, optionally backfilled from a dotenv file. Process
/// variables always win over file entries.
pub fn build_snapshot(env_file: Option<&Path>) -> Result<EnvSnapshot> {
    let snapshot = EnvSnapshot::from_process();
    match env_file {
        Some(path) => Ok(snapshot.merge_env_file(path)?),
        None => Ok(snapshot),
    }
}

/// Run the check-env command
pub fn run_check_env(manifest_path: &Path, env_file: Option<&Path>) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;
    let snapshot = build_snapshot(env_file)?;
    let report = check_manifest_env(&manifest, &snapshot)?;

    print_env_report(&report);
    report.ensure_required()?;

    println!(
        "{} environment satisfies {}",
        "OK".green().bold(),
        manifest.name.cyan()
    );
    Ok(())
}

/// Print one line per declared variable
pub fn print_env_report(report: &EnvReport) {
    for name in &report.present {
        println!("  {} {}", "+".green(), name);
    }
    for name in &report.missing_optional {
        println!(
            "  {} {} {}",
            "-".yellow(),
            name,
            "(optional, unset)".dimmed()
        );
    }
    for name in &report.missing_required {
        println!("  {} {} {}", "x".red(), name, "(required, unset)".red());
    }
}
