//! Validate command implementation

use std::path::Path;

use colored::Colorize;

use acp_loader::load_manifest;

use crate::commands::env::{build_snapshot, print_env_report};
use crate::error::Result;

/// Run the validate command
///
/// Loading already runs the full validation pass, so reaching the success
/// message means the document parsed, the required fields are present, and
/// the contract schemas are well-formed. With `check_env` the declared
/// environment variables are resolved afterwards.
pub fn run_validate(manifest_path: &Path, check_env: bool, env_file: Option<&Path>) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;

    println!(
        "{} {} {} is a valid agent manifest",
        "OK".green().bold(),
        manifest.name.cyan(),
        format!("v{}", manifest.version).dimmed()
    );

    if check_env {
        let snapshot = build_snapshot(env_file)?;
        let report = acp_loader::check_manifest_env(&manifest, &snapshot)?;
        print_env_report(&report);
        report.ensure_required()?;
    }

    Ok(())
}
