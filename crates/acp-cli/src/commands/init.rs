//! Init command implementation
//!
//! Writes a starter manifest a new agent project can edit down.

use std::path::Path;

use colored::Colorize;

use acp_loader::write_manifest;
use acp_manifest::{builtin, validation};

use crate::error::{CliError, Result};

/// Run the init command
///
/// Writes the bundled ArgoCD agent document to `path`. When `name` is
/// given the agent is renamed before writing; the name must pass the
/// usual manifest naming rules.
pub fn run_init(path: &Path, name: Option<&str>, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::user(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut manifest = builtin::agent_argocd()?;
    if let Some(name) = name {
        validation::validate_name(name)?;
        manifest.name = name.to_string();
    }

    write_manifest(path, &manifest)?;

    println!(
        "{} wrote {} for {}",
        "OK".green().bold(),
        path.display().to_string().cyan(),
        manifest.name
    );
    Ok(())
}
