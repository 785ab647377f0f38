//! Manifest display commands

use std::path::Path;

use colored::Colorize;

use acp_loader::load_manifest;

use crate::cli::SchemaBlock;
use crate::error::Result;

/// Display a summary of a manifest
pub fn run_show(manifest_path: &Path, json: bool) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;
    let runtime = manifest.runtime()?;

    if json {
        let required: Vec<&str> = runtime
            .deployment
            .env_vars
            .iter()
            .filter(|v| v.required)
            .map(|v| v.name.as_str())
            .collect();
        let optional: Vec<&str> = runtime
            .deployment
            .env_vars
            .iter()
            .filter(|v| !v.required)
            .map(|v| v.name.as_str())
            .collect();

        let output = serde_json::json!({
            "name": manifest.name,
            "version": manifest.version,
            "schema_version": manifest.schema_version,
            "description": manifest.description,
            "authors": manifest.authors,
            "locators": manifest.locators,
            "deployment_options": runtime
                .deployment
                .deployment_options
                .iter()
                .map(|o| o.kind())
                .collect::<Vec<_>>(),
            "env_vars": {
                "required": required,
                "optional": optional,
            },
            "capabilities": runtime.acp.capabilities,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{}", "Agent Manifest".bold());
    println!();

    println!("  {:<12} {}", "Name:".dimmed(), manifest.name);
    println!("  {:<12} {}", "Version:".dimmed(), manifest.version);
    println!("  {:<12} {}", "Schema:".dimmed(), manifest.schema_version);
    if let Some(description) = &manifest.description {
        println!("  {:<12} {}", "Description:".dimmed(), description);
    }
    if !manifest.authors.is_empty() {
        println!("  {:<12} {}", "Authors:".dimmed(), manifest.authors.join(", "));
    }
    if let Some(created_at) = &manifest.created_at {
        println!("  {:<12} {}", "Created:".dimmed(), created_at.to_rfc3339());
    }
    println!();

    println!("  {}:", "Locators".dimmed());
    for locator in &manifest.locators {
        println!(
            "    {} {:<14} {}",
            "+".green(),
            locator.locator_type,
            locator.url
        );
    }
    println!();

    println!("  {}:", "Deployment options".dimmed());
    for option in &runtime.deployment.deployment_options {
        match option.name() {
            Some(name) => println!("    {} {} ({})", "+".green(), option.kind(), name),
            None => println!("    {} {}", "+".green(), option.kind()),
        }
    }
    println!();

    if runtime.deployment.env_vars.is_empty() {
        println!("  {:<12} {}", "Env vars:".dimmed(), "(none)".dimmed());
    } else {
        println!("  {}:", "Env vars".dimmed());
        for var in &runtime.deployment.env_vars {
            if var.required {
                println!("    {} {} {}", "+".green(), var.name, "(required)".yellow());
            } else {
                println!("    {} {}", "+".green(), var.name);
            }
        }
    }
    println!();

    let caps = runtime.acp.capabilities;
    println!(
        "  {:<12} threads={} interrupts={} callbacks={}",
        "Capabilities:".dimmed(),
        caps.threads,
        caps.interrupts,
        caps.callbacks
    );

    Ok(())
}

/// Print one contract schema block as pretty JSON
pub fn run_schema(manifest_path: &Path, block: SchemaBlock) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;
    let runtime = manifest.runtime()?;

    let schema = match block {
        SchemaBlock::Input => runtime.acp.input,
        SchemaBlock::Output => runtime.acp.output,
        SchemaBlock::Config => runtime.acp.config,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    );
    Ok(())
}
