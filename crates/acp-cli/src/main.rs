//! ACP agent manifest CLI
//!
//! The command-line interface for validating and inspecting agent
//! manifests.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} ACP agent manifest toolkit", "acp".green().bold());
            println!();
            println!("Run {} for available commands.", "acp --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Validate {
            manifest,
            check_env,
            env_file,
        } => commands::run_validate(&manifest, check_env, env_file.as_deref()),
        Commands::Show { manifest, json } => commands::run_show(&manifest, json),
        Commands::CheckEnv { manifest, env_file } => {
            commands::run_check_env(&manifest, env_file.as_deref())
        }
        Commands::Schema { manifest, block } => commands::run_schema(&manifest, block),
        Commands::Init { path, name, force } => commands::run_init(&path, name.as_deref(), force),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
