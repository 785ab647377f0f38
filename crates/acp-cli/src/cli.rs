//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// ACP agent manifest toolkit - validate and inspect agent manifests
#[derive(Parser, Debug)]
#[command(name = "acp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate an agent manifest
    ///
    /// Parses the document, checks the required fields, and verifies the
    /// embedded contract schemas are well-formed JSON Schema. With
    /// --check-env the environment variables the manifest declares are
    /// resolved as well, and missing required variables fail the command.
    ///
    /// Examples:
    ///   acp validate agent.json
    ///   acp validate agent.json --check-env
    ///   acp validate agent.json --check-env --env-file .env
    Validate {
        /// Path to the manifest file
        manifest: PathBuf,

        /// Also resolve the declared environment variables
        #[arg(long)]
        check_env: bool,

        /// Dotenv file merged beneath the process environment
        #[arg(long)]
        env_file: Option<PathBuf>,
    },

    /// Show a summary of an agent manifest
    Show {
        /// Path to the manifest file
        manifest: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check the environment variables a manifest declares
    ///
    /// Resolves every declared variable against the process environment
    /// (optionally backfilled from a dotenv file) and exits non-zero when
    /// a required variable is unset.
    ///
    /// Examples:
    ///   acp check-env agent.json
    ///   acp check-env agent.json --env-file .env
    CheckEnv {
        /// Path to the manifest file
        manifest: PathBuf,

        /// Dotenv file merged beneath the process environment
        #[arg(long)]
        env_file: Option<PathBuf>,
    },

    /// Print a contract schema block from a manifest
    Schema {
        /// Path to the manifest file
        manifest: PathBuf,

        /// Which contract block to print
        #[arg(long, value_enum, default_value = "input")]
        block: SchemaBlock,
    },

    /// Write a starter agent manifest
    ///
    /// Writes the bundled ArgoCD agent document, optionally renamed.
    /// Refuses to overwrite an existing file unless --force is given.
    ///
    /// Examples:
    ///   acp init                          # writes agent.json
    ///   acp init manifests/agent.json
    ///   acp init --name agent_weather
    Init {
        /// Destination path
        #[arg(default_value = acp_manifest::MANIFEST_FILENAME)]
        path: PathBuf,

        /// Agent name recorded in the new manifest
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// Outputs a completion script for your shell.
    ///
    /// Examples:
    ///   acp completions bash > ~/.local/share/bash-completion/completions/acp
    ///   acp completions zsh > ~/.zfunc/_acp
    ///   acp completions fish > ~/.config/fish/completions/acp.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Contract blocks addressable by `acp schema`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaBlock {
    /// The input state schema
    Input,
    /// The output state schema
    Output,
    /// The run configuration schema
    Config,
}
