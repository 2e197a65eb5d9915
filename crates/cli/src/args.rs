//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Validate environment configuration against a schema declaration.
///
/// Reads `KEY=VALUE` pairs from a settings file, overlays the process
/// environment on top, validates the merged result, and prints the typed
/// configuration as JSON.
#[derive(Debug, Parser)]
#[command(name = "envsure", version, about)]
pub struct Cli {
    /// Path to the settings file (defaults to ./.env).
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Path to the JSON schema declaration.
    #[arg(long, value_name = "PATH")]
    pub spec: PathBuf,

    /// Decode the settings file with lossy UTF-8 handling.
    #[arg(long)]
    pub lossy: bool,
}
