//! envsure - validate environment configuration against a schema.
//!
//! Responsibilities:
//! - Parse command-line arguments and the JSON schema declaration.
//! - Run one configuration load via the shared library.
//! - Print the validated configuration as JSON to stdout; print failures to
//!   stderr and exit non-zero.
//!
//! Does NOT handle:
//! - Merge or validation semantics (see `crates/envsure`).
//!
//! Invariants:
//! - stdout carries only the validated configuration; logs go to stderr.

mod args;
mod spec;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::Cli;
use envsure::{Encoding, EnvLoader};
use spec::SpecFile;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let spec_text = tokio::fs::read_to_string(&cli.spec)
        .await
        .with_context(|| format!("failed to read spec file {}", cli.spec.display()))?;
    let spec: SpecFile = serde_json::from_str(&spec_text)
        .with_context(|| format!("failed to parse spec file {}", cli.spec.display()))?;
    let schema = spec.into_schema()?;
    tracing::debug!(spec = %cli.spec.display(), "parsed schema declaration");

    let mut loader = EnvLoader::new();
    if let Some(path) = cli.env_file {
        loader = loader.with_path(path);
    }
    if cli.lossy {
        loader = loader.with_encoding(Encoding::Utf8Lossy);
    }

    let validated = loader.load(&schema).await?;
    Ok(serde_json::to_string_pretty(&Value::Object(validated))?)
}
