//! envfile - demonstration CLI for typed `.env` loading.
//!
//! Responsibilities:
//! - Resolve a `.env` file path (explicit flag or default resolution).
//! - Load it into a typed store and print the entries, masking secrets.
//! - Demonstrate derived-alias lookup alongside exact-key lookup.
//!
//! Does NOT handle:
//! - Parsing or type inference (see the `envfile` crate).
//!
//! Invariants:
//! - Exit code 0 on success; distinct non-zero codes for file-level and
//!   parse-level failures (see `error.rs`).
//! - Secret-looking values are masked unless `--show-secrets` is given.

mod args;
mod error;
mod format;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use format::display_value;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = cli
        .path
        .clone()
        .unwrap_or_else(envfile::resolve_default_path);

    println!("envfile - demonstrating .env file loading");
    println!("Looking for .env file at: {}", path.display());

    let store = envfile::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    tracing::info!(entries = store.len(), "store built");

    println!();
    println!("Loaded environment variables (exact key):");
    for (key, value) in store.iter() {
        println!("{key}: {}", display_value(key, value, cli.show_secrets));
    }

    println!();
    println!("Loaded environment variables (derived alias):");
    for key in store.keys() {
        let alias = envfile::derived_alias(key);
        match store.get_derived(&alias) {
            Some(value) => {
                println!("{alias}: {}", display_value(key, value, cli.show_secrets))
            }
            None => println!("{alias}: Not found"),
        }
    }

    Ok(())
}
