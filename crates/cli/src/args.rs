//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Load a `.env` file and print its typed entries.
#[derive(Parser, Debug)]
#[command(name = "envfile", version, about)]
pub struct Cli {
    /// Path to the .env file (defaults to `.env` in the working directory)
    #[arg(long, env = "ENVFILE_PATH")]
    pub path: Option<PathBuf>,

    /// Print secret-looking values instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}
