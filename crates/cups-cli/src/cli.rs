//! CLI argument definitions for cups.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cups",
    version,
    about = "Look up the command associated with an artifact version",
    long_about = "cups reads artifact associations (group/name and group/name/version keys) \
                  from properties files and resolves which value applies to a requested \
                  artifact version."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file [default: ~/.cups/config.toml]
    #[arg(long, global = true, env = "CUPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra association source, read after the configured ones (repeatable)
    #[arg(short, long = "source", global = true, value_name = "FILE")]
    pub sources: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value associated with an artifact version
    Resolve {
        /// Artifact as group/name/version
        artifact: String,
    },

    /// List every association recorded for an artifact
    Show {
        /// Artifact as group/name
        identity: String,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
