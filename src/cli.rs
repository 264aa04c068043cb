//! Command-line interface for dexdle.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dexdle - guess the creature from attribute feedback
#[derive(Parser, Debug)]
#[command(name = "dexdle")]
#[command(about = "Guess-the-creature game with attribute feedback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = "dexdle.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Serve creatures from a TOML file instead of PokeAPI
        #[arg(long)]
        roster_file: Option<PathBuf>,
    },

    /// Run the JSON HTTP API
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Serve creatures from a TOML file instead of PokeAPI
        #[arg(long)]
        roster_file: Option<PathBuf>,
    },

    /// Compare two creatures and print the verdicts as JSON
    Compare {
        /// Guessed creature name
        guess: String,

        /// Secret creature name
        secret: String,

        /// Serve creatures from a TOML file instead of PokeAPI
        #[arg(long)]
        roster_file: Option<PathBuf>,
    },
}
