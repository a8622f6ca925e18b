//! CLI argument definitions using clap
//!
//! Commands:
//! - rolodex start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rolodex - a user record service backed by a key-value store
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the rolodex server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./rolodex.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
