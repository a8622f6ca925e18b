//! CLI module for rolodex
//!
//! Provides the command-line interface:
//! - start: load configuration, wire the store and gateway, serve HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
