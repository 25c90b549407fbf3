//! CLI module for marquee
//!
//! Provides command-line interface for:
//! - serve: Load configuration and serve the catalogue over HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
