//! CLI module for catalogd
//!
//! Provides the command-line interface:
//! - serve: start the HTTP server
//! - init: write the reference catalog to the data file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliResult};
