//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogd serve [--bind <addr>] [--data-file <path>]
//! - catalogd init [--data-file <path>] [--force]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// catalogd - a self-hostable product catalog REST service
#[derive(Parser, Debug)]
#[command(name = "catalogd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Address to bind, e.g. 0.0.0.0:8080 (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<String>,

        /// Path of the JSON data file (overrides DATA_FILE_PATH)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// Write the reference catalog to the data file
    Init {
        /// Path of the JSON data file (overrides DATA_FILE_PATH)
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "catalogd",
            "serve",
            "--bind",
            "127.0.0.1:9000",
            "--data-file",
            "/tmp/catalog.json",
        ])
        .unwrap();

        match cli.command {
            Command::Serve { bind, data_file } => {
                assert_eq!(bind.as_deref(), Some("127.0.0.1:9000"));
                assert_eq!(data_file, Some(PathBuf::from("/tmp/catalog.json")));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_parse_init_defaults() {
        let cli = Cli::try_parse_from(["catalogd", "init"]).unwrap();
        match cli.command {
            Command::Init { data_file, force } => {
                assert_eq!(data_file, None);
                assert!(!force);
            }
            _ => panic!("expected init command"),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["catalogd"]).is_err());
    }
}
