//! catalogd CLI entry point
//!
//! A minimal entrypoint that parses arguments, dispatches to the CLI
//! commands, and exits non-zero on failure. All real logic lives in the
//! library crate.

use catalogd::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
