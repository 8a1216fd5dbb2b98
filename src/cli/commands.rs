//! CLI command implementations
//!
//! Both commands read the environment first, then apply flag overrides on
//! top, so flags always win.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::product::seed_products;
use crate::rest_api::RestServer;
use crate::store::{LocalFileStore, ProductStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { bind, data_file } => serve(bind, data_file),
        Command::Init { data_file, force } => init(data_file, force),
    }
}

/// Start the HTTP server
pub fn serve(bind: Option<String>, data_file: Option<PathBuf>) -> CliResult<()> {
    let mut config = AppConfig::from_env();
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    if let Some(path) = data_file {
        config.data_file = path;
    }
    config.validate()?;

    init_logging(config.default_log_filter())?;

    let store = ProductStore::new(LocalFileStore::new(), config.data_file.clone());
    let server = RestServer::new(config, store);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server.start())?;

    Ok(())
}

/// Write the reference catalog to the data file
///
/// Refuses to clobber an existing file unless `--force` is given.
pub fn init(data_file: Option<PathBuf>, force: bool) -> CliResult<()> {
    let mut config = AppConfig::from_env();
    if let Some(path) = data_file {
        config.data_file = path;
    }

    let store = ProductStore::new(LocalFileStore::new(), config.data_file.clone());
    if !force && store.check_liveness().is_ok() {
        return Err(CliError::AlreadyInitialized(config.data_file));
    }

    let seed = seed_products();
    store.save(&seed)?;
    println!(
        "Seeded {} products into {}",
        seed.len(),
        config.data_file.display()
    );

    Ok(())
}

fn init_logging(default_filter: &str) -> CliResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
