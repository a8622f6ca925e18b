//! CLI command implementations
//!
//! `start` performs the whole boot sequence: tracing first, then
//! configuration, then the store handle (constructed once and shared), then
//! the serving loop. Nothing here is reachable from the request path.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::gateway::Gateway;
use crate::http_server::HttpServer;
use crate::store::MemoryStore;
use crate::user::{UserManager, KEY_ATTRIBUTE};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Start { config } => start(&config),
    }
}

fn start(config_path: &Path) -> CliResult<()> {
    init_tracing();

    let config = ServiceConfig::load(config_path)?;
    info!(
        collection = %config.collection,
        region = %config.region,
        "starting rolodex"
    );

    let store = Arc::new(MemoryStore::new(KEY_ATTRIBUTE));
    let manager = UserManager::new(store, config.collection.clone());
    let gateway = Arc::new(Gateway::new(manager));
    let server = HttpServer::new(config, gateway);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
