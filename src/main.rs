//! CineCMS server entrypoint.
//!
//! The heavy lifting (initialization, middleware wiring, shutdown) lives
//! in dedicated modules so this file remains a thin orchestrator.

use anyhow::Result;
use cinecms_server::config::ServerConfig;
use cinecms_server::{lifecycle, logging};
use log::info;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration, falling back to defaults when no file exists
    let config = if Path::new(CONFIG_PATH).exists() {
        ServerConfig::from_file(CONFIG_PATH)?
    } else {
        eprintln!("No {} found, starting with default configuration", CONFIG_PATH);
        ServerConfig::from_defaults()?
    };

    // Logging before any other side effects
    logging::init_logging(&config.logging)?;
    info!("CineCMS v{} starting", env!("CARGO_PKG_VERSION"));

    let context = lifecycle::bootstrap(&config)?;
    lifecycle::run(config, context).await
}
