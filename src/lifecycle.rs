//! Server lifecycle: bootstrap the store and services, run the HTTP
//! server and the job scheduler, coordinate shutdown.

use crate::{middleware, routes};
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use cinecms_configs::ServerConfig;
use cinecms_core::AppContext;
use cinecms_jobs::JobScheduler;
use cinecms_store::{RocksDBBackend, RocksDbInit};
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Initialize RocksDB and build the application context.
pub fn bootstrap(config: &ServerConfig) -> Result<Arc<AppContext>> {
    let started = std::time::Instant::now();

    let db_path = config.storage.rocksdb_dir();
    std::fs::create_dir_all(&db_path)?;

    let partitions = AppContext::partitions();
    let db_path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    let db = RocksDbInit::new(db_path_str, &partitions).open()?;
    let backend = Arc::new(RocksDBBackend::new(db));

    let context = AppContext::init(backend, config.clone());
    info!(
        "Storage initialized at {} with {} partitions ({:.2}ms)",
        db_path.display(),
        partitions.len(),
        started.elapsed().as_secs_f64() * 1000.0
    );

    Ok(context)
}

/// Run the HTTP server (and, when enabled, the job scheduler) until the
/// process is asked to stop. The scheduler is cancelled once the HTTP
/// server has drained.
pub async fn run(config: ServerConfig, context: Arc<AppContext>) -> Result<()> {
    let shutdown = CancellationToken::new();

    let scheduler_handle = if config.jobs.enabled {
        let scheduler = JobScheduler::new(
            context.jobs().clone(),
            Duration::from_secs(config.jobs.poll_interval_secs),
        );
        let token = shutdown.clone();
        Some(tokio::spawn(async move { scheduler.run(token).await }))
    } else {
        info!("Job scheduler disabled by configuration");
        None
    };

    let data = web::Data::new(context);
    let cors_config = config.clone();

    info!(
        "HTTP server listening on {}:{}",
        config.server.host, config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(middleware::request_logger())
            .wrap(middleware::build_cors_from_config(&cors_config))
            .configure(routes::configure)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    shutdown.cancel();
    if let Some(handle) = scheduler_handle {
        let _ = handle.await;
    }
    info!("Shutdown complete");

    Ok(())
}
