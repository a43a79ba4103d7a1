//! The background poll loop.

use crate::service::JobService;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Polls the job table on a fixed interval for the lifetime of the
/// process and hands due jobs to [`JobService::process_due_jobs`].
///
/// One scheduler per process. There is no cross-instance claim on due
/// jobs, so exactly one server instance must run against a given store;
/// the embedded storage engine enforces that in practice.
pub struct JobScheduler {
    service: Arc<JobService>,
    poll_interval: Duration,
}

impl JobScheduler {
    pub fn new(service: Arc<JobService>, poll_interval: Duration) -> Self {
        Self {
            service,
            poll_interval,
        }
    }

    /// Runs until the cancellation token fires. Tick failures are logged
    /// and the loop keeps going; only shutdown stops it.
    pub async fn run(&self, shutdown: CancellationToken) {
        log::info!(
            "Job scheduler started (poll interval {}s)",
            self.poll_interval.as_secs()
        );

        loop {
            match self.service.process_due_jobs().await {
                Ok(0) => {}
                Ok(count) => log::debug!("Processed {} due jobs", count),
                Err(e) => log::error!("Error processing scheduled jobs: {}", e),
            }

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }

        log::info!("Job scheduler stopped");
    }
}
