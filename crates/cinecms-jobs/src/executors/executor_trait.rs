//! The executor capability interface.

use crate::error::Result;
use async_trait::async_trait;
use cinecms_commons::Job;

/// One executor per `JobType`, selected from the registry map built at
/// process start.
///
/// Executors receive the job mutably so they can record run statistics in
/// its parameter map; the service persists the job after the run whatever
/// the outcome. A returned error marks the job Failed without aborting
/// the poll tick.
#[async_trait]
pub trait JobExecutor: Send + Sync {
    async fn execute(&self, job: &mut Job) -> Result<()>;
}
