//! # cinecms-jobs
//!
//! Background job system for CineCMS.
//!
//! ## Architecture
//!
//! - [`JobService`] — persistence and the job state machine: create,
//!   start, cancel, and `process_due_jobs` (the heart of each tick).
//! - [`JobScheduler`] — a fixed-interval poll loop that calls
//!   `process_due_jobs` until its cancellation token fires. One instance
//!   per process; the deployment runs a single server per store.
//! - [`JobExecutor`] — capability interface implemented by one executor
//!   per [`cinecms_commons::JobType`]. The type→executor map is built at
//!   process start and passed in; there is no global registry.
//!
//! ## Job lifecycle
//!
//! ```text
//! Pending → Running → Completed            (RunOnce)
//!                   → Completed → Pending  (Recurring, next_run from cron)
//!                   → Failed               (error recorded, tick continues)
//! Cancelled ← any non-Running state via cancel()
//! ```

pub mod cron_schedule;
pub mod error;
pub mod executors;
pub mod jobs_store;
pub mod scheduler;
pub mod service;

pub use error::JobError;
pub use executors::{
    CleanupTempFilesExecutor, GenerateSitemapExecutor, JobExecutor, UpdateSearchIndexExecutor,
};
pub use scheduler::JobScheduler;
pub use service::{JobService, NewJob};

/// Every storage partition the job system uses.
pub const PARTITIONS: &[&str] = &[jobs_store::JOBS_PARTITION, jobs_store::JOBS_STATUS_INDEX];
