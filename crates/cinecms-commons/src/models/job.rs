//! Job entity for the background job table.

use crate::models::ids::{JobId, UserId};
use crate::models::{JobScheduleType, JobStatus, JobType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A schedulable unit of background work.
///
/// `next_run` is only meaningful while the job is enabled and Pending; the
/// scheduler claims jobs whose `next_run` has passed. Executors may write
/// run statistics into `parameters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    pub description: String,
    pub job_type: JobType,
    pub status: JobStatus,
    pub schedule_type: JobScheduleType,
    pub cron_expression: Option<String>,
    /// Unix millis of the last time the scheduler picked this job up.
    pub last_run: Option<i64>,
    /// Unix millis of the next due time.
    pub next_run: Option<i64>,
    pub is_enabled: bool,
    /// Message of the last failure, cleared on the next successful run.
    pub error_message: Option<String>,
    /// Free-form string parameters; executors record run statistics here.
    pub parameters: HashMap<String, String>,
    pub created_at: i64,
    pub created_by: Option<UserId>,
    pub updated_at: Option<i64>,
    pub is_deleted: bool,
}

impl Job {
    /// Transition to Running and stamp `last_run`.
    pub fn start_run(mut self, now: i64) -> Self {
        self.status = JobStatus::Running;
        self.last_run = Some(now);
        self.updated_at = Some(now);
        self
    }

    /// Transition to Completed, clearing any previous error.
    pub fn complete(mut self, now: i64) -> Self {
        self.status = JobStatus::Completed;
        self.error_message = None;
        self.updated_at = Some(now);
        self
    }

    /// Transition to Failed with the error recorded.
    pub fn fail(mut self, message: impl Into<String>, now: i64) -> Self {
        self.status = JobStatus::Failed;
        self.error_message = Some(message.into());
        self.updated_at = Some(now);
        self
    }

    /// Return a recurring job to Pending with its next due time.
    pub fn reschedule(mut self, next_run: Option<i64>, now: i64) -> Self {
        self.status = JobStatus::Pending;
        self.next_run = next_run;
        self.updated_at = Some(now);
        self
    }

    /// Whether the scheduler should pick this job up at `now`.
    pub fn is_due(&self, now: i64) -> bool {
        self.status == JobStatus::Pending
            && self.is_enabled
            && self.next_run.is_some_and(|next| next <= now)
    }
}

/// Filter criteria for job listings.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub job_type: Option<JobType>,
    pub limit: Option<usize>,
}
