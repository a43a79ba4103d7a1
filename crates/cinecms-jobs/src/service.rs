//! Job persistence and the job state machine.

use crate::cron_schedule;
use crate::error::{JobError, Result};
use crate::executors::JobExecutor;
use crate::jobs_store::{open_jobs_store, status_to_u8, JobsStore, STATUS_INDEX};
use cinecms_commons::{
    now_millis, Job, JobFilter, JobId, JobScheduleType, JobStatus, JobType, UserId,
};
use cinecms_store::StorageBackend;
use std::collections::HashMap;
use std::sync::Arc;

/// Input for [`JobService::create`].
#[derive(Debug, Clone)]
pub struct NewJob {
    pub name: String,
    pub description: String,
    pub job_type: JobType,
    pub schedule_type: JobScheduleType,
    pub cron_expression: Option<String>,
    pub parameters: HashMap<String, String>,
    pub start_immediately: bool,
}

pub struct JobService {
    store: JobsStore,
    /// Type → executor map, built at process start and passed in.
    executors: HashMap<JobType, Arc<dyn JobExecutor>>,
}

impl JobService {
    pub fn new(
        backend: Arc<dyn StorageBackend>,
        executors: HashMap<JobType, Arc<dyn JobExecutor>>,
    ) -> Self {
        Self {
            store: open_jobs_store(backend),
            executors,
        }
    }

    /// Creates a job.
    ///
    /// Jobs start Pending when `start_immediately`, otherwise Cancelled
    /// until someone starts them. Recurring jobs get their first
    /// `next_run` from the cron expression; immediate jobs are due now.
    pub fn create(&self, input: NewJob, actor: Option<UserId>) -> Result<Job> {
        if input.name.trim().is_empty() {
            return Err(JobError::Validation("Job name must not be empty.".to_string()));
        }
        if input.schedule_type == JobScheduleType::Recurring {
            if let Some(expression) = input.cron_expression.as_deref() {
                cron_schedule::parse(expression)
                    .map_err(|e| JobError::Validation(e.to_string()))?;
            }
        }

        let now = now_millis();
        let next_run = match (&input.schedule_type, input.cron_expression.as_deref()) {
            (JobScheduleType::Recurring, Some(expression)) => {
                cron_schedule::next_occurrence(expression, now)?
            }
            _ if input.start_immediately => Some(now),
            _ => None,
        };

        let job = Job {
            id: JobId::generate(),
            name: input.name,
            description: input.description,
            job_type: input.job_type,
            status: if input.start_immediately {
                JobStatus::Pending
            } else {
                JobStatus::Cancelled
            },
            schedule_type: input.schedule_type,
            cron_expression: input.cron_expression,
            last_run: None,
            next_run,
            is_enabled: true,
            error_message: None,
            parameters: input.parameters,
            created_at: now,
            created_by: actor,
            updated_at: None,
            is_deleted: false,
        };

        self.store.insert(&job.id, &job)?;
        log::info!("Created job {} ({}, {})", job.id, job.name, job.job_type);
        Ok(job)
    }

    pub fn get(&self, id: &JobId) -> Result<Job> {
        self.store
            .get(id)?
            .filter(|j| !j.is_deleted)
            .ok_or_else(|| JobError::NotFound(format!("Job not found: {}", id)))
    }

    /// Lists jobs, newest first. A status filter scans the status index
    /// instead of the whole partition.
    pub fn list(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let mut jobs: Vec<Job> = match filter.status {
            Some(status) => {
                let prefix = [status_to_u8(status)];
                self.store
                    .scan_by_index(STATUS_INDEX, Some(&prefix), None)?
                    .into_iter()
                    .map(|(_, job)| job)
                    .collect()
            }
            None => self
                .store
                .scan_all(None)?
                .into_iter()
                .map(|(_, job)| job)
                .filter(|j| !j.is_deleted)
                .collect(),
        };

        if let Some(job_type) = filter.job_type {
            jobs.retain(|j| j.job_type == job_type);
        }

        jobs.sort_by_key(|j| std::cmp::Reverse(j.created_at));
        if let Some(limit) = filter.limit {
            jobs.truncate(limit);
        }
        Ok(jobs)
    }

    /// Queues a job to run now. Rejected while the job is Running.
    pub fn start(&self, id: &JobId) -> Result<Job> {
        let job = self.get(id)?;
        if job.status == JobStatus::Running {
            return Err(JobError::InvalidState("Job is already running".to_string()));
        }

        let started = job.clone().reschedule(Some(now_millis()), now_millis());
        self.store.update_with_old(id, Some(&job), &started)?;
        log::info!("Job {} queued for immediate run", id);
        Ok(started)
    }

    /// Cancels a job. Rejected while the job is Running.
    pub fn cancel(&self, id: &JobId) -> Result<Job> {
        let job = self.get(id)?;
        if job.status == JobStatus::Running {
            return Err(JobError::InvalidState(
                "Cannot cancel a running job".to_string(),
            ));
        }

        let mut cancelled = job.clone();
        cancelled.status = JobStatus::Cancelled;
        cancelled.next_run = None;
        cancelled.updated_at = Some(now_millis());
        self.store.update_with_old(id, Some(&job), &cancelled)?;
        log::info!("Job {} cancelled", id);
        Ok(cancelled)
    }

    /// One scheduler tick: claim every due job and run them sequentially.
    ///
    /// Each job is persisted after every transition; a failing executor
    /// marks its job Failed and the tick moves on to the next one.
    /// Returns the number of jobs processed.
    pub async fn process_due_jobs(&self) -> Result<usize> {
        let now = now_millis();
        let prefix = [status_to_u8(JobStatus::Pending)];
        let due: Vec<Job> = self
            .store
            .scan_by_index(STATUS_INDEX, Some(&prefix), None)?
            .into_iter()
            .map(|(_, job)| job)
            .filter(|job| job.is_due(now))
            .collect();

        let mut processed = 0;
        for job in due {
            self.run_job(job).await?;
            processed += 1;
        }
        Ok(processed)
    }

    async fn run_job(&self, job: Job) -> Result<()> {
        let started_at = now_millis();
        let mut running = job.clone().start_run(started_at);
        self.store.update_with_old(&running.id, Some(&job), &running)?;

        let run_result = match self.executors.get(&running.job_type) {
            Some(executor) => executor.execute(&mut running).await,
            None => Err(JobError::UnknownJobType(running.job_type.to_string())),
        };

        let finished_at = now_millis();
        let before_outcome = running.clone();
        let outcome = match run_result {
            Ok(()) => {
                let mut completed = running.complete(finished_at);
                if completed.schedule_type == JobScheduleType::Recurring {
                    if let Some(expression) = completed.cron_expression.clone() {
                        match cron_schedule::next_occurrence(&expression, finished_at) {
                            Ok(next) => {
                                completed = completed.reschedule(next, finished_at);
                            }
                            Err(e) => {
                                // The job stalls with no next_run; logged,
                                // not raised, so the tick keeps going.
                                log::error!(
                                    "Job {}: failed to compute next run: {}",
                                    completed.id,
                                    e
                                );
                                completed = completed.reschedule(None, finished_at);
                            }
                        }
                    }
                }
                completed
            }
            Err(e) => {
                log::error!("Error executing job {}: {}", running.id, e);
                running.fail(e.to_string(), finished_at)
            }
        };

        self.store
            .update_with_old(&outcome.id, Some(&before_outcome), &outcome)?;
        Ok(())
    }
}
