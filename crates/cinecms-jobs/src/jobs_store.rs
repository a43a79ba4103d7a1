//! Job rows with a status + created_at secondary index.
//!
//! Index key format: `[status_byte][created_at_be][job_id]`, so one prefix
//! scan yields "all Pending jobs ordered by creation time".

use cinecms_commons::{Job, JobId, JobStatus};
use cinecms_store::{IndexDefinition, IndexedEntityStore, StorageBackend};
use std::sync::Arc;

pub const JOBS_PARTITION: &str = "jobs";
pub const JOBS_STATUS_INDEX: &str = "jobs_idx_status";

/// Position of the status index in the store's index list.
pub const STATUS_INDEX: usize = 0;

/// Status byte for index key ordering.
pub fn status_to_u8(status: JobStatus) -> u8 {
    match status {
        JobStatus::Pending => 0,
        JobStatus::Running => 1,
        JobStatus::Completed => 2,
        JobStatus::Failed => 3,
        JobStatus::Cancelled => 4,
    }
}

pub struct JobStatusCreatedAtIndex;

impl IndexDefinition<JobId, Job> for JobStatusCreatedAtIndex {
    fn partition(&self) -> &str {
        JOBS_STATUS_INDEX
    }

    fn extract_key(&self, _primary_key: &JobId, job: &Job) -> Option<Vec<u8>> {
        if job.is_deleted {
            return None;
        }
        let mut key = Vec::with_capacity(1 + 8 + job.id.as_bytes().len());
        key.push(status_to_u8(job.status));
        key.extend_from_slice(&job.created_at.to_be_bytes());
        key.extend_from_slice(job.id.as_bytes());
        Some(key)
    }
}

/// The indexed jobs store.
pub type JobsStore = IndexedEntityStore<JobId, Job>;

pub fn open_jobs_store(backend: Arc<dyn StorageBackend>) -> JobsStore {
    IndexedEntityStore::new(
        backend,
        JOBS_PARTITION,
        vec![Arc::new(JobStatusCreatedAtIndex)],
    )
}
