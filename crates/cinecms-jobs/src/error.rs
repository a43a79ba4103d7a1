use thiserror::Error;

/// Errors that can occur in the job system.
#[derive(Error, Debug)]
pub enum JobError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Illegal transition: starting or cancelling a Running job.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Unknown job type: {0}")]
    UnknownJobType(String),

    #[error("Cron error: {0}")]
    Cron(String),

    /// Executor failure; recorded on the job, never aborts the tick.
    #[error("Execution failed: {0}")]
    Execution(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<cinecms_store::StorageError> for JobError {
    fn from(err: cinecms_store::StorageError) -> Self {
        JobError::Storage(err.to_string())
    }
}

impl From<cinecms_content::ContentError> for JobError {
    fn from(err: cinecms_content::ContentError) -> Self {
        JobError::Execution(err.to_string())
    }
}

/// Result type for job operations.
pub type Result<T> = std::result::Result<T, JobError>;
