use thiserror::Error;

/// Errors that can occur in content operations.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Bad input: shape, format, or uniqueness. Carries one message per
    /// failed check; validation runs before any mutation and rejects the
    /// whole request.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Illegal lifecycle transition, e.g. publishing a non-draft.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContentError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<cinecms_store::StorageError> for ContentError {
    fn from(err: cinecms_store::StorageError) -> Self {
        ContentError::Storage(err.to_string())
    }
}

/// Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
