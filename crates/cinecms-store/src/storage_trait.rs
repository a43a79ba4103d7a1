//! Storage backend abstraction for pluggable storage implementations.
//!
//! A `StorageBackend` exposes partitioned key-value operations. Different
//! backends map partitions to their native concepts:
//! - **RocksDB**: partition = column family
//! - **In-memory**: partition = map namespace
//!
//! All writes that must be consistent with each other (entity + its index
//! entries) go through `batch()`, which is atomic.

use std::fmt;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Partition (column family, namespace) not found
    PartitionNotFound(String),

    /// Generic I/O error from the underlying storage
    IoError(String),

    /// Serialization/deserialization error
    SerializationError(String),

    /// Unique constraint violation (for unique indexes)
    UniqueConstraintViolation(String),

    /// Lock poisoning (internal concurrency issue)
    LockPoisoned(String),

    /// Other errors
    Other(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::PartitionNotFound(p) => write!(f, "Partition not found: {}", p),
            StorageError::IoError(msg) => write!(f, "I/O error: {}", msg),
            StorageError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::UniqueConstraintViolation(msg) => {
                write!(f, "Unique constraint violation: {}", msg)
            }
            StorageError::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
            StorageError::Other(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// A logical partition of data within a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    name: String,
}

impl Partition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Partition {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Partition {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A single operation in an atomic batch.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Insert or update a key-value pair
    Put {
        partition: Partition,
        key: Vec<u8>,
        value: Vec<u8>,
    },

    /// Delete a key
    Delete { partition: Partition, key: Vec<u8> },
}

/// Iterator over (key, value) pairs from a scan.
pub type KvIterator<'a> = Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a>;

/// Trait for pluggable storage backend implementations.
///
/// Implementations must be thread-safe (`Send + Sync`); consistency of
/// multi-key writes relies on `batch()` being all-or-nothing.
pub trait StorageBackend: Send + Sync {
    /// Retrieves a value by key. `Ok(None)` when the key doesn't exist.
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Stores a key-value pair, overwriting any existing value.
    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()>;

    /// Deletes a key. Idempotent: `Ok(())` when the key doesn't exist.
    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()>;

    /// Executes multiple operations atomically.
    fn batch(&self, operations: Vec<Operation>) -> Result<()>;

    /// Scans keys in a partition in lexicographic order, optionally
    /// restricted to a prefix and capped at `limit` entries.
    fn scan(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<KvIterator<'_>>;

    /// Checks whether a partition exists.
    fn partition_exists(&self, partition: &Partition) -> bool;

    /// Creates a partition. `Ok(())` when it already exists (idempotent).
    fn create_partition(&self, partition: &Partition) -> Result<()>;
}
