//! RocksDB implementation of the `StorageBackend` trait.
//!
//! Maps partitions to RocksDB column families. All column families are
//! created up-front by [`crate::rocksdb_init::RocksDbInit`]; this backend
//! never mutates the column-family set at runtime.

use crate::storage_trait::{KvIterator, Operation, Partition, Result, StorageBackend, StorageError};
use rocksdb::{ColumnFamily, Direction, IteratorMode, WriteBatch, DB};
use std::sync::Arc;

pub struct RocksDBBackend {
    db: Arc<DB>,
}

impl RocksDBBackend {
    pub fn new(db: Arc<DB>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Arc<DB> {
        &self.db
    }

    fn get_cf(&self, partition: &Partition) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(partition.name())
            .ok_or_else(|| StorageError::PartitionNotFound(partition.name().to_string()))
    }
}

impl StorageBackend for RocksDBBackend {
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let cf = self.get_cf(partition)?;
        self.db
            .get_cf(cf, key)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()> {
        let cf = self.get_cf(partition)?;
        self.db
            .put_cf(cf, key, value)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()> {
        let cf = self.get_cf(partition)?;
        self.db
            .delete_cf(cf, key)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn batch(&self, operations: Vec<Operation>) -> Result<()> {
        let mut batch = WriteBatch::default();

        for op in operations {
            match op {
                Operation::Put {
                    partition,
                    key,
                    value,
                } => {
                    let cf = self.get_cf(&partition)?;
                    batch.put_cf(cf, key, value);
                }
                Operation::Delete { partition, key } => {
                    let cf = self.get_cf(&partition)?;
                    batch.delete_cf(cf, key);
                }
            }
        }

        self.db
            .write(batch)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn scan(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<KvIterator<'_>> {
        let cf = self.get_cf(partition)?;

        let iter_mode = match prefix {
            Some(p) => IteratorMode::From(p, Direction::Forward),
            None => IteratorMode::Start,
        };

        let max = limit.unwrap_or(usize::MAX);
        let mut results: Vec<(Vec<u8>, Vec<u8>)> = Vec::new();

        for entry in self.db.iterator_cf(cf, iter_mode) {
            let (key, value) = entry.map_err(|e| StorageError::IoError(e.to_string()))?;
            if let Some(p) = prefix {
                if !key.starts_with(p) {
                    break;
                }
            }
            results.push((key.to_vec(), value.to_vec()));
            if results.len() >= max {
                break;
            }
        }

        Ok(Box::new(results.into_iter()))
    }

    fn partition_exists(&self, partition: &Partition) -> bool {
        self.db.cf_handle(partition.name()).is_some()
    }

    fn create_partition(&self, partition: &Partition) -> Result<()> {
        // Column families are fixed at open time; creating an existing one
        // is a no-op, anything else is a configuration error.
        if self.partition_exists(partition) {
            Ok(())
        } else {
            Err(StorageError::PartitionNotFound(format!(
                "{} (column families are created at startup by RocksDbInit)",
                partition.name()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rocksdb_init::RocksDbInit;
    use tempfile::TempDir;

    fn open_backend(partitions: &[&str]) -> (RocksDBBackend, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db = RocksDbInit::new(temp_dir.path().to_str().unwrap(), partitions)
            .open()
            .unwrap();
        (RocksDBBackend::new(db), temp_dir)
    }

    #[test]
    fn put_get_delete_round_trip() {
        let (backend, _dir) = open_backend(&["pages"]);
        let partition = Partition::new("pages");

        backend.put(&partition, b"k1", b"v1").unwrap();
        assert_eq!(backend.get(&partition, b"k1").unwrap(), Some(b"v1".to_vec()));

        backend.delete(&partition, b"k1").unwrap();
        assert_eq!(backend.get(&partition, b"k1").unwrap(), None);
    }

    #[test]
    fn batch_is_applied_together() {
        let (backend, _dir) = open_backend(&["pages", "pages_idx_slug"]);
        let pages = Partition::new("pages");
        let idx = Partition::new("pages_idx_slug");

        backend
            .batch(vec![
                Operation::Put {
                    partition: pages.clone(),
                    key: b"p1".to_vec(),
                    value: b"{}".to_vec(),
                },
                Operation::Put {
                    partition: idx.clone(),
                    key: b"about-us".to_vec(),
                    value: b"p1".to_vec(),
                },
            ])
            .unwrap();

        assert!(backend.get(&pages, b"p1").unwrap().is_some());
        assert!(backend.get(&idx, b"about-us").unwrap().is_some());
    }

    #[test]
    fn scan_respects_prefix_and_limit() {
        let (backend, _dir) = open_backend(&["jobs"]);
        let partition = Partition::new("jobs");

        backend.put(&partition, b"a1", b"1").unwrap();
        backend.put(&partition, b"a2", b"2").unwrap();
        backend.put(&partition, b"b1", b"3").unwrap();

        let hits: Vec<_> = backend.scan(&partition, Some(b"a"), None).unwrap().collect();
        assert_eq!(hits.len(), 2);

        let limited: Vec<_> = backend.scan(&partition, None, Some(1)).unwrap().collect();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn unknown_partition_is_rejected() {
        let (backend, _dir) = open_backend(&["pages"]);
        let missing = Partition::new("nope");
        assert!(matches!(
            backend.get(&missing, b"k"),
            Err(StorageError::PartitionNotFound(_))
        ));
    }
}
