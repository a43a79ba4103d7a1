//! Test utilities: an in-memory `StorageBackend`.
//!
//! `InMemoryBackend` keeps every partition in a `BTreeMap` so scans come
//! back in the same lexicographic order RocksDB produces. Partitions are
//! created on demand, which keeps test setup to a single line.

use crate::storage_trait::{KvIterator, Operation, Partition, Result, StorageBackend, StorageError};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

type PartitionData = BTreeMap<Vec<u8>, Vec<u8>>;

#[derive(Default)]
pub struct InMemoryBackend {
    partitions: RwLock<HashMap<String, PartitionData>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for InMemoryBackend {
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let partitions = self
            .partitions
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(partitions
            .get(partition.name())
            .and_then(|data| data.get(key).cloned()))
    }

    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()> {
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        partitions
            .entry(partition.name().to_string())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()> {
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        if let Some(data) = partitions.get_mut(partition.name()) {
            data.remove(key);
        }
        Ok(())
    }

    fn batch(&self, operations: Vec<Operation>) -> Result<()> {
        // Single lock acquisition makes the batch atomic with respect to
        // every other operation on this backend.
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;

        for op in operations {
            match op {
                Operation::Put {
                    partition,
                    key,
                    value,
                } => {
                    partitions
                        .entry(partition.name().to_string())
                        .or_default()
                        .insert(key, value);
                }
                Operation::Delete { partition, key } => {
                    if let Some(data) = partitions.get_mut(partition.name()) {
                        data.remove(&key);
                    }
                }
            }
        }
        Ok(())
    }

    fn scan(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<KvIterator<'_>> {
        let partitions = self
            .partitions
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;

        let max = limit.unwrap_or(usize::MAX);
        let results: Vec<(Vec<u8>, Vec<u8>)> = match partitions.get(partition.name()) {
            Some(data) => data
                .iter()
                .filter(|(k, _)| prefix.is_none_or(|p| k.starts_with(p)))
                .take(max)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            None => Vec::new(),
        };

        Ok(Box::new(results.into_iter()))
    }

    fn partition_exists(&self, partition: &Partition) -> bool {
        self.partitions
            .read()
            .map(|p| p.contains_key(partition.name()))
            .unwrap_or(false)
    }

    fn create_partition(&self, partition: &Partition) -> Result<()> {
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        partitions.entry(partition.name().to_string()).or_default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_a_backend() {
        let backend = InMemoryBackend::new();
        let partition = Partition::new("pages");

        backend.put(&partition, b"k1", b"v1").unwrap();
        assert_eq!(backend.get(&partition, b"k1").unwrap(), Some(b"v1".to_vec()));

        backend.delete(&partition, b"k1").unwrap();
        assert_eq!(backend.get(&partition, b"k1").unwrap(), None);
    }

    #[test]
    fn scan_is_ordered_and_prefix_filtered() {
        let backend = InMemoryBackend::new();
        let partition = Partition::new("idx");

        backend.put(&partition, b"b", b"2").unwrap();
        backend.put(&partition, b"a", b"1").unwrap();
        backend.put(&partition, b"ab", b"3").unwrap();

        let keys: Vec<Vec<u8>> = backend
            .scan(&partition, Some(b"a"), None)
            .unwrap()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec![b"a".to_vec(), b"ab".to_vec()]);
    }
}
