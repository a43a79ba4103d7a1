//! Indexed entity store: automatic secondary-index maintenance.
//!
//! `IndexedEntityStore<K, V>` writes the entity and all of its index
//! entries in a single atomic batch:
//!
//! ```text
//! insert(key, entity)  →  batch([Put entity, Put idx1, Put idx2, ...])
//! update(key, entity)  →  batch([Delete stale idx entries, Put entity, Put new idx entries])
//! delete(key)          →  batch([Delete entity, Delete idx entries])
//! ```
//!
//! Index keys are designed for prefix scanning: most selective field first,
//! big-endian numbers, primary key appended for uniqueness.

use crate::storage_trait::{Operation, Partition, Result, StorageBackend, StorageError};
use cinecms_commons::StorageKey;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Defines how to extract index keys from an entity.
pub trait IndexDefinition<K, V>: Send + Sync
where
    K: StorageKey,
    V: Serialize + for<'de> Deserialize<'de> + Send + Sync,
{
    /// Partition name for this index, e.g. "jobs_idx_status".
    fn partition(&self) -> &str;

    /// Extracts the index key from the entity.
    ///
    /// Returns `None` when this entity should not be indexed.
    fn extract_key(&self, primary_key: &K, entity: &V) -> Option<Vec<u8>>;

    /// Value stored in the index; defaults to the primary key bytes for
    /// reverse lookup.
    fn index_value(&self, primary_key: &K, _entity: &V) -> Vec<u8> {
        primary_key.storage_key()
    }
}

/// An entity store that keeps its secondary indexes in sync atomically.
pub struct IndexedEntityStore<K, V>
where
    K: StorageKey,
    V: Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static,
{
    backend: Arc<dyn StorageBackend>,
    partition: String,
    indexes: Vec<Arc<dyn IndexDefinition<K, V>>>,
}

impl<K, V> IndexedEntityStore<K, V>
where
    K: StorageKey,
    V: Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static,
{
    pub fn new(
        backend: Arc<dyn StorageBackend>,
        partition: impl Into<String>,
        indexes: Vec<Arc<dyn IndexDefinition<K, V>>>,
    ) -> Self {
        let partition = partition.into();

        let _ = backend.create_partition(&Partition::new(&partition));
        for index in &indexes {
            let _ = backend.create_partition(&Partition::new(index.partition()));
        }

        Self {
            backend,
            partition,
            indexes,
        }
    }

    pub fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn encode(&self, entity: &V) -> Result<Vec<u8>> {
        serde_json::to_vec(entity).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<V> {
        serde_json::from_slice(bytes).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Inserts an entity and all its index entries atomically.
    pub fn insert(&self, key: &K, entity: &V) -> Result<()> {
        let mut operations = Vec::with_capacity(1 + self.indexes.len());

        operations.push(Operation::Put {
            partition: Partition::new(&self.partition),
            key: key.storage_key(),
            value: self.encode(entity)?,
        });

        for index in &self.indexes {
            if let Some(index_key) = index.extract_key(key, entity) {
                operations.push(Operation::Put {
                    partition: Partition::new(index.partition()),
                    key: index_key,
                    value: index.index_value(key, entity),
                });
            }
        }

        self.backend.batch(operations)
    }

    /// Updates an entity, removing stale index entries and writing new
    /// ones, all in one batch.
    pub fn update(&self, key: &K, new_entity: &V) -> Result<()> {
        let old_entity = self.get(key)?;
        self.update_with_old(key, old_entity.as_ref(), new_entity)
    }

    /// Like [`Self::update`], but avoids the extra read when the caller
    /// already holds the old entity.
    pub fn update_with_old(&self, key: &K, old_entity: Option<&V>, new_entity: &V) -> Result<()> {
        let mut operations = Vec::with_capacity(1 + self.indexes.len() * 2);

        if let Some(old) = old_entity {
            for index in &self.indexes {
                let old_key = index.extract_key(key, old);
                let new_key = index.extract_key(key, new_entity);
                if old_key != new_key {
                    if let Some(old_key) = old_key {
                        operations.push(Operation::Delete {
                            partition: Partition::new(index.partition()),
                            key: old_key,
                        });
                    }
                }
            }
        }

        operations.push(Operation::Put {
            partition: Partition::new(&self.partition),
            key: key.storage_key(),
            value: self.encode(new_entity)?,
        });

        for index in &self.indexes {
            let new_key = index.extract_key(key, new_entity);
            let old_key = old_entity.and_then(|old| index.extract_key(key, old));
            if new_key != old_key {
                if let Some(new_key) = new_key {
                    operations.push(Operation::Put {
                        partition: Partition::new(index.partition()),
                        key: new_key,
                        value: index.index_value(key, new_entity),
                    });
                }
            }
        }

        self.backend.batch(operations)
    }

    /// Deletes an entity and all its index entries atomically. Idempotent.
    pub fn delete(&self, key: &K) -> Result<()> {
        let entity = match self.get(key)? {
            Some(e) => e,
            None => return Ok(()),
        };

        let mut operations = Vec::with_capacity(1 + self.indexes.len());

        operations.push(Operation::Delete {
            partition: Partition::new(&self.partition),
            key: key.storage_key(),
        });

        for index in &self.indexes {
            if let Some(index_key) = index.extract_key(key, &entity) {
                operations.push(Operation::Delete {
                    partition: Partition::new(index.partition()),
                    key: index_key,
                });
            }
        }

        self.backend.batch(operations)
    }

    pub fn get(&self, key: &K) -> Result<Option<V>> {
        let partition = Partition::new(&self.partition);
        match self.backend.get(&partition, &key.storage_key())? {
            Some(bytes) => Ok(Some(self.decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Scans all entities, optionally capped at `limit`.
    pub fn scan_all(&self, limit: Option<usize>) -> Result<Vec<(K, V)>> {
        let partition = Partition::new(&self.partition);
        let iter = self.backend.scan(&partition, None, limit)?;

        let mut results = Vec::new();
        for (key_bytes, value_bytes) in iter {
            let key = K::from_storage_key(&key_bytes)
                .map_err(StorageError::SerializationError)?;
            results.push((key, self.decode(&value_bytes)?));
        }
        Ok(results)
    }

    /// Scans an index by prefix, resolving index values back to entities.
    ///
    /// `index_position` is the index's position in the list passed to
    /// [`Self::new`]. Results come back in index-key order.
    pub fn scan_by_index(
        &self,
        index_position: usize,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<Vec<(K, V)>> {
        let index = self.indexes.get(index_position).ok_or_else(|| {
            StorageError::Other(format!("No index at position {}", index_position))
        })?;

        let index_partition = Partition::new(index.partition());
        let iter = self.backend.scan(&index_partition, prefix, limit)?;

        let mut results = Vec::new();
        for (_, primary_key_bytes) in iter {
            let key = K::from_storage_key(&primary_key_bytes)
                .map_err(StorageError::SerializationError)?;
            if let Some(entity) = self.get(&key)? {
                results.push((key, entity));
            }
        }
        Ok(results)
    }
}
