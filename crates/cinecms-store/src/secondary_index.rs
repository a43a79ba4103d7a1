//! Secondary index for entity stores.
//!
//! Maps index keys to primary keys:
//! - **Unique**: one entity per index key (`slug` → `movie_id`); inserting
//!   a duplicate fails with `UniqueConstraintViolation`.
//! - **Non-unique**: many entities per index key, stored as a JSON array of
//!   primary keys (`slug` → `["page_1", "page_2"]`). Rows of the same page
//!   lineage legitimately share a slug, which is why page indexes are
//!   non-unique and uniqueness is checked at the service layer.
//!
//! Index maintenance is the owner's responsibility: call `put` with the old
//! entity on updates so stale entries are removed, and `delete` when the
//! entity stops being indexable (soft delete included).

use crate::storage_trait::{Partition, Result, StorageBackend, StorageError};
use std::sync::Arc;

type KeyExtractor<T> = dyn Fn(&T) -> Option<Vec<u8>> + Send + Sync;

pub struct SecondaryIndex<T> {
    backend: Arc<dyn StorageBackend>,
    partition: Partition,
    unique: bool,
    /// Extracts the index key from an entity; `None` means "do not index
    /// this entity" (e.g. soft-deleted rows).
    key_extractor: Box<KeyExtractor<T>>,
}

impl<T> SecondaryIndex<T> {
    pub fn unique<F>(backend: Arc<dyn StorageBackend>, partition_name: &str, key_extractor: F) -> Self
    where
        F: Fn(&T) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        let partition = Partition::new(partition_name);
        let _ = backend.create_partition(&partition);
        Self {
            backend,
            partition,
            unique: true,
            key_extractor: Box::new(key_extractor),
        }
    }

    pub fn non_unique<F>(
        backend: Arc<dyn StorageBackend>,
        partition_name: &str,
        key_extractor: F,
    ) -> Self
    where
        F: Fn(&T) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        let partition = Partition::new(partition_name);
        let _ = backend.create_partition(&partition);
        Self {
            backend,
            partition,
            unique: false,
            key_extractor: Box::new(key_extractor),
        }
    }

    /// Updates the index for a created or modified entity.
    ///
    /// For updates, pass the old entity so a changed (or vanished) index
    /// key gets its stale entry removed.
    pub fn put(&self, primary_key: &str, new_entity: &T, old_entity: Option<&T>) -> Result<()> {
        let new_key = (self.key_extractor)(new_entity);

        if let Some(old) = old_entity {
            let old_key = (self.key_extractor)(old);
            if old_key != new_key {
                if let Some(old_key) = old_key {
                    self.remove_entry(primary_key, &old_key)?;
                }
            }
        }

        let Some(new_key) = new_key else {
            return Ok(());
        };

        if self.unique {
            if let Some(existing_pk) = self.backend.get(&self.partition, &new_key)? {
                let existing_pk = String::from_utf8_lossy(&existing_pk);
                if existing_pk != primary_key {
                    return Err(StorageError::UniqueConstraintViolation(format!(
                        "Index key already exists in {} for a different entity",
                        self.partition
                    )));
                }
            }
            self.backend.put(&self.partition, &new_key, primary_key.as_bytes())
        } else {
            let mut primary_keys = self.load_key_list(&new_key)?;
            if !primary_keys.iter().any(|pk| pk == primary_key) {
                primary_keys.push(primary_key.to_string());
            }
            self.store_key_list(&new_key, &primary_keys)
        }
    }

    /// Removes an entity from the index.
    pub fn delete(&self, primary_key: &str, entity: &T) -> Result<()> {
        match (self.key_extractor)(entity) {
            Some(key) => self.remove_entry(primary_key, &key),
            None => Ok(()),
        }
    }

    fn remove_entry(&self, primary_key: &str, index_key: &[u8]) -> Result<()> {
        if self.unique {
            // Only clear the mapping when it still points at this entity.
            if let Some(existing_pk) = self.backend.get(&self.partition, index_key)? {
                if String::from_utf8_lossy(&existing_pk) == primary_key {
                    self.backend.delete(&self.partition, index_key)?;
                }
            }
            Ok(())
        } else {
            let mut primary_keys = self.load_key_list(index_key)?;
            primary_keys.retain(|pk| pk != primary_key);
            if primary_keys.is_empty() {
                self.backend.delete(&self.partition, index_key)
            } else {
                self.store_key_list(index_key, &primary_keys)
            }
        }
    }

    /// Looks up the primary key behind a unique index entry.
    pub fn get_primary_key(&self, index_key: &[u8]) -> Result<Option<String>> {
        debug_assert!(self.unique, "get_primary_key only applies to unique indexes");
        match self.backend.get(&self.partition, index_key)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| StorageError::SerializationError(format!("Invalid UTF-8 in primary key: {}", e))),
            None => Ok(None),
        }
    }

    /// Looks up every primary key behind an index entry. Unique indexes
    /// return zero or one element.
    pub fn get_primary_keys(&self, index_key: &[u8]) -> Result<Vec<String>> {
        match self.backend.get(&self.partition, index_key)? {
            Some(bytes) => {
                if self.unique {
                    let pk = String::from_utf8(bytes).map_err(|e| {
                        StorageError::SerializationError(format!("Invalid UTF-8 in primary key: {}", e))
                    })?;
                    Ok(vec![pk])
                } else {
                    serde_json::from_slice(&bytes)
                        .map_err(|e| StorageError::SerializationError(e.to_string()))
                }
            }
            None => Ok(Vec::new()),
        }
    }

    pub fn exists(&self, index_key: &[u8]) -> Result<bool> {
        Ok(self.backend.get(&self.partition, index_key)?.is_some())
    }

    fn load_key_list(&self, index_key: &[u8]) -> Result<Vec<String>> {
        match self.backend.get(&self.partition, index_key)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::SerializationError(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn store_key_list(&self, index_key: &[u8], primary_keys: &[String]) -> Result<()> {
        let bytes = serde_json::to_vec(primary_keys)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.backend.put(&self.partition, index_key, &bytes)
    }
}
