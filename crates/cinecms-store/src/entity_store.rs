//! Typed entity storage with type-safe keys.
//!
//! `EntityStore<K, V>` provides strongly-typed CRUD over one partition of a
//! `StorageBackend`. Keys are typed (`PageId`, `JobId`, ...) so a wrong-key
//! bug is a compile error; values are serialized as JSON.

use crate::storage_trait::{Partition, Result, StorageBackend, StorageError};
use cinecms_commons::StorageKey;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Trait for typed entity storage with automatic JSON serialization.
///
/// Implementors provide the backend handle and the partition name; all CRUD
/// methods come for free.
pub trait EntityStore<K, V>
where
    K: StorageKey,
    V: Serialize + for<'de> Deserialize<'de> + Send + Sync,
{
    /// Returns a reference to the storage backend.
    fn backend(&self) -> &Arc<dyn StorageBackend>;

    /// Returns the partition name for this entity type, e.g. "pages".
    fn partition(&self) -> &str;

    fn serialize(&self, entity: &V) -> Result<Vec<u8>> {
        serde_json::to_vec(entity).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<V> {
        serde_json::from_slice(bytes).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Stores an entity under the given key, overwriting any existing row.
    fn put(&self, key: &K, entity: &V) -> Result<()> {
        let partition = Partition::new(self.partition());
        let value = self.serialize(entity)?;
        self.backend().put(&partition, &key.storage_key(), &value)
    }

    /// Retrieves an entity by key. `Ok(None)` when the key doesn't exist.
    fn get(&self, key: &K) -> Result<Option<V>> {
        let partition = Partition::new(self.partition());
        match self.backend().get(&partition, &key.storage_key())? {
            Some(bytes) => Ok(Some(self.deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Deletes an entity by key. Idempotent.
    fn delete(&self, key: &K) -> Result<()> {
        let partition = Partition::new(self.partition());
        self.backend().delete(&partition, &key.storage_key())
    }

    /// Scans all entities in the partition, optionally capped at `limit`.
    fn scan_all(&self, limit: Option<usize>) -> Result<Vec<(Vec<u8>, V)>> {
        let partition = Partition::new(self.partition());
        let iter = self.backend().scan(&partition, None, limit)?;

        let mut results = Vec::new();
        for (key_bytes, value_bytes) in iter {
            let entity = self.deserialize(&value_bytes)?;
            results.push((key_bytes, entity));
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryBackend;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    struct TestEntity {
        id: String,
        name: String,
    }

    struct TestStore {
        backend: Arc<dyn StorageBackend>,
    }

    impl EntityStore<String, TestEntity> for TestStore {
        fn backend(&self) -> &Arc<dyn StorageBackend> {
            &self.backend
        }

        fn partition(&self) -> &str {
            "test_entities"
        }
    }

    fn store() -> TestStore {
        TestStore {
            backend: Arc::new(InMemoryBackend::new()),
        }
    }

    #[test]
    fn put_get_delete() {
        let store = store();
        let entity = TestEntity {
            id: "e1".to_string(),
            name: "first".to_string(),
        };

        store.put(&entity.id.clone(), &entity).unwrap();
        assert_eq!(store.get(&"e1".to_string()).unwrap(), Some(entity));

        store.delete(&"e1".to_string()).unwrap();
        assert_eq!(store.get(&"e1".to_string()).unwrap(), None);
    }

    #[test]
    fn scan_all_returns_every_row() {
        let store = store();
        for i in 0..3 {
            let entity = TestEntity {
                id: format!("e{}", i),
                name: format!("entity {}", i),
            };
            store.put(&entity.id.clone(), &entity).unwrap();
        }

        assert_eq!(store.scan_all(None).unwrap().len(), 3);
        assert_eq!(store.scan_all(Some(2)).unwrap().len(), 2);
    }
}
