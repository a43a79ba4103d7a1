//! # cinecms-store
//!
//! Storage layer for CineCMS: a pluggable partitioned key-value backend
//! with typed entity stores and secondary indexes on top.
//!
//! ## Architecture
//!
//! ```text
//! EntityStore<K, V> / IndexedEntityStore<K, V>   ← typed CRUD
//!     ↓
//! StorageBackend                                 ← generic K/V operations
//!     ↓
//! RocksDB (production) / InMemoryBackend (tests)
//! ```
//!
//! Partitions map to RocksDB column families. The full set of partitions
//! is known at startup and created by [`RocksDbInit`].

pub mod entity_store;
pub mod indexed_store;
pub mod rocksdb_impl;
pub mod rocksdb_init;
pub mod secondary_index;
pub mod storage_trait;
pub mod test_utils;

pub use entity_store::EntityStore;
pub use indexed_store::{IndexDefinition, IndexedEntityStore};
pub use rocksdb_impl::RocksDBBackend;
pub use rocksdb_init::RocksDbInit;
pub use secondary_index::SecondaryIndex;
pub use storage_trait::{Operation, Partition, Result, StorageBackend, StorageError};
