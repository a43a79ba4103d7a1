//! Genre storage.
//!
//! Genres come from catalog imports and change rarely; there is no service
//! layer, the store is the whole API.

use crate::error::Result;
use cinecms_commons::Genre;
use cinecms_store::{EntityStore, StorageBackend};
use std::sync::Arc;

pub const GENRES_PARTITION: &str = "genres";

pub struct GenresStore {
    backend: Arc<dyn StorageBackend>,
}

impl EntityStore<i64, Genre> for GenresStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        GENRES_PARTITION
    }
}

impl GenresStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let _ = backend.create_partition(&cinecms_store::Partition::new(GENRES_PARTITION));
        Self { backend }
    }

    /// Inserts or updates every genre in the batch (catalog import).
    pub fn upsert_all(&self, genres: &[Genre]) -> Result<usize> {
        for genre in genres {
            self.put(&genre.id, genre)?;
        }
        Ok(genres.len())
    }

    pub fn list(&self) -> Result<Vec<Genre>> {
        let mut genres: Vec<Genre> = self
            .scan_all(None)?
            .into_iter()
            .map(|(_, genre)| genre)
            .collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }
}
