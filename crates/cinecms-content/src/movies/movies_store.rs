//! Movie rows with a unique slug index.

use crate::error::Result;
use cinecms_commons::{Movie, MovieId};
use cinecms_store::{EntityStore, SecondaryIndex, StorageBackend};
use std::sync::Arc;

pub const MOVIES_PARTITION: &str = "movies";
pub const MOVIES_SLUG_INDEX: &str = "movies_idx_slug";

pub struct MoviesStore {
    backend: Arc<dyn StorageBackend>,
    slug_index: SecondaryIndex<Movie>,
}

impl EntityStore<MovieId, Movie> for MoviesStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        MOVIES_PARTITION
    }
}

impl MoviesStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let _ = backend.create_partition(&cinecms_store::Partition::new(MOVIES_PARTITION));
        let slug_index = SecondaryIndex::unique(backend.clone(), MOVIES_SLUG_INDEX, |m: &Movie| {
            (!m.is_deleted).then(|| m.slug.as_bytes().to_vec())
        });
        Self {
            backend,
            slug_index,
        }
    }

    /// Inserts a movie, claiming its slug. Fails with a unique-constraint
    /// error when another live movie already owns the slug.
    pub fn insert(&self, movie: &Movie) -> Result<()> {
        self.slug_index.put(movie.id.as_str(), movie, None)?;
        self.put(&movie.id, movie)?;
        Ok(())
    }

    pub fn update(&self, old: &Movie, new: &Movie) -> Result<()> {
        self.slug_index.put(new.id.as_str(), new, Some(old))?;
        self.put(&new.id, new)?;
        Ok(())
    }

    pub fn get_live(&self, id: &MovieId) -> Result<Option<Movie>> {
        Ok(self.get(id)?.filter(|m| !m.is_deleted))
    }

    pub fn find_id_by_slug(&self, slug: &str) -> Result<Option<MovieId>> {
        let id = self.slug_index.get_primary_key(slug.as_bytes())?;
        Ok(id.map(MovieId::from))
    }

    pub fn scan_live(&self) -> Result<Vec<Movie>> {
        let rows = self.scan_all(None)?;
        Ok(rows
            .into_iter()
            .map(|(_, movie)| movie)
            .filter(|m| !m.is_deleted)
            .collect())
    }
}
