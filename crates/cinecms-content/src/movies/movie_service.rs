//! Movie catalog service.

use crate::error::{ContentError, Result};
use crate::movies::movies_store::MoviesStore;
use crate::validation;
use cinecms_commons::{now_millis, Movie, MovieId, PaginatedList, UserId};
use cinecms_store::StorageBackend;
use std::sync::Arc;

/// Input for [`MovieService::create`].
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub slug: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub poster_path: Option<String>,
    pub genres: Vec<String>,
}

pub struct MovieService {
    store: MoviesStore,
}

impl MovieService {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            store: MoviesStore::new(backend),
        }
    }

    pub fn create(&self, input: NewMovie, actor: Option<UserId>) -> Result<Movie> {
        let mut errors = Vec::new();
        if input.title.trim().is_empty() {
            errors.push("Title must not be empty.".to_string());
        }
        if !validation::is_valid_slug(&input.slug) {
            errors.push(
                "Slug must be lowercase, contain only letters, numbers, and hyphens.".to_string(),
            );
        }
        if self.store.find_id_by_slug(&input.slug)?.is_some() {
            errors.push("A movie with this slug already exists.".to_string());
        }
        if !errors.is_empty() {
            return Err(ContentError::Validation(errors));
        }

        let movie = Movie {
            id: MovieId::generate(),
            title: input.title,
            slug: input.slug,
            overview: input.overview,
            release_date: input.release_date,
            runtime_minutes: input.runtime_minutes,
            poster_path: input.poster_path,
            genres: input.genres,
            created_at: now_millis(),
            created_by: actor,
            updated_at: None,
            is_deleted: false,
        };

        self.store.insert(&movie)?;
        log::info!("Created movie {} (slug '{}')", movie.id, movie.slug);
        Ok(movie)
    }

    pub fn get(&self, id: &MovieId) -> Result<Movie> {
        self.store
            .get_live(id)?
            .ok_or_else(|| ContentError::not_found(format!("Movie not found: {}", id)))
    }

    pub fn get_by_slug(&self, slug: &str) -> Result<Movie> {
        let id = self
            .store
            .find_id_by_slug(slug)?
            .ok_or_else(|| ContentError::not_found(format!("Movie not found for slug: {}", slug)))?;
        self.get(&id)
    }

    /// Paginated listing with case-insensitive title/slug search, ordered
    /// by title.
    pub fn list(
        &self,
        page_number: usize,
        page_size: usize,
        search_term: Option<&str>,
    ) -> Result<PaginatedList<Movie>> {
        let page_number = page_number.max(1);
        let page_size = page_size.clamp(1, 100);

        let mut movies = self.store.scan_live()?;

        if let Some(term) = search_term.map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            movies.retain(|m| {
                m.title.to_lowercase().contains(&term) || m.slug.to_lowercase().contains(&term)
            });
        }

        movies.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        Ok(PaginatedList::from_full(movies, page_number, page_size))
    }

    /// Every live movie, for the sitemap and search-index executors.
    pub fn all(&self) -> Result<Vec<Movie>> {
        self.store.scan_live()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinecms_store::test_utils::InMemoryBackend;

    fn service() -> MovieService {
        MovieService::new(Arc::new(InMemoryBackend::new()))
    }

    fn new_movie(title: &str, slug: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            slug: slug.to_string(),
            overview: None,
            release_date: None,
            runtime_minutes: None,
            poster_path: None,
            genres: vec![],
        }
    }

    #[test]
    fn create_and_lookup() {
        let service = service();
        let movie = service.create(new_movie("Alien", "alien"), None).unwrap();

        assert_eq!(service.get(&movie.id).unwrap().title, "Alien");
        assert_eq!(service.get_by_slug("alien").unwrap().id, movie.id);
        assert!(service.get_by_slug("aliens").is_err());
    }

    #[test]
    fn duplicate_slug_is_a_validation_error() {
        let service = service();
        service.create(new_movie("Alien", "alien"), None).unwrap();
        let err = service.create(new_movie("Alien Remake", "alien"), None).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[test]
    fn list_searches_and_sorts_by_title() {
        let service = service();
        service.create(new_movie("Zulu", "zulu"), None).unwrap();
        service.create(new_movie("Alien", "alien"), None).unwrap();
        service.create(new_movie("Aliens", "aliens"), None).unwrap();

        let all = service.list(1, 10, None).unwrap();
        let titles: Vec<&str> = all.items.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Aliens", "Zulu"]);

        let hits = service.list(1, 10, Some("alien")).unwrap();
        assert_eq!(hits.items.len(), 2);
    }
}
