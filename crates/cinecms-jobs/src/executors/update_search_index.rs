//! Search-index refresh executor.
//!
//! Flattens the movie catalog and all published pages into
//! `SearchDocument`s and caches the serialized set under `"search-index"`
//! for the frontend's search endpoint.

use crate::error::{JobError, Result};
use crate::executors::JobExecutor;
use async_trait::async_trait;
use chrono::Utc;
use cinecms_commons::Job;
use cinecms_content::{
    ContentCache, MovieService, PageService, SearchDocument, SearchDocumentType,
};
use std::sync::Arc;
use std::time::Duration;

pub const SEARCH_INDEX_CACHE_KEY: &str = "search-index";
const SEARCH_INDEX_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub struct UpdateSearchIndexExecutor {
    movies: Arc<MovieService>,
    pages: Arc<PageService>,
    cache: Arc<dyn ContentCache>,
}

impl UpdateSearchIndexExecutor {
    pub fn new(
        movies: Arc<MovieService>,
        pages: Arc<PageService>,
        cache: Arc<dyn ContentCache>,
    ) -> Self {
        Self {
            movies,
            pages,
            cache,
        }
    }
}

#[async_trait]
impl JobExecutor for UpdateSearchIndexExecutor {
    async fn execute(&self, job: &mut Job) -> Result<()> {
        log::info!("Starting search index update");

        let mut documents: Vec<SearchDocument> = Vec::new();

        for movie in self.movies.all()? {
            documents.push(SearchDocument {
                id: movie.id.to_string(),
                doc_type: SearchDocumentType::Movie,
                title: movie.title,
                description: movie.overview,
                keywords: movie.genres,
                url: format!("/movies/{}", movie.slug),
                last_modified: movie.updated_at.unwrap_or(movie.created_at),
            });
        }

        for page in self.pages.published_pages()? {
            documents.push(SearchDocument {
                id: page.id.to_string(),
                doc_type: SearchDocumentType::Page,
                title: page.title,
                description: page.meta_description,
                keywords: Vec::new(),
                url: format!("/pages/{}", page.slug),
                last_modified: page.updated_at.unwrap_or(page.created_at),
            });
        }

        let json = serde_json::to_string(&documents)
            .map_err(|e| JobError::Execution(format!("Failed to serialize search index: {}", e)))?;
        self.cache
            .set(SEARCH_INDEX_CACHE_KEY, json, SEARCH_INDEX_TTL);

        log::info!("Search index updated with {} documents", documents.len());

        job.parameters
            .insert("IndexedDocuments".to_string(), documents.len().to_string());
        job.parameters
            .insert("LastIndexTime".to_string(), Utc::now().to_rfc3339());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinecms_commons::{JobId, JobScheduleType, JobStatus, JobType};
    use cinecms_content::{InMemoryCache, NewMovie, NewPage};
    use cinecms_store::test_utils::InMemoryBackend;
    use std::collections::HashMap;

    #[tokio::test]
    async fn indexes_movies_and_published_pages() {
        let backend = Arc::new(InMemoryBackend::new());
        let cache = Arc::new(InMemoryCache::new());
        let movies = Arc::new(MovieService::new(backend.clone()));
        let pages = Arc::new(PageService::new(
            backend.clone(),
            cache.clone(),
            Duration::from_secs(3600),
        ));

        movies
            .create(
                NewMovie {
                    title: "Alien".to_string(),
                    slug: "alien".to_string(),
                    overview: Some("In space...".to_string()),
                    release_date: None,
                    runtime_minutes: None,
                    poster_path: None,
                    genres: vec!["Horror".to_string()],
                },
                None,
            )
            .unwrap();
        let page = pages
            .create(
                NewPage {
                    title: "About".to_string(),
                    seo_title: None,
                    meta_description: Some("Who we are".to_string()),
                    slug: "about-us".to_string(),
                    link_target: "ABOUT".to_string(),
                    components: vec![],
                },
                None,
            )
            .unwrap();
        pages.publish(&page.id, None).unwrap();

        let executor = UpdateSearchIndexExecutor::new(movies, pages, cache.clone());
        let mut job = Job {
            id: JobId::new("j1"),
            name: "index".to_string(),
            description: String::new(),
            job_type: JobType::UpdateSearchIndex,
            status: JobStatus::Running,
            schedule_type: JobScheduleType::RunOnce,
            cron_expression: None,
            last_run: None,
            next_run: None,
            is_enabled: true,
            error_message: None,
            parameters: HashMap::new(),
            created_at: 1,
            created_by: None,
            updated_at: None,
            is_deleted: false,
        };
        executor.execute(&mut job).await.unwrap();

        let cached = cache.get(SEARCH_INDEX_CACHE_KEY).unwrap();
        let documents: Vec<SearchDocument> = serde_json::from_str(&cached).unwrap();
        assert_eq!(documents.len(), 2);
        assert!(documents
            .iter()
            .any(|d| d.doc_type == SearchDocumentType::Movie && d.url == "/movies/alien"));
        assert!(documents
            .iter()
            .any(|d| d.doc_type == SearchDocumentType::Page && d.keywords.is_empty()));
        assert_eq!(job.parameters.get("IndexedDocuments"), Some(&"2".to_string()));
    }
}
