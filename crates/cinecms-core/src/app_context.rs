//! Shared application state.

use cinecms_commons::JobType;
use cinecms_configs::ServerConfig;
use cinecms_content::{
    ContentCache, FeatureFlagService, GenresStore, InMemoryCache, MovieService, PageService,
};
use cinecms_jobs::{
    CleanupTempFilesExecutor, GenerateSitemapExecutor, JobExecutor, JobService,
    UpdateSearchIndexExecutor,
};
use cinecms_store::StorageBackend;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Owns every service in the application.
///
/// Built once at startup from the storage backend and configuration, then
/// shared (as `Arc<AppContext>`) with the HTTP handlers and the job
/// scheduler. The executor registry is assembled here so handler
/// resolution stays an explicit map lookup.
pub struct AppContext {
    config: ServerConfig,
    cache: Arc<dyn ContentCache>,
    pages: Arc<PageService>,
    movies: Arc<MovieService>,
    genres: Arc<GenresStore>,
    flags: Arc<FeatureFlagService>,
    jobs: Arc<JobService>,
}

impl AppContext {
    /// Every storage partition the application uses, for `RocksDbInit`.
    pub fn partitions() -> Vec<&'static str> {
        let mut partitions = Vec::new();
        partitions.extend_from_slice(cinecms_content::PARTITIONS);
        partitions.extend_from_slice(cinecms_jobs::PARTITIONS);
        partitions
    }

    pub fn init(backend: Arc<dyn StorageBackend>, config: ServerConfig) -> Arc<Self> {
        let cache: Arc<dyn ContentCache> = Arc::new(InMemoryCache::new());

        let pages = Arc::new(PageService::new(
            backend.clone(),
            cache.clone(),
            Duration::from_secs(config.cache.page_ttl_secs),
        ));
        let movies = Arc::new(MovieService::new(backend.clone()));
        let genres = Arc::new(GenresStore::new(backend.clone()));
        let flags = Arc::new(FeatureFlagService::new(backend.clone(), cache.clone()));

        let mut executors: HashMap<JobType, Arc<dyn JobExecutor>> = HashMap::new();
        executors.insert(
            JobType::GenerateSitemap,
            Arc::new(GenerateSitemapExecutor::new(
                movies.clone(),
                pages.clone(),
                config.server.base_url.clone(),
                config.storage.public_dir(),
            )),
        );
        executors.insert(
            JobType::CleanupTempFiles,
            Arc::new(CleanupTempFilesExecutor::new(
                config.storage.tmp_dir(),
                Duration::from_secs(config.jobs.temp_file_max_age_hours * 3600),
            )),
        );
        executors.insert(
            JobType::UpdateSearchIndex,
            Arc::new(UpdateSearchIndexExecutor::new(
                movies.clone(),
                pages.clone(),
                cache.clone(),
            )),
        );

        let jobs = Arc::new(JobService::new(backend, executors));

        log::debug!("AppContext initialized with all stores and services");

        Arc::new(Self {
            config,
            cache,
            pages,
            movies,
            genres,
            flags,
            jobs,
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<dyn ContentCache> {
        &self.cache
    }

    pub fn pages(&self) -> &Arc<PageService> {
        &self.pages
    }

    pub fn movies(&self) -> &Arc<MovieService> {
        &self.movies
    }

    pub fn genres(&self) -> &Arc<GenresStore> {
        &self.genres
    }

    pub fn flags(&self) -> &Arc<FeatureFlagService> {
        &self.flags
    }

    pub fn jobs(&self) -> &Arc<JobService> {
        &self.jobs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinecms_store::test_utils::InMemoryBackend;

    #[test]
    fn partitions_cover_content_and_jobs() {
        let partitions = AppContext::partitions();
        assert!(partitions.contains(&"pages"));
        assert!(partitions.contains(&"jobs"));
        assert!(partitions.contains(&"movies"));
        assert!(partitions.contains(&"feature_flags"));
    }

    #[test]
    fn init_wires_every_service() {
        let context = AppContext::init(Arc::new(InMemoryBackend::new()), ServerConfig::default());

        assert!(context.pages().published_pages().unwrap().is_empty());
        assert!(context.movies().all().unwrap().is_empty());
        assert!(context.flags().list().unwrap().is_empty());
        assert!(context
            .jobs()
            .list(&cinecms_commons::JobFilter::default())
            .unwrap()
            .is_empty());
        assert!(context.genres().list().unwrap().is_empty());
        assert!(context.cache().get("anything").is_none());
    }
}
