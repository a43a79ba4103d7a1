//! Job executors, one per `JobType`.

pub mod cleanup_temp_files;
pub mod executor_trait;
pub mod generate_sitemap;
pub mod update_search_index;

pub use cleanup_temp_files::CleanupTempFilesExecutor;
pub use executor_trait::JobExecutor;
pub use generate_sitemap::GenerateSitemapExecutor;
pub use update_search_index::UpdateSearchIndexExecutor;
