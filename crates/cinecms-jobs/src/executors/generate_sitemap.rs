//! Sitemap generation executor.
//!
//! Collects public URLs (movies plus published pages), renders a sitemap
//! per <https://www.sitemaps.org/protocol.html>, and writes it into the
//! public directory.

use crate::error::{JobError, Result};
use crate::executors::JobExecutor;
use async_trait::async_trait;
use chrono::Utc;
use cinecms_commons::Job;
use cinecms_content::{MovieService, PageService};
use std::path::PathBuf;
use std::sync::Arc;

pub struct GenerateSitemapExecutor {
    movies: Arc<MovieService>,
    pages: Arc<PageService>,
    base_url: String,
    output_dir: PathBuf,
}

impl GenerateSitemapExecutor {
    pub fn new(
        movies: Arc<MovieService>,
        pages: Arc<PageService>,
        base_url: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            movies,
            pages,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            output_dir: output_dir.into(),
        }
    }

    fn render(&self, urls: &[String]) -> String {
        let mut xml = String::with_capacity(128 + urls.len() * 64);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
        for url in urls {
            xml.push_str("  <url><loc>");
            xml.push_str(url);
            xml.push_str("</loc></url>\n");
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

#[async_trait]
impl JobExecutor for GenerateSitemapExecutor {
    async fn execute(&self, job: &mut Job) -> Result<()> {
        log::info!("Starting sitemap generation");

        let mut urls: Vec<String> = Vec::new();
        for movie in self.movies.all()? {
            urls.push(format!("{}/movies/{}", self.base_url, movie.slug));
        }
        for page in self.pages.published_pages()? {
            urls.push(format!("{}/pages/{}", self.base_url, page.slug));
        }

        let xml = self.render(&urls);
        let target = self.output_dir.join("sitemap.xml");

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| JobError::Execution(format!("Failed to create sitemap dir: {}", e)))?;
        tokio::fs::write(&target, xml)
            .await
            .map_err(|e| JobError::Execution(format!("Failed to write sitemap: {}", e)))?;

        log::info!("Sitemap with {} URLs written to {}", urls.len(), target.display());

        job.parameters
            .insert("LastGenerationTime".to_string(), Utc::now().to_rfc3339());
        job.parameters
            .insert("UrlCount".to_string(), urls.len().to_string());
        Ok(())
    }
}
