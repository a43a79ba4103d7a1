//! Page request and response models.

use cinecms_commons::{Page, PageComponent, PageStatus};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/pages`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    pub title: String,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    pub slug: String,
    pub link_target: String,
    #[serde(default)]
    pub components: Vec<PageComponent>,
}

/// Body of `PUT /api/pages/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    pub slug: String,
    pub link_target: String,
    #[serde(default)]
    pub components: Vec<PageComponent>,
}

/// Query string of `GET /api/pages`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageListParams {
    #[serde(default = "default_page_number")]
    pub page_number: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub search_term: Option<String>,
    /// "draft" | "published" | "archived"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub include_drafts: bool,
}

fn default_page_number() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

/// Query string of the by-slug / by-link-target lookups.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    #[serde(default)]
    pub include_drafts: bool,
}

/// Page representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub slug: String,
    pub link_target: String,
    pub status: PageStatus,
    pub components: Vec<PageComponent>,
    pub version: i32,
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_by: Option<String>,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.to_string(),
            title: page.title,
            seo_title: page.seo_title,
            meta_description: page.meta_description,
            slug: page.slug,
            link_target: page.link_target,
            status: page.status,
            components: page.components,
            version: page.version,
            is_published: page.is_published,
            original_page_id: page.original_page_id.map(|id| id.to_string()),
            published_at: page.published_at,
            published_by: page.published_by.map(|u| u.to_string()),
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}
