//! Page entity for the CMS page builder.
//!
//! A page moves through a draft/publish lifecycle:
//!
//! ```text
//! create → Draft ──publish──► Published
//!                                │ update
//!                                ▼
//!                     new Draft row (original_page_id set)
//!                                │ publish
//!                                ▼
//!            fields copied onto the original, draft row deleted
//! ```
//!
//! Invariants:
//! - at most one row per lineage has `is_published == true`
//! - a row with `original_page_id` set is always a `Draft`
//! - deletion is soft (`is_deleted`), everywhere

use crate::models::ids::{PageId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageStatus {
    /// Not visible to the public; either brand-new or a pending edit.
    Draft,
    /// Live and publicly visible.
    Published,
    /// Retired from public view without deletion.
    Archived,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Draft => "draft",
            PageStatus::Published => "published",
            PageStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PageStatus::Draft),
            "published" => Ok(PageStatus::Published),
            "archived" => Ok(PageStatus::Archived),
            other => Err(format!("Invalid page status: {}", other)),
        }
    }
}

/// One typed component instance on a page, with its opaque configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageComponent {
    /// Component type name, e.g. "Hero", "TextBlock", "ImageGallery".
    #[serde(rename = "type")]
    pub component_type: String,
    /// Opaque configuration blob interpreted by the frontend renderer.
    pub configuration: serde_json::Value,
    /// Position of the component on the page.
    pub order: i32,
    /// Stable identifier of this component instance.
    pub component_id: String,
}

/// A CMS page row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    pub slug: String,
    pub link_target: String,
    pub status: PageStatus,
    pub components: Vec<PageComponent>,
    /// Incremented with each published revision; starts at 1.
    pub version: i32,
    /// Whether this row is the currently live version of its lineage.
    pub is_published: bool,
    /// Set when this row is a pending draft of a published page.
    pub original_page_id: Option<PageId>,
    /// Unix millis of the last publish, if any.
    pub published_at: Option<i64>,
    pub published_by: Option<UserId>,
    pub created_at: i64,
    pub created_by: Option<UserId>,
    pub updated_at: Option<i64>,
    pub updated_by: Option<UserId>,
    pub is_deleted: bool,
    pub deleted_at: Option<i64>,
}

impl Page {
    /// The id that identifies this page's lineage: the original page's id
    /// for a pending draft, the row's own id otherwise.
    pub fn lineage_id(&self) -> &PageId {
        self.original_page_id.as_ref().unwrap_or(&self.id)
    }

    pub fn is_draft(&self) -> bool {
        self.status == PageStatus::Draft
    }

    /// Marks this row as published in place (first-publish path).
    pub fn publish_in_place(mut self, now: i64, by: Option<UserId>) -> Self {
        self.status = PageStatus::Published;
        self.is_published = true;
        self.published_at = Some(now);
        self.published_by = by.clone();
        self.updated_at = Some(now);
        self.updated_by = by;
        self
    }

    /// Marks this row soft-deleted.
    pub fn soft_delete(mut self, now: i64, by: Option<UserId>) -> Self {
        self.is_deleted = true;
        self.deleted_at = Some(now);
        self.updated_at = Some(now);
        self.updated_by = by;
        self
    }
}
