//! Search index document model.
//!
//! The UpdateSearchIndex job flattens movies and published pages into
//! these documents and caches the serialized set under `"search-index"`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchDocumentType {
    Movie,
    Page,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    pub id: String,
    pub doc_type: SearchDocumentType,
    pub title: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub url: String,
    /// Unix millis of the source row's last modification.
    pub last_modified: i64,
}
