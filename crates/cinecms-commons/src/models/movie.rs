//! Movie entity for the media catalog.

use crate::models::ids::{MovieId, UserId};
use serde::{Deserialize, Serialize};

/// A movie in the catalog. Addressed by id or by its unique slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub slug: String,
    pub overview: Option<String>,
    /// ISO-8601 date, e.g. "1979-12-07".
    pub release_date: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub poster_path: Option<String>,
    /// Genre names attached to this movie.
    pub genres: Vec<String>,
    pub created_at: i64,
    pub created_by: Option<UserId>,
    pub updated_at: Option<i64>,
    pub is_deleted: bool,
}
