//! Movie request and response models.

use cinecms_commons::Movie;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/movies`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Query string of `GET /api/movies`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListParams {
    #[serde(default = "default_page_number")]
    pub page_number: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub search_term: Option<String>,
}

fn default_page_number() -> usize {
    1
}

fn default_page_size() -> usize {
    20
}

/// Movie representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    pub genres: Vec<String>,
    pub created_at: i64,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title,
            slug: movie.slug,
            overview: movie.overview,
            release_date: movie.release_date,
            runtime_minutes: movie.runtime_minutes,
            poster_path: movie.poster_path,
            genres: movie.genres,
            created_at: movie.created_at,
        }
    }
}
