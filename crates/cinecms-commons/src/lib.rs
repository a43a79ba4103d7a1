//! # cinecms-commons
//!
//! Shared types for CineCMS: typed identifiers, entity models, status
//! enums, the `StorageKey` trait, and pagination helpers.
//!
//! This crate is dependency-light on purpose so every other crate in the
//! workspace can use these types without pulling in storage or web
//! dependencies.

pub mod models;
pub mod pagination;
pub mod storage_key;

pub use models::ids::{JobId, MovieId, PageId, UserId};
pub use models::{
    FeatureFlag, Genre, Job, JobFilter, JobScheduleType, JobStatus, JobType, Movie, Page,
    PageComponent, PageStatus,
};
pub use pagination::PaginatedList;
pub use storage_key::StorageKey;

/// Current Unix timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
