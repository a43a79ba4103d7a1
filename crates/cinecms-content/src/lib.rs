//! # cinecms-content
//!
//! Content domain of CineCMS: the page draft/publish lifecycle, the movie
//! catalog, feature flags, and the content cache they share.
//!
//! The page lifecycle is the interesting part. A published page is never
//! edited in place: updates spawn a copy-on-write draft row pointing back
//! at the original, and publishing that draft copies its fields onto the
//! original and removes the draft. See [`pages::PageService`].

pub mod cache;
pub mod error;
pub mod flags;
pub mod genres;
pub mod movies;
pub mod pages;
pub mod search;
pub mod validation;

pub use cache::{ContentCache, InMemoryCache};
pub use error::ContentError;
pub use flags::FeatureFlagService;
pub use genres::GenresStore;
pub use movies::{MovieService, NewMovie};
pub use pages::{ListPagesQuery, NewPage, PageService, UpdatePage};
pub use search::{SearchDocument, SearchDocumentType};

/// Every storage partition the content domain uses. Handed to
/// `RocksDbInit` at startup so all column families exist before first use.
pub const PARTITIONS: &[&str] = &[
    pages::PAGES_PARTITION,
    pages::PAGES_SLUG_INDEX,
    pages::PAGES_LINK_TARGET_INDEX,
    pages::PAGES_DRAFT_INDEX,
    movies::MOVIES_PARTITION,
    movies::MOVIES_SLUG_INDEX,
    genres::GENRES_PARTITION,
    flags::FLAGS_PARTITION,
];
