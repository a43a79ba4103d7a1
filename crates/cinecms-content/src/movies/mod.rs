//! Movie catalog storage and service.

mod movie_service;
mod movies_store;

pub use movie_service::{MovieService, NewMovie};
pub use movies_store::{MoviesStore, MOVIES_PARTITION, MOVIES_SLUG_INDEX};
