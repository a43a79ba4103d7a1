//! # cinecms-core
//!
//! Application context: builds every store, service, the content cache,
//! and the job executor registry from a storage backend and the server
//! configuration.

pub mod app_context;

pub use app_context::AppContext;
