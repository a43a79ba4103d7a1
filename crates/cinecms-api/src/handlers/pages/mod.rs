//! Page endpoints.
//!
//! - `POST /api/pages` — create (admin)
//! - `PUT /api/pages/{id}` — update, copy-on-write for published pages (admin)
//! - `POST /api/pages/{id}/publish` — publish a draft (admin)
//! - `DELETE /api/pages/{id}` — soft delete (admin)
//! - `GET /api/pages/by-slug/{slug}` — cached lookup of published pages
//! - `GET /api/pages/by-link-target/{linkTarget}` — same, by link target
//! - `GET /api/pages` — paginated listing

mod create;
mod delete;
mod get_by_link_target;
mod get_by_slug;
mod list;
mod publish;
mod update;

pub use create::create_page;
pub use delete::delete_page;
pub use get_by_link_target::get_page_by_link_target;
pub use get_by_slug::get_page_by_slug;
pub use list::list_pages;
pub use publish::publish_page;
pub use update::update_page;
