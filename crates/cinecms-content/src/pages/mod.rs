//! Page storage and lifecycle.

mod page_service;
mod pages_store;

pub use page_service::{ListPagesQuery, NewPage, PageService, UpdatePage};
pub use pages_store::{
    PagesStore, PAGES_DRAFT_INDEX, PAGES_LINK_TARGET_INDEX, PAGES_PARTITION, PAGES_SLUG_INDEX,
};
