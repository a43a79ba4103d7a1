//! Page rows and their secondary indexes.
//!
//! Three indexes, all skipping soft-deleted rows:
//!
//! 1. **slug** (non-unique) — `slug` → `[page_id, ...]`. Non-unique because
//!    a pending draft legitimately shares its slug with the published row
//!    it edits; cross-lineage uniqueness is enforced by `PageService`.
//! 2. **link target** (non-unique) — same shape for `link_target`.
//! 3. **draft** (unique) — `original_page_id` → `draft_id`, giving each
//!    lineage at most one pending draft.

use crate::error::Result;
use cinecms_commons::{Page, PageId};
use cinecms_store::{EntityStore, SecondaryIndex, StorageBackend};
use std::sync::Arc;

pub const PAGES_PARTITION: &str = "pages";
pub const PAGES_SLUG_INDEX: &str = "pages_idx_slug";
pub const PAGES_LINK_TARGET_INDEX: &str = "pages_idx_link_target";
pub const PAGES_DRAFT_INDEX: &str = "pages_idx_draft";

pub struct PagesStore {
    backend: Arc<dyn StorageBackend>,
    slug_index: SecondaryIndex<Page>,
    link_target_index: SecondaryIndex<Page>,
    draft_index: SecondaryIndex<Page>,
}

impl EntityStore<PageId, Page> for PagesStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        PAGES_PARTITION
    }
}

impl PagesStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let _ = backend.create_partition(&cinecms_store::Partition::new(PAGES_PARTITION));

        let slug_index = SecondaryIndex::non_unique(backend.clone(), PAGES_SLUG_INDEX, |p: &Page| {
            (!p.is_deleted).then(|| p.slug.as_bytes().to_vec())
        });
        let link_target_index =
            SecondaryIndex::non_unique(backend.clone(), PAGES_LINK_TARGET_INDEX, |p: &Page| {
                (!p.is_deleted).then(|| p.link_target.as_bytes().to_vec())
            });
        let draft_index = SecondaryIndex::unique(backend.clone(), PAGES_DRAFT_INDEX, |p: &Page| {
            if p.is_deleted {
                return None;
            }
            p.original_page_id.as_ref().map(|id| id.as_bytes().to_vec())
        });

        Self {
            backend,
            slug_index,
            link_target_index,
            draft_index,
        }
    }

    /// Inserts a new page row and its index entries.
    pub fn insert(&self, page: &Page) -> Result<()> {
        self.slug_index.put(page.id.as_str(), page, None)?;
        self.link_target_index.put(page.id.as_str(), page, None)?;
        self.draft_index.put(page.id.as_str(), page, None)?;
        self.put(&page.id, page)?;
        Ok(())
    }

    /// Updates a page row, moving index entries whose keys changed.
    pub fn update(&self, old: &Page, new: &Page) -> Result<()> {
        self.slug_index.put(new.id.as_str(), new, Some(old))?;
        self.link_target_index.put(new.id.as_str(), new, Some(old))?;
        self.draft_index.put(new.id.as_str(), new, Some(old))?;
        self.put(&new.id, new)?;
        Ok(())
    }

    /// Removes a page row entirely (used when a published draft is
    /// absorbed into its original). Soft deletion goes through [`update`].
    ///
    /// [`update`]: Self::update
    pub fn remove(&self, page: &Page) -> Result<()> {
        self.slug_index.delete(page.id.as_str(), page)?;
        self.link_target_index.delete(page.id.as_str(), page)?;
        self.draft_index.delete(page.id.as_str(), page)?;
        self.delete(&page.id)?;
        Ok(())
    }

    /// Loads a page by id, treating soft-deleted rows as absent.
    pub fn get_live(&self, id: &PageId) -> Result<Option<Page>> {
        Ok(self.get(id)?.filter(|p| !p.is_deleted))
    }

    /// Ids of non-deleted rows carrying this slug (at most a published row
    /// and its pending draft).
    pub fn find_ids_by_slug(&self, slug: &str) -> Result<Vec<PageId>> {
        let ids = self.slug_index.get_primary_keys(slug.as_bytes())?;
        Ok(ids.into_iter().map(PageId::from).collect())
    }

    pub fn find_ids_by_link_target(&self, link_target: &str) -> Result<Vec<PageId>> {
        let ids = self.link_target_index.get_primary_keys(link_target.as_bytes())?;
        Ok(ids.into_iter().map(PageId::from).collect())
    }

    /// The pending draft of a published page, if one exists.
    pub fn find_draft_of(&self, original_id: &PageId) -> Result<Option<PageId>> {
        let id = self.draft_index.get_primary_key(original_id.as_bytes())?;
        Ok(id.map(PageId::from))
    }

    /// All non-deleted rows.
    pub fn scan_live(&self) -> Result<Vec<Page>> {
        let rows = self.scan_all(None)?;
        Ok(rows
            .into_iter()
            .map(|(_, page)| page)
            .filter(|p| !p.is_deleted)
            .collect())
    }
}
