//! Page lifecycle manager.
//!
//! Owns creation, copy-on-write updates, publishing, cached lookups, and
//! listing of pages. Uniqueness of slug and link target is checked here,
//! against non-deleted rows only, with a lineage carve-out: a pending
//! draft and the published row it edits may share these keys.

use crate::cache::ContentCache;
use crate::error::{ContentError, Result};
use crate::pages::pages_store::PagesStore;
use crate::validation;
use cinecms_commons::{
    now_millis, Page, PageComponent, PageId, PageStatus, PaginatedList, UserId,
};
use cinecms_store::StorageBackend;
use std::sync::Arc;
use std::time::Duration;

const SLUG_CACHE_KEY: &str = "page:slug:";
const LINK_TARGET_CACHE_KEY: &str = "page:link-target:";

/// Input for [`PageService::create`].
#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: String,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    pub slug: String,
    pub link_target: String,
    pub components: Vec<PageComponent>,
}

/// Input for [`PageService::update`].
#[derive(Debug, Clone)]
pub struct UpdatePage {
    pub title: String,
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    pub slug: String,
    pub link_target: String,
    pub components: Vec<PageComponent>,
}

/// Parameters for [`PageService::list`].
#[derive(Debug, Clone, Default)]
pub struct ListPagesQuery {
    pub page_number: usize,
    pub page_size: usize,
    pub search_term: Option<String>,
    pub status: Option<PageStatus>,
    pub include_drafts: bool,
}

pub struct PageService {
    store: PagesStore,
    cache: Arc<dyn ContentCache>,
    cache_ttl: Duration,
}

impl PageService {
    pub fn new(
        backend: Arc<dyn StorageBackend>,
        cache: Arc<dyn ContentCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            store: PagesStore::new(backend),
            cache,
            cache_ttl,
        }
    }

    /// Creates a new page in Draft status.
    pub fn create(&self, input: NewPage, actor: Option<UserId>) -> Result<Page> {
        let mut errors = validation::validate_page_fields(
            &input.title,
            input.seo_title.as_deref(),
            input.meta_description.as_deref(),
            &input.slug,
            &input.link_target,
            &input.components,
        );
        self.check_uniqueness(&input.slug, &input.link_target, None, &mut errors)?;
        if !errors.is_empty() {
            return Err(ContentError::Validation(errors));
        }

        let now = now_millis();
        let page = Page {
            id: PageId::generate(),
            title: input.title,
            seo_title: input.seo_title,
            meta_description: input.meta_description,
            slug: input.slug,
            link_target: input.link_target,
            status: PageStatus::Draft,
            components: input.components,
            version: 1,
            is_published: false,
            original_page_id: None,
            published_at: None,
            published_by: None,
            created_at: now,
            created_by: actor,
            updated_at: None,
            updated_by: None,
            is_deleted: false,
            deleted_at: None,
        };

        self.store.insert(&page)?;
        log::info!("Created page {} (slug '{}')", page.id, page.slug);
        Ok(page)
    }

    /// Updates a page.
    ///
    /// Editing a published page never touches that row: the changes land on
    /// the lineage's pending draft, which is created here on first edit.
    /// Editing a draft mutates it in place.
    pub fn update(&self, id: &PageId, input: UpdatePage, actor: Option<UserId>) -> Result<Page> {
        let page = self
            .store
            .get_live(id)?
            .ok_or_else(|| ContentError::not_found(format!("Page not found: {}", id)))?;

        let mut errors = validation::validate_page_fields(
            &input.title,
            input.seo_title.as_deref(),
            input.meta_description.as_deref(),
            &input.slug,
            &input.link_target,
            &input.components,
        );
        self.check_uniqueness(
            &input.slug,
            &input.link_target,
            Some(page.lineage_id()),
            &mut errors,
        )?;
        if !errors.is_empty() {
            return Err(ContentError::Validation(errors));
        }

        let now = now_millis();

        if page.is_published {
            // Copy-on-write: changes go onto the lineage's pending draft.
            if let Some(draft_id) = self.store.find_draft_of(&page.id)? {
                let draft = self.store.get_live(&draft_id)?.ok_or_else(|| {
                    ContentError::Storage(format!("Draft index points at missing row {}", draft_id))
                })?;
                let updated = apply_update(draft.clone(), input, now, actor);
                self.store.update(&draft, &updated)?;
                return Ok(updated);
            }

            let draft = Page {
                id: PageId::generate(),
                title: input.title,
                seo_title: input.seo_title,
                meta_description: input.meta_description,
                slug: input.slug,
                link_target: input.link_target,
                status: PageStatus::Draft,
                components: input.components,
                version: page.version + 1,
                is_published: false,
                original_page_id: Some(page.id.clone()),
                published_at: None,
                published_by: None,
                created_at: now,
                created_by: actor,
                updated_at: None,
                updated_by: None,
                is_deleted: false,
                deleted_at: None,
            };
            self.store.insert(&draft)?;
            log::info!("Created draft {} for published page {}", draft.id, page.id);
            return Ok(draft);
        }

        let updated = apply_update(page.clone(), input, now, actor);
        self.store.update(&page, &updated)?;
        Ok(updated)
    }

    /// Publishes a draft.
    ///
    /// A draft with an original page is absorbed into it: fields and
    /// version are copied over, the original goes live, and the draft row
    /// is removed. A standalone draft goes live in place.
    pub fn publish(&self, id: &PageId, actor: Option<UserId>) -> Result<Page> {
        let page = self
            .store
            .get_live(id)?
            .ok_or_else(|| ContentError::not_found(format!("Page not found: {}", id)))?;

        if page.status != PageStatus::Draft {
            return Err(ContentError::InvalidState(
                "Only draft pages can be published.".to_string(),
            ));
        }

        let now = now_millis();

        if let Some(original_id) = page.original_page_id.clone() {
            let original = self.store.get_live(&original_id)?.ok_or_else(|| {
                ContentError::not_found(format!("Original page not found: {}", original_id))
            })?;

            // Remove the draft first so its shared index entries never
            // shadow the original's updated ones.
            self.store.remove(&page)?;

            let mut published = original.clone();
            published.title = page.title;
            published.seo_title = page.seo_title;
            published.meta_description = page.meta_description;
            published.slug = page.slug;
            published.link_target = page.link_target;
            published.components = page.components;
            published.version = page.version;
            published = published.publish_in_place(now, actor);

            self.store.update(&original, &published)?;
            log::info!(
                "Published draft {} onto page {} (v{})",
                id,
                published.id,
                published.version
            );
            return Ok(published);
        }

        let published = page.clone().publish_in_place(now, actor);
        self.store.update(&page, &published)?;
        log::info!("Published page {} (v{})", published.id, published.version);
        Ok(published)
    }

    /// Looks up a page by slug.
    ///
    /// Published lookups go through the cache; draft lookups always hit
    /// the store and prefer the lineage's pending draft when one exists.
    pub fn get_by_slug(&self, slug: &str, include_drafts: bool) -> Result<Page> {
        let cache_key = format!("{}{}", SLUG_CACHE_KEY, slug);
        self.lookup(
            &cache_key,
            include_drafts,
            || self.store.find_ids_by_slug(slug),
            |page| page.slug == slug,
            || format!("Page not found for slug: {}", slug),
        )
    }

    /// Looks up a page by link target. Same caching rules as
    /// [`Self::get_by_slug`].
    pub fn get_by_link_target(&self, link_target: &str, include_drafts: bool) -> Result<Page> {
        let cache_key = format!("{}{}", LINK_TARGET_CACHE_KEY, link_target);
        self.lookup(
            &cache_key,
            include_drafts,
            || self.store.find_ids_by_link_target(link_target),
            |page| page.link_target == link_target,
            || format!("Page not found for link target: {}", link_target),
        )
    }

    fn lookup<F, M, N>(
        &self,
        cache_key: &str,
        include_drafts: bool,
        find_ids: F,
        matches: M,
        not_found: N,
    ) -> Result<Page>
    where
        F: Fn() -> Result<Vec<PageId>>,
        M: Fn(&Page) -> bool,
        N: Fn() -> String,
    {
        if !include_drafts {
            if let Some(cached) = self.cache.get(cache_key) {
                match serde_json::from_str::<Page>(&cached) {
                    Ok(page) => return Ok(page),
                    Err(e) => {
                        log::warn!("Dropping undecodable cache entry {}: {}", cache_key, e);
                        self.cache.remove(cache_key);
                    }
                }
            }
        }

        let mut candidates: Vec<Page> = Vec::new();
        for id in find_ids()? {
            if let Some(page) = self.store.get_live(&id)? {
                if matches(&page) {
                    candidates.push(page);
                }
            }
        }

        let page = if include_drafts {
            // Prefer the pending draft: that is the version an editor
            // previewing unpublished changes wants to see.
            candidates
                .iter()
                .find(|p| p.original_page_id.is_some())
                .or_else(|| candidates.first())
                .cloned()
        } else {
            candidates.into_iter().find(|p| p.status == PageStatus::Published)
        };

        let page = page.ok_or_else(|| ContentError::not_found(not_found()))?;

        if !include_drafts && page.status == PageStatus::Published {
            match serde_json::to_string(&page) {
                Ok(json) => self.cache.set(cache_key, json, self.cache_ttl),
                Err(e) => log::warn!("Failed to cache page {}: {}", page.id, e),
            }
        }

        Ok(page)
    }

    /// Paginated page listing with search and status filters.
    ///
    /// Published rows sort first, then alphabetically by title.
    pub fn list(&self, query: ListPagesQuery) -> Result<PaginatedList<Page>> {
        let page_number = query.page_number.max(1);
        let page_size = query.page_size.clamp(1, 100);

        let mut pages = self.store.scan_live()?;

        if !query.include_drafts {
            pages.retain(|p| p.status == PageStatus::Published);
        }
        if let Some(status) = query.status {
            pages.retain(|p| p.status == status);
        }
        if let Some(term) = query
            .search_term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            let term = term.to_lowercase();
            pages.retain(|p| {
                p.title.to_lowercase().contains(&term)
                    || p.seo_title
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&term))
                    || p.slug.to_lowercase().contains(&term)
                    || p.link_target.to_lowercase().contains(&term)
            });
        }

        pages.sort_by(|a, b| {
            let a_key = (a.status != PageStatus::Published, a.title.to_lowercase());
            let b_key = (b.status != PageStatus::Published, b.title.to_lowercase());
            a_key.cmp(&b_key)
        });

        Ok(PaginatedList::from_full(pages, page_number, page_size))
    }

    /// Soft-deletes a page, freeing its slug and link target for reuse.
    pub fn delete(&self, id: &PageId, actor: Option<UserId>) -> Result<()> {
        let page = self
            .store
            .get_live(id)?
            .ok_or_else(|| ContentError::not_found(format!("Page not found: {}", id)))?;

        let deleted = page.clone().soft_delete(now_millis(), actor);
        self.store.update(&page, &deleted)?;
        log::info!("Soft-deleted page {}", id);
        Ok(())
    }

    /// Every published page, for the sitemap and search-index executors.
    pub fn published_pages(&self) -> Result<Vec<Page>> {
        let mut pages = self.store.scan_live()?;
        pages.retain(|p| p.status == PageStatus::Published);
        Ok(pages)
    }

    /// Checks that `slug` and `link_target` are unused by any non-deleted
    /// page outside `exclude_lineage`, appending a message per conflict.
    fn check_uniqueness(
        &self,
        slug: &str,
        link_target: &str,
        exclude_lineage: Option<&PageId>,
        errors: &mut Vec<String>,
    ) -> Result<()> {
        if self.has_conflict(self.store.find_ids_by_slug(slug)?, exclude_lineage)? {
            errors.push("A page with this slug already exists.".to_string());
        }
        if self.has_conflict(
            self.store.find_ids_by_link_target(link_target)?,
            exclude_lineage,
        )? {
            errors.push("A page with this link target already exists.".to_string());
        }
        Ok(())
    }

    fn has_conflict(&self, ids: Vec<PageId>, exclude_lineage: Option<&PageId>) -> Result<bool> {
        for id in ids {
            if let Some(page) = self.store.get_live(&id)? {
                let same_lineage = exclude_lineage.is_some_and(|l| page.lineage_id() == l);
                if !same_lineage {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

fn apply_update(mut page: Page, input: UpdatePage, now: i64, actor: Option<UserId>) -> Page {
    page.title = input.title;
    page.seo_title = input.seo_title;
    page.meta_description = input.meta_description;
    page.slug = input.slug;
    page.link_target = input.link_target;
    page.components = input.components;
    page.updated_at = Some(now);
    page.updated_by = actor;
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCache;
    use cinecms_store::test_utils::InMemoryBackend;

    fn service() -> PageService {
        PageService::new(
            Arc::new(InMemoryBackend::new()),
            Arc::new(InMemoryCache::new()),
            Duration::from_secs(3600),
        )
    }

    fn new_page(slug: &str, link_target: &str) -> NewPage {
        NewPage {
            title: format!("Page {}", slug),
            seo_title: None,
            meta_description: None,
            slug: slug.to_string(),
            link_target: link_target.to_string(),
            components: vec![],
        }
    }

    fn update_with_slug(slug: &str, link_target: &str) -> UpdatePage {
        UpdatePage {
            title: format!("Page {}", slug),
            seo_title: None,
            meta_description: None,
            slug: slug.to_string(),
            link_target: link_target.to_string(),
            components: vec![],
        }
    }

    #[test]
    fn create_starts_as_draft() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();

        assert_eq!(page.status, PageStatus::Draft);
        assert!(!page.is_published);
        assert_eq!(page.version, 1);
        assert!(page.original_page_id.is_none());
    }

    #[test]
    fn create_rejects_bad_slug_and_duplicate() {
        let service = service();
        let err = service.create(new_page("Bad Slug", "X"), None).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));

        service.create(new_page("about-us", "ABOUT"), None).unwrap();
        let err = service.create(new_page("about-us", "OTHER"), None).unwrap_err();
        match err {
            ContentError::Validation(errors) => {
                assert_eq!(errors, vec!["A page with this slug already exists.".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn duplicate_link_target_is_rejected() {
        let service = service();
        service.create(new_page("one", "TARGET"), None).unwrap();
        let err = service.create(new_page("two", "TARGET"), None).unwrap_err();
        match err {
            ContentError::Validation(errors) => {
                assert_eq!(
                    errors,
                    vec!["A page with this link target already exists.".to_string()]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn update_draft_mutates_in_place() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();

        let updated = service
            .update(&page.id, update_with_slug("about-us-2", "ABOUT"), None)
            .unwrap();

        assert_eq!(updated.id, page.id);
        assert_eq!(updated.slug, "about-us-2");
        assert_eq!(updated.version, 1);
        // Old slug must be free again
        service.create(new_page("about-us", "ABOUT2"), None).unwrap();
    }

    #[test]
    fn update_published_creates_linked_draft() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();
        let published = service.publish(&page.id, None).unwrap();

        let draft = service
            .update(&published.id, update_with_slug("about-us-2", "ABOUT"), None)
            .unwrap();

        assert_ne!(draft.id, published.id);
        assert_eq!(draft.original_page_id, Some(published.id.clone()));
        assert_eq!(draft.version, published.version + 1);
        assert_eq!(draft.status, PageStatus::Draft);

        // Original row untouched
        let original = service.get_by_slug("about-us", false).unwrap();
        assert_eq!(original.id, published.id);
        assert_eq!(original.slug, "about-us");
        assert!(original.is_published);
    }

    #[test]
    fn second_update_of_published_page_reuses_the_draft() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();
        let published = service.publish(&page.id, None).unwrap();

        let draft1 = service
            .update(&published.id, update_with_slug("about-us-2", "ABOUT"), None)
            .unwrap();
        let draft2 = service
            .update(&published.id, update_with_slug("about-us-3", "ABOUT"), None)
            .unwrap();

        assert_eq!(draft1.id, draft2.id);
        assert_eq!(draft2.slug, "about-us-3");
        assert_eq!(draft2.version, published.version + 1);
    }

    #[test]
    fn publish_first_time_flips_in_place() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();
        let published = service.publish(&page.id, Some(UserId::new("admin"))).unwrap();

        assert_eq!(published.id, page.id);
        assert_eq!(published.status, PageStatus::Published);
        assert!(published.is_published);
        assert!(published.published_at.is_some());
        assert_eq!(published.published_by, Some(UserId::new("admin")));
    }

    #[test]
    fn publish_rejects_non_draft() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();
        service.publish(&page.id, None).unwrap();

        let err = service.publish(&page.id, None).unwrap_err();
        assert!(matches!(err, ContentError::InvalidState(_)));
    }

    #[test]
    fn publish_missing_page_is_not_found() {
        let service = service();
        let err = service.publish(&PageId::new("nope"), None).unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
    }

    /// The full copy-on-write scenario: create → publish → update →
    /// publish leaves one row carrying the new slug.
    #[test]
    fn full_draft_publish_cycle_keeps_one_row_per_lineage() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();
        let published = service.publish(&page.id, None).unwrap();

        let draft = service
            .update(&published.id, update_with_slug("about-us-2", "ABOUT"), None)
            .unwrap();
        let republished = service.publish(&draft.id, None).unwrap();

        // Fields copied onto the original row, draft gone
        assert_eq!(republished.id, published.id);
        assert_eq!(republished.slug, "about-us-2");
        assert_eq!(republished.version, 2);
        assert!(republished.is_published);

        let all = service
            .list(ListPagesQuery {
                page_number: 1,
                page_size: 100,
                include_drafts: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(all.items.len(), 1);
        assert_eq!(all.items[0].id, published.id);

        // At most one published row in the lineage, and the old slug is gone
        assert!(service.get_by_slug("about-us", true).is_err());
    }

    #[test]
    fn draft_lookup_bypasses_cache_and_prefers_pending_draft() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();
        let published = service.publish(&page.id, None).unwrap();
        // Warm the cache
        service.get_by_slug("about-us", false).unwrap();

        let draft = service
            .update(&published.id, update_with_slug("about-us", "ABOUT"), None)
            .unwrap();

        let preview = service.get_by_slug("about-us", true).unwrap();
        assert_eq!(preview.id, draft.id);

        let public = service.get_by_slug("about-us", false).unwrap();
        assert_eq!(public.id, published.id);
    }

    #[test]
    fn published_lookup_is_served_from_cache_within_ttl() {
        let backend = Arc::new(InMemoryBackend::new());
        let cache = Arc::new(InMemoryCache::new());
        let service = PageService::new(
            backend.clone(),
            cache.clone(),
            Duration::from_secs(3600),
        );

        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();
        service.publish(&page.id, None).unwrap();

        let first = service.get_by_slug("about-us", false).unwrap();
        assert_eq!(cache.len(), 1);

        // Mutate the cached entry to prove subsequent reads come from it
        let mut stale = first.clone();
        stale.title = "From cache".to_string();
        cache.set(
            "page:slug:about-us",
            serde_json::to_string(&stale).unwrap(),
            Duration::from_secs(3600),
        );

        let second = service.get_by_slug("about-us", false).unwrap();
        assert_eq!(second.title, "From cache");
    }

    #[test]
    fn get_by_link_target_finds_published_page() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();

        // Draft not visible without include_drafts
        assert!(service.get_by_link_target("ABOUT", false).is_err());
        assert_eq!(service.get_by_link_target("ABOUT", true).unwrap().id, page.id);

        service.publish(&page.id, None).unwrap();
        assert_eq!(service.get_by_link_target("ABOUT", false).unwrap().id, page.id);
    }

    #[test]
    fn list_orders_published_first_then_title() {
        let service = service();
        let zebra = service.create(new_page("zebra", "Z"), None).unwrap();
        service.publish(&zebra.id, None).unwrap();
        service.create(new_page("apple", "A"), None).unwrap();
        let mango = service.create(new_page("mango", "M"), None).unwrap();
        service.publish(&mango.id, None).unwrap();

        let list = service
            .list(ListPagesQuery {
                page_number: 1,
                page_size: 10,
                include_drafts: true,
                ..Default::default()
            })
            .unwrap();

        let slugs: Vec<&str> = list.items.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["mango", "zebra", "apple"]);
    }

    #[test]
    fn list_search_matches_slug_and_title() {
        let service = service();
        service.create(new_page("about-us", "ABOUT"), None).unwrap();
        service.create(new_page("contact", "CONTACT"), None).unwrap();

        let list = service
            .list(ListPagesQuery {
                page_number: 1,
                page_size: 10,
                search_term: Some("ABOUT".to_string()),
                include_drafts: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].slug, "about-us");
    }

    #[test]
    fn soft_delete_frees_slug_for_reuse() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();
        service.delete(&page.id, None).unwrap();

        assert!(service.get_by_slug("about-us", true).is_err());
        // Slug and link target are reusable
        service.create(new_page("about-us", "ABOUT"), None).unwrap();
    }

    #[test]
    fn keeping_the_slug_on_a_published_page_update_is_allowed() {
        let service = service();
        let page = service.create(new_page("about-us", "ABOUT"), None).unwrap();
        let published = service.publish(&page.id, None).unwrap();

        // Same slug and link target as the published original: no conflict
        let draft = service
            .update(&published.id, update_with_slug("about-us", "ABOUT"), None)
            .unwrap();
        assert_eq!(draft.slug, "about-us");

        // But another page still cannot claim them
        let err = service.create(new_page("about-us", "X"), None).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }
}
