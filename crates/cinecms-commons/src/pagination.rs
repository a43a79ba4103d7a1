//! Generic pagination container for list endpoints.

use serde::{Deserialize, Serialize};

/// A page of results together with paging metadata.
///
/// `page_number` is 1-based. `total_pages` is derived from `total_count`
/// and `page_size` at construction time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> PaginatedList<T> {
    /// Creates a paginated list from the current page of items and the
    /// total item count across all pages.
    pub fn new(items: Vec<T>, total_count: usize, page_number: usize, page_size: usize) -> Self {
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size);
        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
        }
    }

    /// Slices a full result set into one page.
    pub fn from_full(all: Vec<T>, page_number: usize, page_size: usize) -> Self {
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);
        let total_count = all.len();
        let items: Vec<T> = all
            .into_iter()
            .skip((page_number - 1) * page_size)
            .take(page_size)
            .collect();
        Self::new(items, total_count, page_number, page_size)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Maps the items, keeping the paging metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginatedList<U> {
        PaginatedList {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_full_slices_pages() {
        let list = PaginatedList::from_full((1..=25).collect::<Vec<i32>>(), 2, 10);
        assert_eq!(list.items, (11..=20).collect::<Vec<i32>>());
        assert_eq!(list.total_count, 25);
        assert_eq!(list.total_pages, 3);
        assert!(list.has_previous_page());
        assert!(list.has_next_page());
    }

    #[test]
    fn last_page_is_partial() {
        let list = PaginatedList::from_full((1..=25).collect::<Vec<i32>>(), 3, 10);
        assert_eq!(list.items.len(), 5);
        assert!(!list.has_next_page());
    }

    #[test]
    fn page_number_clamped_to_one() {
        let list = PaginatedList::from_full(vec![1, 2, 3], 0, 10);
        assert_eq!(list.page_number, 1);
        assert_eq!(list.items.len(), 3);
    }
}
