//! Mounted table state and its transition operations.

use tracing::debug;

use crate::filter::{FilterState, FilterTag};
use crate::model::CacheRecord;
use crate::pager::PageState;

/// The cache table for one cache manager.
///
/// Owns the inputs supplied at mount (container name and the full cache
/// list, immutable until remount) plus the filter and page state. Every
/// mutation runs to completion and leaves the derived filtered list
/// consistent before the next render.
#[derive(Debug, Clone)]
pub struct CacheTable {
    container: String,
    caches: Vec<CacheRecord>,
    filter: FilterState,
    pager: PageState,
    /// Derived: `filter` applied to `caches`. Rebuilt on every filter change.
    filtered: Vec<CacheRecord>,
}

impl CacheTable {
    /// Mount a table for a cache manager with its full cache list.
    pub fn mount(container: impl Into<String>, caches: Vec<CacheRecord>) -> Self {
        let container = container.into();
        debug!(container = %container, caches = caches.len(), "cache table mounted");
        Self {
            filtered: caches.clone(),
            container,
            caches,
            filter: FilterState::new(),
            pager: PageState::default(),
        }
    }

    /// Toggle a filter tag and re-filter from the full list.
    pub fn toggle_filter(&mut self, tag: FilterTag) {
        self.filter.toggle(tag);
        self.refilter();
    }

    /// Deselect every tag. The table shows the full list again.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.refilter();
    }

    /// Jump to a page. The page size is unchanged.
    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }

    /// Change the page size, keeping the current page.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.pager.set_per_page(per_page);
    }

    /// Records visible on the current page, filter applied first.
    pub fn window(&self) -> &[CacheRecord] {
        self.pager.window(&self.filtered)
    }

    /// Number of records surviving the filter. Feeds the pagination widget.
    pub fn item_count(&self) -> usize {
        self.filtered.len()
    }

    /// Number of caches supplied at mount, before filtering.
    pub fn total(&self) -> usize {
        self.caches.len()
    }

    /// Cache manager this table was mounted for.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Selected filter tags in toggle order.
    pub fn selected_tags(&self) -> &[FilterTag] {
        self.filter.tags()
    }

    /// Current page (1-based).
    pub fn page(&self) -> usize {
        self.pager.page()
    }

    /// Rows per page.
    pub fn per_page(&self) -> usize {
        self.pager.per_page()
    }

    /// Number of pages the filtered list spans.
    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.filtered.len())
    }

    fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.caches);
        debug!(
            container = %self.container,
            matched = self.filtered.len(),
            "filter recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CacheType;

    fn cache(name: &str, cache_type: CacheType, bounded: bool) -> CacheRecord {
        CacheRecord {
            name: name.to_string(),
            cache_type,
            health: "HEALTHY".to_string(),
            bounded,
            indexed: false,
            persistent: false,
            transactional: false,
            secured: false,
            has_remote_backup: false,
        }
    }

    fn mounted() -> CacheTable {
        let caches: Vec<CacheRecord> = (0..12)
            .map(|i| {
                let cache_type = if i % 4 == 0 {
                    CacheType::Local
                } else {
                    CacheType::Distributed
                };
                cache(&format!("cache-{i}"), cache_type, i % 2 == 0)
            })
            .collect();
        CacheTable::mount("default", caches)
    }

    #[test]
    fn test_mount_shows_everything() {
        let table = mounted();
        assert_eq!(table.item_count(), 12);
        assert_eq!(table.total(), 12);
        assert_eq!(table.window().len(), 10);
        assert_eq!(table.page_count(), 2);
    }

    #[test]
    fn test_second_page_holds_the_rest() {
        let mut table = mounted();
        table.set_page(2);
        let window = table.window();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].name, "cache-10");
    }

    #[test]
    fn test_filter_applies_before_paging() {
        let mut table = mounted();
        table.set_page(2);
        table.toggle_filter(FilterTag::Type(CacheType::Local));

        // Three Local caches fit on one page; page 2 is now out of range.
        assert_eq!(table.item_count(), 3);
        assert!(table.window().is_empty());

        table.set_page(1);
        assert_eq!(table.window().len(), 3);
        assert!(
            table
                .window()
                .iter()
                .all(|c| c.cache_type == CacheType::Local)
        );
    }

    #[test]
    fn test_toggle_twice_restores_window() {
        let mut table = mounted();
        let before: Vec<CacheRecord> = table.window().to_vec();

        table.toggle_filter(FilterTag::Type(CacheType::Local));
        table.toggle_filter(FilterTag::Type(CacheType::Local));

        assert_eq!(table.window(), before.as_slice());
        assert!(table.selected_tags().is_empty());
    }

    #[test]
    fn test_clear_filters() {
        let mut table = mounted();
        table.toggle_filter(FilterTag::Type(CacheType::Local));
        assert_eq!(table.item_count(), 3);

        table.clear_filters();
        assert_eq!(table.item_count(), 12);
        assert_eq!(table.window().len(), 10);
    }

    #[test]
    fn test_per_page_change_keeps_page() {
        let mut table = mounted();
        table.set_page(2);
        table.set_per_page(4);

        // No page re-normalization: page 2 of 4 shows records 4..8.
        assert_eq!(table.page(), 2);
        let window = table.window();
        assert_eq!(window.len(), 4);
        assert_eq!(window[0].name, "cache-4");
    }
}
