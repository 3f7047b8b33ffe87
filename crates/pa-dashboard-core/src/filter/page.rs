//! Fixed-size pages over a filtered request list.

use serde::Serialize;

use crate::models::PaRequest;

/// One page of filtered requests plus the metadata the list footer needs.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    /// Requests on this page
    pub items: Vec<&'a PaRequest>,
    /// 1-indexed page number that was requested
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Number of requests that passed the filters
    pub filtered_count: usize,
    /// `ceil(filtered_count / page_size)`, never less than 1
    pub total_pages: usize,
    /// Zero-based index of the first item on this page
    pub start_index: usize,
    /// Zero-based exclusive end index
    pub end_index: usize,
}

impl Page<'_> {
    /// Footer text, e.g. "Showing 11 to 20 of 25".
    pub fn showing_label(&self) -> String {
        if self.items.is_empty() {
            return format!("Showing 0 to 0 of {}", self.filtered_count);
        }
        format!(
            "Showing {} to {} of {}",
            self.start_index + 1,
            self.end_index,
            self.filtered_count
        )
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the requested page exists.
    pub fn in_range(&self) -> bool {
        self.page <= self.total_pages
    }
}

/// Slice a filtered list into the given 1-indexed page.
///
/// Page 0 and page size 0 are clamped to 1. A page past the end yields no
/// items, with `start_index == end_index == filtered_count`.
pub fn paginate<'a>(filtered: Vec<&'a PaRequest>, page: usize, page_size: usize) -> Page<'a> {
    if page == 0 {
        log::warn!("paginate: page 0 requested, clamping to 1");
    }
    if page_size == 0 {
        log::warn!("paginate: page size 0 requested, clamping to 1");
    }
    let page = page.max(1);
    let page_size = page_size.max(1);

    let filtered_count = filtered.len();
    let total_pages = filtered_count.div_ceil(page_size).max(1);

    let start_index = (page - 1).saturating_mul(page_size).min(filtered_count);
    let end_index = start_index.saturating_add(page_size).min(filtered_count);

    let items = filtered[start_index..end_index].to_vec();

    Page {
        items,
        page,
        page_size,
        filtered_count,
        total_pages,
        start_index,
        end_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RequestStore;

    #[test]
    fn test_partial_last_page() {
        let store = RequestStore::seed().unwrap();
        let all: Vec<&PaRequest> = store.all().iter().collect();

        let page = paginate(all, 3, 8);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 4);
        assert_eq!((page.start_index, page.end_index), (16, 20));
        assert_eq!(page.showing_label(), "Showing 17 to 20 of 20");
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let store = RequestStore::seed().unwrap();
        let all: Vec<&PaRequest> = store.all().iter().collect();

        let page = paginate(all, 5, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
        assert_eq!((page.start_index, page.end_index), (20, 20));
        assert!(!page.in_range());
        assert_eq!(page.showing_label(), "Showing 0 to 0 of 20");
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let page = paginate(Vec::new(), 1, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.filtered_count, 0);
        assert!(page.in_range());
        assert_eq!(page.showing_label(), "Showing 0 to 0 of 0");
    }

    #[test]
    fn test_zero_inputs_are_clamped() {
        let store = RequestStore::seed().unwrap();
        let all: Vec<&PaRequest> = store.all().iter().collect();

        let page = paginate(all, 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 20);
    }
}
