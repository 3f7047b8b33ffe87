//! Filter state for the request list.

use serde::{Deserialize, Serialize};

use crate::models::{PaRequest, PaStatus};

/// Rows per page in the request list.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search text, status and insurer filters plus the current page.
///
/// Empty search text, `None` status and `None` insurer place no constraint.
/// Every setter that changes a filter input moves back to page 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestQuery {
    search: String,
    status: Option<PaStatus>,
    insurer: Option<String>,
    page: usize,
    page_size: usize,
}

impl Default for RequestQuery {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl RequestQuery {
    /// Unconstrained query on page 1.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search: String::new(),
            status: None,
            insurer: None,
            page: 1,
            page_size,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status(&self) -> Option<PaStatus> {
        self.status
    }

    pub fn insurer(&self) -> Option<&str> {
        self.insurer.as_deref()
    }

    /// Current 1-indexed page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the free-text search and reset to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Set the status filter and reset to page 1.
    pub fn set_status(&mut self, status: Option<PaStatus>) {
        self.status = status;
        self.page = 1;
    }

    /// Set the insurer filter and reset to page 1. An empty name clears it.
    pub fn set_insurer(&mut self, insurer: impl Into<String>) {
        let insurer = insurer.into();
        self.insurer = (!insurer.is_empty()).then_some(insurer);
        self.page = 1;
    }

    /// Move to a page without touching the filters.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Clear all three filters at once and reset to page 1.
    pub fn clear(&mut self) {
        self.search.clear();
        self.status = None;
        self.insurer = None;
        self.page = 1;
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    pub fn with_status(mut self, status: Option<PaStatus>) -> Self {
        self.set_status(status);
        self
    }

    pub fn with_insurer(mut self, insurer: impl Into<String>) -> Self {
        self.set_insurer(insurer);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }

    /// True when any of the three filters constrains the result.
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || self.status.is_some() || self.insurer.is_some()
    }

    /// Predicate with the search text lowercased once.
    pub fn matcher(&self) -> QueryMatcher<'_> {
        QueryMatcher {
            needle: self.search.to_lowercase(),
            status: self.status,
            insurer: self.insurer.as_deref(),
        }
    }
}

/// Compiled form of a [`RequestQuery`].
#[derive(Debug, Clone)]
pub struct QueryMatcher<'q> {
    needle: String,
    status: Option<PaStatus>,
    insurer: Option<&'q str>,
}

impl QueryMatcher<'_> {
    pub fn matches(&self, request: &PaRequest) -> bool {
        self.matches_search(request)
            && self.status.map_or(true, |status| request.status == status)
            && self
                .insurer
                .map_or(true, |insurer| request.insurer_name == insurer)
    }

    fn matches_search(&self, request: &PaRequest) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [
            &request.patient_name,
            &request.patient_id,
            &request.procedure_name,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_unconstrained() {
        let query = RequestQuery::default();
        assert!(!query.has_active_filters());
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_setters_reset_page() {
        let mut query = RequestQuery::default().with_page(3);
        query.set_search("smith");
        assert_eq!(query.page(), 1);

        query.set_page(2);
        query.set_status(Some(PaStatus::Denied));
        assert_eq!(query.page(), 1);

        query.set_page(2);
        query.set_insurer("Aetna");
        assert_eq!(query.page(), 1);
        assert!(query.has_active_filters());
    }

    #[test]
    fn test_clear_resets_everything_at_once() {
        let mut query = RequestQuery::default()
            .with_search("doe")
            .with_status(Some(PaStatus::Pending))
            .with_insurer("Cigna")
            .with_page(4);

        query.clear();
        assert_eq!(query, RequestQuery::default());
    }

    #[test]
    fn test_empty_insurer_means_no_constraint() {
        let query = RequestQuery::default().with_insurer("");
        assert_eq!(query.insurer(), None);
        assert!(!query.has_active_filters());
    }
}
