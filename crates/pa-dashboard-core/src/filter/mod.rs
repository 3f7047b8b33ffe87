//! Filtering and pagination of the request list.
//!
//! Pipeline: RequestQuery → stable filter → fixed-size page slice

mod page;
mod query;

pub use page::*;
pub use query::*;

use crate::models::PaRequest;

/// Requests matching a query, in original order.
pub fn filter_requests<'a>(requests: &'a [PaRequest], query: &RequestQuery) -> Vec<&'a PaRequest> {
    let matcher = query.matcher();
    let filtered: Vec<&PaRequest> = requests.iter().filter(|r| matcher.matches(r)).collect();
    log::debug!(
        "filter: {} of {} requests match {:?}",
        filtered.len(),
        requests.len(),
        query
    );
    filtered
}

/// Filter, then slice out the query's page.
pub fn query_requests<'a>(requests: &'a [PaRequest], query: &RequestQuery) -> Page<'a> {
    paginate(filter_requests(requests, query), query.page(), query.page_size())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaStatus;
    use crate::store::RequestStore;

    #[test]
    fn test_unconstrained_query_returns_everything() {
        let store = RequestStore::seed().unwrap();
        let filtered = filter_requests(store.all(), &RequestQuery::default());
        assert_eq!(filtered.len(), store.len());
    }

    #[test]
    fn test_search_matches_any_field_case_insensitively() {
        let store = RequestStore::seed().unwrap();

        let by_name = RequestQuery::default().with_search("JANE");
        let ids: Vec<&str> = filter_requests(store.all(), &by_name)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["PA-002", "PA-008", "PA-012"]);

        let by_patient_id = RequestQuery::default().with_search("p-1005");
        assert_eq!(filter_requests(store.all(), &by_patient_id).len(), 1);

        let by_procedure = RequestQuery::default().with_search("mri");
        assert_eq!(filter_requests(store.all(), &by_procedure).len(), 2);
    }

    #[test]
    fn test_search_does_not_match_other_fields() {
        let store = RequestStore::seed().unwrap();
        // Insurer names and procedure codes are not searched
        let query = RequestQuery::default().with_search("aetna");
        assert!(filter_requests(store.all(), &query).is_empty());
        let query = RequestQuery::default().with_search("70551");
        assert!(filter_requests(store.all(), &query).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let store = RequestStore::seed().unwrap();
        let query = RequestQuery::default()
            .with_status(Some(PaStatus::Approved))
            .with_insurer("Blue Cross");

        let ids: Vec<&str> = filter_requests(store.all(), &query)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["PA-001", "PA-005", "PA-017"]);

        let query = query.with_search("robert");
        let filtered = filter_requests(store.all(), &query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "PA-005");
    }

    #[test]
    fn test_insurer_filter_is_exact() {
        let store = RequestStore::seed().unwrap();
        let query = RequestQuery::default().with_insurer("blue cross");
        assert!(filter_requests(store.all(), &query).is_empty());
    }

    #[test]
    fn test_query_requests_pages_filtered_set() {
        let store = RequestStore::seed().unwrap();

        let first = query_requests(store.all(), &RequestQuery::default());
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items[0].id, "PA-001");

        let second = query_requests(store.all(), &RequestQuery::default().with_page(2));
        assert_eq!(second.items.len(), 10);
        assert_eq!(second.items[0].id, "PA-011");
        assert_eq!(second.showing_label(), "Showing 11 to 20 of 20");
    }
}
