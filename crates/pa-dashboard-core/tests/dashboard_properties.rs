//! Property tests for filtering, pagination, analytics and export.

use chrono::{Duration, TimeZone, Utc};
use pa_dashboard_core::analytics::Analytics;
use pa_dashboard_core::config::ExportConfig;
use pa_dashboard_core::export::requests_to_csv;
use pa_dashboard_core::filter::{filter_requests, paginate, RequestQuery};
use pa_dashboard_core::models::{PaRequest, PaStatus};
use proptest::prelude::*;

const NAMES: [&str; 6] = [
    "Jane Smith",
    "John Doe",
    "Mary Janeway",
    "Robert Brown",
    "Sarah Williams",
    "Linda White",
];
const INSURERS: [&str; 4] = ["Blue Cross", "Aetna", "United Healthcare", "Cigna"];
const PROCEDURES: [&str; 4] = ["Brain MRI", "Knee Arthroscopy", "Echocardiogram", "PET/CT Scan"];

fn request_strategy() -> impl Strategy<Value = PaRequest> {
    (
        0..NAMES.len(),
        0..INSURERS.len(),
        0..PROCEDURES.len(),
        0..PaStatus::ALL.len(),
        0u32..5,
        0i64..20_000,
        0i64..20_000,
    )
        .prop_map(|(name, insurer, procedure, status, retry_count, start, elapsed)| {
            let submitted = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap()
                + Duration::minutes(start);
            PaRequest {
                id: String::new(),
                patient_id: format!("P-{}", 1000 + name),
                patient_name: NAMES[name].to_string(),
                procedure_code: format!("{}", 70000 + procedure),
                procedure_name: PROCEDURES[procedure].to_string(),
                insurer_name: INSURERS[insurer].to_string(),
                status: PaStatus::ALL[status],
                submitted_date: submitted,
                last_updated: submitted + Duration::minutes(elapsed),
                retry_count,
                denial_reason: None,
                provider_id: "PRV-1".to_string(),
            }
        })
}

fn collection_strategy() -> impl Strategy<Value = Vec<PaRequest>> {
    prop::collection::vec(request_strategy(), 0..60).prop_map(|mut requests| {
        for (i, request) in requests.iter_mut().enumerate() {
            request.id = format!("PA-{i:03}");
        }
        requests
    })
}

fn query_strategy() -> impl Strategy<Value = RequestQuery> {
    (
        prop::sample::select(vec!["", "jane", "SMITH", "mri", "p-100", "zzz"]),
        prop::option::of(0..PaStatus::ALL.len()),
        prop::option::of(0..INSURERS.len()),
    )
        .prop_map(|(search, status, insurer)| {
            RequestQuery::default()
                .with_search(search)
                .with_status(status.map(|i| PaStatus::ALL[i]))
                .with_insurer(insurer.map_or("", |i| INSURERS[i]))
        })
}

proptest! {
    #[test]
    fn distribution_sums_to_length(requests in collection_strategy()) {
        let distribution = Analytics::new(&requests).status_distribution();
        prop_assert_eq!(distribution.total(), requests.len());
        prop_assert_eq!(distribution.slices().len(), 5);
    }

    #[test]
    fn rates_are_pure_and_bounded(requests in collection_strategy()) {
        let analytics = Analytics::new(&requests);
        let automation = analytics.automation_rate();
        let resubmission = analytics.resubmission_success_rate();

        prop_assert_eq!(automation, analytics.automation_rate());
        prop_assert_eq!(resubmission, analytics.resubmission_success_rate());
        prop_assert!(automation <= 100);
        prop_assert!(resubmission <= 100);
        prop_assert!(analytics.average_approval_time() >= 0.0);
    }

    #[test]
    fn filtered_count_never_exceeds_total(
        requests in collection_strategy(),
        query in query_strategy(),
    ) {
        let filtered = filter_requests(&requests, &query);
        prop_assert!(filtered.len() <= requests.len());

        // Filtering is stable: matches keep their relative order
        let positions: Vec<usize> = filtered
            .iter()
            .map(|r| requests.iter().position(|x| x.id == r.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let mut cleared = query.clone();
        cleared.clear();
        prop_assert_eq!(filter_requests(&requests, &cleared).len(), requests.len());
    }

    #[test]
    fn pages_cover_filtered_set_exactly(
        requests in collection_strategy(),
        query in query_strategy(),
        page_size in 1usize..15,
    ) {
        let filtered = filter_requests(&requests, &query);
        let count = filtered.len();
        let total_pages = paginate(filtered.clone(), 1, page_size).total_pages;
        prop_assert_eq!(total_pages, count.div_ceil(page_size).max(1));

        let mut seen = Vec::new();
        for page_number in 1..=total_pages {
            let page = paginate(filtered.clone(), page_number, page_size);
            prop_assert!(page.items.len() <= page_size);
            prop_assert_eq!(page.end_index - page.start_index, page.items.len());
            seen.extend(page.items.iter().map(|r| r.id.clone()));
        }
        prop_assert_eq!(seen.len(), count);

        let past_end = paginate(filtered, total_pages + 1, page_size);
        prop_assert!(past_end.items.is_empty());
        prop_assert_eq!(past_end.total_pages, total_pages);
    }

    #[test]
    fn csv_has_one_row_per_request(requests in collection_strategy()) {
        let csv = requests_to_csv(&requests, &ExportConfig::default());
        let lines: Vec<&str> = csv.lines().collect();

        prop_assert_eq!(lines.len(), requests.len() + 1);
        prop_assert_eq!(
            lines[0],
            "Patient ID,Patient Name,Procedure Code,Procedure Name,Insurer,Status,Submitted Date,Last Updated,Retry Count,Denial Reason"
        );
        prop_assert!(lines[1..].iter().all(|line| line.matches("\",\"").count() == 9));
    }
}
