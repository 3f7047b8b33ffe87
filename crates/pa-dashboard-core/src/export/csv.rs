//! CSV export of PA requests.

use crate::config::ExportConfig;
use crate::models::PaRequest;

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 10] = [
    "Patient ID",
    "Patient Name",
    "Procedure Code",
    "Procedure Name",
    "Insurer",
    "Status",
    "Submitted Date",
    "Last Updated",
    "Retry Count",
    "Denial Reason",
];

/// Rendered in place of a missing denial reason.
pub const MISSING_VALUE: &str = "N/A";

/// Render requests as CSV, one row per request in iteration order.
///
/// The header row is unquoted. Every data field is quoted, with embedded
/// quotes doubled. Rows are joined by `\n` with no trailing newline.
pub fn requests_to_csv<'a, I>(requests: I, config: &ExportConfig) -> String
where
    I: IntoIterator<Item = &'a PaRequest>,
{
    let mut csv = CSV_HEADERS.join(",");

    for request in requests {
        let fields = [
            request.patient_id.clone(),
            request.patient_name.clone(),
            request.procedure_code.clone(),
            request.procedure_name.clone(),
            request.insurer_name.clone(),
            request.status.to_string(),
            config.format_date(&request.submitted_date),
            config.format_date(&request.last_updated),
            request.retry_count.to_string(),
            request
                .denial_reason
                .clone()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        ];

        csv.push('\n');
        csv.push_str(
            &fields
                .iter()
                .map(|field| quote_csv(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    csv
}

/// Wrap a field in quotes, doubling any embedded quotes.
fn quote_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
