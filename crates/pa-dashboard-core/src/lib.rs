//! PA Dashboard Core Library
//!
//! Filtering, pagination, analytics and export for the prior authorization
//! dashboard.
//!
//! # Architecture
//!
//! ```text
//!                      Seed JSON
//!                          │
//!                   [RequestStore: immutable]
//!                          │
//!          ┌───────────────┼───────────────┐
//!          │               │               │
//!          ▼               ▼               ▼
//!      Analytics     Filter/Paginate     Export
//!   (distribution,   (search, status,  (CSV rows,
//!    trends, KPIs,    insurer, page)    text summary)
//!    escalations)          │               │
//!          │               │               ▼
//!          └───────────────┼──────►  ExportSink
//!                          ▼
//!                  Presentation layer
//! ```
//!
//! # Core Principle
//!
//! **The core never mutates a record.** Every view is recomputed from the
//! store on demand.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PaRequest, PaStatus, TimelineEntry)
//! - [`store`]: Immutable request store and seed dataset
//! - [`analytics`]: Status distribution, trends, KPIs, escalation queue
//! - [`filter`]: Request query, stable filtering and pagination
//! - [`export`]: CSV and text summary export
//! - [`config`]: Dashboard configuration

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use analytics::{Analytics, KpiSnapshot, StatusDistribution};
pub use config::{DashboardConfig, ExportScope};
pub use dashboard::Dashboard;
pub use export::{ExportKind, ExportPayload, ExportSink};
pub use filter::{Page, RequestQuery};
pub use models::{PaRequest, PaStatus};
pub use store::RequestStore;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum DashboardError {
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<store::StoreError> for DashboardError {
    fn from(e: store::StoreError) -> Self {
        DashboardError::StoreError(e.to_string())
    }
}

impl From<config::ConfigError> for DashboardError {
    fn from(e: config::ConfigError) -> Self {
        DashboardError::ConfigError(e.to_string())
    }
}

impl From<models::UnknownStatus> for DashboardError {
    fn from(e: models::UnknownStatus) -> Self {
        DashboardError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open the dashboard over the bundled seed dataset.
#[uniffi::export]
pub fn open_seed_dashboard() -> Result<Arc<PaDashboardCore>, DashboardError> {
    let dashboard = Dashboard::seed()?;
    Ok(Arc::new(PaDashboardCore { dashboard }))
}

/// Open the dashboard over a JSON request array, with an optional JSON config.
#[uniffi::export]
pub fn open_dashboard(
    requests_json: String,
    config_json: Option<String>,
) -> Result<Arc<PaDashboardCore>, DashboardError> {
    let store = RequestStore::from_json(&requests_json)?;
    let config = match config_json {
        Some(json) => DashboardConfig::from_json(&json)?,
        None => DashboardConfig::default(),
    };
    Ok(Arc::new(PaDashboardCore {
        dashboard: Dashboard::new(store, config),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Dashboard handle for the presentation layer. Immutable, so no locking.
#[derive(uniffi::Object)]
pub struct PaDashboardCore {
    dashboard: Dashboard,
}

#[uniffi::export]
impl PaDashboardCore {
    // =========================================================================
    // Analytics
    // =========================================================================

    /// Request counts per status, in display order.
    pub fn status_distribution(&self) -> Vec<FfiStatusSlice> {
        self.dashboard
            .analytics()
            .status_distribution()
            .slices()
            .iter()
            .map(|slice| FfiStatusSlice {
                status: slice.status.as_str().to_string(),
                label: slice.label.clone(),
                color: slice.color.clone(),
                count: slice.count as u64,
            })
            .collect()
    }

    /// Daily submission trend series.
    pub fn weekly_trends(&self) -> Vec<FfiTrendPoint> {
        self.dashboard
            .analytics()
            .weekly_trends()
            .into_iter()
            .map(|point| point.into())
            .collect()
    }

    /// Average approval days per insurer.
    pub fn insurer_performance(&self) -> Vec<FfiInsurerPerformance> {
        self.dashboard
            .analytics()
            .insurer_performance()
            .into_iter()
            .map(|row| row.into())
            .collect()
    }

    /// Headline KPIs.
    pub fn kpis(&self) -> FfiKpiSnapshot {
        self.dashboard.analytics().kpis().into()
    }

    /// Landing page counts.
    pub fn overview(&self) -> FfiOverview {
        let overview = self.dashboard.analytics().overview();
        FfiOverview {
            total: overview.total as u64,
            pending: overview.pending as u64,
            approved: overview.approved as u64,
            denied: overview.denied as u64,
        }
    }

    /// Cases requiring human review, with per-priority counts.
    pub fn escalations(&self) -> FfiEscalationQueue {
        let queue = self.dashboard.analytics().escalations();
        FfiEscalationQueue {
            high: queue.high as u64,
            medium: queue.medium as u64,
            low: queue.low as u64,
            cases: queue
                .cases
                .into_iter()
                .map(|case| FfiEscalatedCase {
                    request: case.request.clone().into(),
                    priority: case.priority.as_str().to_string(),
                    priority_label: case.priority.label().to_string(),
                })
                .collect(),
        }
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Insurer filter options.
    pub fn unique_insurers(&self) -> Vec<String> {
        self.dashboard.store().unique_insurers()
    }

    /// Get a request by ID.
    pub fn get_request(&self, id: String) -> Option<FfiPaRequest> {
        self.dashboard.store().get(&id).cloned().map(|r| r.into())
    }

    /// Status history for the detail view.
    pub fn request_timeline(&self, id: String) -> Result<Vec<FfiTimelineEntry>, DashboardError> {
        let request = self
            .dashboard
            .store()
            .get(&id)
            .ok_or_else(|| DashboardError::NotFound(id.clone()))?;
        Ok(request.timeline().into_iter().map(|e| e.into()).collect())
    }

    /// Filter and paginate the request list.
    pub fn query_requests(&self, query: FfiRequestQuery) -> Result<FfiRequestPage, DashboardError> {
        let query = self.build_query(query)?;
        let page = self.dashboard.query(&query);

        Ok(FfiRequestPage {
            showing_label: page.showing_label(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            items: page.items.iter().map(|r| (*r).clone().into()).collect(),
            page: page.page as u32,
            filtered_count: page.filtered_count as u64,
            total_pages: page.total_pages as u32,
            start_index: page.start_index as u64,
            end_index: page.end_index as u64,
        })
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export requests as CSV.
    pub fn export_requests_csv(
        &self,
        query: FfiRequestQuery,
    ) -> Result<FfiExportPayload, DashboardError> {
        let query = self.build_query(query)?;
        let payload = self
            .dashboard
            .export_requests_csv(&query, &chrono::Utc::now());
        log::info!("export: built {}", payload.filename);
        Ok(payload.into())
    }

    /// Export the analytics summary as plain text.
    pub fn export_analytics_summary(&self) -> FfiExportPayload {
        let payload = self.dashboard.export_summary(&chrono::Utc::now());
        log::info!("export: built {}", payload.filename);
        payload.into()
    }

    /// Export the KPI snapshot as JSON.
    pub fn export_kpis_json(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string_pretty(&self.dashboard.analytics().kpis())?)
    }
}

impl PaDashboardCore {
    fn build_query(&self, ffi: FfiRequestQuery) -> Result<RequestQuery, DashboardError> {
        let status = if ffi.status.is_empty() {
            None
        } else {
            Some(ffi.status.parse::<PaStatus>()?)
        };

        Ok(self
            .dashboard
            .new_query()
            .with_search(ffi.search)
            .with_status(status)
            .with_insurer(ffi.insurer)
            .with_page(ffi.page as usize))
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe PA request.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPaRequest {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub procedure_code: String,
    pub procedure_name: String,
    pub insurer_name: String,
    pub status: String,
    pub submitted_date: String,
    pub last_updated: String,
    pub retry_count: u32,
    pub denial_reason: Option<String>,
    pub provider_id: String,
}

impl From<PaRequest> for FfiPaRequest {
    fn from(request: PaRequest) -> Self {
        Self {
            id: request.id,
            patient_id: request.patient_id,
            patient_name: request.patient_name,
            procedure_code: request.procedure_code,
            procedure_name: request.procedure_name,
            insurer_name: request.insurer_name,
            status: request.status.as_str().to_string(),
            submitted_date: request.submitted_date.to_rfc3339(),
            last_updated: request.last_updated.to_rfc3339(),
            retry_count: request.retry_count,
            denial_reason: request.denial_reason,
            provider_id: request.provider_id,
        }
    }
}

/// FFI-safe request query. Empty strings place no constraint.
///
/// `status` must be empty or one of the lowercase status names. Any other
/// value is rejected with [`DashboardError::InvalidInput`] instead of
/// matching nothing.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRequestQuery {
    pub search: String,
    pub status: String,
    pub insurer: String,
    pub page: u32,
}

/// FFI-safe page of requests.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRequestPage {
    pub items: Vec<FfiPaRequest>,
    pub page: u32,
    pub filtered_count: u64,
    pub total_pages: u32,
    pub start_index: u64,
    pub end_index: u64,
    pub showing_label: String,
    pub has_previous: bool,
    pub has_next: bool,
}

/// FFI-safe status distribution slice.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStatusSlice {
    pub status: String,
    pub label: String,
    pub color: String,
    pub count: u64,
}

/// FFI-safe trend point.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTrendPoint {
    pub date: String,
    pub label: String,
    pub submitted: u64,
    pub approved: u64,
    pub denied: u64,
}

impl From<analytics::TrendPoint> for FfiTrendPoint {
    fn from(point: analytics::TrendPoint) -> Self {
        Self {
            date: point.date.to_string(),
            label: point.label,
            submitted: point.submitted as u64,
            approved: point.approved as u64,
            denied: point.denied as u64,
        }
    }
}

/// FFI-safe insurer performance row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInsurerPerformance {
    pub insurer: String,
    pub avg_days: f64,
}

impl From<analytics::InsurerPerformance> for FfiInsurerPerformance {
    fn from(row: analytics::InsurerPerformance) -> Self {
        Self {
            insurer: row.insurer,
            avg_days: row.avg_days,
        }
    }
}

/// FFI-safe KPI snapshot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiKpiSnapshot {
    pub automation_rate: u32,
    pub average_approval_days: f64,
    pub resubmission_success_rate: u32,
    pub hours_saved: f64,
}

impl From<KpiSnapshot> for FfiKpiSnapshot {
    fn from(kpis: KpiSnapshot) -> Self {
        Self {
            automation_rate: kpis.automation_rate,
            average_approval_days: kpis.average_approval_days,
            resubmission_success_rate: kpis.resubmission_success_rate,
            hours_saved: kpis.hours_saved,
        }
    }
}

/// FFI-safe overview counts.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiOverview {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub denied: u64,
}

/// FFI-safe escalated case.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEscalatedCase {
    pub request: FfiPaRequest,
    pub priority: String,
    /// Badge text, e.g. "High Priority"
    pub priority_label: String,
}

/// FFI-safe escalation queue.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEscalationQueue {
    pub cases: Vec<FfiEscalatedCase>,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

/// FFI-safe timeline entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTimelineEntry {
    pub stage: String,
    pub timestamp: String,
    pub actor: String,
    pub notes: String,
}

impl From<models::TimelineEntry> for FfiTimelineEntry {
    fn from(entry: models::TimelineEntry) -> Self {
        Self {
            stage: entry.stage.as_str().to_string(),
            timestamp: entry.timestamp.to_rfc3339(),
            actor: entry.actor,
            notes: entry.notes,
        }
    }
}

/// FFI-safe export payload.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiExportPayload {
    pub filename: String,
    pub mime_type: String,
    pub content: String,
    pub sha256: String,
}

impl From<ExportPayload> for FfiExportPayload {
    fn from(payload: ExportPayload) -> Self {
        Self {
            filename: payload.filename,
            mime_type: payload.mime_type,
            content: payload.content,
            sha256: payload.sha256,
        }
    }
}
