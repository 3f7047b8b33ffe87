//! Dashboard facade tying the store, engines and exporters together.

use chrono::{DateTime, Utc};

use crate::analytics::Analytics;
use crate::config::{DashboardConfig, ExportScope};
use crate::export::{
    requests_to_csv, AnalyticsSummary, ExportKind, ExportPayload, ExportResult, ExportSink,
};
use crate::filter::{filter_requests, query_requests, Page, RequestQuery};
use crate::store::{RequestStore, StoreResult};

/// Read-only dashboard over an immutable request store.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: RequestStore,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(store: RequestStore, config: DashboardConfig) -> Self {
        Self { store, config }
    }

    /// Dashboard over the bundled seed dataset with default settings.
    pub fn seed() -> StoreResult<Self> {
        Ok(Self::new(RequestStore::seed()?, DashboardConfig::default()))
    }

    pub fn store(&self) -> &RequestStore {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Analytics over the full dataset.
    pub fn analytics(&self) -> Analytics<'_> {
        Analytics::new(self.store.all())
            .with_minutes_saved_per_case(self.config.minutes_saved_per_case)
            .with_trend_days(self.config.trend_days)
    }

    /// Unconstrained query using the configured page size.
    pub fn new_query(&self) -> RequestQuery {
        RequestQuery::with_page_size(self.config.page_size)
    }

    /// The visible page for a query.
    pub fn query(&self, query: &RequestQuery) -> Page<'_> {
        query_requests(self.store.all(), query)
    }

    /// CSV of the requests covered by the configured export scope.
    pub fn export_requests_csv(&self, query: &RequestQuery, at: &DateTime<Utc>) -> ExportPayload {
        let content = match self.config.export.scope {
            ExportScope::All => requests_to_csv(self.store.all(), &self.config.export),
            ExportScope::Filtered => {
                requests_to_csv(filter_requests(self.store.all(), query), &self.config.export)
            }
        };
        ExportPayload::new(ExportKind::RequestsCsv, content, at)
    }

    /// Text summary of the current analytics.
    pub fn export_summary(&self, at: &DateTime<Utc>) -> ExportPayload {
        let summary = AnalyticsSummary::from_analytics(&self.analytics(), *at);
        ExportPayload::new(
            ExportKind::AnalyticsSummary,
            summary.to_text(&self.config.export),
            at,
        )
    }

    /// Hand a payload to a sink.
    pub fn deliver<S: ExportSink>(&self, sink: &mut S, payload: ExportPayload) -> ExportResult<()> {
        log::info!(
            "export: delivering {} ({} bytes, sha256 {})",
            payload.filename,
            payload.content.len(),
            payload.sha256
        );
        sink.accept(payload)
    }
}
