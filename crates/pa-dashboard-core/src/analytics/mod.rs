//! Derived analytics over the request collection.
//!
//! Every view is recomputed from the injected slice on demand; nothing is
//! cached and no record is mutated.

mod distribution;
mod escalation;
mod kpi;
mod rounding;
mod trends;

pub use distribution::*;
pub use escalation::*;
pub use kpi::*;
pub use rounding::*;
pub use trends::*;

use crate::models::PaRequest;

/// Staff time saved per automated approval.
pub const DEFAULT_MINUTES_SAVED_PER_CASE: u32 = 30;

/// Length of the trend series in days.
pub const DEFAULT_TREND_DAYS: u32 = 7;

/// Longest trend series that will be generated.
pub const MAX_TREND_DAYS: u32 = 366;

/// Read-only analytics over a request collection.
#[derive(Debug, Clone, Copy)]
pub struct Analytics<'a> {
    requests: &'a [PaRequest],
    minutes_saved_per_case: u32,
    trend_days: u32,
}

impl<'a> Analytics<'a> {
    /// Create analytics over a request collection with default settings.
    pub fn new(requests: &'a [PaRequest]) -> Self {
        Self {
            requests,
            minutes_saved_per_case: DEFAULT_MINUTES_SAVED_PER_CASE,
            trend_days: DEFAULT_TREND_DAYS,
        }
    }

    /// Override the per-case time allowance used by [`Analytics::time_saved`].
    pub fn with_minutes_saved_per_case(mut self, minutes: u32) -> Self {
        self.minutes_saved_per_case = minutes;
        self
    }

    /// Override the number of days in the trend series.
    pub fn with_trend_days(mut self, days: u32) -> Self {
        self.trend_days = days;
        self
    }

    /// The underlying collection.
    pub fn requests(&self) -> &'a [PaRequest] {
        self.requests
    }
}
