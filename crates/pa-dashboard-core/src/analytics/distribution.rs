//! Status distribution and overview counts.

use serde::{Deserialize, Serialize};

use super::rounding::percent;
use super::Analytics;
use crate::models::PaStatus;

/// Count of requests in one status, with chart metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusSlice {
    /// Status
    pub status: PaStatus,
    /// Display label
    pub label: String,
    /// Chart colour
    pub color: String,
    /// Number of requests in this status
    pub count: usize,
}

/// Request counts for every status, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusDistribution {
    slices: Vec<StatusSlice>,
}

impl StatusDistribution {
    /// Slices in display order. All five statuses are always present.
    pub fn slices(&self) -> &[StatusSlice] {
        &self.slices
    }

    /// Count for a status.
    pub fn count(&self, status: PaStatus) -> usize {
        self.slices
            .iter()
            .find(|slice| slice.status == status)
            .map_or(0, |slice| slice.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|slice| slice.count).sum()
    }

    /// Share of a status as a rounded percentage of the total.
    pub fn percent(&self, status: PaStatus) -> u32 {
        percent(self.count(status), self.total())
    }
}

/// Headline counts for the dashboard landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewMetrics {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub denied: usize,
}

impl Analytics<'_> {
    /// Partition requests by status.
    pub fn status_distribution(&self) -> StatusDistribution {
        let mut counts = [0usize; PaStatus::ALL.len()];
        for request in self.requests {
            counts[request.status as usize] += 1;
        }

        let slices = PaStatus::ALL
            .into_iter()
            .zip(counts)
            .map(|(status, count)| StatusSlice {
                status,
                label: status.label().to_string(),
                color: status.color().to_string(),
                count,
            })
            .collect();

        StatusDistribution { slices }
    }

    /// Total, pending, approved and denied counts.
    pub fn overview(&self) -> OverviewMetrics {
        let distribution = self.status_distribution();
        OverviewMetrics {
            total: self.requests.len(),
            pending: distribution.count(PaStatus::Pending),
            approved: distribution.count(PaStatus::Approved),
            denied: distribution.count(PaStatus::Denied),
        }
    }
}
