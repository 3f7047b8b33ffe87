//! Scalar KPIs for the analytics page.

use serde::{Deserialize, Serialize};

use super::rounding::{percent, round_tenths};
use super::Analytics;
use crate::models::{PaRequest, PaStatus};

/// The four headline KPIs computed together.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KpiSnapshot {
    /// Percent of requests approved without resubmission
    pub automation_rate: u32,
    /// Mean days from submission to approval
    pub average_approval_days: f64,
    /// Percent of resubmitted requests that ended approved
    pub resubmission_success_rate: u32,
    /// Staff hours saved by automated approvals
    pub hours_saved: f64,
}

impl Analytics<'_> {
    fn automated_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|request| request.is_automated_approval())
            .count()
    }

    /// Percent of all requests approved on first submission.
    pub fn automation_rate(&self) -> u32 {
        percent(self.automated_count(), self.requests.len())
    }

    /// Mean ceiling-day approval time over approved requests, one decimal.
    pub fn average_approval_time(&self) -> f64 {
        let approved: Vec<&PaRequest> = self
            .requests
            .iter()
            .filter(|request| request.status == PaStatus::Approved)
            .collect();
        average_elapsed_days(&approved)
    }

    /// Percent of resubmitted requests that are now approved.
    pub fn resubmission_success_rate(&self) -> u32 {
        let (resubmitted, successful) = self
            .requests
            .iter()
            .filter(|request| request.was_resubmitted())
            .fold((0, 0), |(total, approved), request| {
                let hit = usize::from(request.status == PaStatus::Approved);
                (total + 1, approved + hit)
            });
        percent(successful, resubmitted)
    }

    /// Hours saved by automated approvals, one decimal.
    pub fn time_saved(&self) -> f64 {
        let minutes = self.automated_count() as i64 * i64::from(self.minutes_saved_per_case);
        round_tenths(minutes, 60)
    }

    /// All scalar KPIs.
    pub fn kpis(&self) -> KpiSnapshot {
        let snapshot = KpiSnapshot {
            automation_rate: self.automation_rate(),
            average_approval_days: self.average_approval_time(),
            resubmission_success_rate: self.resubmission_success_rate(),
            hours_saved: self.time_saved(),
        };
        log::debug!(
            "analytics: kpis over {} requests: {:?}",
            self.requests.len(),
            snapshot
        );
        snapshot
    }
}

/// Mean of [`PaRequest::elapsed_days`], one decimal. 0 for an empty slice.
pub(crate) fn average_elapsed_days(requests: &[&PaRequest]) -> f64 {
    let total_days: i64 = requests.iter().map(|request| request.elapsed_days()).sum();
    round_tenths(total_days, requests.len() as i64)
}
