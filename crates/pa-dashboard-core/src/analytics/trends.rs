//! Daily submission trends and per-insurer approval times.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::kpi::average_elapsed_days;
use super::{Analytics, MAX_TREND_DAYS};
use crate::models::{PaRequest, PaStatus};

/// Submissions and outcomes for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendPoint {
    /// Calendar day (UTC)
    pub date: NaiveDate,
    /// Short axis label, e.g. "Oct 19"
    pub label: String,
    /// Requests submitted that day
    pub submitted: usize,
    /// Of those, currently approved
    pub approved: usize,
    /// Of those, currently denied
    pub denied: usize,
}

/// Mean approval time for one insurer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsurerPerformance {
    pub insurer: String,
    /// Mean ceiling-day approval time, one decimal; 0 with no approvals
    pub avg_days: f64,
    /// Approved requests the average is taken over
    pub approved_count: usize,
}

impl Analytics<'_> {
    /// Consecutive daily points ending on the latest submission day.
    ///
    /// The series length is capped at [`MAX_TREND_DAYS`].
    pub fn weekly_trends(&self) -> Vec<TrendPoint> {
        let Some(last_day) = self
            .requests
            .iter()
            .map(|request| request.submitted_date.date_naive())
            .max()
        else {
            return Vec::new();
        };

        if self.trend_days > MAX_TREND_DAYS {
            log::warn!(
                "trends: {} days requested, capping at {MAX_TREND_DAYS}",
                self.trend_days
            );
        }
        let days = self.trend_days.min(MAX_TREND_DAYS);

        let mut points: Vec<TrendPoint> = (0..u64::from(days))
            .rev()
            .filter_map(|offset| last_day.checked_sub_days(Days::new(offset)))
            .map(|day| TrendPoint {
                date: day,
                label: day.format("%b %-d").to_string(),
                submitted: 0,
                approved: 0,
                denied: 0,
            })
            .collect();
        let Some(first_day) = points.first().map(|point| point.date) else {
            return points;
        };

        for request in self.requests {
            let offset = (request.submitted_date.date_naive() - first_day).num_days();
            let Some(point) = usize::try_from(offset).ok().and_then(|i| points.get_mut(i)) else {
                continue;
            };
            point.submitted += 1;
            match request.status {
                PaStatus::Approved => point.approved += 1,
                PaStatus::Denied => point.denied += 1,
                _ => {}
            }
        }

        points
    }

    /// Average approval time per insurer, in order of first appearance.
    pub fn insurer_performance(&self) -> Vec<InsurerPerformance> {
        let mut insurers: Vec<&str> = Vec::new();
        for request in self.requests {
            if !insurers.contains(&request.insurer_name.as_str()) {
                insurers.push(&request.insurer_name);
            }
        }

        insurers
            .into_iter()
            .map(|insurer| {
                let approved: Vec<&PaRequest> = self
                    .requests
                    .iter()
                    .filter(|r| r.insurer_name == insurer && r.status == PaStatus::Approved)
                    .collect();

                InsurerPerformance {
                    insurer: insurer.to_string(),
                    avg_days: average_elapsed_days(&approved),
                    approved_count: approved.len(),
                }
            })
            .collect()
    }
}
