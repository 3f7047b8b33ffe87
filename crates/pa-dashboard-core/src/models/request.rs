//! Prior authorization request record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::PaStatus;
use super::timeline::{TimelineEntry, TimelineStage};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A single prior authorization request.
///
/// Records are created once from seed data and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaRequest {
    /// Unique request ID
    pub id: String,
    /// Patient identifier
    pub patient_id: String,
    /// Patient display name
    pub patient_name: String,
    /// Procedure code (CPT/HCPCS)
    pub procedure_code: String,
    /// Procedure display name
    pub procedure_name: String,
    /// Insurer the request was submitted to
    pub insurer_name: String,
    /// Current status
    pub status: PaStatus,
    /// Submission timestamp
    pub submitted_date: DateTime<Utc>,
    /// Last status change, never earlier than `submitted_date`
    pub last_updated: DateTime<Utc>,
    /// Number of resubmission attempts
    pub retry_count: u32,
    /// Reason given by the insurer on denial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denial_reason: Option<String>,
    /// Requesting provider
    pub provider_id: String,
}

impl PaRequest {
    /// Approved on the first submission.
    pub fn is_automated_approval(&self) -> bool {
        self.status == PaStatus::Approved && self.retry_count == 0
    }

    /// Has been resubmitted at least once.
    pub fn was_resubmitted(&self) -> bool {
        self.retry_count > 0
    }

    /// Whole days from submission to last update. Any partial day counts as a
    /// full day.
    pub fn elapsed_days(&self) -> i64 {
        let millis = (self.last_updated - self.submitted_date).num_milliseconds();
        let days = millis.div_euclid(MILLIS_PER_DAY);
        if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
            days + 1
        } else {
            days
        }
    }

    /// Status history for the detail view.
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        let mut entries = vec![
            TimelineEntry {
                stage: TimelineStage::Submitted,
                timestamp: self.submitted_date,
                actor: "System".to_string(),
                notes: "PA request submitted to insurer".to_string(),
            },
            TimelineEntry {
                stage: TimelineStage::Pending,
                timestamp: self.last_updated,
                actor: "Insurance Reviewer".to_string(),
                notes: "Under review".to_string(),
            },
        ];

        if self.status == PaStatus::Denied {
            if let Some(reason) = &self.denial_reason {
                entries.push(TimelineEntry {
                    stage: TimelineStage::Denied,
                    timestamp: self.last_updated,
                    actor: "Insurance Reviewer".to_string(),
                    notes: reason.clone(),
                });
            }
        }

        entries
    }
}
