//! Escalation queue for cases requiring human review.

use serde::{Deserialize, Serialize};

use super::Analytics;
use crate::models::{PaRequest, PaStatus};

/// Review priority derived from the number of resubmissions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Priority for a retry count: 3+ is high, 2 is medium, otherwise low.
    pub fn from_retry_count(retry_count: u32) -> Self {
        match retry_count {
            3.. => Priority::High,
            2 => Priority::Medium,
            _ => Priority::Low,
        }
    }

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Badge text for the escalations view.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

/// A request in the escalation queue.
#[derive(Debug, Clone, Serialize)]
pub struct EscalatedCase<'a> {
    pub request: &'a PaRequest,
    pub priority: Priority,
}

/// Escalated cases in collection order, with per-priority counts.
#[derive(Debug, Clone, Serialize)]
pub struct EscalationQueue<'a> {
    pub cases: Vec<EscalatedCase<'a>>,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl EscalationQueue<'_> {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Escalated, or denied after more than one resubmission.
pub fn needs_human_review(request: &PaRequest) -> bool {
    request.status == PaStatus::Escalated
        || (request.status == PaStatus::Denied && request.retry_count > 1)
}

impl<'a> Analytics<'a> {
    /// Cases requiring human review.
    pub fn escalations(&self) -> EscalationQueue<'a> {
        let cases: Vec<EscalatedCase<'a>> = self
            .requests
            .iter()
            .filter(|request| needs_human_review(request))
            .map(|request| EscalatedCase {
                request,
                priority: Priority::from_retry_count(request.retry_count),
            })
            .collect();

        let count = |priority: Priority| cases.iter().filter(|c| c.priority == priority).count();
        let (high, medium, low) = (
            count(Priority::High),
            count(Priority::Medium),
            count(Priority::Low),
        );

        EscalationQueue {
            cases,
            high,
            medium,
            low,
        }
    }
}
