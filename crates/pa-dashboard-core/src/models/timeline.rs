//! Status timeline shown in the request detail view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stage of a timeline entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStage {
    Submitted,
    Pending,
    Denied,
}

impl TimelineStage {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineStage::Submitted => "submitted",
            TimelineStage::Pending => "pending",
            TimelineStage::Denied => "denied",
        }
    }
}

/// One step in a request's status history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    /// Stage reached
    pub stage: TimelineStage,
    /// When the stage was reached
    pub timestamp: DateTime<Utc>,
    /// Who moved the request into this stage
    pub actor: String,
    /// Free-text notes
    pub notes: String,
}
