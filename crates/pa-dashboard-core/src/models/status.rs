//! PA request status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a PA request.
///
/// Statuses are mutually exclusive. Declaration order is the fixed display
/// order used by distributions, filters and exports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PaStatus {
    /// Submitted, awaiting an insurer decision
    Pending,
    /// Approved by the insurer
    Approved,
    /// Denied by the insurer
    Denied,
    /// Resubmitted after a denial
    Resubmitted,
    /// Flagged for human review
    Escalated,
}

/// Returned when a string does not name a known status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown PA status: {0}")]
pub struct UnknownStatus(pub String);

impl PaStatus {
    /// All statuses in display order.
    pub const ALL: [PaStatus; 5] = [
        PaStatus::Pending,
        PaStatus::Approved,
        PaStatus::Denied,
        PaStatus::Resubmitted,
        PaStatus::Escalated,
    ];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaStatus::Pending => "pending",
            PaStatus::Approved => "approved",
            PaStatus::Denied => "denied",
            PaStatus::Resubmitted => "resubmitted",
            PaStatus::Escalated => "escalated",
        }
    }

    /// Capitalised display label.
    pub fn label(&self) -> &'static str {
        match self {
            PaStatus::Pending => "Pending",
            PaStatus::Approved => "Approved",
            PaStatus::Denied => "Denied",
            PaStatus::Resubmitted => "Resubmitted",
            PaStatus::Escalated => "Escalated",
        }
    }

    /// Chart colour (hex RGB).
    pub fn color(&self) -> &'static str {
        match self {
            PaStatus::Pending => "#f59e0b",
            PaStatus::Approved => "#10b981",
            PaStatus::Denied => "#ef4444",
            PaStatus::Resubmitted => "#3b82f6",
            PaStatus::Escalated => "#8b5cf6",
        }
    }
}

impl fmt::Display for PaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
