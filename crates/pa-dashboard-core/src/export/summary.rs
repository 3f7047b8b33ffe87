//! Plain-text analytics summary report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{percent, Analytics, KpiSnapshot, StatusDistribution};
use crate::config::ExportConfig;
use crate::models::PaStatus;

/// Aggregates captured for one summary report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSummary {
    /// When the summary was generated
    pub generated_at: DateTime<Utc>,
    /// Number of requests covered
    pub total: usize,
    /// Per-status counts
    pub distribution: StatusDistribution,
    /// Headline KPIs
    pub kpis: KpiSnapshot,
}

impl AnalyticsSummary {
    /// Capture the current analytics.
    pub fn from_analytics(analytics: &Analytics<'_>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            total: analytics.requests().len(),
            distribution: analytics.status_distribution(),
            kpis: analytics.kpis(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render the fixed-layout text report.
    pub fn to_text(&self, config: &ExportConfig) -> String {
        let kpis = &self.kpis;
        let mut text = String::new();

        text.push_str("PA AUTOMATION ANALYTICS SUMMARY\n");
        text.push_str(&format!(
            "Generated: {}\n",
            config.format_datetime(&self.generated_at)
        ));
        text.push_str("================================\n\n");

        text.push_str("OVERVIEW:\n");
        text.push_str(&format!("- Total PA Requests: {}\n", self.total));
        for status in PaStatus::ALL {
            text.push_str(&format!(
                "- {}: {} ({}%)\n",
                status.label(),
                self.distribution.count(status),
                percent(self.distribution.count(status), self.total)
            ));
        }

        text.push_str("\nPERFORMANCE METRICS:\n");
        text.push_str(&format!("- Automation Rate: {}%\n", kpis.automation_rate));
        text.push_str(&format!(
            "- Average Approval Time: {} days\n",
            kpis.average_approval_days
        ));
        text.push_str(&format!(
            "- Resubmission Success Rate: {}%\n",
            kpis.resubmission_success_rate
        ));
        text.push_str(&format!("- Time Saved This Week: {} hours\n", kpis.hours_saved));

        text.push_str("\nKEY INSIGHTS:\n");
        text.push_str(&format!(
            "✓ Automation is working: {}% of PAs handled automatically\n",
            kpis.automation_rate
        ));
        text.push_str(&format!(
            "✓ Faster approvals: Average time is {} days\n",
            kpis.average_approval_days
        ));
        text.push_str(&format!(
            "✓ High success rate: {}% of resubmissions ultimately approved\n",
            kpis.resubmission_success_rate
        ));

        text
    }
}
