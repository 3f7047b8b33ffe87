//! Dashboard configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analytics::{DEFAULT_MINUTES_SAVED_PER_CASE, DEFAULT_TREND_DAYS, MAX_TREND_DAYS};
use crate::filter::DEFAULT_PAGE_SIZE;

const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Page size must be at least 1")]
    ZeroPageSize,

    #[error("Trend days out of range: {0}")]
    InvalidTrendDays(u32),

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("UTC offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which records the CSV export covers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    /// The whole dataset, ignoring active filters
    #[default]
    All,
    /// Every record passing the active filters, across all pages
    Filtered,
}

/// Export rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    /// strftime pattern for dates in CSV rows
    pub date_format: String,
    /// strftime pattern for the summary's generation timestamp
    pub datetime_format: String,
    /// Local time zone as minutes east of UTC
    pub utc_offset_minutes: i32,
    /// Records covered by the CSV export
    pub scope: ExportScope,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".to_string(),
            datetime_format: "%-m/%-d/%Y, %-I:%M:%S %p".to_string(),
            utc_offset_minutes: 0,
            scope: ExportScope::All,
        }
    }
}

impl ExportConfig {
    /// Local time zone.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    /// Short local calendar date.
    pub fn format_date(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.offset())
            .format(&self.date_format)
            .to_string()
    }

    /// Local date and time.
    pub fn format_datetime(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.offset())
            .format(&self.datetime_format)
            .to_string()
    }

    fn validate(&self) -> ConfigResult<()> {
        check_format(&self.date_format)?;
        check_format(&self.datetime_format)?;
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::InvalidOffset(self.utc_offset_minutes));
        }
        Ok(())
    }
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Rows per page in the request list
    pub page_size: usize,
    /// Staff minutes saved by each automated approval
    pub minutes_saved_per_case: u32,
    /// Days covered by the trend chart
    pub trend_days: u32,
    /// Export settings
    pub export: ExportConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            minutes_saved_per_case: DEFAULT_MINUTES_SAVED_PER_CASE,
            trend_days: DEFAULT_TREND_DAYS,
            export: ExportConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config = Self::from_json(&content)?;
        log::info!("config: loaded {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if !(1..=MAX_TREND_DAYS).contains(&self.trend_days) {
            return Err(ConfigError::InvalidTrendDays(self.trend_days));
        }
        self.export.validate()
    }
}

fn check_format(format: &str) -> ConfigResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidFormat(format.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.minutes_saved_per_case, 30);
        assert_eq!(config.export.scope, ExportScope::All);
    }

    #[test]
    fn test_partial_override() {
        let config =
            DashboardConfig::from_json(r#"{"page_size": 25, "export": {"scope": "filtered"}}"#)
                .unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.export.scope, ExportScope::Filtered);
        assert_eq!(config.export.date_format, "%-m/%-d/%Y");
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = DashboardConfig::from_json(r#"{"page_size": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_rejects_bad_trend_days() {
        let err = DashboardConfig::from_json(r#"{"trend_days": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTrendDays(0)));

        let err = DashboardConfig::from_json(r#"{"trend_days": 4000000000}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTrendDays(4_000_000_000)));

        let config = DashboardConfig::from_json(r#"{"trend_days": 366}"#).unwrap();
        assert_eq!(config.trend_days, MAX_TREND_DAYS);
    }

    #[test]
    fn test_rejects_bad_format() {
        let err = DashboardConfig::from_json(r#"{"export": {"date_format": "%Q"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(_)));
    }

    #[test]
    fn test_rejects_bad_offset() {
        let err =
            DashboardConfig::from_json(r#"{"export": {"utc_offset_minutes": 1440}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOffset(1440)));
    }

    #[test]
    fn test_format_date_applies_offset() {
        let timestamp = Utc.with_ymd_and_hms(2025, 10, 20, 3, 0, 0).unwrap();

        let utc = ExportConfig::default();
        assert_eq!(utc.format_date(&timestamp), "10/20/2025");

        let eastern = ExportConfig {
            utc_offset_minutes: -4 * 60,
            ..ExportConfig::default()
        };
        assert_eq!(eastern.format_date(&timestamp), "10/19/2025");
    }

    #[test]
    fn test_format_datetime() {
        let timestamp = Utc.with_ymd_and_hms(2025, 10, 26, 14, 5, 9).unwrap();
        assert_eq!(
            ExportConfig::default().format_datetime(&timestamp),
            "10/26/2025, 2:05:09 PM"
        );
    }

    #[test]
    fn test_load_missing_file() {
        assert!(DashboardConfig::load("/nonexistent/dashboard.json").is_err());
    }
}
