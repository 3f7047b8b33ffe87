//! Export payloads and the sinks that receive them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{ExportError, ExportResult};

/// Kind of export file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExportKind {
    /// Request list as CSV
    RequestsCsv,
    /// Analytics summary as plain text
    AnalyticsSummary,
}

impl ExportKind {
    /// File name for an export created at `at`, dated in UTC.
    pub fn filename(&self, at: &DateTime<Utc>) -> String {
        let date = at.format("%Y-%m-%d");
        match self {
            ExportKind::RequestsCsv => format!("pa-requests-{date}.csv"),
            ExportKind::AnalyticsSummary => format!("analytics-summary-{date}.txt"),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportKind::RequestsCsv => "text/csv;charset=utf-8",
            ExportKind::AnalyticsSummary => "text/plain;charset=utf-8",
        }
    }
}

/// A formatted export ready for download.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportPayload {
    /// What was exported
    pub kind: ExportKind,
    /// Suggested file name
    pub filename: String,
    /// MIME type including charset
    pub mime_type: String,
    /// File contents
    pub content: String,
    /// Hex SHA-256 of `content`
    pub sha256: String,
}

impl ExportPayload {
    pub fn new(kind: ExportKind, content: String, at: &DateTime<Utc>) -> Self {
        let sha256 = hex::encode(Sha256::digest(content.as_bytes()));
        Self {
            kind,
            filename: kind.filename(at),
            mime_type: kind.mime_type().to_string(),
            content,
            sha256,
        }
    }

    /// Check the content against the recorded digest.
    pub fn verify(&self) -> bool {
        hex::encode(Sha256::digest(self.content.as_bytes())) == self.sha256
    }

    /// Export to JSON.
    pub fn to_json(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Receiver for finished exports, e.g. a browser download or a file writer.
pub trait ExportSink {
    fn accept(&mut self, payload: ExportPayload) -> ExportResult<()>;
}

/// Sink that keeps payloads in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    payloads: Vec<ExportPayload>,
    limit: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject payloads once `limit` have been accepted.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            payloads: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn payloads(&self) -> &[ExportPayload] {
        &self.payloads
    }

    pub fn into_payloads(self) -> Vec<ExportPayload> {
        self.payloads
    }
}

impl ExportSink for MemorySink {
    fn accept(&mut self, payload: ExportPayload) -> ExportResult<()> {
        if self.limit.is_some_and(|limit| self.payloads.len() >= limit) {
            return Err(ExportError::Sink {
                filename: payload.filename,
                reason: "sink is full".to_string(),
            });
        }
        self.payloads.push(payload);
        Ok(())
    }
}
