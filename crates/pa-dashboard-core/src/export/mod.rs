//! Export of request lists (CSV) and analytics summaries (plain text).

mod csv;
mod payload;
mod summary;

pub use csv::*;
pub use payload::*;
pub use summary::*;

use thiserror::Error;

/// Export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sink rejected {filename}: {reason}")]
    Sink { filename: String, reason: String },
}

pub type ExportResult<T> = Result<T, ExportError>;
