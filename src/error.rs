use std::path::PathBuf;

use thiserror::Error;

/// Reasons a stage form submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Fill in the required fields (*)")]
    MissingField(&'static str),

    #[error("Invalid date format! Use dd.mm.yy (e.g. 15.07.25)")]
    InvalidDate { field: &'static str, input: String },

    #[error("The start date cannot be after the end date!")]
    InvertedRange,
}

/// Failures while building the timeline chart or the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("there are no stages to render")]
    NoStages,

    #[error("date range out of bounds around {0}")]
    DateOutOfRange(chrono::NaiveDate),
}

/// Failures while exporting the timeline to HTML.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Enter a name for the file")]
    MissingFileName,

    #[error("Failed to serialize chart: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
