//! Error types for termcal.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a schedule.
///
/// All of these are fatal: the tool aborts on the first one encountered,
/// with no partial output.
#[derive(Error, Debug)]
pub enum TermcalError {
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Malformed schedule document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Event #{index} is missing required fields (title/days/start/end)")]
    MissingField { index: usize },

    #[error("Event #{index} has invalid day '{day}'. Use MO,TU,WE,TH,FR,SA,SU")]
    InvalidDay { index: usize, day: String },

    #[error("Event #{index} has invalid time '{value}'. Expected HH:MM")]
    InvalidTime { index: usize, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for termcal operations.
pub type TermcalResult<T> = Result<T, TermcalError>;
