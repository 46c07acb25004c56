use crate::layout::Point;
use thiserror::Error;

/// A canvas was requested whose corners do not describe a rectangle.
///
/// This is a caller bug (degenerate or non-positive dimensions), never a
/// condition to retry or recover from.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CanvasError {
    #[error(
        "canvas precondition violated: origin ({}, {}) must lie strictly below and left of termination ({}, {})",
        .origin.abscissa(),
        .origin.ordinate(),
        .termination.abscissa(),
        .termination.ordinate()
    )]
    Precondition { origin: Point, termination: Point },
}

#[derive(Error, Debug)]
pub enum JacketError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("malformed input: row {row} is missing required field '{field}'")]
    MissingField { row: usize, field: String },
    #[error("malformed input: row {row} field '{field}' is not a number: '{value}'")]
    InvalidNumber {
        row: usize,
        field: String,
        value: String,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No rows to lay out")]
    NoRows,
}

impl JacketError {
    /// True for errors caused by missing or non-numeric input fields.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            JacketError::MissingField { .. } | JacketError::InvalidNumber { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, JacketError>;
