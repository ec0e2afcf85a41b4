//! Error types for domain model construction and selection edits.

/// Result type for building domain values.
pub type ModelResult<T> = Result<T, ModelError>;

/// Result type for selection edits.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// A raw record could not be turned into a valid domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Day name outside Monday..Friday.
    #[error("Invalid day: '{name}' is not a weekday name")]
    InvalidDay { name: String },

    #[error("Invalid time: {hour}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },

    /// A period must end strictly after it starts.
    #[error("Invalid period: start {start} is not before end {end}")]
    InvalidPeriod { start: String, end: String },
}

/// A selection edit was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Course {code} is already selected")]
    DuplicateCourse { code: String },

    /// The catalog for this code has no sections, so the code is treated as invalid.
    #[error("Course {code} has no sections")]
    EmptyCatalog { code: String },

    #[error("Course index {index} out of bounds (selection has {len} courses)")]
    IndexOutOfBounds { index: usize, len: usize },
}
