//! Scheduling error types.

use thiserror::Error;

/// Scheduling errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Ore quantity outside the valid range.
    #[error("Invalid ore quantity: {got} (must be at least 1 unit)")]
    InvalidUnits {
        /// The rejected quantity.
        got: u64,
    },
}

/// Result type for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
