use thiserror::Error;

use crate::tolerance::ToleranceError;

/// Errors that can occur while building an [`Interval`](super::Interval).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    #[error("The minimum value must be a valid number")]
    MinimumNotANumber,

    #[error("The maximum value must be a valid number")]
    MaximumNotANumber,

    #[error("The minimum value cannot be greater than the maximum value")]
    MinimumGreaterThanMaximum,

    #[error("An included minimum value cannot be infinite")]
    IncludedInfiniteMinimum,

    #[error("An included maximum value cannot be infinite")]
    IncludedInfiniteMaximum,

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}
