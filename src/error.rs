//! Input validation errors.

/// Malformed-input error for survival computations.
///
/// Only malformed calls produce this error. A median that is undefined
/// because the middle rank of the sample is censored is a legitimate
/// computed outcome and is reported as `Ok(None)`, never as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// The input contained no observations; an empty dataset has no median.
    Empty,
    /// The `times` and `statuses` columns differ in length.
    LengthMismatch {
        /// Number of entries in the `times` column.
        times: usize,
        /// Number of entries in the `statuses` column.
        statuses: usize,
    },
    /// A status indicator was neither `0` nor `1`.
    StatusOutOfRange {
        /// Position of the offending entry.
        index: usize,
        /// The rejected raw indicator.
        value: u8,
    },
    /// A follow-up time was negative or not finite.
    TimeOutOfRange {
        /// Position of the offending entry.
        index: usize,
        /// The rejected time value.
        value: f64,
    },
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::Empty => write!(f, "no observations provided"),
            InvalidInput::LengthMismatch { times, statuses } => {
                write!(
                    f,
                    "times has {} entries but statuses has {}",
                    times, statuses
                )
            }
            InvalidInput::StatusOutOfRange { index, value } => {
                write!(
                    f,
                    "status at index {} is {} (expected 0 or 1)",
                    index, value
                )
            }
            InvalidInput::TimeOutOfRange { index, value } => {
                write!(
                    f,
                    "time at index {} is {} (expected a finite, non-negative number)",
                    index, value
                )
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
