//! Error types for calendar and Julian Day conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar date construction, parsing, or conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The date is malformed or names a day that does not exist.
    InvalidDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for TimeError {}
