//! Error types for longitude providers.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from longitude evaluation or ephemeris table loading.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested Julian Date is outside the table range.
    EpochOutOfRange { jd: f64 },
    /// Ephemeris table parsing failed.
    Parse(String),
    /// I/O error.
    Io(String),
    /// An input or intermediate value was NaN or infinite.
    NonFinite(&'static str),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { jd } => write!(f, "epoch out of range: JD {jd}"),
            Self::Parse(msg) => write!(f, "ephemeris parse error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::NonFinite(what) => write!(f, "non-finite value: {what}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<std::io::Error> for EphemerisError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
