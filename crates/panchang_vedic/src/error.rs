//! Error types for Vedic classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from angle classification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VedicError {
    /// A value was NaN, infinite, or fell outside its partition.
    DomainOverflow(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainOverflow(msg) => write!(f, "domain overflow: {msg}"),
        }
    }
}

impl Error for VedicError {}
