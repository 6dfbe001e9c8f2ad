//! Error types for the daily panchang pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_config::ConfigError;
use panchang_ephem::EphemerisError;
use panchang_time::TimeError;
use panchang_vedic::VedicError;

/// Errors from building or answering a panchang request.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// Date string malformed or naming a day that does not exist.
    InvalidDate(String),
    /// Latitude or longitude out of range.
    InvalidLocation(&'static str),
    /// Time-zone offset missing, unknown, or out of range.
    InvalidTimezone(String),
    /// Non-finite value reached the classifier.
    DomainOverflow(&'static str),
    /// Error from the longitude provider.
    Ephemeris(EphemerisError),
    /// Error from configuration loading.
    Config(ConfigError),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidTimezone(msg) => write!(f, "invalid timezone: {msg}"),
            Self::DomainOverflow(msg) => write!(f, "domain overflow: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PanchangError {}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDate(msg) => Self::InvalidDate(msg),
            other => Self::InvalidDate(other.to_string()),
        }
    }
}

impl From<EphemerisError> for PanchangError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<VedicError> for PanchangError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::DomainOverflow(msg) => Self::DomainOverflow(msg),
            _ => Self::DomainOverflow("classification failed"),
        }
    }
}

impl From<ConfigError> for PanchangError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
