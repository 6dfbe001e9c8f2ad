//! Shared utility functions for vedic calculations.

use crate::error::VedicError;

pub use panchang_time::normalize_360;

/// [`normalize_360`] that rejects NaN and infinities.
pub fn checked_normalize_360(deg: f64, what: &'static str) -> Result<f64, VedicError> {
    if !deg.is_finite() {
        return Err(VedicError::DomainOverflow(what));
    }
    Ok(normalize_360(deg))
}
