//! Observer location and time-zone validation.

use crate::error::PanchangError;

/// Widest civil UTC offsets in use, in hours.
pub const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Build and range-check a location.
    pub fn checked(latitude_deg: f64, longitude_deg: f64) -> Result<Self, PanchangError> {
        let loc = Self::new(latitude_deg, longitude_deg);
        loc.validate()?;
        Ok(loc)
    }

    pub fn validate(&self) -> Result<(), PanchangError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(PanchangError::InvalidLocation(
                "latitude must be between -90 and +90",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(PanchangError::InvalidLocation(
                "longitude must be between -180 and +180",
            ));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Check a UTC offset in hours.
pub fn validate_tz_hours(tz_hours: f64) -> Result<f64, PanchangError> {
    if !tz_hours.is_finite() || tz_hours.abs() > MAX_TZ_OFFSET_HOURS {
        return Err(PanchangError::InvalidTimezone(format!(
            "offset {tz_hours} outside -14..+14 hours"
        )));
    }
    Ok(tz_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_edges() {
        assert!(GeoLocation::checked(90.0, 180.0).is_ok());
        assert!(GeoLocation::checked(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert!(matches!(
            GeoLocation::checked(90.5, 0.0),
            Err(PanchangError::InvalidLocation(_))
        ));
        assert!(GeoLocation::checked(0.0, 181.0).is_err());
        assert!(GeoLocation::checked(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn tz_bounds() {
        assert_eq!(validate_tz_hours(5.5), Ok(5.5));
        assert!(validate_tz_hours(-14.0).is_ok());
        assert!(validate_tz_hours(14.5).is_err());
        assert!(validate_tz_hours(f64::INFINITY).is_err());
    }
}
