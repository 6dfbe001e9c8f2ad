//! Daily panchang: date and place in, classified calendar elements out.
//!
//! Longitudes are taken at the noon of the date's Julian Day Number, so
//! the result is the same for every location on a given date; location and
//! time zone only affect the sunrise field.

use panchang_config::NamingConfig;
use panchang_ephem::{CelestialLongitudeProvider, sun_moon_longitudes};
use panchang_time::CalendarDate;
use panchang_vedic::{classify, vaar_from_jdn};

use crate::error::PanchangError;
use crate::location::{GeoLocation, validate_tz_hours};
use crate::panchang_types::PanchangInfo;
use crate::sunrise::SunriseProvider;

/// Longest span accepted by [`panchang_for_range`].
pub const MAX_RANGE_DAYS: u32 = 366;

/// Compute the panchang for one local calendar date.
pub fn panchang_for_date(
    provider: &dyn CelestialLongitudeProvider,
    sunrise: &dyn SunriseProvider,
    date: CalendarDate,
    location: &GeoLocation,
    tz_hours: f64,
    naming: NamingConfig,
) -> Result<PanchangInfo, PanchangError> {
    location.validate()?;
    let tz_hours = validate_tz_hours(tz_hours)?;

    let jdn = date.jdn();
    let (sun, moon) = sun_moon_longitudes(provider, jdn as f64)?;
    let classification = classify(sun, moon)?;
    log::debug!(
        "{date}: elongation={:.4} tithi_index={} nakshatra_index={} yoga_index={}",
        classification.elongation,
        classification.tithi.tithi_index,
        classification.nakshatra.nakshatra_index,
        classification.yoga.yoga_index
    );

    Ok(PanchangInfo {
        date,
        jdn,
        location: *location,
        tz_hours,
        classification,
        vaar: vaar_from_jdn(jdn),
        sunrise: sunrise.sunrise(date, location, tz_hours),
        naming,
    })
}

/// Daily panchangs for `days` consecutive dates starting at `start`.
///
/// `days` must be in 1..=366.
pub fn panchang_for_range(
    provider: &dyn CelestialLongitudeProvider,
    sunrise: &dyn SunriseProvider,
    start: CalendarDate,
    days: u32,
    location: &GeoLocation,
    tz_hours: f64,
    naming: NamingConfig,
) -> Result<Vec<PanchangInfo>, PanchangError> {
    if days == 0 || days > MAX_RANGE_DAYS {
        return Err(PanchangError::InvalidDate(format!(
            "range of {days} days outside 1-{MAX_RANGE_DAYS}"
        )));
    }

    let mut out = Vec::with_capacity(days as usize);
    let mut date = start;
    for i in 0..days {
        if i > 0 {
            date = date.succ()?;
        }
        out.push(panchang_for_date(
            provider, sunrise, date, location, tz_hours, naming,
        )?);
    }
    Ok(out)
}
