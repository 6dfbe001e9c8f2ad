//! One-shot classification of a Sun/Moon longitude pair.

use crate::error::VedicError;
use crate::karana::{KaranaInfo, karana_from_elongation};
use crate::nadi::{Nadi, nadi_for};
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{RashiInfo, rashi_from_longitude};
use crate::tithi::{TithiInfo, tithi_from_elongation};
use crate::util::{checked_normalize_360, normalize_360};
use crate::yoga::{YogaInfo, yoga_from_sum};

/// Every angle-derived element for one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangClassification {
    /// Normalized Sun longitude in degrees.
    pub sun_longitude: f64,
    /// Normalized Moon longitude in degrees.
    pub moon_longitude: f64,
    /// Moon minus Sun, normalized.
    pub elongation: f64,
    pub tithi: TithiInfo,
    pub karana: KaranaInfo,
    pub nadi: Nadi,
    /// Moon's nakshatra.
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub sun_rashi: RashiInfo,
    pub moon_rashi: RashiInfo,
}

/// Classify a Sun/Moon longitude pair.
///
/// Fails with [`VedicError::DomainOverflow`] if either longitude is not finite.
pub fn classify(sun_lon_deg: f64, moon_lon_deg: f64) -> Result<PanchangClassification, VedicError> {
    let sun = checked_normalize_360(sun_lon_deg, "sun longitude is not finite")?;
    let moon = checked_normalize_360(moon_lon_deg, "moon longitude is not finite")?;

    let elongation = normalize_360(moon - sun);
    let tithi = tithi_from_elongation(elongation);

    Ok(PanchangClassification {
        sun_longitude: sun,
        moon_longitude: moon,
        elongation,
        tithi,
        karana: karana_from_elongation(elongation),
        nadi: nadi_for(tithi.paksha, tithi.tithi_in_paksha),
        nakshatra: nakshatra_from_longitude(moon),
        yoga: yoga_from_sum(sun + moon),
        sun_rashi: rashi_from_longitude(sun),
        moon_rashi: rashi_from_longitude(moon),
    })
}
