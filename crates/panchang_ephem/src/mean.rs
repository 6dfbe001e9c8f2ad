//! Mean ecliptic longitudes of the Sun and Moon.
//!
//! Polynomials in T, Julian centuries from J2000.0. These are the mean
//! (unperturbed) longitudes only: no equation of centre, no lunar
//! evection or variation. Expect errors of a degree or more for the Sun
//! and several degrees for the Moon against a true ephemeris.

use panchang_time::{jd_to_centuries, normalize_360};

use crate::error::EphemerisError;
use crate::{Body, CelestialLongitudeProvider};

const SUN_L0: f64 = 280.466_456_7;
const SUN_L1: f64 = 36_000.769_827_79;
const SUN_L2: f64 = 0.000_303_2;
const SUN_L3_DIV: f64 = 49_310.0;
const SUN_L4_DIV: f64 = 15_299.0;
const SUN_L5_DIV: f64 = 11_525_600.0;

const MOON_L0: f64 = 218.316_447_7;
const MOON_L1: f64 = 481_267.881_234_21;
const MOON_L2: f64 = 0.001_578_6;
const MOON_L3_DIV: f64 = 538_841.0;
const MOON_L4_DIV: f64 = 65_194_000.0;

/// Mean longitude of the Sun in degrees [0, 360) at Julian Date `jd`.
pub fn sun_mean_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    normalize_360(
        SUN_L0 + SUN_L1 * t + SUN_L2 * t2 + t3 / SUN_L3_DIV - t4 / SUN_L4_DIV - t5 / SUN_L5_DIV,
    )
}

/// Mean longitude of the Moon in degrees [0, 360) at Julian Date `jd`.
pub fn moon_mean_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(MOON_L0 + MOON_L1 * t - MOON_L2 * t2 + t3 / MOON_L3_DIV - t4 / MOON_L4_DIV)
}

/// Polynomial mean-longitude backend. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanLongitudeModel;

impl CelestialLongitudeProvider for MeanLongitudeModel {
    fn name(&self) -> &'static str {
        "mean-polynomial"
    }

    fn longitude_deg(&self, body: Body, jd: f64) -> Result<f64, EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::NonFinite("julian date"));
        }
        let lon = match body {
            Body::Sun => sun_mean_longitude_deg(jd),
            Body::Moon => moon_mean_longitude_deg(jd),
        };
        if !lon.is_finite() {
            return Err(EphemerisError::NonFinite("mean longitude"));
        }
        Ok(lon)
    }
}
