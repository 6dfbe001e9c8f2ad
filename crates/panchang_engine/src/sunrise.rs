//! Sunrise providers.
//!
//! [`PlaceholderSunrise`] reports a fixed clock time and performs no
//! astronomy. [`ApproximateSunrise`] is a closed-form estimate: Spencer's
//! declination series, the equation of time, and the hour angle at which
//! the Sun's upper limb meets a refracted horizon (-0.8333 deg). Expect
//! errors of a few minutes; it ignores altitude and the Sun's motion
//! during the day.

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

use panchang_time::CalendarDate;

use crate::location::GeoLocation;

/// Sun-centre depression at rise: 34' refraction + 16' semidiameter.
pub const SUNRISE_DEPRESSION_DEG: f64 = 50.0 / 60.0;

/// Outcome of a sunrise lookup for one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunriseResult {
    /// Local clock time.
    At { hour: u8, minute: u8 },
    /// Sun stays below the horizon all day (polar night).
    NeverRises,
    /// Sun stays above the horizon all day (midnight sun).
    NeverSets,
}

impl SunriseResult {
    /// `HH:MM`, 24-hour, zero padded. Polar night is `00:00`, midnight sun `23:59`.
    pub fn hh_mm(&self) -> String {
        match *self {
            Self::At { hour, minute } => format!("{hour:02}:{minute:02}"),
            Self::NeverRises => "00:00".to_string(),
            Self::NeverSets => "23:59".to_string(),
        }
    }

    /// From fractional local hours, wrapped into [0, 24).
    pub fn from_decimal_hours(hours: f64) -> Self {
        let h = ((hours % 24.0) + 24.0) % 24.0;
        let hour = (h.floor() as u8).min(23);
        let minute = (((h - hour as f64) * 60.0).floor() as u8).min(59);
        Self::At { hour, minute }
    }
}

impl Display for SunriseResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hh_mm())
    }
}

/// Source of the daily sunrise time.
pub trait SunriseProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether the result depends on date and place at all.
    fn is_computed(&self) -> bool;

    fn sunrise(&self, date: CalendarDate, location: &GeoLocation, tz_hours: f64) -> SunriseResult;
}

/// Fixed clock time for every date and place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSunrise {
    hour: u8,
    minute: u8,
}

impl PlaceholderSunrise {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parse `HH:MM`.
    pub fn from_hh_mm(s: &str) -> Option<Self> {
        let (h, m) = s.split_once(':')?;
        if h.len() != 2 || m.len() != 2 {
            return None;
        }
        Self::new(h.parse().ok()?, m.parse().ok()?)
    }
}

impl Default for PlaceholderSunrise {
    fn default() -> Self {
        Self { hour: 6, minute: 0 }
    }
}

impl SunriseProvider for PlaceholderSunrise {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn is_computed(&self) -> bool {
        false
    }

    fn sunrise(&self, _: CalendarDate, _: &GeoLocation, _: f64) -> SunriseResult {
        SunriseResult::At {
            hour: self.hour,
            minute: self.minute,
        }
    }
}

/// Closed-form sunrise estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproximateSunrise;

/// Day of year, 1 = January 1.
fn day_of_year(date: CalendarDate) -> f64 {
    date.ordinal() as f64
}

/// Solar declination in radians (Spencer 1971).
pub fn solar_declination_rad(day_of_year: f64) -> f64 {
    let g = 2.0 * PI * day_of_year / 365.25;
    0.006_918 - 0.399_912 * g.cos() + 0.070_257 * g.sin() - 0.006_758 * (2.0 * g).cos()
        + 0.000_907 * (2.0 * g).sin()
        - 0.002_697 * (3.0 * g).cos()
        + 0.001_48 * (3.0 * g).sin()
}

/// Equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time_min(day_of_year: f64) -> f64 {
    let b = 2.0 * PI * (day_of_year - 1.0) / 365.0;
    229.18
        * (0.000_075 + 0.001_868 * b.cos()
            - 0.032_077 * b.sin()
            - 0.014_615 * (2.0 * b).cos()
            - 0.040_849 * (2.0 * b).sin())
}

impl SunriseProvider for ApproximateSunrise {
    fn name(&self) -> &'static str {
        "approximate"
    }

    fn is_computed(&self) -> bool {
        true
    }

    fn sunrise(&self, date: CalendarDate, location: &GeoLocation, tz_hours: f64) -> SunriseResult {
        let doy = day_of_year(date);
        let decl = solar_declination_rad(doy);
        let phi = location.latitude_rad();

        let cos_h = ((-SUNRISE_DEPRESSION_DEG).to_radians().sin() - phi.sin() * decl.sin())
            / (phi.cos() * decl.cos());
        if cos_h > 1.0 {
            return SunriseResult::NeverRises;
        }
        if cos_h < -1.0 {
            return SunriseResult::NeverSets;
        }

        let hour_angle_deg = cos_h.acos().to_degrees();
        let eot = equation_of_time_min(doy);
        let local =
            12.0 - hour_angle_deg / 15.0 - (eot / 60.0 + location.longitude_deg / 15.0 - tz_hours);
        SunriseResult::from_decimal_hours(local)
    }
}
