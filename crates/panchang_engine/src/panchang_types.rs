//! Types for daily panchang results.

use panchang_config::NamingConfig;
use panchang_time::CalendarDate;
use panchang_vedic::{
    Observance, PanchangClassification, Vaar, is_amavasya, is_auspicious_day, is_purnima,
    observances, recommendation,
};

use crate::location::GeoLocation;
use crate::sunrise::SunriseResult;

/// Human-readable reading of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanchangInterpretation {
    /// `"<weekday>, <tithi> in <nakshatra>"`.
    pub summary: String,
    /// One line each for tithi, nakshatra, yoga and the Moon's rashi.
    pub details: Vec<String>,
    pub recommendation: &'static str,
}

/// Combined daily panchang for one date and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangInfo {
    /// Requested local calendar date.
    pub date: CalendarDate,
    /// Julian Day Number of `date`; longitudes are evaluated at its noon.
    pub jdn: i64,
    pub location: GeoLocation,
    /// UTC offset in hours, echoed from the request.
    pub tz_hours: f64,
    /// Tithi, karana, nadi, nakshatra, yoga and both rashis.
    pub classification: PanchangClassification,
    /// Weekday of `date`.
    pub vaar: Vaar,
    pub sunrise: SunriseResult,
    /// Naming conventions the report was built with.
    pub naming: NamingConfig,
}

impl PanchangInfo {
    /// Tithi name under the report's naming convention.
    pub fn tithi_name(&self) -> &'static str {
        self.classification.tithi.name(self.naming.tithi)
    }

    /// Sun's rashi name under the report's naming convention.
    pub fn sun_rashi_name(&self) -> &'static str {
        self.classification.sun_rashi.rashi.label(self.naming.rashi)
    }

    /// Moon's rashi name under the report's naming convention.
    pub fn moon_rashi_name(&self) -> &'static str {
        self.classification.moon_rashi.rashi.label(self.naming.rashi)
    }

    /// Whether the day's yoga, tithi and nakshatra score as auspicious.
    pub fn is_auspicious(&self) -> bool {
        is_auspicious_day(&self.classification)
    }

    /// Suggested observances for the day.
    pub fn observances(&self) -> Vec<Observance> {
        observances(&self.classification)
    }

    pub fn interpretation(&self) -> PanchangInterpretation {
        let c = &self.classification;
        let tithi = if is_amavasya(&c.tithi) {
            "Amavasya (New Moon) - Time for introspection and inner practices".to_string()
        } else if is_purnima(&c.tithi) {
            "Purnima (Full Moon) - Highly auspicious for spiritual practices".to_string()
        } else {
            format!(
                "{} ({}) - {}/30",
                self.tithi_name(),
                c.tithi.paksha.name(),
                c.tithi.tithi_index + 1
            )
        };

        PanchangInterpretation {
            summary: format!(
                "{}, {} in {}",
                self.vaar.english_name(),
                self.tithi_name(),
                c.nakshatra.nakshatra.name()
            ),
            details: vec![
                tithi,
                format!(
                    "Nakshatra: {} (pada {})",
                    c.nakshatra.nakshatra.name(),
                    c.nakshatra.pada
                ),
                format!("Yoga: {} - {}", c.yoga.yoga.name(), c.yoga.effect.label()),
                format!("Moon in {}", self.moon_rashi_name()),
            ],
            recommendation: recommendation(self.is_auspicious()),
        }
    }
}
