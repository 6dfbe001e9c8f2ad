//! Configured engine: longitude backend, sunrise provider and naming in one
//! value that can be shared across threads.

use panchang_config::{BackendKind, NamingConfig, PanchangConfig, SunriseMode};
use panchang_ephem::{CelestialLongitudeProvider, EphemerisError, LongitudeBackend};
use panchang_time::CalendarDate;

use crate::error::PanchangError;
use crate::location::GeoLocation;
use crate::panchang::{panchang_for_date, panchang_for_range};
use crate::panchang_types::PanchangInfo;
use crate::sunrise::{ApproximateSunrise, PlaceholderSunrise, SunriseProvider, SunriseResult};

/// The sunrise provider chosen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunriseBackend {
    Placeholder(PlaceholderSunrise),
    Approximate(ApproximateSunrise),
}

impl Default for SunriseBackend {
    fn default() -> Self {
        Self::Placeholder(PlaceholderSunrise::default())
    }
}

impl SunriseProvider for SunriseBackend {
    fn name(&self) -> &'static str {
        match self {
            Self::Placeholder(p) => p.name(),
            Self::Approximate(a) => a.name(),
        }
    }

    fn is_computed(&self) -> bool {
        match self {
            Self::Placeholder(p) => p.is_computed(),
            Self::Approximate(a) => a.is_computed(),
        }
    }

    fn sunrise(&self, date: CalendarDate, location: &GeoLocation, tz_hours: f64) -> SunriseResult {
        match self {
            Self::Placeholder(p) => p.sunrise(date, location, tz_hours),
            Self::Approximate(a) => a.sunrise(date, location, tz_hours),
        }
    }
}

/// Panchang engine.
///
/// Immutable after construction and [`Send`] + [`Sync`], so one instance
/// can be shared via `Arc<PanchangEngine>`.
#[derive(Debug, Clone, Default)]
pub struct PanchangEngine {
    longitudes: LongitudeBackend,
    sunrise: SunriseBackend,
    naming: NamingConfig,
}

impl PanchangEngine {
    pub fn new(longitudes: LongitudeBackend, sunrise: SunriseBackend, naming: NamingConfig) -> Self {
        Self {
            longitudes,
            sunrise,
            naming,
        }
    }

    /// Build from a validated configuration, loading the longitude table if one is selected.
    pub fn from_config(config: &PanchangConfig) -> Result<Self, PanchangError> {
        config.validate()?;

        let longitudes = match config.ephemeris.backend {
            BackendKind::Mean => LongitudeBackend::mean(),
            BackendKind::Tabulated => {
                let path = config.ephemeris.table_path.as_deref().ok_or_else(|| {
                    PanchangError::Ephemeris(EphemerisError::Io(
                        "no table path configured".to_string(),
                    ))
                })?;
                LongitudeBackend::tabulated(path)?
            }
        };

        let sunrise = match config.sunrise.mode {
            SunriseMode::Placeholder => {
                let p = PlaceholderSunrise::from_hh_mm(&config.sunrise.placeholder)
                    .unwrap_or_default();
                SunriseBackend::Placeholder(p)
            }
            SunriseMode::Approximate => SunriseBackend::Approximate(ApproximateSunrise),
        };

        log::info!(
            "panchang engine: longitudes={} sunrise={}",
            longitudes.name(),
            sunrise.name()
        );
        Ok(Self::new(longitudes, sunrise, config.naming))
    }

    pub fn longitudes(&self) -> &LongitudeBackend {
        &self.longitudes
    }

    pub fn sunrise(&self) -> &SunriseBackend {
        &self.sunrise
    }

    pub fn naming(&self) -> NamingConfig {
        self.naming
    }

    /// Panchang for one date.
    pub fn for_date(
        &self,
        date: CalendarDate,
        location: &GeoLocation,
        tz_hours: f64,
    ) -> Result<PanchangInfo, PanchangError> {
        panchang_for_date(
            &self.longitudes,
            &self.sunrise,
            date,
            location,
            tz_hours,
            self.naming,
        )
    }

    /// Panchangs for `days` consecutive dates.
    pub fn for_range(
        &self,
        start: CalendarDate,
        days: u32,
        location: &GeoLocation,
        tz_hours: f64,
    ) -> Result<Vec<PanchangInfo>, PanchangError> {
        panchang_for_range(
            &self.longitudes,
            &self.sunrise,
            start,
            days,
            location,
            tz_hours,
            self.naming,
        )
    }
}
