//! Daily panchang computation.
//!
//! This crate ties the workspace together:
//! - [`panchang_for_date`] / [`panchang_for_range`]: Julian Day Number,
//!   Sun/Moon longitudes, classification and sunrise for a date and place
//! - [`SunriseProvider`] with a fixed placeholder and a closed-form estimate
//! - [`PanchangEngine`], built from a [`panchang_config::PanchangConfig`]
//! - The JSON envelope: [`respond`] never fails, it reports errors in-band

pub mod engine;
pub mod envelope;
pub mod error;
pub mod location;
pub mod panchang;
pub mod panchang_types;
pub mod sunrise;

pub use engine::{PanchangEngine, SunriseBackend};
pub use envelope::{
    Coordinates, PanchangReport, PanchangRequest, PanchangResponse, TimezoneInput,
    resolve_timezone_name, respond, respond_json,
};
pub use error::PanchangError;
pub use location::{GeoLocation, MAX_TZ_OFFSET_HOURS, validate_tz_hours};
pub use panchang::{MAX_RANGE_DAYS, panchang_for_date, panchang_for_range};
pub use panchang_types::{PanchangInfo, PanchangInterpretation};
pub use sunrise::{
    ApproximateSunrise, PlaceholderSunrise, SUNRISE_DEPRESSION_DEG, SunriseProvider, SunriseResult,
    equation_of_time_min, solar_declination_rad,
};
