//! Calendar dates and Julian Day Numbers.
//!
//! This crate provides:
//! - A validated proleptic Gregorian [`CalendarDate`] with `YYYY-MM-DD` parsing
//! - Exact integer Julian Day Number conversion (and its inverse)
//! - Julian-century helpers relative to J2000.0
//! - [`normalize_360`] for wrapping ecliptic angles

pub mod angle;
pub mod calendar;
pub mod error;
pub mod julian;

pub use angle::normalize_360;
pub use calendar::{CalendarDate, days_in_month, is_leap_year};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, calendar_from_jdn, jd_to_centuries, julian_day_number,
    weekday_index,
};
