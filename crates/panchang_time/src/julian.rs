//! Julian Day Number arithmetic.
//!
//! The Julian Day Number (JDN) labels the day whose noon (UT) falls at that
//! integer Julian Date, so 2000-01-01 has JDN 2451545 = J2000.0.
//! All conversions here use integer arithmetic only.

use crate::calendar::CalendarDate;
use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Proleptic Gregorian date to Julian Day Number.
///
/// January and February are counted as months 13 and 14 of the previous
/// year, which puts the leap day at the end of the shifted year:
///
/// ```text
/// a = (14 - month) / 12
/// y = year + 4800 - a
/// m = month + 12a - 3
/// JDN = day + (153m + 2)/5 + 365y + y/4 - y/100 + y/400 - 32045
/// ```
pub fn julian_day_number(date: CalendarDate) -> i64 {
    let year = date.year() as i64;
    let month = date.month() as i64;
    let day = date.day() as i64;

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Julian Day Number back to a proleptic Gregorian date.
///
/// Fails with [`TimeError::InvalidDate`] when the day falls before 0001-01-01.
pub fn calendar_from_jdn(jdn: i64) -> Result<CalendarDate, TimeError> {
    let a = jdn + 32044;
    if a < 0 {
        return Err(TimeError::InvalidDate(format!(
            "JDN {jdn} is before the supported range"
        )));
    }
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    let year = i32::try_from(year)
        .map_err(|_| TimeError::InvalidDate(format!("JDN {jdn} overflows the year range")))?;
    CalendarDate::new(year, month as u32, day as u32)
}

/// Julian centuries of 36525 days elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Weekday of a Julian Day Number: 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(jdn: i64) -> u8 {
    (jdn + 1).rem_euclid(7) as u8
}
