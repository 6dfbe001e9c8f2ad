//! Proleptic Gregorian calendar dates.
//!
//! A [`CalendarDate`] can only be obtained through validation, so every
//! value names a day that exists. Parsing accepts the ISO `YYYY-MM-DD` form.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_from_jdn, julian_day_number};

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A validated proleptic Gregorian calendar date (no time-of-day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Build a date, rejecting anything outside year >= 1, month 1-12, or
    /// past the last day of the month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if year < 1 {
            return Err(TimeError::InvalidDate(format!(
                "year {year} is before the supported range (>= 1)"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!(
                "month {month} out of range 1-12"
            )));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of range 1-{last} for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Day of the year, 1 for January 1.
    pub fn ordinal(self) -> u32 {
        (1..self.month)
            .map(|m| days_in_month(self.year, m))
            .sum::<u32>()
            + self.day
    }

    /// Julian Day Number of this date (the day whose noon it labels).
    pub fn jdn(self) -> i64 {
        julian_day_number(self)
    }

    /// The date `days` after (or before, if negative) this one.
    pub fn add_days(self, days: i64) -> Result<Self, TimeError> {
        calendar_from_jdn(self.jdn() + days)
    }

    /// The following calendar day.
    pub fn succ(self) -> Result<Self, TimeError> {
        self.add_days(1)
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(TimeError::InvalidDate(format!(
                "expected YYYY-MM-DD, got '{s}'"
            )));
        }
        if parts
            .iter()
            .any(|p| !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(TimeError::InvalidDate(format!(
                "non-numeric date component in '{s}'"
            )));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| TimeError::InvalidDate(format!("year in '{s}': {e}")))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| TimeError::InvalidDate(format!("month in '{s}': {e}")))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| TimeError::InvalidDate(format!("day in '{s}': {e}")))?;
        Self::new(year, month, day)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
