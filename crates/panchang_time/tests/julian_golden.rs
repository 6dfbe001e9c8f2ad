//! Integration tests for the Julian Day Number converter.
//!
//! Pure-arithmetic tests (no data files needed).

use panchang_time::{CalendarDate, J2000_JD, calendar_from_jdn, julian_day_number};

#[test]
fn j2000_matches_reference() {
    let date = CalendarDate::new(2000, 1, 1).unwrap();
    assert_eq!(julian_day_number(date) as f64, J2000_JD);
}

#[test]
fn strictly_increasing_by_one_1900_to_2100() {
    let mut date = CalendarDate::new(1900, 1, 1).unwrap();
    let end = CalendarDate::new(2100, 12, 31).unwrap();
    let mut prev = julian_day_number(date);
    let mut days = 0u32;
    while date < end {
        date = date.succ().unwrap();
        let jdn = julian_day_number(date);
        assert_eq!(jdn, prev + 1, "gap at {date}");
        prev = jdn;
        days += 1;
    }
    // 201 years, 49 leap days (1900 and 2100 are not leap years)
    assert_eq!(days, 201 * 365 + 49 - 1);
}

#[test]
fn inverse_matches_every_day_of_2024() {
    let start = CalendarDate::new(2024, 1, 1).unwrap().jdn();
    for offset in 0..366 {
        let date = calendar_from_jdn(start + offset).unwrap();
        assert_eq!(date.jdn(), start + offset);
        assert_eq!(date.year(), 2024);
    }
}

#[test]
fn parse_then_convert() {
    let date: CalendarDate = "2024-01-01".parse().unwrap();
    assert_eq!(julian_day_number(date), 2_460_311);
}

#[test]
fn invalid_dates_never_reach_conversion() {
    for s in ["2024-13-40", "2023-02-29", "2024-00-10", "2024-06-31"] {
        assert!(s.parse::<CalendarDate>().is_err(), "{s} should be rejected");
    }
}
