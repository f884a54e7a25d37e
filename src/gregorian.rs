//! Bridge between Nepali dates and the proleptic Gregorian calendar.
//!
//! Both directions go through day counts: Nepali → Gregorian measures the
//! distance from 1969-09-18 BS and walks forward from 1913-01-01;
//! Gregorian → Nepali measures the distance from 1913-04-13 and walks
//! forward from 1970-01-01 BS.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::NepaliDateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH, GREGORIAN_EPOCH_WEEKDAY,
    GREGORIAN_NEW_YEAR_ANCHOR_DAYS_FROM_CE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
    NEPALI_EPOCH_REFERENCE, NEPALI_NEW_YEAR_ANCHOR,
};
use crate::day_count::{date_from_day_offset, day_count_since};

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days from 1969-09-18 BS to the given Nepali date (unsigned).
fn days_from_epoch_reference(year: i32, month: u8, day: u8) -> u64 {
    day_count_since((year, month, day), NEPALI_EPOCH_REFERENCE)
}

/// Gregorian `(year, month, day)` of a Nepali date.
pub fn to_gregorian_ymd(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    let mut difference = days_from_epoch_reference(year, month, day);
    let (mut g_year, mut g_month, _) = GREGORIAN_EPOCH;

    while difference >= u64::from(days_in_year(g_year)) {
        difference -= u64::from(days_in_year(g_year));
        g_year += 1;
    }

    // difference < days_in_year(g_year), so this stops by December
    while difference >= u64::from(days_in_month(g_year, g_month)) {
        difference -= u64::from(days_in_month(g_year, g_month));
        g_month += 1;
    }

    // difference < days_in_month, which is at most 31
    let g_day = MIN_DAY + u8::try_from(difference).unwrap_or(0);
    (g_year, g_month, g_day)
}

/// Day of week of a Nepali date, 1 = Sunday through 7 = Saturday.
pub fn weekday(year: i32, month: u8, day: u8) -> u8 {
    let difference = days_from_epoch_reference(year, month, day);
    let from_sunday = (GREGORIAN_EPOCH_WEEKDAY + difference) % DAYS_PER_WEEK;
    // from_sunday < 7
    1 + u8::try_from(from_sunday).unwrap_or(0)
}

/// Nepali `(year, month, day)` of a Gregorian date already shifted to Nepal time.
///
/// # Errors
/// Returns `NepaliDateError::OutOfRange` for dates before 1913-04-13 or past
/// the last day of the table.
pub fn to_nepali_ymd(date: NaiveDate) -> Result<(i32, u8, u8), NepaliDateError> {
    let difference = date.num_days_from_ce() - GREGORIAN_NEW_YEAR_ANCHOR_DAYS_FROM_CE;
    let Ok(difference) = u64::try_from(difference) else {
        debug!(%date, "gregorian date precedes the 1970-01-01 BS anchor");
        return Err(NepaliDateError::OutOfRange(format!(
            "{date} is before 1913-04-13"
        )));
    };

    date_from_day_offset(NEPALI_NEW_YEAR_ANCHOR, difference).ok_or_else(|| {
        debug!(%date, "gregorian date falls past the end of the calendar table");
        NepaliDateError::OutOfRange(format!("{date} is after the last supported Nepali date"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        1916,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        1913,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(1913, 2), 28);
        assert_eq!(days_in_month(1916, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1913), 365);
        assert_eq!(days_in_year(2024), 366);
    }

    #[test]
    fn test_epoch_reference_maps_to_gregorian_epoch() {
        let (y, m, d) = NEPALI_EPOCH_REFERENCE;
        assert_eq!(to_gregorian_ymd(y, m, d), GREGORIAN_EPOCH);
    }

    #[test]
    fn test_to_gregorian_ymd_known_dates() {
        assert_eq!(to_gregorian_ymd(1970, 1, 1), (1913, 4, 13));
        assert_eq!(to_gregorian_ymd(2000, 1, 1), (1943, 4, 14));
        assert_eq!(to_gregorian_ymd(2080, 1, 1), (2023, 4, 14));
        assert_eq!(to_gregorian_ymd(2081, 1, 1), (2024, 4, 13));
        assert_eq!(to_gregorian_ymd(2250, 12, 30), (2194, 4, 21));
    }

    #[test]
    fn test_to_nepali_ymd_known_dates() {
        let date = NaiveDate::from_ymd_opt(1913, 4, 13).unwrap();
        assert_eq!(to_nepali_ymd(date), Ok((1970, 1, 1)));

        let date = NaiveDate::from_ymd_opt(2023, 4, 28).unwrap();
        assert_eq!(to_nepali_ymd(date), Ok((2080, 1, 15)));

        let date = NaiveDate::from_ymd_opt(2194, 4, 21).unwrap();
        assert_eq!(to_nepali_ymd(date), Ok((2250, 12, 30)));
    }

    #[test]
    fn test_to_nepali_ymd_before_anchor() {
        let date = NaiveDate::from_ymd_opt(1913, 4, 12).unwrap();
        assert!(matches!(
            to_nepali_ymd(date),
            Err(NepaliDateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_to_nepali_ymd_past_table() {
        let date = NaiveDate::from_ymd_opt(2194, 4, 22).unwrap();
        assert!(matches!(
            to_nepali_ymd(date),
            Err(NepaliDateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_weekday_known_dates() {
        // 1913-04-13 was a Sunday, 2023-04-14 a Friday
        assert_eq!(weekday(1970, 1, 1), 1);
        assert_eq!(weekday(2080, 1, 1), 6);
        assert_eq!(weekday(2081, 1, 1), 7);
    }
}
