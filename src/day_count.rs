//! Day counting over the Nepali calendar table.
//!
//! Dates are plain `(year, month, day)` tuples here. Month and day are not
//! validated: months past Chaitra contribute no days and a day of `0` counts
//! as the last day of the previous month.

use crate::consts::{JANUARY, MIN_DAY, TABLE_START_YEAR};
use crate::table;

/// Number of days from the first day of `TABLE_START_YEAR` to the given date.
pub fn absolute_day_count(year: i32, month: u8, day: u8) -> i64 {
    let in_months: i64 = (JANUARY..month)
        .map(|m| i64::from(table::days_in_month(year, m)))
        .sum();
    let in_years: i64 = (TABLE_START_YEAR..year)
        .map(|y| i64::from(table::days_in_year(y)))
        .sum();
    i64::from(day) - 1 + in_months + in_years
}

/// Number of days between two dates, regardless of which comes first.
///
/// The direction is dropped, so this cannot order two dates on its own.
pub fn day_count_since(date: (i32, u8, u8), reference: (i32, u8, u8)) -> u64 {
    let (y, m, d) = date;
    let (ry, rm, rd) = reference;
    (absolute_day_count(y, m, d) - absolute_day_count(ry, rm, rd)).unsigned_abs()
}

/// Returns the date `offset` days after `start`.
///
/// Returns `None` when the walk leaves the table.
pub fn date_from_day_offset(start: (i32, u8, u8), offset: u64) -> Option<(i32, u8, u8)> {
    let (y, m, d) = start;
    let total = absolute_day_count(y, m, d).checked_add(i64::try_from(offset).ok()?)?;
    date_from_absolute_day_count(total)
}

/// Inverse of [`absolute_day_count`] for normalized dates.
pub(crate) fn date_from_absolute_day_count(days: i64) -> Option<(i32, u8, u8)> {
    let mut remaining = u64::try_from(days).ok()?;

    let mut year = TABLE_START_YEAR;
    loop {
        let in_year = u64::from(table::days_in_year(year));
        if in_year == 0 {
            return None;
        }
        if remaining < in_year {
            break;
        }
        remaining -= in_year;
        year += 1;
    }

    // remaining < days_in_year(year), so this stops by Chaitra
    let mut month = JANUARY;
    loop {
        let in_month = u64::from(table::days_in_month(year, month));
        if in_month == 0 {
            return None;
        }
        if remaining < in_month {
            break;
        }
        remaining -= in_month;
        month += 1;
    }

    let day = u8::try_from(remaining).ok()?.checked_add(MIN_DAY)?;
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_YEAR, NEPALI_EPOCH_REFERENCE, NEPALI_NEW_YEAR_ANCHOR};

    #[test]
    fn test_absolute_day_count_origin() {
        assert_eq!(absolute_day_count(TABLE_START_YEAR, 1, 1), 0);
        assert_eq!(absolute_day_count(1969, 1, 31), 30);
        assert_eq!(absolute_day_count(1969, 2, 1), 31);
        assert_eq!(absolute_day_count(1970, 1, 1), 366);
        assert_eq!(absolute_day_count(1971, 1, 1), 366 + 365);
    }

    #[test]
    fn test_absolute_day_count_unchecked_fields() {
        // Month 13 adds nothing beyond Chaitra
        assert_eq!(
            absolute_day_count(1970, 13, 1),
            absolute_day_count(1970, 12, 1) + 30
        );
        // Day 0 is the day before the 1st
        assert_eq!(
            absolute_day_count(1970, 2, 0),
            absolute_day_count(1970, 1, 31)
        );
    }

    #[test]
    fn test_day_count_since_is_symmetric() {
        let a = (2080, 1, 15);
        let b = (2079, 12, 30);
        assert_eq!(day_count_since(a, b), 15);
        assert_eq!(day_count_since(b, a), 15);
        assert_eq!(day_count_since(a, a), 0);
    }

    #[test]
    fn test_day_count_since_epoch_reference() {
        // 1969-09-18 .. 1970-01-01: 12 days left in Poush, then 30 + 29 + 31
        assert_eq!(day_count_since(NEPALI_NEW_YEAR_ANCHOR, NEPALI_EPOCH_REFERENCE), 102);
    }

    #[test]
    fn test_date_from_day_offset_cases() {
        struct TestCase {
            start:       (i32, u8, u8),
            offset:      u64,
            expected:    Option<(i32, u8, u8)>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       NEPALI_NEW_YEAR_ANCHOR,
                offset:      0,
                expected:    Some((1970, 1, 1)),
                description: "zero offset",
            },
            TestCase {
                start:       NEPALI_NEW_YEAR_ANCHOR,
                offset:      30,
                expected:    Some((1970, 1, 31)),
                description: "last day of Baisakh",
            },
            TestCase {
                start:       NEPALI_NEW_YEAR_ANCHOR,
                offset:      31,
                expected:    Some((1970, 2, 1)),
                description: "month rollover",
            },
            TestCase {
                start:       NEPALI_NEW_YEAR_ANCHOR,
                offset:      365,
                expected:    Some((1971, 1, 1)),
                description: "year rollover",
            },
            TestCase {
                start:       (2080, 12, 30),
                offset:      1,
                expected:    Some((2081, 1, 1)),
                description: "non-anchor start",
            },
            TestCase {
                start:       (MAX_YEAR, 12, 30),
                offset:      1,
                expected:    None,
                description: "walks off the end of the table",
            },
        ];

        for case in &cases {
            assert_eq!(
                date_from_day_offset(case.start, case.offset),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_absolute_day_count_inverse() {
        for &date in &[(1970, 1, 1), (2000, 6, 15), (2080, 1, 15), (2200, 12, 31), (2250, 12, 30)] {
            let (y, m, d) = date;
            assert_eq!(
                date_from_absolute_day_count(absolute_day_count(y, m, d)),
                Some(date)
            );
        }
    }

    #[test]
    fn test_negative_day_count_is_none() {
        assert_eq!(date_from_absolute_day_count(-1), None);
    }
}
