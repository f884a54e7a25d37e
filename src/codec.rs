//! Text parsing and formatting for `NepaliDateTime`.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::consts::{
    DATE_SEPARATOR, DATE_TIME_SEPARATOR, FOUR_DIGIT_YEAR_LIMIT, FRACTION_SEPARATOR,
    MICROS_PER_MILLI, SIX_DIGIT_YEAR_LIMIT, TIME_SEPARATOR,
};
use crate::{NepaliDateError, NepaliDateTime, Validation};

/// Signed year, month and day with optional hyphens, then an optional time of
/// day with fractional seconds and an optional timezone designator.
#[allow(clippy::expect_used)]
static PARSE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([+-]?[0-9]{4,6})-?([0-9]{2})-?([0-9]{2})",
        r"(?:[ T]([0-9]{2})(?::?([0-9]{2})(?::?([0-9]{2})(?:[.,]([0-9]{1,6}))?)?)?",
        r"( ?[zZ]| ?([-+])([0-9]{2})(?::?([0-9]{2}))?)?)?$",
    ))
    .expect("date-time pattern is a valid regex")
});

const YEAR: usize = 1;
const MONTH: usize = 2;
const DAY: usize = 3;
const HOUR: usize = 4;
const MINUTE: usize = 5;
const SECOND: usize = 6;
const FRACTION: usize = 7;
const TIMEZONE: usize = 8;

impl NepaliDateTime {
    /// Parses an ISO-8601-like string such as `2080-01-15 10:30:45.123456`.
    ///
    /// Month and day are not range-checked; see [`Self::parse_with`].
    /// A trailing timezone designator is accepted but not applied.
    ///
    /// # Errors
    /// Returns `NepaliDateError::InvalidFormat` if the input does not match the
    /// grammar, or `NepaliDateError::OutOfRange` if the year is unsupported.
    pub fn parse(input: &str) -> Result<Self, NepaliDateError> {
        Self::parse_with(input, Validation::Lenient)
    }

    /// Like [`Self::parse`], returning `None` instead of an error.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Parses with an explicit validation mode for month and day.
    ///
    /// # Errors
    /// Same as [`Self::parse`], plus `InvalidMonth`/`InvalidDay` under
    /// `Validation::Strict`.
    pub fn parse_with(input: &str, validation: Validation) -> Result<Self, NepaliDateError> {
        let Some(caps) = PARSE_FORMAT.captures(input) else {
            debug!(input, "rejected nepali date-time string");
            return Err(NepaliDateError::InvalidFormat(input.to_owned()));
        };

        let year: i32 = required(&caps, YEAR)?;
        let month: u8 = required(&caps, MONTH)?;
        let day: u8 = required(&caps, DAY)?;
        let hour: u32 = optional(&caps, HOUR)?.unwrap_or(0);
        let minute: u32 = optional(&caps, MINUTE)?.unwrap_or(0);
        let second: u32 = optional(&caps, SECOND)?.unwrap_or(0);
        let (millisecond, microsecond) = match caps.get(FRACTION) {
            Some(fraction) => split_fraction(fraction.as_str())?,
            None => (0, 0),
        };

        if let Some(timezone) = caps.get(TIMEZONE) {
            trace!(timezone = timezone.as_str(), "ignoring timezone designator");
        }

        Ok(Self::from_ymd_with(year, month, day, validation)?
            .and_hms(hour, minute, second)
            .and_milli_micro(millisecond, microsecond))
    }

    /// Formats with the extended year rule and no separator between date and time.
    ///
    /// # Errors
    /// Returns `NepaliDateError::OutOfRange` if the year needs the six-digit
    /// form and its magnitude reaches 10000.
    pub fn to_iso8601_string(&self) -> Result<String, NepaliDateError> {
        let year = extended_year(self.year())?;
        Ok(format!("{year}{}", TimeParts::without_separator(self)))
    }
}

fn required<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Result<T, NepaliDateError> {
    optional(caps, group)?.ok_or_else(|| NepaliDateError::InvalidFormat(caps[0].to_owned()))
}

fn optional<T: std::str::FromStr>(
    caps: &Captures<'_>,
    group: usize,
) -> Result<Option<T>, NepaliDateError> {
    caps.get(group)
        .map(|digits| {
            digits
                .as_str()
                .parse()
                .map_err(|_| NepaliDateError::InvalidFormat(caps[0].to_owned()))
        })
        .transpose()
}

/// Splits 1-6 fraction digits into (millisecond, microsecond).
///
/// The digits are read as a plain integer count of microseconds, so `.5` is
/// 5 µs and `.123` is 123 µs.
fn split_fraction(digits: &str) -> Result<(u32, u32), NepaliDateError> {
    let micros: u32 = digits
        .parse()
        .map_err(|_| NepaliDateError::InvalidFormat(digits.to_owned()))?;
    Ok((micros / MICROS_PER_MILLI, micros % MICROS_PER_MILLI))
}

fn four_digits(year: i32) -> String {
    let sign = if year < 0 { "-" } else { "" };
    format!("{sign}{:04}", year.unsigned_abs())
}

fn six_digits(year: i32) -> Result<String, NepaliDateError> {
    let magnitude = year.unsigned_abs();
    if magnitude >= SIX_DIGIT_YEAR_LIMIT {
        return Err(NepaliDateError::OutOfRange(format!(
            "abs({year}) can't be >= {SIX_DIGIT_YEAR_LIMIT}"
        )));
    }
    // unreachable from `extended_year`: every year routed here fails the guard
    let sign = if year < 0 { '-' } else { '+' };
    Ok(format!("{sign}{magnitude:06}"))
}

/// Year as written by [`NepaliDateTime::to_iso8601_string`].
fn extended_year(year: i32) -> Result<String, NepaliDateError> {
    if (-FOUR_DIGIT_YEAR_LIMIT..=FOUR_DIGIT_YEAR_LIMIT).contains(&year) {
        Ok(four_digits(year))
    } else {
        six_digits(year)
    }
}

/// Everything after the year: `-MM-DD[ ]HH:MM:SS.mmm[uuu]`.
struct TimeParts<'a> {
    value:     &'a NepaliDateTime,
    separator: Option<char>,
}

impl<'a> TimeParts<'a> {
    const fn with_separator(value: &'a NepaliDateTime) -> Self {
        Self {
            value,
            separator: Some(DATE_TIME_SEPARATOR),
        }
    }

    const fn without_separator(value: &'a NepaliDateTime) -> Self {
        Self { value, separator: None }
    }
}

impl fmt::Display for TimeParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.value;
        write!(
            f,
            "{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            v.month(),
            v.day()
        )?;
        if let Some(separator) = self.separator {
            write!(f, "{separator}")?;
        }
        write!(
            f,
            "{:02}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}{FRACTION_SEPARATOR}{:03}",
            v.hour(),
            v.minute(),
            v.second(),
            v.millisecond()
        )?;
        if v.microsecond() != 0 {
            write!(f, "{:03}", v.microsecond())?;
        }
        Ok(())
    }
}

/// Default form: `YYYY-MM-DD HH:MM:SS.mmm[uuu]`
impl fmt::Display for NepaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", four_digits(self.year()), TimeParts::with_separator(self))
    }
}

impl std::str::FromStr for NepaliDateTime {
    type Err = NepaliDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
