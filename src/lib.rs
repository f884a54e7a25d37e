//! Bikram Sambat (Nepali) calendar dates.
//!
//! Converts between the Nepali calendar and the proleptic Gregorian calendar
//! for 1970–2250 BS, and reads/writes Nepali timestamps in an
//! ISO-8601-like text form.
//!
//! ```
//! use nepali_date::NepaliDateTime;
//!
//! let date = NepaliDateTime::parse("2080-01-15 10:30:45").unwrap();
//! let gregorian = date.to_gregorian().unwrap();
//! assert_eq!(gregorian.to_string(), "2023-04-28 10:30:45");
//! ```

mod codec;
mod consts;
mod day_count;
mod gregorian;
mod prelude;
mod table;

pub use consts::*;
pub use day_count::{absolute_day_count, date_from_day_offset, day_count_since};
pub use gregorian::{days_in_month as gregorian_days_in_month, is_leap_year};
pub use table::{TABLE_END_YEAR, days_in_month, days_in_year, is_supported_year, month_lengths};

use crate::prelude::*;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::trace;

/// A date and time of day in the Bikram Sambat calendar.
///
/// Only the year is always checked. Month, day and time-of-day fields are
/// stored as given unless built with [`Validation::Strict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NepaliDateTime {
    year:        i32,
    month:       u8,
    day:         u8,
    hour:        u32,
    minute:      u32,
    second:      u32,
    millisecond: u32,
    microsecond: u32,
}

/// Error type for construction, conversion and text operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NepaliDateError {
    /// Year outside 1970-2250, a year too wide for the extended text form,
    /// or a Gregorian instant with no Nepali counterpart in the table.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Input does not match the accepted date-time grammar.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Month outside 1-12 under strict validation.
    #[error("Invalid month: {month} (must be 1-12)")]
    InvalidMonth { month: u8 },

    /// Day outside the month's length under strict validation.
    #[error("Invalid day {day} for month {year}-{month:02} (max {max_day})")]
    InvalidDay {
        year:    i32,
        month:   u8,
        day:     u8,
        max_day: u16,
    },

    /// Stored time-of-day fields do not form a valid time.
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}

/// How strictly month and day are checked when a value is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Only the year is checked
    #[default]
    #[display(fmt = "lenient")]
    Lenient,
    /// Month must be 1-12 and day must fit the month's length in the table
    #[display(fmt = "strict")]
    Strict,
}

impl NepaliDateTime {
    /// Creates midnight on the first day of `year`.
    ///
    /// # Errors
    /// Returns `NepaliDateError::OutOfRange` if the year is outside 1970-2250.
    pub fn new(year: i32) -> Result<Self, NepaliDateError> {
        Self::from_ymd(year, JANUARY, MIN_DAY)
    }

    /// Creates midnight on the given date without checking month or day.
    ///
    /// # Errors
    /// Returns `NepaliDateError::OutOfRange` if the year is outside 1970-2250.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, NepaliDateError> {
        Self::from_ymd_with(year, month, day, Validation::Lenient)
    }

    /// Creates midnight on the given date with an explicit validation mode.
    ///
    /// # Errors
    /// Returns `NepaliDateError::OutOfRange` for an unsupported year, and under
    /// `Validation::Strict` `InvalidMonth` or `InvalidDay`.
    pub fn from_ymd_with(
        year: i32,
        month: u8,
        day: u8,
        validation: Validation,
    ) -> Result<Self, NepaliDateError> {
        if !is_supported_year(year) {
            return Err(NepaliDateError::OutOfRange(format!(
                "year {year} (supported {MIN_YEAR}-{MAX_YEAR})"
            )));
        }

        if validation == Validation::Strict {
            if !(JANUARY..=MAX_MONTH).contains(&month) {
                return Err(NepaliDateError::InvalidMonth { month });
            }
            let max_day = days_in_month(year, month);
            if day < MIN_DAY || u16::from(day) > max_day {
                return Err(NepaliDateError::InvalidDay {
                    year,
                    month,
                    day,
                    max_day,
                });
            }
        }

        Ok(Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            microsecond: 0,
        })
    }

    /// Returns a copy with the given hour, minute and second.
    pub const fn and_hms(self, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            ..self
        }
    }

    /// Returns a copy with the given sub-second fields.
    pub const fn and_milli_micro(self, millisecond: u32, microsecond: u32) -> Self {
        Self {
            millisecond,
            microsecond,
            ..self
        }
    }

    /// Returns the same date at a new time of day; sub-second fields reset to zero.
    pub const fn merge_time(&self, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond: 0,
            microsecond: 0,
            ..*self
        }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u32 {
        self.second
    }

    #[inline]
    pub const fn millisecond(&self) -> u32 {
        self.millisecond
    }

    #[inline]
    pub const fn microsecond(&self) -> u32 {
        self.microsecond
    }

    /// Returns the date part as `(year, month, day)`
    pub const fn ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Days in this value's month, or 0 if the month is outside 1-12.
    pub fn total_days_in_month(&self) -> u16 {
        days_in_month(self.year, self.month)
    }

    /// Days in this value's year
    pub fn total_days_in_year(&self) -> u16 {
        days_in_year(self.year)
    }

    /// Day of week, 1 = Sunday through 7 = Saturday
    pub fn weekday(&self) -> u8 {
        gregorian::weekday(self.year, self.month, self.day)
    }

    /// Whole days between the two dates, ignoring which one is earlier.
    pub fn day_count_since(&self, reference: &Self) -> u64 {
        day_count_since(self.ymd(), reference.ymd())
    }

    /// Moves the date by `days`, keeping the time of day.
    ///
    /// Returns `None` if the result leaves 1970-2250.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        let (y, m, d) = self.ymd();
        let total = absolute_day_count(y, m, d).checked_add(days)?;
        let (year, month, day) = day_count::date_from_absolute_day_count(total)?;
        is_supported_year(year).then_some(Self {
            year,
            month,
            day,
            ..*self
        })
    }

    /// Gregorian date followed by the time-of-day fields
    fn chronological_key(&self) -> ((i32, u8, u8), [u32; 5]) {
        (
            gregorian::to_gregorian_ymd(self.year, self.month, self.day),
            [
                self.hour,
                self.minute,
                self.second,
                self.millisecond,
                self.microsecond,
            ],
        )
    }

    /// Orders two values by their Gregorian equivalents.
    pub fn cmp_chronological(&self, other: &Self) -> Ordering {
        self.chronological_key().cmp(&other.chronological_key())
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.cmp_chronological(other).is_lt()
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.cmp_chronological(other).is_gt()
    }

    /// Converts to the Gregorian wall-clock date and time.
    ///
    /// # Errors
    /// Returns `NepaliDateError::InvalidTime` if the stored time fields do not
    /// form a valid time of day.
    pub fn to_gregorian(&self) -> Result<NaiveDateTime, NepaliDateError> {
        let (year, month, day) = gregorian::to_gregorian_ymd(self.year, self.month, self.day);
        let micros = self
            .millisecond
            .checked_mul(MICROS_PER_MILLI)
            .and_then(|micros| micros.checked_add(self.microsecond));

        let datetime = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .zip(micros)
            .and_then(|(date, micros)| {
                date.and_hms_micro_opt(self.hour, self.minute, self.second, micros)
            })
            .ok_or_else(|| {
                NepaliDateError::InvalidTime(format!(
                    "{:02}:{:02}:{:02}.{:03}{:03}",
                    self.hour, self.minute, self.second, self.millisecond, self.microsecond
                ))
            })?;

        trace!(nepali = %self, gregorian = %datetime, "converted to gregorian");
        Ok(datetime)
    }

    /// Converts a Gregorian wall-clock date-time to a Nepali date-time,
    /// applying the fixed Nepal Standard Time offset (+05:45) to it.
    ///
    /// # Errors
    /// Returns `NepaliDateError::OutOfRange` if the shifted date is before
    /// 1913-04-13 or after the last day of 2250 BS.
    pub fn from_gregorian(datetime: NaiveDateTime) -> Result<Self, NepaliDateError> {
        let local = datetime
            .checked_add_signed(TimeDelta::minutes(NEPAL_OFFSET_MINUTES))
            .ok_or_else(|| {
                NepaliDateError::OutOfRange(format!("{datetime} cannot be shifted to Nepal time"))
            })?;

        let (year, month, day) = gregorian::to_nepali_ymd(local.date())?;
        // leap seconds carry an extra second in the nanosecond field
        let micros = (local.nanosecond() % NANOS_PER_SECOND) / NANOS_PER_MICRO;

        let value = Self::from_ymd(year, month, day)?
            .and_hms(local.hour(), local.minute(), local.second())
            .and_milli_micro(micros / MICROS_PER_MILLI, micros % MICROS_PER_MILLI);
        trace!(gregorian = %datetime, nepali = %value, "converted from gregorian");
        Ok(value)
    }
}

impl TryFrom<NaiveDateTime> for NepaliDateTime {
    type Error = NepaliDateError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::from_gregorian(value)
    }
}

impl Serialize for NepaliDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NepaliDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
