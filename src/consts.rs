/// Earliest Nepali year a `NepaliDateTime` may hold (inclusive)
pub const MIN_YEAR: i32 = 1970;

/// Latest Nepali year a `NepaliDateTime` may hold (inclusive)
pub const MAX_YEAR: i32 = 2250;

/// First year present in the month-length table.
/// Kept as a reference year for day counting; values cannot be built in it.
pub const TABLE_START_YEAR: i32 = 1969;

/// Maximum valid month (Chaitra for Nepali years, December for Gregorian ones)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Baisakh / January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Gregorian days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Nepali date that falls on `GREGORIAN_EPOCH`
pub const NEPALI_EPOCH_REFERENCE: (i32, u8, u8) = (1969, 9, 18);
/// Gregorian date of `NEPALI_EPOCH_REFERENCE`
pub const GREGORIAN_EPOCH: (i32, u8, u8) = (1913, 1, 1);
/// 1913-01-01 was a Wednesday (Sunday = 0)
pub(crate) const GREGORIAN_EPOCH_WEEKDAY: u64 = 3;

/// First day of the first supported Nepali year
pub const NEPALI_NEW_YEAR_ANCHOR: (i32, u8, u8) = (MIN_YEAR, JANUARY, MIN_DAY);
/// Gregorian date of `NEPALI_NEW_YEAR_ANCHOR`: 1913-04-13, as days from 0001-01-01 (day 1)
pub(crate) const GREGORIAN_NEW_YEAR_ANCHOR_DAYS_FROM_CE: i32 = 698_446;

/// Nepal Standard Time offset from UTC (+05:45), in minutes
pub const NEPAL_OFFSET_MINUTES: i64 = 5 * 60 + 45;

pub(crate) const DAYS_PER_WEEK: u64 = 7;
pub(crate) const MICROS_PER_MILLI: u32 = 1_000;
pub(crate) const NANOS_PER_MICRO: u32 = 1_000;
pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Years with a magnitude above this are written with the six-digit form
pub const FOUR_DIGIT_YEAR_LIMIT: i32 = 9_999;
/// The six-digit form refuses magnitudes at or above this value
pub const SIX_DIGIT_YEAR_LIMIT: u32 = 10_000;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between date and time in the default text form
pub const DATE_TIME_SEPARATOR: char = ' ';
/// Separator before the fractional seconds
pub const FRACTION_SEPARATOR: char = '.';
