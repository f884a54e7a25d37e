use chrono::{Datelike, NaiveDate, TimeDelta};
use nepali_date::{
    MAX_YEAR, MIN_YEAR, NEPAL_OFFSET_MINUTES, NepaliDateError, NepaliDateTime, days_in_month,
};

/// Every valid date in the supported range, at a fixed time of day.
fn all_dates() -> impl Iterator<Item = NepaliDateTime> {
    (MIN_YEAR..=MAX_YEAR).flat_map(|year| {
        (1..=12u8).flat_map(move |month| {
            let last = u8::try_from(days_in_month(year, month)).unwrap();
            (1..=last).map(move |day| {
                NepaliDateTime::from_ymd(year, month, day)
                    .unwrap()
                    .and_hms(10, 30, 45)
                    .and_milli_micro(123, 456)
            })
        })
    })
}

#[test]
fn gregorian_roundtrip_every_date() {
    let offset = TimeDelta::minutes(NEPAL_OFFSET_MINUTES);
    let mut count = 0;
    for value in all_dates() {
        let local = value.to_gregorian().unwrap();
        let back = NepaliDateTime::from_gregorian(local - offset).unwrap();
        assert_eq!(back, value, "roundtrip failed for {value} via {local}");
        count += 1;
    }
    assert_eq!(count, 103_009 - 366);
}

#[test]
fn consecutive_days_are_ordered() {
    let mut previous: Option<NepaliDateTime> = None;
    for value in all_dates() {
        if let Some(prev) = previous {
            assert!(prev.is_before(&value), "{prev} should be before {value}");
            assert!(value.is_after(&prev), "{value} should be after {prev}");
            assert_eq!(value.day_count_since(&prev), 1);
            assert_eq!(prev.checked_add_days(1), Some(value));
        }
        previous = Some(value);
    }
}

#[test]
fn consecutive_days_are_consecutive_gregorian_days() {
    let mut previous: Option<NaiveDate> = None;
    for value in all_dates() {
        let date = value.to_gregorian().unwrap().date();
        if let Some(prev) = previous {
            assert_eq!(date.signed_duration_since(prev).num_days(), 1, "gap before {value}");
        }
        previous = Some(date);
    }
}

#[test]
fn ordering_across_years() {
    let a = NepaliDateTime::from_ymd(1999, 12, 31).unwrap();
    let b = NepaliDateTime::from_ymd(2000, 1, 1).unwrap();
    let c = NepaliDateTime::from_ymd(2200, 12, 31).unwrap();
    assert!(a.is_before(&b));
    assert!(b.is_before(&c));
    assert!(a.is_before(&c));
    assert!(c.is_after(&a));
}

#[test]
fn weekday_matches_chrono() {
    for value in all_dates() {
        let expected = value.to_gregorian().unwrap().weekday().num_days_from_sunday() + 1;
        assert_eq!(u32::from(value.weekday()), expected, "weekday mismatch for {value}");
    }
}

#[test]
fn nepal_midnight_on_anchor_is_new_year() {
    let utc = NaiveDate::from_ymd_opt(1913, 4, 13)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        - TimeDelta::minutes(NEPAL_OFFSET_MINUTES);
    let value = NepaliDateTime::from_gregorian(utc).unwrap();
    assert_eq!(value, NepaliDateTime::new(1970).unwrap());
    assert_eq!(value.weekday(), 1);
}

#[test]
fn text_roundtrip_representative_value() {
    let value = NepaliDateTime::from_ymd(2080, 1, 15)
        .unwrap()
        .and_hms(10, 30, 45)
        .and_milli_micro(123, 456);
    let text = value.to_string();
    assert_eq!(text, "2080-01-15 10:30:45.123456");
    assert_eq!(text.parse::<NepaliDateTime>(), Ok(value));
}

#[test]
fn iso8601_string_for_last_year_uses_four_digits() {
    let value = NepaliDateTime::new(MAX_YEAR).unwrap();
    assert_eq!(value.to_iso8601_string().unwrap(), "2250-01-0100:00:00.000");
}

#[test]
fn parse_then_convert() {
    let value = NepaliDateTime::parse("2080-01-15T10:30:45+05:45").unwrap();
    let expected = NaiveDate::from_ymd_opt(2023, 4, 28)
        .unwrap()
        .and_hms_opt(10, 30, 45)
        .unwrap();
    assert_eq!(value.to_gregorian(), Ok(expected));
}

#[test]
fn gregorian_outside_window_is_rejected() {
    let early = NaiveDate::from_ymd_opt(1900, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert!(matches!(
        NepaliDateTime::from_gregorian(early),
        Err(NepaliDateError::OutOfRange(_))
    ));

    let late = NaiveDate::from_ymd_opt(2300, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert!(matches!(
        NepaliDateTime::try_from(late),
        Err(NepaliDateError::OutOfRange(_))
    ));
}
