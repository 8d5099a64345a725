//! Calendar arithmetic and deck date records.
//!
//! Time points are [`NaiveDateTime`] values read as UTC.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use petra_deck::DeckRecord;

use crate::error::CalendarError;

/// Item names of a date record, in order.
pub const DATE_ITEMS: [&str; 4] = ["DAY", "MONTH", "YEAR", "TIME"];

/// Month spellings accepted in deck dates, upper case.
const MONTHS: [(&str, u32); 19] = [
    ("JAN", 1),
    ("FEB", 2),
    ("MAR", 3),
    ("APR", 4),
    ("MAY", 5),
    ("MAI", 5),
    ("MEI", 5),
    ("JUN", 6),
    ("JUL", 7),
    ("JLY", 7),
    ("AUG", 8),
    ("SEP", 9),
    ("OCT", 10),
    ("OKT", 10),
    ("OUT", 10),
    ("NOV", 11),
    ("DEC", 12),
    ("DES", 12),
    ("DEZ", 12),
];

/// Midnight at the start of `year-month-day`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the three values do not form a
/// calendar date.
pub fn mkdate(year: i32, month: u32, day: u32) -> Result<NaiveDateTime, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// `time` moved by `seconds`, which may be negative.
///
/// # Errors
///
/// Returns [`CalendarError::Overflow`] if the result is not representable.
pub fn forward(time: NaiveDateTime, seconds: i64) -> Result<NaiveDateTime, CalendarError> {
    TimeDelta::try_seconds(seconds)
        .and_then(|delta| time.checked_add_signed(delta))
        .ok_or(CalendarError::Overflow { time })
}

/// `time` moved by `hours:minutes:seconds`; components may exceed their
/// usual range.
///
/// # Errors
///
/// Returns [`CalendarError::Overflow`] if the result is not representable.
pub fn forward_hms(
    time: NaiveDateTime,
    hours: i64,
    minutes: i64,
    seconds: i64,
) -> Result<NaiveDateTime, CalendarError> {
    let total = hours
        .checked_mul(3600)
        .zip(minutes.checked_mul(60))
        .and_then(|(h, m)| h.checked_add(m))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or(CalendarError::Overflow { time })?;
    forward(time, total)
}

/// The month number (1..=12) for a deck month token, ignoring case.
///
/// # Errors
///
/// Returns [`CalendarError::UnknownMonth`] for an unrecognized spelling.
pub fn parse_month(name: &str) -> Result<u32, CalendarError> {
    let upper = name.trim().to_ascii_uppercase();
    MONTHS
        .iter()
        .find(|(spelling, _)| *spelling == upper)
        .map(|&(_, month)| month)
        .ok_or_else(|| CalendarError::UnknownMonth {
            name: name.to_string(),
        })
}

/// Parses `HH:MM:SS[.fff]`; the fraction is truncated.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimeOfDay`] for malformed text or a time
/// outside one day.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, CalendarError> {
    let invalid = || CalendarError::InvalidTimeOfDay {
        value: value.to_string(),
    };
    let mut parts = value.trim().split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let (whole, fraction) = seconds.split_once('.').unwrap_or((seconds, ""));
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let number = |text: &str| {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        text.parse::<u32>().ok()
    };
    let (Some(h), Some(m), Some(s)) = (number(hours), number(minutes), number(whole)) else {
        return Err(invalid());
    };
    NaiveTime::from_hms_opt(h, m, s).ok_or_else(invalid)
}

/// Midnight of a deck date given as day, month token and year.
///
/// # Errors
///
/// Returns [`CalendarError::UnknownMonth`] or [`CalendarError::InvalidDate`].
pub fn time_from_eclipse_date(
    day: i32,
    month: &str,
    year: i32,
) -> Result<NaiveDateTime, CalendarError> {
    let month = parse_month(month)?;
    let day = u32::try_from(day).map_err(|_| CalendarError::InvalidDate {
        year,
        month,
        day: 0,
    })?;
    mkdate(year, month, day)
}

/// The time point of a `DAY MONTH YEAR TIME` record.
///
/// The record must hold exactly those four items in that order. A `TIME`
/// slot without a value means midnight.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRecord`] for a record of another layout,
/// [`CalendarError::Deck`] for items of the wrong type, and the errors of
/// [`time_from_eclipse_date`] and [`parse_time_of_day`].
pub fn time_from_eclipse(record: &DeckRecord) -> Result<NaiveDateTime, CalendarError> {
    if record.size() != DATE_ITEMS.len() {
        return Err(CalendarError::InvalidRecord {
            reason: format!("{} items instead of {}", record.size(), DATE_ITEMS.len()),
        });
    }
    for (position, (item, expected)) in record.iter().zip(DATE_ITEMS).enumerate() {
        if item.name() != expected {
            return Err(CalendarError::InvalidRecord {
                reason: format!("item {position} is {}, not {expected}", item.name()),
            });
        }
    }

    let day = record.get_item(0)?.get_int(0)?;
    let month = record.get_item(1)?.get_string(0)?;
    let year = record.get_item(2)?.get_int(0)?;
    let date = time_from_eclipse_date(day, month, year)?;

    let time = record.get_item(3)?;
    if !time.has_value(0) {
        return Ok(date);
    }
    let time_of_day = parse_time_of_day(time.get_string(0)?)?;
    Ok(date.date().and_time(time_of_day))
}
