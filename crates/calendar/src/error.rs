//! Error types for the petra-calendar crate.

use chrono::{NaiveDateTime, TimeDelta};
use petra_deck::DeckError;

/// Error type for all fallible operations in the petra-calendar crate.
///
/// Every variant is a contract violation: a time map is never built from
/// inconsistent input, whatever strictness the deck was parsed with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a time point does not come strictly after the last one.
    #[error("time {time} is not after the last time point {last}")]
    NonMonotonicTime {
        /// The rejected time point.
        time: NaiveDateTime,
        /// The current last time point.
        last: NaiveDateTime,
    },

    /// Returned when a time step is negative.
    #[error("time step {step} is negative")]
    NegativeTimeStep {
        /// The rejected step.
        step: TimeDelta,
    },

    /// Returned when year, month and day do not form a calendar date.
    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year.
        year: i32,
        /// The month (1..=12 when valid).
        month: u32,
        /// The day within the month.
        day: u32,
    },

    /// Returned when a `TIME` value is not `HH:MM:SS[.fff]` within a day.
    #[error("invalid time of day '{value}' (expected HH:MM:SS)")]
    InvalidTimeOfDay {
        /// The rejected text.
        value: String,
    },

    /// Returned when a month token matches no known spelling.
    #[error("unknown month '{name}'")]
    UnknownMonth {
        /// The rejected token.
        name: String,
    },

    /// Returned when a record is not `DAY MONTH YEAR TIME`.
    #[error("record is not DAY MONTH YEAR TIME: {reason}")]
    InvalidRecord {
        /// What is wrong with the record.
        reason: String,
    },

    /// Returned when a keyword other than the expected one is replayed.
    #[error("expected keyword {expected}, got {actual}")]
    WrongKeyword {
        /// The keyword the operation reads.
        expected: &'static str,
        /// The keyword that was passed.
        actual: String,
    },

    /// Returned when a time-map index does not exist.
    #[error("time step index {index} out of range (size {size})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of addressable indices.
        size: usize,
    },

    /// Returned when a time map is started at the uninitialized time value.
    #[error("invalid start time {time}")]
    InvalidStartTime {
        /// The rejected start time.
        time: NaiveDateTime,
    },

    /// Returned when calendar arithmetic leaves the representable range.
    #[error("time arithmetic from {time} overflows")]
    Overflow {
        /// The time the arithmetic started from.
        time: NaiveDateTime,
    },

    /// A deck item could not be read.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn time(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn error_non_monotonic() {
        let err = CalendarError::NonMonotonicTime {
            time: time(2009, 2, 2),
            last: time(2010, 1, 1),
        };
        assert_eq!(
            err.to_string(),
            "time 2009-02-02 00:00:00 is not after the last time point 2010-01-01 00:00:00"
        );
    }

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            year: 2010,
            month: 0,
            day: 0,
        };
        assert_eq!(err.to_string(), "invalid calendar date 2010-00-00");
    }

    #[test]
    fn error_wrong_keyword() {
        let err = CalendarError::WrongKeyword {
            expected: "DATES",
            actual: "NOTDATES".to_string(),
        };
        assert_eq!(err.to_string(), "expected keyword DATES, got NOTDATES");
    }

    #[test]
    fn error_deck_is_transparent() {
        let inner = DeckError::UnknownItem {
            name: "DAY".to_string(),
        };
        let err = CalendarError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn error_bounds() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<CalendarError>();
    }
}
