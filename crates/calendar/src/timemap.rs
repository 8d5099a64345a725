//! The simulation calendar.

use chrono::{Datelike, NaiveDateTime, TimeDelta};
use petra_deck::{Deck, DeckKeyword};
use tracing::{debug, info};

use crate::date::{mkdate, time_from_eclipse};
use crate::error::CalendarError;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Start time used when a deck has no `START` record.
const DEFAULT_START: (i32, u32, u32) = (1983, 1, 1);

/// A strictly increasing sequence of time points; index 0 is the start.
///
/// Step `i` runs from point `i` to point `i + 1`. Every mutation checks
/// monotonicity and leaves the map untouched when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMap {
    times: Vec<NaiveDateTime>,
}

impl TimeMap {
    /// A map holding only `start`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidStartTime`] if `start` is the
    /// uninitialized time value (the Unix epoch).
    pub fn new(start: NaiveDateTime) -> Result<Self, CalendarError> {
        if start == NaiveDateTime::default() {
            return Err(CalendarError::InvalidStartTime { time: start });
        }
        Ok(Self { times: vec![start] })
    }

    /// Builds the calendar of a parsed deck.
    ///
    /// The start comes from the first `START` record, or 1983-01-01 when the
    /// deck has none. `DATES` and `TSTEP` keywords are then replayed in deck
    /// order.
    ///
    /// # Errors
    ///
    /// Returns any error of [`time_from_eclipse`],
    /// [`add_from_dates_keyword`](Self::add_from_dates_keyword) and
    /// [`add_from_tstep_keyword`](Self::add_from_tstep_keyword).
    pub fn from_deck(deck: &Deck) -> Result<Self, CalendarError> {
        let start = match deck
            .get_keyword_at("START", 0)
            .ok()
            .and_then(|kw| kw.records().first())
        {
            Some(record) => time_from_eclipse(record)?,
            None => {
                let (year, month, day) = DEFAULT_START;
                mkdate(year, month, day)?
            }
        };

        let mut map = Self::new(start)?;
        for keyword in deck {
            match keyword.name() {
                "DATES" => map.add_from_dates_keyword(keyword)?,
                "TSTEP" => map.add_from_tstep_keyword(keyword)?,
                _ => {}
            }
        }
        info!(
            start = %map.times[0],
            end = %map.get_end_time(),
            n_steps = map.num_timesteps(),
            "built time map"
        );
        Ok(map)
    }

    // ---------------------------------------------------------------------
    // Appending
    // ---------------------------------------------------------------------

    /// Appends `time`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NonMonotonicTime`] unless `time` is strictly
    /// after the last point.
    pub fn add_time(&mut self, time: NaiveDateTime) -> Result<(), CalendarError> {
        let last = self.get_end_time();
        if time <= last {
            return Err(CalendarError::NonMonotonicTime { time, last });
        }
        self.times.push(time);
        Ok(())
    }

    /// Appends the last point moved by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NegativeTimeStep`] for a negative step,
    /// [`CalendarError::NonMonotonicTime`] for a zero step and
    /// [`CalendarError::Overflow`] past the representable range.
    pub fn add_tstep(&mut self, step: TimeDelta) -> Result<(), CalendarError> {
        if step < TimeDelta::zero() {
            return Err(CalendarError::NegativeTimeStep { step });
        }
        let last = self.get_end_time();
        let time = last
            .checked_add_signed(step)
            .ok_or(CalendarError::Overflow { time: last })?;
        self.add_time(time)
    }

    /// Appends one point per `DATES` record, in record order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::WrongKeyword`] for another keyword, and the
    /// errors of [`time_from_eclipse`] and [`add_time`](Self::add_time).
    /// Points of records before a failing one stay appended.
    pub fn add_from_dates_keyword(&mut self, keyword: &DeckKeyword) -> Result<(), CalendarError> {
        expect_keyword(keyword, "DATES")?;
        for record in keyword {
            self.add_time(time_from_eclipse(record)?)?;
        }
        debug!(n_records = keyword.size(), size = self.size(), "added DATES");
        Ok(())
    }

    /// Appends one step per `TSTEP` value, in record order.
    ///
    /// Values are read in seconds when the item carries a dimension and as
    /// days otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::WrongKeyword`] for another keyword,
    /// [`CalendarError::Deck`] for an unreadable item, and the errors of
    /// [`add_tstep`](Self::add_tstep). Steps before a failing one stay
    /// appended.
    pub fn add_from_tstep_keyword(&mut self, keyword: &DeckKeyword) -> Result<(), CalendarError> {
        expect_keyword(keyword, "TSTEP")?;
        for record in keyword {
            let item = record.get_item(0)?;
            let seconds = if item.has_dimension() {
                item.get_si_double_data()?
            } else {
                item.get_data::<f64>()?
                    .into_iter()
                    .map(|days| days * SECONDS_PER_DAY)
                    .collect()
            };
            for value in seconds {
                let last = self.get_end_time();
                let step = seconds_to_delta(value).ok_or(CalendarError::Overflow { time: last })?;
                self.add_tstep(step)?;
            }
        }
        debug!(size = self.size(), "added TSTEP");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Number of time points.
    pub fn size(&self) -> usize {
        self.times.len()
    }

    /// Number of steps, one less than [`size`](Self::size).
    pub fn num_timesteps(&self) -> usize {
        self.times.len() - 1
    }

    /// All time points in order.
    pub fn times(&self) -> &[NaiveDateTime] {
        &self.times
    }

    /// The time point at `index`, which is where step `index` starts.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::IndexOutOfRange`] if `index >= size()`.
    pub fn get_start_time(&self, index: usize) -> Result<NaiveDateTime, CalendarError> {
        self.times
            .get(index)
            .copied()
            .ok_or(CalendarError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// The last time point.
    pub fn get_end_time(&self) -> NaiveDateTime {
        // `new` guarantees one point and nothing removes points
        self.times[self.times.len() - 1]
    }

    /// Length of step `index` in seconds.
    ///
    /// Lengths are whole milliseconds; steps read from `TSTEP` are stored at
    /// that precision and any finer part of a step is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::IndexOutOfRange`] if `index` is not a step,
    /// which includes the index of the last point.
    pub fn get_time_step_length(&self, index: usize) -> Result<f64, CalendarError> {
        let end = index.checked_add(1).and_then(|next| self.times.get(next));
        match (self.times.get(index), end) {
            (Some(start), Some(end)) => Ok(seconds_between(*start, *end)),
            _ => Err(CalendarError::IndexOutOfRange {
                index,
                size: self.num_timesteps(),
            }),
        }
    }

    /// Seconds from the start to point `index`, in whole milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::IndexOutOfRange`] if `index >= size()`.
    pub fn get_time_passed_until(&self, index: usize) -> Result<f64, CalendarError> {
        let time = self.get_start_time(index)?;
        Ok(seconds_between(self.times[0], time))
    }

    /// Seconds from the start to the last point.
    pub fn get_total_time(&self) -> f64 {
        seconds_between(self.times[0], self.get_end_time())
    }

    /// Returns `true` if point `index` opens a new month (`months`) or a new
    /// year (`years`) compared with the point before it.
    ///
    /// Index 0 and indices past the end are never in either sequence.
    pub fn is_timestep_in_first_of_months_years_sequence(
        &self,
        index: usize,
        years: bool,
        months: bool,
    ) -> bool {
        let (Some(prev), Some(time)) = (
            index.checked_sub(1).and_then(|i| self.times.get(i)),
            self.times.get(index),
        ) else {
            return false;
        };
        let new_year = time.year() != prev.year();
        let new_month = new_year || time.month() != prev.month();
        (years && new_year) || (months && new_month)
    }

    /// Indices of the points that open a new month.
    pub fn first_timestep_months(&self) -> Vec<usize> {
        (1..self.size())
            .filter(|&i| self.is_timestep_in_first_of_months_years_sequence(i, false, true))
            .collect()
    }

    /// Indices of the points that open a new year.
    pub fn first_timestep_years(&self) -> Vec<usize> {
        (1..self.size())
            .filter(|&i| self.is_timestep_in_first_of_months_years_sequence(i, true, false))
            .collect()
    }
}

fn expect_keyword(keyword: &DeckKeyword, expected: &'static str) -> Result<(), CalendarError> {
    if keyword.name() != expected {
        return Err(CalendarError::WrongKeyword {
            expected,
            actual: keyword.name().to_string(),
        });
    }
    Ok(())
}

fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    end.signed_duration_since(start).num_milliseconds() as f64 / 1000.0
}

/// Millisecond precision; `None` for non-finite or out-of-range values.
fn seconds_to_delta(seconds: f64) -> Option<TimeDelta> {
    let millis = (seconds * 1000.0).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(millis as i64)
}
