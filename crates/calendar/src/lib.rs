//! # petra-calendar
//!
//! The simulation calendar of a parsed deck: a strictly increasing sequence
//! of time points built from `START`, `DATES` and `TSTEP`.
//!
//! ## Architecture
//!
//! ```text
//! Deck ─▶ START record ─ time_from_eclipse ─▶ TimeMap::new(start)
//!   │
//!   └─ in deck order ─┬─ DATES ─▶ add_time   (one point per record)
//!                     └─ TSTEP ─▶ add_tstep  (one point per value)
//! ```
//!
//! Time points are [`chrono::NaiveDateTime`] values read as UTC; step
//! lengths and elapsed times are reported in seconds.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::TimeDelta;
//! use petra_calendar::{TimeMap, forward, mkdate};
//!
//! let start = mkdate(1981, 5, 21).unwrap();
//! let mut map = TimeMap::new(start).unwrap();
//! map.add_tstep(TimeDelta::days(1)).unwrap();
//! map.add_time(mkdate(1982, 1, 1).unwrap()).unwrap();
//!
//! assert_eq!(map.get_start_time(1).unwrap(), forward(start, 86_400).unwrap());
//! assert_eq!(map.get_time_step_length(0).unwrap(), 86_400.0);
//! assert_eq!(map.first_timestep_years(), vec![2]);
//! assert!(map.add_time(start).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `timemap` | `TimeMap` and its deck replay |
//! | `date` | Calendar arithmetic, month spellings, date records |
//! | `error` | Error types |

mod date;
mod error;
mod timemap;

pub use date::{
    DATE_ITEMS, forward, forward_hms, mkdate, parse_month, parse_time_of_day, time_from_eclipse,
    time_from_eclipse_date,
};
pub use error::CalendarError;
pub use timemap::TimeMap;
