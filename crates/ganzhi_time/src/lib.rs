//! The solar calendar collaborator for pillar derivation.
//!
//! This crate provides:
//! - Julian Date <-> proleptic Gregorian conversion without a year zero
//! - `SolarDate` / `SolarTime` civil date and time values
//! - The `SolarCalendar` trait: jie solar terms, month lengths and the four
//!   pillars of an instant
//! - `TermTable`, a `SolarCalendar` backed by a text table of jie instants

pub mod calendar;
pub mod error;
pub mod julian;
pub mod solar_time;
pub mod term_table;

pub use calendar::{ALL_JIE, FourPillars, Jie, SolarCalendar, SolarTerm};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, jd_to_calendar, jd_to_jdn,
    next_historical_year, prev_historical_year,
};
pub use solar_time::{SolarDate, SolarTime};
pub use term_table::TermTable;
