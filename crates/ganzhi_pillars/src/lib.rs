//! Four Pillars derivation over a solar calendar.
//!
//! This crate provides:
//! - Year pillars as a lazy sequence
//! - Month pillars bounded by the jie solar terms
//! - Day pillars across civil month boundaries
//! - The thirteen double-hour pillars of a day
//! - Clipping of year and month sequences to a civil time window
//!
//! Every function is generic over a [`SolarCalendar`] and only reads from it.

pub mod day;
pub mod error;
pub mod hour;
pub mod month;
pub mod pillar_types;
pub mod range;
pub mod year;

pub use day::{DayCursor, MonthSegment, day_pillars, day_pillars_for_month, month_segments};
pub use error::PillarError;
pub use ganzhi_time::SolarCalendar;
pub use hour::{HOUR_SLOTS, hour_pillars, hour_pillars_for_day};
pub use month::month_pillars;
pub use pillar_types::{DayPillar, HourPillar, MonthConfig, MonthPillar, YearSpan};
pub use range::{clip_months, clip_year_range};
pub use year::{YearPillars, year_pillar, year_pillars};
