//! Result and configuration types for pillar derivation.

use ganzhi_base::{Pillar, Stem};
use ganzhi_time::{Jie, SolarDate, SolarTime, next_historical_year};

/// Month derivation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthConfig {
    /// Move the first term forward one second before its civil breakdown
    /// when its seconds field would round up to the next minute.
    pub nudge_first_term: bool,
}

impl Default for MonthConfig {
    fn default() -> Self {
        Self {
            nudge_first_term: true,
        }
    }
}

impl MonthConfig {
    pub fn new(nudge_first_term: bool) -> Self {
        Self { nudge_first_term }
    }

    /// Report term instants exactly as the calendar gives them.
    pub fn exact() -> Self {
        Self::new(false)
    }
}

/// One solar month: its pillar, the jie that opens it and its span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthPillar {
    pub pillar: Pillar,
    pub jie: Jie,
    /// Start of the month (inclusive).
    pub start_jd: f64,
    /// End of the month (exclusive), the next jie.
    pub end_jd: f64,
    /// Civil breakdown of `start_jd`.
    pub start: SolarTime,
    /// Civil breakdown of `end_jd`.
    pub end: SolarTime,
}

impl MonthPillar {
    /// Length of the month in days.
    pub fn width(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// One civil day and its pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayPillar {
    pub date: SolarDate,
    pub pillar: Pillar,
    /// Stem of the day's Zi double-hour.
    pub hour_start: Stem,
}

/// One double-hour and the civil hours `[start_hour, end_hour)` it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourPillar {
    pub pillar: Pillar,
    pub start_hour: u32,
    pub end_hour: u32,
}

/// A run of `count` consecutive years starting at `first_year`, with no
/// year zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearSpan {
    pub first_year: i32,
    pub count: u32,
}

impl YearSpan {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The years of the span in order, skipping year zero.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        std::iter::successors(Some(self.first_year), |&y| Some(next_historical_year(y)))
            .take(self.count as usize)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.years().last()
    }
}
