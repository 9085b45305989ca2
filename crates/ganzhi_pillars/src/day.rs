//! Day pillars over a run of civil days.
//!
//! A window of days is cut into per-month segments so that month lengths
//! and the December to January carry are handled in one place. A single
//! [`DayCursor`] walks every segment, so the sexagenary count never resets
//! at a month boundary.

use ganzhi_base::{Pillar, Stem, day_stem_to_hour_start_stem};
use ganzhi_time::{SolarCalendar, SolarDate, next_historical_year};

use crate::error::PillarError;
use crate::pillar_types::{DayPillar, MonthPillar};

/// Days `[first_day, end_day)` of one civil month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSegment {
    pub year: i32,
    pub month: u32,
    pub first_day: u32,
    pub end_day: u32,
}

impl MonthSegment {
    pub fn len(&self) -> u32 {
        self.end_day.saturating_sub(self.first_day)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Day and Zi-hour stem state carried from one civil day to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCursor {
    pillar: Pillar,
    hour_start: Stem,
}

impl DayCursor {
    pub fn new(pillar: Pillar, hour_start: Stem) -> Self {
        Self { pillar, hour_start }
    }

    /// Emit the current day for `date` and step to the next day.
    pub fn take(&mut self, date: SolarDate) -> DayPillar {
        let day = DayPillar {
            date,
            pillar: self.pillar,
            hour_start: self.hour_start,
        };
        self.pillar = self.pillar.next();
        // Twelve double-hours a day: the Zi stem moves 12 = 2 (mod 10).
        self.hour_start = self.hour_start.advance(12);
        day
    }
}

/// Split civil days `[start, end)` into contiguous month segments.
pub fn month_segments<C: SolarCalendar + ?Sized>(
    cal: &C,
    start: SolarDate,
    end: SolarDate,
) -> Result<Vec<MonthSegment>, PillarError> {
    let mut segments = Vec::new();
    if end <= start {
        return Ok(segments);
    }
    let (mut year, mut month, mut day) = (start.year, start.month, start.day);
    loop {
        if (year, month) == (end.year, end.month) {
            if day < end.day {
                segments.push(MonthSegment {
                    year,
                    month,
                    first_day: day,
                    end_day: end.day,
                });
            }
            return Ok(segments);
        }
        let len = cal.days_in_month(year, month)?;
        segments.push(MonthSegment {
            year,
            month,
            first_day: day,
            end_day: len + 1,
        });
        if month == 12 {
            year = next_historical_year(year);
            month = 1;
        } else {
            month += 1;
        }
        day = 1;
    }
}

/// Day pillars for civil days `[start, end)`.
///
/// The first day is anchored by the calendar's day pillar for `start`;
/// every later day follows from the cursor.
pub fn day_pillars<C: SolarCalendar + ?Sized>(
    cal: &C,
    start: SolarDate,
    end: SolarDate,
) -> Result<Vec<DayPillar>, PillarError> {
    start.validate()?;
    end.validate()?;
    let segments = month_segments(cal, start, end)?;
    if segments.is_empty() {
        return Ok(Vec::new());
    }

    let anchor = cal.day_pillar(&start)?;
    let mut cursor = DayCursor::new(anchor, day_stem_to_hour_start_stem(anchor.stem()));
    let mut days = Vec::with_capacity(segments.iter().map(|s| s.len() as usize).sum());
    for seg in &segments {
        for day in seg.first_day..seg.end_day {
            days.push(cursor.take(SolarDate {
                year: seg.year,
                month: seg.month,
                day,
            }));
        }
    }
    Ok(days)
}

/// Day pillars of the civil days that open inside a solar month.
pub fn day_pillars_for_month<C: SolarCalendar + ?Sized>(
    cal: &C,
    month: &MonthPillar,
) -> Result<Vec<DayPillar>, PillarError> {
    day_pillars(cal, month.start.date(), month.end.date())
}
