//! Clipping derived year and month sequences to a civil time window.

use ganzhi_time::{SolarCalendar, SolarTime, next_historical_year, prev_historical_year};

use crate::error::PillarError;
use crate::pillar_types::{MonthPillar, YearSpan};

/// Number of historical years in `first..=last`, skipping year zero.
fn historical_year_count(first: i32, last: i32) -> u32 {
    if last < first {
        return 0;
    }
    let raw = (last as i64 - first as i64 + 1) as u32;
    if first < 0 && last > 0 { raw - 1 } else { raw }
}

/// Ganzhi years touched by the window `[start, end]`.
///
/// A ganzhi year runs from one Start of Spring to the next. A start before
/// the Start of Spring of its civil year belongs to the previous year, unless
/// it falls on the same civil day as the Start of Spring. The exception
/// compares the full civil date, not just the year and month.
///
/// An end before the Start of Spring of its civil year stops at the
/// previous year.
pub fn clip_year_range<C: SolarCalendar + ?Sized>(
    cal: &C,
    start: &SolarTime,
    end: &SolarTime,
) -> Result<YearSpan, PillarError> {
    let mut first = start.year;
    let spring = cal.start_of_spring(start.year)?;
    if cal.solar_to_jd(start)? < spring && cal.jd_to_solar(spring)?.date() != start.date() {
        first = prev_historical_year(first);
    }

    let mut last = end.year;
    let end_jd = cal.solar_to_jd(end)?;
    if end_jd < cal.start_of_spring(end.year)? {
        last = prev_historical_year(last);
    } else if cal.year_solar_terms(end.year)?[11].next_jd < end_jd {
        last = next_historical_year(last);
    }

    Ok(YearSpan {
        first_year: first,
        count: historical_year_count(first, last),
    })
}

/// Restrict `months` to the window `[start, end)`.
///
/// Entries outside the window are dropped, the first and last retained
/// entries are truncated to the window, and order is preserved. An empty or
/// inverted window gives no entries.
pub fn clip_months<C: SolarCalendar + ?Sized>(
    cal: &C,
    months: &[MonthPillar],
    start: &SolarTime,
    end: &SolarTime,
) -> Result<Vec<MonthPillar>, PillarError> {
    let start_jd = cal.solar_to_jd(start)?;
    let end_jd = cal.solar_to_jd(end)?;
    if end_jd <= start_jd {
        return Ok(Vec::new());
    }

    let clipped = months
        .iter()
        .filter(|m| m.start_jd < end_jd && start_jd < m.end_jd)
        .map(|m| {
            let mut c = *m;
            if start_jd > m.start_jd {
                c.start_jd = start_jd;
                c.start = *start;
            }
            if end_jd < m.end_jd {
                c.end_jd = end_jd;
                c.end = *end;
            }
            c
        })
        .filter(|c| c.width() > 0.0)
        .collect();
    Ok(clipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_skips_year_zero() {
        assert_eq!(historical_year_count(2020, 2024), 5);
        assert_eq!(historical_year_count(-2, 2), 4);
        assert_eq!(historical_year_count(-1, 1), 2);
        assert_eq!(historical_year_count(-3, -1), 3);
        assert_eq!(historical_year_count(2024, 2023), 0);
        assert_eq!(historical_year_count(2024, 2024), 1);
    }
}
