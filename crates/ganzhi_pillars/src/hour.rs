//! Double-hour pillars of one day.

use ganzhi_base::{Branch, Pillar, Stem};

use crate::error::PillarError;
use crate::pillar_types::{DayPillar, HourPillar};

/// Slots per day: twelve double-hours with the Zi hour split at midnight.
pub const HOUR_SLOTS: usize = 13;

/// The thirteen hour pillars of a day whose Zi hour has stem `hour_start`.
///
/// Slot `i` covers civil hours `[2i - 1, 2i + 1)`, except that the first slot
/// is `[0, 1)` and the last `[23, 24)`. The last slot is the early Zi hour of
/// the next day and carries its stem. `hour_start` must be a Yang stem.
pub fn hour_pillars(hour_start: Stem) -> Result<Vec<HourPillar>, PillarError> {
    let first = Pillar::new(hour_start, Branch::Zi)?;
    let hours = std::iter::successors(Some(first), |p| Some(p.next()))
        .take(HOUR_SLOTS)
        .enumerate()
        .map(|(i, pillar)| {
            let i = i as u32;
            HourPillar {
                pillar,
                start_hour: if i == 0 { 0 } else { 2 * i - 1 },
                end_hour: if i == 12 { 24 } else { 2 * i + 1 },
            }
        })
        .collect();
    Ok(hours)
}

/// Hour pillars for a derived day.
pub fn hour_pillars_for_day(day: &DayPillar) -> Result<Vec<HourPillar>, PillarError> {
    hour_pillars(day.hour_start)
}
