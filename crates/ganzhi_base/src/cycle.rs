//! Index arithmetic over the interlocking 10/12/60 cycles.
//!
//! The sexagenary cycle pairs stems and branches of equal polarity, so only
//! 60 of the 120 combinations occur. Every function here is total over its
//! documented input range.

use crate::branch::Branch;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const SEXAGENARY_COUNT: u8 = 60;

/// Offset aligning proleptic year numbers with the sexagenary cycle
/// (4712 years back to the Julian period epoch, plus 24).
pub const YEAR_CYCLE_OFFSET: i64 = 4712 + 24;

/// Offset aligning Julian day numbers with the sexagenary day cycle.
pub const DAY_CYCLE_OFFSET: i64 = 49;

/// Next index on a ring of `size` elements. An empty ring yields 0.
pub const fn next_on_ring(i: u8, size: u8) -> u8 {
    if size == 0 {
        return 0;
    }
    ((i as u16 + 1) % size as u16) as u8
}

/// Previous index on a ring of `size` elements. An empty ring yields 0.
pub const fn prev_on_ring(i: u8, size: u8) -> u8 {
    if size == 0 {
        return 0;
    }
    let size = size as u16;
    ((i as u16 % size + size - 1) % size) as u8
}

/// Sexagenary index of a stem/branch pair: `5 * ((s + 12 - b) mod 12) + s`.
///
/// Only meaningful when the stem and branch share polarity; use
/// [`crate::Pillar`] when the pair is not already known to be valid.
pub const fn sexagenary_index(stem: Stem, branch: Branch) -> u8 {
    let s = stem.index();
    let b = branch.index();
    5 * ((s + 12 - b) % 12) + s
}

/// Stem of the first (Yin-branch) month for a year stem.
pub const fn year_stem_to_month_start_stem(year_stem: Stem) -> Stem {
    Stem::from_ring(((year_stem.index() % 5 + 1) * 2) % 10)
}

/// Stem of the Zi double-hour for a day stem.
pub const fn day_stem_to_hour_start_stem(day_stem: Stem) -> Stem {
    Stem::from_ring((day_stem.index() % 5) * 2)
}

/// Sexagenary index of proleptic year `year`.
///
/// `((year + 4712 + 24) mod 60 + 60) mod 60`. Year numbers before the common
/// era are taken as given; there is no year zero to correct for here.
pub const fn year_sexagenary(year: i32) -> u8 {
    (year as i64 + YEAR_CYCLE_OFFSET).rem_euclid(SEXAGENARY_COUNT as i64) as u8
}

/// Sexagenary index of the civil day with Julian day number `jdn`.
pub const fn day_sexagenary(jdn: i64) -> u8 {
    (jdn + DAY_CYCLE_OFFSET).rem_euclid(SEXAGENARY_COUNT as i64) as u8
}
