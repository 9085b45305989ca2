//! Month pillars from the jie terms of a solar year.

use ganzhi_base::{Branch, Pillar, year_stem_to_month_start_stem};
use ganzhi_time::{SECONDS_PER_DAY, SolarCalendar};

use crate::error::PillarError;
use crate::pillar_types::{MonthConfig, MonthPillar};
use crate::year::year_pillar;

/// Seconds at or above which a civil time would display as the next minute.
const NUDGE_THRESHOLD_S: f64 = 59.5;

/// The twelve month pillars of the solar year starting at the Start of
/// Spring of `year`.
///
/// The first month is the Yin month, its stem set by the year stem; each
/// following jie steps stem and branch once.
pub fn month_pillars<C: SolarCalendar + ?Sized>(
    cal: &C,
    year: i32,
    config: &MonthConfig,
) -> Result<Vec<MonthPillar>, PillarError> {
    let terms = cal.year_solar_terms(year)?;
    let mut stem = year_stem_to_month_start_stem(year_pillar(year).stem());
    let mut branch = Branch::Yin;

    let mut months = Vec::with_capacity(terms.len());
    for (k, term) in terms.iter().enumerate() {
        let anchor = if k == 0 && config.nudge_first_term && term.date.second >= NUDGE_THRESHOLD_S
        {
            term.jd + 1.0 / SECONDS_PER_DAY
        } else {
            term.jd
        };
        months.push(MonthPillar {
            pillar: Pillar::new(stem, branch)?,
            jie: term.jie,
            start_jd: term.jd,
            end_jd: term.next_jd,
            start: cal.jd_to_solar(anchor)?,
            end: cal.jd_to_solar(term.next_jd)?,
        });
        stem = stem.next();
        branch = branch.next();
    }
    Ok(months)
}
