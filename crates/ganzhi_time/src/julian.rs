//! Julian Date <-> proleptic Gregorian calendar conversion.
//!
//! Meeus, *Astronomical Algorithms*, ch. 7, with the Gregorian correction
//! applied at every epoch. Years here are astronomical (1 BC = 0); callers
//! working in historical numbering go through [`to_astronomical_year`].

use crate::error::TimeError;

/// Julian Date of 2000-01-01 12:00.
pub const J2000_JD: f64 = 2_451_545.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert an astronomical-year calendar date (fractional day) to a Julian Date.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date to `(astronomical year, month, fractional day)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian day number of the civil day containing `jd`.
pub fn jd_to_jdn(jd: f64) -> i64 {
    (jd + 0.5).floor() as i64
}

/// Map a historical year (no year zero, 1 BC = -1) to astronomical numbering.
pub fn to_astronomical_year(year: i32) -> Result<i32, TimeError> {
    match year {
        0 => Err(TimeError::InvalidCalendarDate(
            "year 0 does not exist (1 BC is -1)".into(),
        )),
        y if y < 0 => Ok(y + 1),
        y => Ok(y),
    }
}

/// Map an astronomical year back to historical numbering.
pub const fn from_astronomical_year(year: i32) -> i32 {
    if year <= 0 { year - 1 } else { year }
}

/// Historical year immediately after `year`, skipping year zero.
pub const fn next_historical_year(year: i32) -> i32 {
    if year == -1 { 1 } else { year + 1 }
}

/// Historical year immediately before `year`, skipping year zero.
pub const fn prev_historical_year(year: i32) -> i32 {
    if year == 1 { -1 } else { year - 1 }
}

/// Gregorian leap-year rule on an astronomical year.
pub const fn is_leap_year(astronomical_year: i32) -> bool {
    (astronomical_year % 4 == 0 && astronomical_year % 100 != 0) || astronomical_year % 400 == 0
}

/// Days in `month` of historical year `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, TimeError> {
    let ay = to_astronomical_year(year)?;
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(ay) => Ok(29),
        2 => Ok(28),
        _ => Err(TimeError::InvalidCalendarDate(format!(
            "month {month} not in 1..=12"
        ))),
    }
}
