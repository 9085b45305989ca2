//! Civil calendar date and date/time in the calendar's own time zone.
//!
//! Years use historical numbering: there is no year zero and `-1` is 1 BC.
//! Conversion to a continuous Julian Date goes through astronomical years.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, calendar_to_jd, days_in_month, from_astronomical_year, jd_to_calendar,
    jd_to_jdn, next_historical_year, prev_historical_year, to_astronomical_year,
};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A civil calendar day. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        let len = days_in_month(self.year, self.month)?;
        if self.day == 0 || self.day > len {
            return Err(TimeError::InvalidCalendarDate(format!(
                "day {} not in 1..={len} for {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        Ok(())
    }

    /// The instant 00:00:00 of this day.
    pub fn at_midnight(self) -> SolarTime {
        SolarTime::new(self.year, self.month, self.day, 0, 0, 0.0)
    }

    /// Julian day number of this day.
    pub fn jdn(&self) -> Result<i64, TimeError> {
        Ok(jd_to_jdn(self.at_midnight().to_jd()?))
    }

    /// Civil day with Julian day number `jdn`.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jd_to_calendar(jdn as f64 - 0.5);
        Self {
            year: from_astronomical_year(year),
            month,
            day: day.round() as u32,
        }
    }

    /// First day of the following month, skipping year zero.
    pub fn first_of_next_month(self) -> Self {
        if self.month == 12 {
            Self {
                year: next_historical_year(self.year),
                month: 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        }
    }

    /// Last day of the preceding month, skipping year zero.
    pub fn last_of_prev_month(self) -> Result<Self, TimeError> {
        let (year, month) = if self.month == 1 {
            (prev_historical_year(self.year), 12)
        } else {
            (self.year, self.month - 1)
        };
        Ok(Self {
            year,
            month,
            day: days_in_month(year, month)?,
        })
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_year(f, self.year)?;
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_date(s.trim())?;
        Self::new(year, month, day)
    }
}

/// Civil date and time of day with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl SolarTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn date(&self) -> SolarDate {
        SolarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Check every field against the proleptic Gregorian calendar.
    pub fn validate(&self) -> Result<(), TimeError> {
        self.date().validate()?;
        if self.hour > 23 || self.minute > 59 || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidCalendarDate(format!(
                "time {:02}:{:02}:{} out of range",
                self.hour, self.minute, self.second
            )));
        }
        Ok(())
    }

    /// Julian Date of this civil instant.
    pub fn to_jd(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let year = to_astronomical_year(self.year)?;
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        Ok(calendar_to_jd(year, self.month, day_frac))
    }

    /// Civil instant at Julian Date `jd`, resolved to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let mut jdn = jd_to_jdn(jd);
        let mut millis = ((jd + 0.5 - jdn as f64) * MILLIS_PER_DAY as f64).round() as i64;
        if millis >= MILLIS_PER_DAY {
            jdn += 1;
            millis -= MILLIS_PER_DAY;
        }
        let date = SolarDate::from_jdn(jdn);
        let hour = (millis / 3_600_000) as u32;
        let minute = ((millis % 3_600_000) / 60_000) as u32;
        let second = (millis % 60_000) as f64 / 1000.0;
        Self::new(date.year, date.month, date.day, hour, minute, second)
    }

    /// This instant shifted by `seconds`.
    pub fn add_seconds(&self, seconds: f64) -> Result<Self, TimeError> {
        Ok(Self::from_jd(self.to_jd()? + seconds / SECONDS_PER_DAY))
    }
}

impl Display for SolarTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_year(f, self.year)?;
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "-{:02}-{:02}T{:02}:{:02}:{:06.3}",
                self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for SolarTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss[.fff]`,
    /// with an optional trailing `Z` and a leading `-` for BC years.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };
        let (year, month, day) = parse_date(date_part)?;
        let (hour, minute, second) = match time_part {
            Some(t) => parse_clock(t)?,
            None => (0, 0, 0.0),
        };
        let time = Self::new(year, month, day, hour, minute, second);
        time.validate()?;
        Ok(time)
    }
}

fn write_year(f: &mut Formatter<'_>, year: i32) -> std::fmt::Result {
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{year:04}")
    }
}

fn bad(s: &str) -> TimeError {
    TimeError::InvalidCalendarDate(format!("cannot parse {s:?}"))
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let mut parts = body.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(bad(s));
    };
    let year: i32 = y.parse().map_err(|_| bad(s))?;
    let month: u32 = m.parse().map_err(|_| bad(s))?;
    let day: u32 = d.parse().map_err(|_| bad(s))?;
    Ok((if negative { -year } else { year }, month, day))
}

fn parse_clock(s: &str) -> Result<(u32, u32, f64), TimeError> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [h, m] => Ok((
            h.parse().map_err(|_| bad(s))?,
            m.parse().map_err(|_| bad(s))?,
            0.0,
        )),
        [h, m, sec] => Ok((
            h.parse().map_err(|_| bad(s))?,
            m.parse().map_err(|_| bad(s))?,
            sec.parse().map_err(|_| bad(s))?,
        )),
        _ => Err(bad(s)),
    }
}
