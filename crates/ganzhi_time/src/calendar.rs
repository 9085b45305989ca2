//! The solar calendar seen by the pillar deriver: jie terms, Julian dates,
//! month lengths and the four pillars of an instant.

use ganzhi_base::{Pillar, Stem, day_sexagenary};

use crate::error::TimeError;
use crate::julian;
use crate::solar_time::{SolarDate, SolarTime};

/// The twelve "jie" solar terms that open the solar months, starting at the
/// Start of Spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Jie {
    LiChun,
    JingZhe,
    QingMing,
    LiXia,
    MangZhong,
    XiaoShu,
    LiQiu,
    BaiLu,
    HanLu,
    LiDong,
    DaXue,
    XiaoHan,
}

/// All twelve jie in calendar order.
pub const ALL_JIE: [Jie; 12] = [
    Jie::LiChun,
    Jie::JingZhe,
    Jie::QingMing,
    Jie::LiXia,
    Jie::MangZhong,
    Jie::XiaoShu,
    Jie::LiQiu,
    Jie::BaiLu,
    Jie::HanLu,
    Jie::LiDong,
    Jie::DaXue,
    Jie::XiaoHan,
];

impl Jie {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LiChun => "Li Chun",
            Self::JingZhe => "Jing Zhe",
            Self::QingMing => "Qing Ming",
            Self::LiXia => "Li Xia",
            Self::MangZhong => "Mang Zhong",
            Self::XiaoShu => "Xiao Shu",
            Self::LiQiu => "Li Qiu",
            Self::BaiLu => "Bai Lu",
            Self::HanLu => "Han Lu",
            Self::LiDong => "Li Dong",
            Self::DaXue => "Da Xue",
            Self::XiaoHan => "Xiao Han",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::LiChun => "立春",
            Self::JingZhe => "驚蟄",
            Self::QingMing => "清明",
            Self::LiXia => "立夏",
            Self::MangZhong => "芒種",
            Self::XiaoShu => "小暑",
            Self::LiQiu => "立秋",
            Self::BaiLu => "白露",
            Self::HanLu => "寒露",
            Self::LiDong => "立冬",
            Self::DaXue => "大雪",
            Self::XiaoHan => "小寒",
        }
    }

    /// 0-based index (LiChun = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// One jie of a solar year and the span of the solar month it opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTerm {
    pub jie: Jie,
    /// Instant of the term.
    pub jd: f64,
    /// Instant of the following jie.
    pub next_jd: f64,
    /// Civil breakdown of `jd`.
    pub date: SolarTime,
}

/// Year, month, day and hour pillars of one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// The day stem, the reference for Ten Gods.
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// A proleptic solar calendar with known jie instants.
///
/// Julian Dates are continuous days in the calendar's civil time zone and
/// years use historical numbering without a year zero.
pub trait SolarCalendar {
    /// The twelve jie of the solar year that starts in civil year `year`,
    /// Start of Spring first.
    fn year_solar_terms(&self, year: i32) -> Result<[SolarTerm; 12], TimeError>;

    /// Four pillars of a civil instant.
    fn four_pillars(&self, time: &SolarTime) -> Result<FourPillars, TimeError>;

    /// Day pillar of a civil day. It depends only on the day number, so no
    /// jie data is needed.
    fn day_pillar(&self, date: &SolarDate) -> Result<Pillar, TimeError> {
        date.validate()?;
        Ok(Pillar::from_sexagenary_ring(day_sexagenary(date.jdn()?)))
    }

    fn solar_to_jd(&self, time: &SolarTime) -> Result<f64, TimeError> {
        time.to_jd()
    }

    fn jd_to_solar(&self, jd: f64) -> Result<SolarTime, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::InvalidCalendarDate(format!("julian date {jd}")));
        }
        Ok(SolarTime::from_jd(jd))
    }

    /// Instant of the Start of Spring in civil year `year`.
    fn start_of_spring(&self, year: i32) -> Result<f64, TimeError> {
        Ok(self.year_solar_terms(year)?[0].jd)
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, TimeError> {
        julian::days_in_month(year, month)
    }
}
