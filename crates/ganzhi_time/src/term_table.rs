//! Table-backed solar calendar.
//!
//! A term table lists, per solar year, the civil instants of the twelve jie
//! from the Start of Spring to Minor Cold plus the next Start of Spring:
//!
//! ```text
//! # year  立春 驚蟄 清明 立夏 芒種 小暑 立秋 白露 寒露 立冬 大雪 小寒  next立春
//! 2024 2024-02-04T16:27:00 ... 2025-01-05T10:33:00 2025-02-03T22:10:00
//! ```
//!
//! Blank lines and `#` comments are ignored. Instants within a row must be
//! strictly increasing; rows may appear in any order but each year once.

use std::path::Path;

use ganzhi_base::{
    Branch, Pillar, Stem, day_sexagenary, day_stem_to_hour_start_stem, sexagenary_index,
    year_sexagenary, year_stem_to_month_start_stem,
};

use crate::calendar::{ALL_JIE, FourPillars, SolarCalendar, SolarTerm};
use crate::error::TimeError;
use crate::julian::{jd_to_jdn, prev_historical_year};
use crate::solar_time::SolarTime;

/// Instants per row: twelve jie plus the following Start of Spring.
pub const TERMS_PER_ROW: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TermRow {
    year: i32,
    jd: [f64; TERMS_PER_ROW],
}

impl TermRow {
    fn contains(&self, jd: f64) -> bool {
        self.jd[0] <= jd && jd < self.jd[TERMS_PER_ROW - 1]
    }

    /// Index of the solar month containing `jd`; requires `contains(jd)`.
    fn month_index(&self, jd: f64) -> usize {
        self.jd[1..TERMS_PER_ROW - 1].partition_point(|&t| t <= jd)
    }
}

/// Immutable table of jie instants, sorted by year.
#[derive(Debug, Clone, Default)]
pub struct TermTable {
    rows: Vec<TermRow>,
}

impl TermTable {
    /// Load a term table from a file.
    pub fn load(path: &Path) -> Result<Self, TimeError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a term table from its text content.
    pub fn parse(content: &str) -> Result<Self, TimeError> {
        let mut rows: Vec<(usize, TermRow)> = Vec::new();
        for (line_num, line) in (1usize..).zip(content.lines()) {
            let body = line.split('#').next().unwrap_or("").trim();
            if body.is_empty() {
                continue;
            }
            rows.push((line_num, parse_row(body, line_num)?));
        }

        rows.sort_by_key(|(_, r)| r.year);
        for pair in rows.windows(2) {
            if pair[0].1.year == pair[1].1.year {
                return Err(TimeError::TableParse {
                    line: pair[1].0,
                    message: format!("duplicate year {}", pair[1].1.year),
                });
            }
        }

        Ok(Self {
            rows: rows.into_iter().map(|(_, r)| r).collect(),
        })
    }

    /// Years covered, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|r| r.year)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row(&self, year: i32) -> Result<&TermRow, TimeError> {
        self.rows
            .binary_search_by_key(&year, |r| r.year)
            .map(|i| &self.rows[i])
            .map_err(|_| TimeError::NoData(year))
    }

    fn row_containing(&self, jd: f64) -> Option<&TermRow> {
        let i = self.rows.partition_point(|r| r.jd[0] <= jd);
        i.checked_sub(1)
            .map(|i| &self.rows[i])
            .filter(|r| r.contains(jd))
    }

    /// Ganzhi year of an instant that no row covers.
    fn uncovered_year(&self, jd: f64, civil_year: i32) -> i32 {
        match self.row(civil_year) {
            Ok(r) if jd < r.jd[0] => prev_historical_year(civil_year),
            _ => civil_year,
        }
    }
}

impl SolarCalendar for TermTable {
    fn year_solar_terms(&self, year: i32) -> Result<[SolarTerm; 12], TimeError> {
        let row = self.row(year)?;
        Ok(ALL_JIE.map(|jie| {
            let k = jie.index() as usize;
            SolarTerm {
                jie,
                jd: row.jd[k],
                next_jd: row.jd[k + 1],
                date: SolarTime::from_jd(row.jd[k]),
            }
        }))
    }

    fn four_pillars(&self, time: &SolarTime) -> Result<FourPillars, TimeError> {
        let jd = time.to_jd()?;
        let row = self
            .row_containing(jd)
            .ok_or_else(|| TimeError::NoData(self.uncovered_year(jd, time.year)))?;

        let year = Pillar::from_sexagenary_ring(year_sexagenary(row.year));

        let k = row.month_index(jd) as u8;
        let month = pillar_of(
            year_stem_to_month_start_stem(year.stem()).advance(k),
            Branch::Yin.advance(k),
        );

        let day = Pillar::from_sexagenary_ring(day_sexagenary(jd_to_jdn(jd)));

        // 23:00 opens the Zi hour of the following day's stem cycle.
        let slot = ((time.hour + 1) / 2) as u8;
        let hour = pillar_of(
            day_stem_to_hour_start_stem(day.stem()).advance(slot),
            Branch::from_ring(slot),
        );

        Ok(FourPillars {
            year,
            month,
            day,
            hour,
        })
    }
}

fn pillar_of(stem: Stem, branch: Branch) -> Pillar {
    Pillar::from_sexagenary_ring(sexagenary_index(stem, branch))
}

fn parse_row(body: &str, line: usize) -> Result<TermRow, TimeError> {
    let err = |message: String| TimeError::TableParse { line, message };
    let mut fields = body.split_whitespace();

    let year_field = fields.next().ok_or_else(|| err("empty row".into()))?;
    let year: i32 = year_field
        .parse()
        .map_err(|_| err(format!("invalid year {year_field:?}")))?;
    if year == 0 {
        return Err(err("year 0 does not exist".into()));
    }

    let mut jd = [0.0; TERMS_PER_ROW];
    for (i, slot) in jd.iter_mut().enumerate() {
        let field = fields
            .next()
            .ok_or_else(|| err(format!("expected {TERMS_PER_ROW} instants, found {i}")))?;
        let time: SolarTime = field
            .parse()
            .map_err(|e: TimeError| err(format!("field {}: {e}", i + 2)))?;
        *slot = time.to_jd().map_err(|e| err(e.to_string()))?;
    }
    if fields.next().is_some() {
        return Err(err(format!("more than {TERMS_PER_ROW} instants")));
    }
    if let Some(i) = jd.windows(2).position(|w| w[0] >= w[1]) {
        return Err(err(format!("instant {} is not after instant {}", i + 2, i + 1)));
    }

    Ok(TermRow { year, jd })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW_2024: &str = "2024 2024-02-04T16:27 2024-03-05T10:23 2024-04-04T15:02 \
        2024-05-05T08:10 2024-06-05T12:10 2024-07-06T22:20 2024-08-07T08:09 \
        2024-09-07T11:11 2024-10-08T03:00 2024-11-07T06:20 2024-12-06T23:17 \
        2025-01-05T10:33 2025-02-03T22:10";

    fn table() -> TermTable {
        TermTable::parse(&format!("# header\n\n{ROW_2024}  # trailing\n")).unwrap()
    }

    #[test]
    fn parses_single_row() {
        let t = table();
        assert_eq!(t.years().collect::<Vec<_>>(), vec![2024]);
        let terms = t.year_solar_terms(2024).unwrap();
        assert_eq!(terms[0].date, SolarTime::new(2024, 2, 4, 16, 27, 0.0));
        assert_eq!(terms[0].jd, t.start_of_spring(2024).unwrap());
        assert_eq!(terms[11].jie, crate::calendar::Jie::XiaoHan);
        assert_eq!(
            SolarTime::from_jd(terms[11].next_jd),
            SolarTime::new(2025, 2, 3, 22, 10, 0.0)
        );
    }

    #[test]
    fn terms_chain_end_to_start() {
        let terms = table().year_solar_terms(2024).unwrap();
        for pair in terms.windows(2) {
            assert_eq!(pair[0].next_jd, pair[1].jd);
            assert!(pair[0].jd < pair[0].next_jd);
        }
    }

    #[test]
    fn missing_year_is_no_data() {
        assert_eq!(table().year_solar_terms(2023), Err(TimeError::NoData(2023)));
        let t = SolarTime::new(2023, 6, 1, 0, 0, 0.0);
        assert_eq!(table().four_pillars(&t), Err(TimeError::NoData(2023)));
    }

    #[test]
    fn before_spring_reports_previous_year() {
        let t = SolarTime::new(2024, 2, 4, 0, 0, 0.0);
        assert_eq!(table().four_pillars(&t), Err(TimeError::NoData(2023)));
        let d = t.date();
        assert_eq!(table().day_pillar(&d).unwrap().to_string(), "戊戌");
    }

    #[test]
    fn rejects_short_and_unordered_rows() {
        let short = "2024 2024-02-04T16:27 2024-03-05T10:23";
        assert!(matches!(
            TermTable::parse(short),
            Err(TimeError::TableParse { line: 1, .. })
        ));
        let swapped = ROW_2024.replace("2024-03-05T10:23", "2024-01-05T10:23");
        assert!(matches!(
            TermTable::parse(&format!("\n{swapped}")),
            Err(TimeError::TableParse { line: 2, .. })
        ));
        let dup = format!("{ROW_2024}\n{ROW_2024}");
        assert!(matches!(
            TermTable::parse(&dup),
            Err(TimeError::TableParse { line: 2, .. })
        ));
    }

    #[test]
    fn month_index_at_boundaries() {
        let t = table();
        let row = t.row(2024).unwrap();
        assert_eq!(row.month_index(row.jd[0]), 0);
        assert_eq!(row.month_index(row.jd[1] - 1e-6), 0);
        assert_eq!(row.month_index(row.jd[1]), 1);
        assert_eq!(row.month_index(row.jd[12] - 1e-6), 11);
    }

    #[test]
    fn four_pillars_after_spring() {
        // 2024-02-10 12:00: Jia-Chen year, Bing-Yin month, Jia-Chen day.
        let fp = table()
            .four_pillars(&SolarTime::new(2024, 2, 10, 12, 0, 0.0))
            .unwrap();
        assert_eq!(fp.year.to_string(), "甲辰");
        assert_eq!(fp.month.to_string(), "丙寅");
        assert_eq!(fp.day.to_string(), "甲辰");
        assert_eq!(fp.hour.to_string(), "庚午");
    }

    #[test]
    fn late_zi_hour_uses_next_stem() {
        let t = table();
        let early = t.four_pillars(&SolarTime::new(2024, 2, 10, 0, 30, 0.0)).unwrap();
        let late = t.four_pillars(&SolarTime::new(2024, 2, 10, 23, 30, 0.0)).unwrap();
        assert_eq!(early.day, late.day);
        assert_eq!(early.hour.to_string(), "甲子");
        assert_eq!(late.hour.to_string(), "丙子");
    }
}
