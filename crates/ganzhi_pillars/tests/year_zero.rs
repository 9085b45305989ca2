//! Range clipping and day derivation around the missing year zero.
//!
//! Uses a synthetic calendar whose Start of Spring is 4 February 00:00 of
//! every year, with the other jie spaced evenly to the next spring.

use ganzhi_base::{Pillar, day_sexagenary};
use ganzhi_pillars::{clip_year_range, day_pillars};
use ganzhi_time::{
    ALL_JIE, FourPillars, SolarCalendar, SolarDate, SolarTerm, SolarTime, TimeError, jd_to_jdn,
    next_historical_year,
};

struct EvenCalendar;

impl EvenCalendar {
    fn spring(year: i32) -> Result<f64, TimeError> {
        SolarTime::new(year, 2, 4, 0, 0, 0.0).to_jd()
    }
}

impl SolarCalendar for EvenCalendar {
    fn year_solar_terms(&self, year: i32) -> Result<[SolarTerm; 12], TimeError> {
        let start = Self::spring(year)?;
        let step = (Self::spring(next_historical_year(year))? - start) / 12.0;
        Ok(ALL_JIE.map(|jie| {
            let jd = start + step * jie.index() as f64;
            SolarTerm {
                jie,
                jd,
                next_jd: jd + step,
                date: SolarTime::from_jd(jd),
            }
        }))
    }

    // Range clipping and day derivation never read the full chart.
    fn four_pillars(&self, time: &SolarTime) -> Result<FourPillars, TimeError> {
        let day = Pillar::from_sexagenary_ring(day_sexagenary(jd_to_jdn(time.to_jd()?)));
        Ok(FourPillars {
            year: day,
            month: day,
            day,
            hour: Pillar::from_sexagenary_ring(0),
        })
    }
}

fn at(s: &str) -> SolarTime {
    s.parse().unwrap()
}

#[test]
fn start_before_spring_of_year_one_moves_to_1_bc() {
    let span = clip_year_range(&EvenCalendar, &at("0001-01-15"), &at("0001-06-01")).unwrap();
    assert_eq!(span.first_year, -1);
    assert_eq!(span.count, 2);
    assert_eq!(span.years().collect::<Vec<_>>(), vec![-1, 1]);
}

#[test]
fn end_before_spring_of_year_one_stays_in_1_bc() {
    let span = clip_year_range(&EvenCalendar, &at("-0003-03-01"), &at("0001-01-20")).unwrap();
    assert_eq!(span.first_year, -3);
    assert_eq!(span.years().collect::<Vec<_>>(), vec![-3, -2, -1]);
}

#[test]
fn window_spanning_the_era_boundary() {
    let span = clip_year_range(&EvenCalendar, &at("-0002-05-01"), &at("0002-05-01")).unwrap();
    assert_eq!(span.years().collect::<Vec<_>>(), vec![-2, -1, 1, 2]);
}

#[test]
fn days_run_from_1_bc_into_ad_1() {
    let days = day_pillars(
        &EvenCalendar,
        SolarDate::new(-1, 12, 30).unwrap(),
        SolarDate::new(1, 1, 3).unwrap(),
    )
    .unwrap();
    let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["-0001-12-30", "-0001-12-31", "0001-01-01", "0001-01-02"]
    );
    for pair in days.windows(2) {
        assert_eq!(pair[1].pillar, pair[0].pillar.next());
    }
}
