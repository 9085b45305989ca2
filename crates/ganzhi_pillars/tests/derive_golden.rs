//! Golden tests for pillar derivation against the 2023-2025 jie fixture.

use std::path::PathBuf;

use ganzhi_base::{day_sexagenary, day_stem_to_hour_start_stem};
use ganzhi_pillars::{
    DayPillar, MonthConfig, clip_months, clip_year_range, day_pillars, day_pillars_for_month,
    hour_pillars_for_day, month_pillars, year_pillars,
};
use ganzhi_time::{SolarCalendar, SolarDate, SolarTime, TermTable};

fn fixture() -> TermTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../ganzhi_time/tests/data/jie_2023_2025.txt");
    TermTable::load(&path).expect("fixture table should load")
}

fn date(y: i32, m: u32, d: u32) -> SolarDate {
    SolarDate::new(y, m, d).unwrap()
}

fn at(s: &str) -> SolarTime {
    s.parse().unwrap()
}

/// Every day matches the epoch formula and steps once from its predecessor.
fn assert_continuous(days: &[DayPillar]) {
    for d in days {
        let jdn = d.date.jdn().unwrap();
        assert_eq!(
            d.pillar.sexagenary_index(),
            day_sexagenary(jdn),
            "{}",
            d.date
        );
        assert_eq!(d.hour_start, day_stem_to_hour_start_stem(d.pillar.stem()));
    }
    for pair in days.windows(2) {
        assert_eq!(pair[1].pillar, pair[0].pillar.next(), "{}", pair[1].date);
        assert_eq!(
            pair[1].date.jdn().unwrap(),
            pair[0].date.jdn().unwrap() + 1
        );
    }
}

// ---------------------------------------------------------------------------
// Years and months
// ---------------------------------------------------------------------------

#[test]
fn decade_from_1990() {
    let got: String = year_pillars(1990, 10).map(|p| p.to_string()).collect();
    assert_eq!(got, "庚午辛未壬申癸酉甲戌乙亥丙子丁丑戊寅己卯");
}

#[test]
fn months_of_2023_and_2025() {
    let t = fixture();
    let m23 = month_pillars(&t, 2023, &MonthConfig::default()).unwrap();
    assert_eq!(m23[0].pillar.to_string(), "甲寅");
    assert_eq!(m23[11].pillar.to_string(), "乙丑");
    let m25 = month_pillars(&t, 2025, &MonthConfig::default()).unwrap();
    assert_eq!(m25[0].pillar.to_string(), "戊寅");
    assert_eq!(m25[0].start, at("2025-02-03T22:10"));
}

#[test]
fn month_pillars_agree_with_four_pillars() {
    let t = fixture();
    for m in month_pillars(&t, 2024, &MonthConfig::default()).unwrap() {
        let mid = t.jd_to_solar((m.start_jd + m.end_jd) / 2.0).unwrap();
        assert_eq!(t.four_pillars(&mid).unwrap().month, m.pillar, "{}", m.jie.name());
    }
}

// ---------------------------------------------------------------------------
// Days
// ---------------------------------------------------------------------------

#[test]
fn days_within_one_civil_month() {
    let days = day_pillars(&fixture(), date(2024, 3, 10), date(2024, 3, 20)).unwrap();
    assert_eq!(days.len(), 10);
    assert_continuous(&days);
}

#[test]
fn days_across_one_month_boundary() {
    let days = day_pillars(&fixture(), date(2024, 3, 5), date(2024, 4, 4)).unwrap();
    assert_eq!(days.len(), 30);
    assert_eq!(days[0].pillar.to_string(), "戊辰");
    assert_eq!(days.last().unwrap().date, date(2024, 4, 3));
    assert_continuous(&days);
}

#[test]
fn days_across_two_month_boundaries() {
    let days = day_pillars(&fixture(), date(2024, 1, 30), date(2024, 3, 2)).unwrap();
    // Jan 30-31, all of Feb 2024, Mar 1.
    assert_eq!(days.len(), 2 + 29 + 1);
    assert_continuous(&days);
}

#[test]
fn days_across_year_end() {
    let days = day_pillars(&fixture(), date(2024, 12, 6), date(2025, 1, 5)).unwrap();
    assert_eq!(days.len(), 30);
    assert_eq!(days[26].date, date(2025, 1, 1));
    assert_continuous(&days);
}

#[test]
fn days_of_a_solar_month() {
    let t = fixture();
    let months = month_pillars(&t, 2024, &MonthConfig::default()).unwrap();
    let days = day_pillars_for_month(&t, &months[1]).unwrap();
    assert_eq!(days.first().unwrap().date, date(2024, 3, 5));
    assert_eq!(days.last().unwrap().date, date(2024, 4, 3));
    assert_continuous(&days);
}

#[test]
fn days_of_first_month_opening_before_spring_instant() {
    // The 2023 Li Chun falls at 10:42, so the month's first civil day starts
    // before any covered jie instant.
    let t = fixture();
    let months = month_pillars(&t, 2023, &MonthConfig::default()).unwrap();
    assert_eq!(months[0].pillar.to_string(), "甲寅");
    let days = day_pillars_for_month(&t, &months[0]).unwrap();
    assert_eq!(days.first().unwrap().date, date(2023, 2, 4));
    assert_eq!(days.last().unwrap().date, date(2023, 3, 5));
    assert_continuous(&days);
}

#[test]
fn hours_follow_day() {
    let days = day_pillars(&fixture(), date(2025, 1, 29), date(2025, 1, 30)).unwrap();
    assert_eq!(days[0].pillar.to_string(), "戊戌");
    let hours = hour_pillars_for_day(&days[0]).unwrap();
    assert_eq!(hours[0].pillar.to_string(), "壬子");
    assert_eq!(hours[12].pillar.to_string(), "甲子");
}

// ---------------------------------------------------------------------------
// Range clipping
// ---------------------------------------------------------------------------

#[test]
fn year_range_moves_start_before_spring() {
    let span = clip_year_range(&fixture(), &at("2024-01-10"), &at("2025-01-10")).unwrap();
    assert_eq!((span.first_year, span.count), (2023, 2));
}

#[test]
fn year_range_keeps_spring_day() {
    let span = clip_year_range(&fixture(), &at("2024-02-04T08:00"), &at("2025-12-31")).unwrap();
    assert_eq!((span.first_year, span.count), (2024, 2));
    assert_eq!(span.years().collect::<Vec<_>>(), vec![2024, 2025]);
}

#[test]
fn year_range_same_month_earlier_day_moves_back() {
    // February 2 shares the month of the 2024-02-04 Start of Spring, not its day.
    let span = clip_year_range(&fixture(), &at("2024-02-02T12:00"), &at("2024-06-01")).unwrap();
    assert_eq!((span.first_year, span.count), (2023, 2));
}

#[test]
fn year_range_inverted_is_empty() {
    let span = clip_year_range(&fixture(), &at("2025-06-01"), &at("2024-01-10")).unwrap();
    assert!(span.is_empty());
}

#[test]
fn clip_with_enclosing_window_is_identity() {
    let t = fixture();
    let months = month_pillars(&t, 2024, &MonthConfig::default()).unwrap();
    let clipped = clip_months(&t, &months, &at("2024-01-01"), &at("2025-03-01")).unwrap();
    assert_eq!(clipped, months);
}

#[test]
fn clip_inside_one_month() {
    let t = fixture();
    let months = month_pillars(&t, 2024, &MonthConfig::default()).unwrap();
    let start = at("2024-03-10T00:00");
    let end = at("2024-03-20T12:00");
    let clipped = clip_months(&t, &months, &start, &end).unwrap();
    assert_eq!(clipped.len(), 1);
    assert_eq!(clipped[0].pillar, months[1].pillar);
    let width = t.solar_to_jd(&end).unwrap() - t.solar_to_jd(&start).unwrap();
    assert!((clipped[0].width() - width).abs() < 1e-9);
    assert_eq!(clipped[0].start, start);
    assert_eq!(clipped[0].end, end);
}

#[test]
fn clip_truncates_both_ends() {
    let t = fixture();
    let months = month_pillars(&t, 2024, &MonthConfig::default()).unwrap();
    let clipped = clip_months(&t, &months, &at("2024-03-20"), &at("2024-06-10")).unwrap();
    let names: Vec<String> = clipped.iter().map(|m| m.pillar.to_string()).collect();
    assert_eq!(names, vec!["丁卯", "戊辰", "己巳", "庚午"]);
    assert_eq!(clipped[0].start, at("2024-03-20"));
    assert_eq!(clipped[3].end, at("2024-06-10"));
    assert_eq!(clipped[1], months[2]);
}

#[test]
fn clip_empty_window() {
    let t = fixture();
    let months = month_pillars(&t, 2024, &MonthConfig::default()).unwrap();
    let s = at("2024-05-01");
    assert!(clip_months(&t, &months, &s, &s).unwrap().is_empty());
    assert!(clip_months(&t, &months, &at("2030-01-01"), &at("2031-01-01")).unwrap().is_empty());
}
