use std::path::PathBuf;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::Stem;
use ganzhi_pillars::{
    MonthConfig, clip_months, day_pillars, hour_pillars, month_pillars, year_pillars,
};
use ganzhi_time::{SolarDate, SolarTime, TermTable};

fn load_table() -> Option<TermTable> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../ganzhi_time/tests/data/jie_2023_2025.txt");
    match TermTable::load(&path) {
        Ok(t) => Some(t),
        Err(e) => {
            eprintln!("Skipping calendar benches: {e}");
            None
        }
    }
}

fn pure_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pure");
    group.bench_function("year_pillars_60", |b| {
        b.iter(|| year_pillars(black_box(1990), 60).count())
    });
    group.bench_function("hour_pillars", |b| {
        b.iter(|| hour_pillars(black_box(Stem::Wu)))
    });
    group.finish();
}

fn calendar_bench(c: &mut Criterion) {
    let Some(table) = load_table() else { return };
    let config = MonthConfig::default();
    let months = month_pillars(&table, 2024, &config).unwrap();
    let start: SolarTime = "2024-03-20T00:00".parse().unwrap();
    let end: SolarTime = "2024-09-10T00:00".parse().unwrap();

    let mut group = c.benchmark_group("calendar");
    group.bench_function("month_pillars", |b| {
        b.iter(|| month_pillars(&table, black_box(2024), &config))
    });
    group.bench_function("day_pillars_year", |b| {
        let from = SolarDate::new(2024, 2, 4).unwrap();
        let to = SolarDate::new(2025, 2, 3).unwrap();
        b.iter(|| day_pillars(&table, black_box(from), black_box(to)))
    });
    group.bench_function("clip_months", |b| {
        b.iter(|| clip_months(&table, black_box(&months), &start, &end))
    });
    group.finish();
}

criterion_group!(benches, pure_bench, calendar_bench);
criterion_main!(benches);
