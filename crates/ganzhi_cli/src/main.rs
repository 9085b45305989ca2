use std::fmt::Display;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ganzhi_base::{
    ALL_BRANCHES, ALL_STEMS, Branch, BranchInfo, Pillar, RelationSet, Stem, StemInfo,
    describe_pillar, is_half_trine, is_trine, pillar_relations,
};
use ganzhi_pillars::{
    MonthConfig, MonthPillar, clip_months, clip_year_range, day_pillars, hour_pillars,
    month_pillars, year_pillars,
};
use ganzhi_time::{SolarCalendar, SolarDate, SolarTime, TermTable};

#[derive(Parser)]
#[command(name = "ganzhi", about = "Sexagenary Four Pillars CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consecutive year pillars
    Years {
        /// First year (historical numbering, -1 = 1 BC)
        year: i32,
        /// Number of years
        #[arg(long, default_value = "10")]
        count: usize,
    },
    /// The twelve month pillars of a solar year
    Months {
        /// Year whose Start of Spring opens the solar year
        year: i32,
        /// Report the first term without rounding it forward
        #[arg(long)]
        exact: bool,
        /// Path to jie term table
        #[arg(long)]
        table: PathBuf,
    },
    /// Day pillars for civil days [start, end)
    Days {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Day after the last one (YYYY-MM-DD)
        end: String,
        /// Path to jie term table
        #[arg(long)]
        table: PathBuf,
    },
    /// The thirteen double-hour pillars for a day stem
    Hours {
        /// Day stem (pinyin, Chinese or index 0-9)
        day_stem: String,
    },
    /// Four pillars of a civil instant, described against the Day Master
    Chart {
        /// Civil datetime (YYYY-MM-DDThh:mm[:ss])
        date: String,
        /// Path to jie term table
        #[arg(long)]
        table: PathBuf,
    },
    /// Describe a pillar against a Day Master
    Describe {
        /// Day Master stem (pinyin, Chinese or index 0-9)
        day_master: String,
        /// Pillar, e.g. Ren-Shen or 壬申
        pillar: String,
    },
    /// Relations between two pillars, or trines among three branches
    Relations {
        /// Pillars (two) or branches (three)
        #[arg(num_args = 2..=3, required = true)]
        items: Vec<String>,
    },
    /// Ganzhi years touched by a civil time window
    Span {
        /// Window start (YYYY-MM-DD[Thh:mm[:ss]])
        start: String,
        /// Window end (YYYY-MM-DD[Thh:mm[:ss]])
        end: String,
        /// Path to jie term table
        #[arg(long)]
        table: PathBuf,
    },
    /// Month pillars of a solar year restricted to a civil time window
    Clip {
        /// Year whose Start of Spring opens the solar year
        year: i32,
        /// Window start (YYYY-MM-DD[Thh:mm[:ss]])
        start: String,
        /// Window end (YYYY-MM-DD[Thh:mm[:ss]])
        end: String,
        /// Path to jie term table
        #[arg(long)]
        table: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Years { year, count } => {
            let mut y = year;
            for p in year_pillars(year, count) {
                println!("{y:>6}  {p}  {}", p.name());
                y = ganzhi_time::next_historical_year(y);
            }
        }

        Commands::Months { year, exact, table } => {
            let cal = load_table(&table);
            let config = if exact {
                MonthConfig::exact()
            } else {
                MonthConfig::default()
            };
            let months = or_exit(month_pillars(&cal, year, &config), "month derivation");
            print_months(&months);
        }

        Commands::Days { start, end, table } => {
            let cal = load_table(&table);
            let start = or_exit(start.parse::<SolarDate>(), "start date");
            let end = or_exit(end.parse::<SolarDate>(), "end date");
            let days = or_exit(day_pillars(&cal, start, end), "day derivation");
            for d in days {
                println!(
                    "{}  {}  {:<10} Zi hour stem {}",
                    d.date,
                    d.pillar,
                    d.pillar.name(),
                    d.hour_start.chinese()
                );
            }
        }

        Commands::Hours { day_stem } => {
            let stem = or_exit(parse_stem(&day_stem), "day stem");
            let start = ganzhi_base::day_stem_to_hour_start_stem(stem);
            let hours = or_exit(hour_pillars(start), "hour derivation");
            for h in hours {
                println!(
                    "{:02}-{:02}  {}  {}",
                    h.start_hour,
                    h.end_hour,
                    h.pillar,
                    h.pillar.name()
                );
            }
        }

        Commands::Chart { date, table } => {
            let cal = load_table(&table);
            let time = or_exit(date.parse::<SolarTime>(), "date");
            let chart = or_exit(cal.four_pillars(&time), "four pillars");
            let dm = chart.day_master();
            println!("Time: {time}");
            println!(
                "Day Master: {} {} ({} {})",
                dm.chinese(),
                dm.name(),
                dm.polarity().name(),
                dm.element().name()
            );
            for (label, pillar) in ["Year", "Month", "Day", "Hour"]
                .iter()
                .zip(chart.as_array())
            {
                println!();
                println!("{label:<5} {pillar}  {}", pillar.name());
                print_pillar_info(dm, pillar);
            }
        }

        Commands::Describe { day_master, pillar } => {
            let dm = or_exit(parse_stem(&day_master), "day master");
            let pillar = or_exit(parse_pillar(&pillar), "pillar");
            println!("{pillar}  {}", pillar.name());
            print_pillar_info(dm, pillar);
        }

        Commands::Relations { items } => match items.as_slice() {
            [a, b] => {
                let a = or_exit(parse_pillar(a), "pillar");
                let b = or_exit(parse_pillar(b), "pillar");
                print_relations(&pillar_relations(a, b));
            }
            [a, b, c] => {
                let a = or_exit(parse_branch(a), "branch");
                let b = or_exit(parse_branch(b), "branch");
                let c = or_exit(parse_branch(c), "branch");
                println!("Trine (any order):      {}", is_trine(a, b, c, false));
                println!("Trine (positional):     {}", is_trine(a, b, c, true));
                println!("Half trine (any order): {}", is_half_trine(a, b, c, false));
                println!("Half trine (positional): {}", is_half_trine(a, b, c, true));
            }
            _ => {
                eprintln!("Expected two pillars or three branches");
                std::process::exit(1);
            }
        },

        Commands::Span { start, end, table } => {
            let cal = load_table(&table);
            let start = or_exit(start.parse::<SolarTime>(), "start");
            let end = or_exit(end.parse::<SolarTime>(), "end");
            let span = or_exit(clip_year_range(&cal, &start, &end), "year range");
            println!("First year: {}  Count: {}", span.first_year, span.count);
            for (y, p) in span.years().zip(year_pillars(span.first_year, span.count as usize)) {
                println!("{y:>6}  {p}  {}", p.name());
            }
        }

        Commands::Clip {
            year,
            start,
            end,
            table,
        } => {
            let cal = load_table(&table);
            let start = or_exit(start.parse::<SolarTime>(), "start");
            let end = or_exit(end.parse::<SolarTime>(), "end");
            let months = or_exit(
                month_pillars(&cal, year, &MonthConfig::default()),
                "month derivation",
            );
            let clipped = or_exit(clip_months(&cal, &months, &start, &end), "clip");
            if clipped.is_empty() {
                println!("No months in window");
            }
            print_months(&clipped);
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_months(months: &[MonthPillar]) {
    for m in months {
        println!(
            "{}  {:<10} {} {:<10}  {} .. {}  ({:.2} d)",
            m.pillar,
            m.pillar.name(),
            m.jie.chinese(),
            m.jie.name(),
            m.start,
            m.end,
            m.width()
        );
    }
}

fn stem_line(info: &StemInfo) -> String {
    format!(
        "{} {} [{}] {} {}",
        info.stem.chinese(),
        info.element.chinese(),
        info.color,
        info.ten_god.chinese(),
        info.ten_god.name()
    )
}

fn branch_line(info: &BranchInfo) -> String {
    format!(
        "{} {} [{}] {}",
        info.branch.chinese(),
        info.element.chinese(),
        info.color,
        info.branch.animal()
    )
}

fn print_pillar_info(day_master: Stem, pillar: Pillar) {
    let info = describe_pillar(day_master, pillar);
    println!("  Stem:   {}", stem_line(&info.stem));
    println!("  Branch: {}", branch_line(&info.branch));
    for hidden in &info.branch.hidden {
        println!("    hidden {}", stem_line(hidden));
    }
}

fn print_relations(rel: &RelationSet) {
    println!("Stems combine:                 {}", rel.stems_combine);
    println!("Stems clash:                   {}", rel.stems_clash);
    println!("Branches combine:              {}", rel.branches_combine);
    println!("Branches clash:                {}", rel.branches_clash);
    println!(
        "Concealed stem-branch combine: {}",
        rel.concealed_stem_branch_combine
    );
    println!(
        "Concealed stem-branch clash:   {}",
        rel.concealed_stem_branch_clash
    );
    println!(
        "Concealed branch combine:      {}",
        rel.concealed_branch_combine
    );
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

fn or_exit<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Invalid {what}: {e}");
        std::process::exit(1);
    })
}

fn load_table(path: &Path) -> TermTable {
    TermTable::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load term table: {e}");
        std::process::exit(1);
    })
}

/// Stem from pinyin (any case), Chinese character or index.
fn parse_stem(s: &str) -> Result<Stem, String> {
    if let Ok(i) = s.parse::<u8>() {
        return Stem::from_index(i).map_err(|e| e.to_string());
    }
    ALL_STEMS
        .into_iter()
        .find(|st| st.name().eq_ignore_ascii_case(s) || st.chinese() == s)
        .ok_or_else(|| format!("unknown stem {s:?}"))
}

/// Branch from pinyin (any case), Chinese character or index.
fn parse_branch(s: &str) -> Result<Branch, String> {
    if let Ok(i) = s.parse::<u8>() {
        return Branch::from_index(i).map_err(|e| e.to_string());
    }
    ALL_BRANCHES
        .into_iter()
        .find(|br| br.name().eq_ignore_ascii_case(s) || br.chinese() == s)
        .ok_or_else(|| format!("unknown branch {s:?}"))
}

/// Pillar from `Stem-Branch` pinyin, two Chinese characters or a
/// sexagenary index.
fn parse_pillar(s: &str) -> Result<Pillar, String> {
    if let Ok(i) = s.parse::<u8>() {
        return Pillar::from_sexagenary(i).map_err(|e| e.to_string());
    }
    let (stem, branch) = match s.split_once('-') {
        Some(parts) => parts,
        None => {
            let mut chars = s.char_indices();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(_), Some((mid, _)), None) => s.split_at(mid),
                _ => return Err(format!("expected Stem-Branch or two characters, got {s:?}")),
            }
        }
    };
    Pillar::new(parse_stem(stem)?, parse_branch(branch)?).map_err(|e| e.to_string())
}
