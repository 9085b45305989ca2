//! Year pillars.

use std::iter::FusedIterator;

use ganzhi_base::{Pillar, year_sexagenary};

/// Pillar of year `year`.
///
/// Years before the common era are fed to the cycle formula as given, so
/// they land one position off the historical count.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_sexagenary_ring(year_sexagenary(year))
}

/// `count` consecutive year pillars starting at `year`.
pub fn year_pillars(year: i32, count: usize) -> YearPillars {
    YearPillars {
        next: year_pillar(year),
        remaining: count,
    }
}

/// Lazy run of year pillars; clone it to restart from the same point.
#[derive(Debug, Clone)]
pub struct YearPillars {
    next: Pillar,
    remaining: usize,
}

impl Iterator for YearPillars {
    type Item = Pillar;

    fn next(&mut self) -> Option<Pillar> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next;
        self.next = current.next();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for YearPillars {}

impl FusedIterator for YearPillars {}
