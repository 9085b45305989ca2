//! The ten Heavenly Stems (tiangan).
//!
//! Stems pair 2:1 onto the five elements: each element owns a Yang stem
//! (even index) followed by a Yin stem (odd index), starting from Wood.

use crate::cycle::{next_on_ring, prev_on_ring};
use crate::element::{Element, Polarity};
use crate::error::{BaseError, IndexKind};

/// Number of stems on the ring.
pub const STEM_COUNT: u8 = 10;

/// The ten Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

const STEM_CHINESE: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// Pinyin name of the stem.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Chinese character of the stem.
    pub fn chinese(self) -> &'static str {
        STEM_CHINESE[self.index() as usize]
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at index `index`, rejecting anything outside `0..10`.
    pub fn from_index(index: u8) -> Result<Self, BaseError> {
        ALL_STEMS
            .get(index as usize)
            .copied()
            .ok_or(BaseError::InvalidIndex {
                kind: IndexKind::Stem,
                index: index as i64,
            })
    }

    /// Stem at `index mod 10`.
    pub const fn from_ring(index: u8) -> Self {
        ALL_STEMS[(index % STEM_COUNT) as usize]
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Element of the stem: `((i - i mod 2) / 2 + 1) mod 5`.
    pub const fn element(self) -> Element {
        let i = self.index();
        Element::from_ring((i - i % 2) / 2 + 1)
    }

    pub const fn next(self) -> Self {
        Self::from_ring(next_on_ring(self.index(), STEM_COUNT))
    }

    pub const fn prev(self) -> Self {
        Self::from_ring(prev_on_ring(self.index(), STEM_COUNT))
    }

    /// Stem `steps` positions further along the ring.
    pub const fn advance(self, steps: u8) -> Self {
        Self::from_ring(((self.index() as u16 + steps as u16) % STEM_COUNT as u16) as u8)
    }
}

/// Free-function form of [`Stem::polarity`].
pub const fn stem_polarity(stem: Stem) -> Polarity {
    stem.polarity()
}

/// Free-function form of [`Stem::element`].
pub const fn stem_element(stem: Stem) -> Element {
    stem.element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_ELEMENTS;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), Ok(*s));
        }
    }

    #[test]
    fn from_index_out_of_range() {
        assert!(Stem::from_index(10).is_err());
        assert!(Stem::from_index(255).is_err());
    }

    #[test]
    fn names_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.name().is_empty());
            assert_eq!(s.chinese().chars().count(), 1);
        }
    }

    #[test]
    fn polarity_alternates() {
        for s in ALL_STEMS {
            let expected = if s.index() % 2 == 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            };
            assert_eq!(s.polarity(), expected);
        }
    }

    #[test]
    fn two_stems_per_element() {
        for e in ALL_ELEMENTS {
            let count = ALL_STEMS.iter().filter(|s| s.element() == e).count();
            assert_eq!(count, 2, "{}", e.name());
        }
    }

    #[test]
    fn known_elements() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Wu.element(), Element::Earth);
        assert_eq!(Stem::Xin.element(), Element::Metal);
        assert_eq!(Stem::Ren.element(), Element::Water);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn next_prev_wrap() {
        assert_eq!(Stem::Gui.next(), Stem::Jia);
        assert_eq!(Stem::Jia.prev(), Stem::Gui);
        assert_eq!(Stem::Geng.advance(12), Stem::Ren);
    }
}
