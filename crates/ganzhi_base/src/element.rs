//! Five Elements (wuxing) and Yin/Yang polarity.
//!
//! The elements sit on the generation ring
//! Water -> Wood -> Fire -> Earth -> Metal -> Water.
//! Each element generates its successor and restrains the element two steps
//! ahead of it.

use crate::error::{BaseError, IndexKind};

/// The five elements, in generation order starting from Water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Water,
    Wood,
    Fire,
    Earth,
    Metal,
}

/// All 5 elements in ring order (0 = Water, 4 = Metal).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Water,
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
];

impl Element {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
        }
    }

    /// Chinese name of the element.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Water => "水",
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
        }
    }

    /// Display colour tag used when rendering the element.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Water => "#1e6fd9",
            Self::Wood => "#2e9d4b",
            Self::Fire => "#d6342c",
            Self::Earth => "#9a6a2f",
            Self::Metal => "#c9a227",
        }
    }

    /// 0-based ring index (Water=0 .. Metal=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Water => 0,
            Self::Wood => 1,
            Self::Fire => 2,
            Self::Earth => 3,
            Self::Metal => 4,
        }
    }

    /// Element at ring index `index`.
    pub fn from_index(index: u8) -> Result<Self, BaseError> {
        ALL_ELEMENTS
            .get(index as usize)
            .copied()
            .ok_or(BaseError::InvalidIndex {
                kind: IndexKind::Element,
                index: index as i64,
            })
    }

    pub(crate) const fn from_ring(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    /// The element this one generates.
    pub const fn generated(self) -> Self {
        Self::from_ring(self.index() + 1)
    }

    /// The element this one restrains.
    pub const fn restrained(self) -> Self {
        Self::from_ring(self.index() + 2)
    }
}

/// Whether `parent` generates `child` on the ring.
pub const fn generates(parent: Element, child: Element) -> bool {
    (parent.index() + 1) % 5 == child.index()
}

/// Whether `active` restrains `passive` on the ring.
pub const fn restrains(active: Element, passive: Element) -> bool {
    (active.index() + 2) % 5 == passive.index()
}

/// Yin/Yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    /// Polarity of a ring index: even indices are Yang.
    pub const fn of_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}
