//! Five spirits and Ten Gods relative to a Day Master.
//!
//! The five-spirit family is the element relation seen from the Day Master:
//! what generates it (Resource), its own element (Peer), what it generates
//! (Output), what it restrains (Wealth) and what restrains it (Officer).
//! Doubling the family and adding a same-polarity bit gives the ten gods.

use crate::element::Element;
use crate::error::{BaseError, IndexKind};
use crate::stem::Stem;

/// Five relation families, ordered from "supports self" to "opposes self".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FiveSpirit {
    Resource,
    Peer,
    Output,
    Wealth,
    Officer,
}

/// All five spirits in index order.
pub const ALL_FIVE_SPIRITS: [FiveSpirit; 5] = [
    FiveSpirit::Resource,
    FiveSpirit::Peer,
    FiveSpirit::Output,
    FiveSpirit::Wealth,
    FiveSpirit::Officer,
];

impl FiveSpirit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Resource => "Resource",
            Self::Peer => "Peer",
            Self::Output => "Output",
            Self::Wealth => "Wealth",
            Self::Officer => "Officer",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Resource => "印",
            Self::Peer => "比",
            Self::Output => "伤",
            Self::Wealth => "才",
            Self::Officer => "杀",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, BaseError> {
        ALL_FIVE_SPIRITS
            .get(index as usize)
            .copied()
            .ok_or(BaseError::InvalidIndex {
                kind: IndexKind::FiveSpirit,
                index: index as i64,
            })
    }

    /// Resource and Peer strengthen the Day Master.
    pub const fn is_dominant(self) -> bool {
        is_dominant(self.index())
    }
}

/// The ten gods. Even indices differ in polarity from the Day Master, odd
/// indices share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TenGod {
    DirectResource,
    IndirectResource,
    RobWealth,
    Friend,
    HurtingOfficer,
    EatingGod,
    DirectWealth,
    IndirectWealth,
    DirectOfficer,
    SevenKillings,
}

/// All ten gods in index order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::DirectResource,
    TenGod::IndirectResource,
    TenGod::RobWealth,
    TenGod::Friend,
    TenGod::HurtingOfficer,
    TenGod::EatingGod,
    TenGod::DirectWealth,
    TenGod::IndirectWealth,
    TenGod::DirectOfficer,
    TenGod::SevenKillings,
];

const TEN_GOD_CHINESE: [&str; 10] = [
    "正印", "偏印", "劫财", "比肩", "伤官", "食神", "正财", "偏财", "正官", "七杀",
];

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DirectResource => "Direct Resource",
            Self::IndirectResource => "Indirect Resource",
            Self::RobWealth => "Rob Wealth",
            Self::Friend => "Friend",
            Self::HurtingOfficer => "Hurting Officer",
            Self::EatingGod => "Eating God",
            Self::DirectWealth => "Direct Wealth",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectOfficer => "Direct Officer",
            Self::SevenKillings => "Seven Killings",
        }
    }

    pub fn chinese(self) -> &'static str {
        TEN_GOD_CHINESE[self.index() as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, BaseError> {
        ALL_TEN_GODS
            .get(index as usize)
            .copied()
            .ok_or(BaseError::InvalidIndex {
                kind: IndexKind::TenGod,
                index: index as i64,
            })
    }

    /// Family this god belongs to.
    pub const fn five_spirit(self) -> FiveSpirit {
        ALL_FIVE_SPIRITS[(self.index() / 2) as usize]
    }

    /// Whether the god shares polarity with the Day Master.
    pub const fn same_polarity(self) -> bool {
        self.index() % 2 == 1
    }
}

/// Five-spirit index: `((6 - dm) mod 5 + other) mod 5`.
pub const fn five_spirit_index(day_master_element: Element, other_element: Element) -> u8 {
    ((6 - day_master_element.index()) % 5 + other_element.index()) % 5
}

/// Ten-gods index: `2 * five_spirit + same_polarity`.
pub const fn ten_gods_index(
    day_master_element: Element,
    other_element: Element,
    same_polarity: bool,
) -> u8 {
    2 * five_spirit_index(day_master_element, other_element) + same_polarity as u8
}

/// Families 0 and 1 (Resource, Peer) support the Day Master.
pub const fn is_dominant(five_spirit_index: u8) -> bool {
    five_spirit_index < 2
}

/// Five-spirit family of `other` seen from `day_master`.
pub const fn five_spirit(day_master_element: Element, other_element: Element) -> FiveSpirit {
    ALL_FIVE_SPIRITS[five_spirit_index(day_master_element, other_element) as usize]
}

/// Ten god of `other` relative to `day_master`.
pub const fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let same = day_master.index() % 2 == other.index() % 2;
    ALL_TEN_GODS[ten_gods_index(day_master.element(), other.element(), same) as usize]
}
