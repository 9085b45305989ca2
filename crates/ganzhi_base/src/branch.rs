//! The twelve Earthly Branches (dizhi) and their hidden stems.
//!
//! Branch elements do not partition evenly: the four "storehouse" branches
//! (Chou, Chen, Wei, Xu; index mod 3 == 1) are Earth, the rest follow the
//! seasonal ring starting from Water at Zi.

use crate::cycle::{next_on_ring, prev_on_ring};
use crate::element::{Element, Polarity};
use crate::error::{BaseError, IndexKind};
use crate::stem::Stem;

/// Number of branches on the ring.
pub const BRANCH_COUNT: u8 = 12;

/// The twelve Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_CHINESE: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Hidden stems (canggan) per branch: primary qi first, then secondary and
/// residual qi where present.
const HIDDEN_STEMS: [&[Stem]; 12] = {
    use Stem::*;
    [
        &[Gui],
        &[Ji, Gui, Xin],
        &[Jia, Bing, Wu],
        &[Yi],
        &[Wu, Yi, Gui],
        &[Bing, Geng, Wu],
        &[Ding, Ji],
        &[Ji, Ding, Yi],
        &[Geng, Ren, Wu],
        &[Xin],
        &[Wu, Xin, Ding],
        &[Ren, Jia],
    ]
};

impl Branch {
    /// Pinyin name of the branch.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Chinese character of the branch.
    pub fn chinese(self) -> &'static str {
        BRANCH_CHINESE[self.index() as usize]
    }

    /// Zodiac animal associated with the branch.
    pub fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at index `index`, rejecting anything outside `0..12`.
    pub fn from_index(index: u8) -> Result<Self, BaseError> {
        ALL_BRANCHES
            .get(index as usize)
            .copied()
            .ok_or(BaseError::InvalidIndex {
                kind: IndexKind::Branch,
                index: index as i64,
            })
    }

    /// Branch at `index mod 12`.
    pub const fn from_ring(index: u8) -> Self {
        ALL_BRANCHES[(index % BRANCH_COUNT) as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Element of the branch.
    ///
    /// `index mod 3 == 1` is Earth; otherwise `t = floor((i + 1) / 3) mod 4`
    /// and the element is `t + floor(t / 3)`, which skips Earth for Metal.
    pub const fn element(self) -> Element {
        let i = self.index();
        if i % 3 == 1 {
            return Element::Earth;
        }
        let t = ((i + 1) / 3) % 4;
        Element::from_ring(t + t / 3)
    }

    /// Hidden stems, primary first. Always 1 to 3 entries.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// The primary hidden stem (main qi), used by concealed relations.
    pub const fn primary_hidden_stem(self) -> Stem {
        HIDDEN_STEMS[self.index() as usize][0]
    }

    pub const fn next(self) -> Self {
        Self::from_ring(next_on_ring(self.index(), BRANCH_COUNT))
    }

    pub const fn prev(self) -> Self {
        Self::from_ring(prev_on_ring(self.index(), BRANCH_COUNT))
    }

    /// Branch `steps` positions further along the ring.
    pub const fn advance(self, steps: u8) -> Self {
        Self::from_ring(((self.index() as u16 + steps as u16) % BRANCH_COUNT as u16) as u8)
    }
}

/// Free-function form of [`Branch::element`].
pub const fn branch_element(branch: Branch) -> Element {
    branch.element()
}
