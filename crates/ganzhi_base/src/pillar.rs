//! Pillars: polarity-matched stem/branch pairs.

use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::cycle::{SEXAGENARY_COUNT, sexagenary_index};
use crate::error::{BaseError, IndexKind};
use crate::stem::Stem;

/// A valid (stem, branch) pair. The stem and branch always share polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair `stem` with `branch`, failing if their polarities differ.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, BaseError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(BaseError::InvalidPillar {
                stem: stem.index(),
                branch: branch.index(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar from raw stem and branch indices.
    pub fn from_indices(stem: u8, branch: u8) -> Result<Self, BaseError> {
        Self::new(Stem::from_index(stem)?, Branch::from_index(branch)?)
    }

    /// Pillar at position `index` (0..60) of the sexagenary cycle.
    pub fn from_sexagenary(index: u8) -> Result<Self, BaseError> {
        if index >= SEXAGENARY_COUNT {
            return Err(BaseError::InvalidIndex {
                kind: IndexKind::Sexagenary,
                index: index as i64,
            });
        }
        Ok(Self::from_sexagenary_ring(index))
    }

    /// Pillar at position `index mod 60`.
    pub const fn from_sexagenary_ring(index: u8) -> Self {
        let i = index % SEXAGENARY_COUNT;
        Self {
            stem: Stem::from_ring(i),
            branch: Branch::from_ring(i),
        }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position of the pillar in the sexagenary cycle (0 = Jia-Zi).
    pub const fn sexagenary_index(self) -> u8 {
        sexagenary_index(self.stem, self.branch)
    }

    /// Next pillar in the cycle; stem and branch both step forward.
    pub const fn next(self) -> Self {
        Self {
            stem: self.stem.next(),
            branch: self.branch.next(),
        }
    }

    pub const fn prev(self) -> Self {
        Self {
            stem: self.stem.prev(),
            branch: self.branch.prev(),
        }
    }

    /// Pinyin name, e.g. `Jia-Zi`.
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// Chinese name, e.g. `甲子`.
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.chinese(), self.branch.chinese())
    }
}
