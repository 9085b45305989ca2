//! Error types for cycle arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which cyclic enumeration an index was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Stem,
    Branch,
    Element,
    FiveSpirit,
    TenGod,
    Sexagenary,
}

impl IndexKind {
    /// Size of the ring the index must fall in.
    pub const fn ring_size(self) -> u8 {
        match self {
            Self::Stem => 10,
            Self::Branch => 12,
            Self::Element | Self::FiveSpirit => 5,
            Self::TenGod => 10,
            Self::Sexagenary => 60,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::Branch => "branch",
            Self::Element => "element",
            Self::FiveSpirit => "five-spirit",
            Self::TenGod => "ten-god",
            Self::Sexagenary => "sexagenary",
        }
    }
}

/// Errors from stem/branch/element arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BaseError {
    /// An index outside its ring was supplied.
    InvalidIndex { kind: IndexKind, index: i64 },
    /// Stem and branch polarities differ, so the pair is not a pillar.
    InvalidPillar { stem: u8, branch: u8 },
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { kind, index } => write!(
                f,
                "invalid {} index {index} (expected 0..{})",
                kind.name(),
                kind.ring_size()
            ),
            Self::InvalidPillar { stem, branch } => write!(
                f,
                "invalid pillar: stem {stem} and branch {branch} differ in polarity"
            ),
        }
    }
}

impl Error for BaseError {}
