//! Annotate stems, branches and pillars relative to a Day Master.

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::ten_gods::{TenGod, ten_god};

/// A stem seen from the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemInfo {
    pub stem: Stem,
    pub element: Element,
    /// Colour tag of `element`.
    pub color: &'static str,
    pub ten_god: TenGod,
}

/// A branch seen from the Day Master, with its hidden stems in qi order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub branch: Branch,
    pub element: Element,
    pub color: &'static str,
    pub hidden: Vec<StemInfo>,
}

impl BranchInfo {
    /// Ten god of the primary hidden stem.
    pub fn primary_ten_god(&self) -> TenGod {
        self.hidden[0].ten_god
    }
}

/// Both halves of a pillar seen from the Day Master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillarInfo {
    pub pillar: Pillar,
    pub stem: StemInfo,
    pub branch: BranchInfo,
}

pub fn describe_stem(stem: Stem, day_master: Stem) -> StemInfo {
    let element = stem.element();
    StemInfo {
        stem,
        element,
        color: element.color(),
        ten_god: ten_god(day_master, stem),
    }
}

pub fn describe_branch(branch: Branch, day_master: Stem) -> BranchInfo {
    let element = branch.element();
    BranchInfo {
        branch,
        element,
        color: element.color(),
        hidden: branch
            .hidden_stems()
            .iter()
            .map(|&s| describe_stem(s, day_master))
            .collect(),
    }
}

pub fn describe_pillar(day_master: Stem, pillar: Pillar) -> PillarInfo {
    PillarInfo {
        pillar,
        stem: describe_stem(pillar.stem(), day_master),
        branch: describe_branch(pillar.branch(), day_master),
    }
}

/// Describe a run of stems against one Day Master.
pub fn describe_stems(day_master: Stem, stems: &[Stem]) -> Vec<StemInfo> {
    stems.iter().map(|&s| describe_stem(s, day_master)).collect()
}

/// Describe a run of branches against one Day Master.
pub fn describe_branches(day_master: Stem, branches: &[Branch]) -> Vec<BranchInfo> {
    branches
        .iter()
        .map(|&b| describe_branch(b, day_master))
        .collect()
}
