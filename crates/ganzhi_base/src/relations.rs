//! Combination, clash, trine and concealed relations between stems and
//! branches.
//!
//! The pairwise predicates are ordered: `a` is the initiator and the test
//! only fires for the documented orientation. Use the `_either` variants for
//! an unordered test.

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Stem combination (he): `b - a == 5`, e.g. Jia with Ji.
pub const fn stems_combine(a: Stem, b: Stem) -> bool {
    b.index() as i8 - a.index() as i8 == 5
}

/// Stem clash (chong): `b - a == 6`, e.g. Jia with Geng.
pub const fn stems_clash(a: Stem, b: Stem) -> bool {
    b.index() as i8 - a.index() as i8 == 6
}

pub const fn stems_combine_either(a: Stem, b: Stem) -> bool {
    stems_combine(a, b) || stems_combine(b, a)
}

pub const fn stems_clash_either(a: Stem, b: Stem) -> bool {
    stems_clash(a, b) || stems_clash(b, a)
}

/// Branch six-combination: `(a + b) mod 12 == 1` with `b > a`.
pub const fn branches_combine(a: Branch, b: Branch) -> bool {
    (a.index() + b.index()) % 12 == 1 && b.index() > a.index()
}

/// Branch clash: `b - a == 6`, e.g. Zi with Wu.
pub const fn branches_clash(a: Branch, b: Branch) -> bool {
    b.index() as i8 - a.index() as i8 == 6
}

pub const fn branches_combine_either(a: Branch, b: Branch) -> bool {
    branches_combine(a, b) || branches_combine(b, a)
}

pub const fn branches_clash_either(a: Branch, b: Branch) -> bool {
    branches_clash(a, b) || branches_clash(b, a)
}

const TRINES: [[u8; 3]; 4] = [[2, 6, 10], [5, 9, 1], [8, 0, 4], [11, 3, 7]];
const HALF_TRINES: [[u8; 3]; 4] = [[2, 3, 4], [5, 6, 7], [8, 9, 10], [11, 0, 1]];

fn sorted_indices(a: Branch, b: Branch, c: Branch) -> [u8; 3] {
    let mut r = [a.index(), b.index(), c.index()];
    r.sort_unstable();
    r
}

fn matches_fixed(table: &[[u8; 3]; 4], a: Branch, b: Branch, c: Branch) -> bool {
    let probe = [a.index(), b.index(), c.index()];
    table.contains(&probe)
}

/// Three-harmony (san he): branches four apart.
///
/// With `positional` set, only the canonical ordering (growth, peak,
/// storehouse) is accepted, e.g. Yin-Wu-Xu.
pub fn is_trine(a: Branch, b: Branch, c: Branch, positional: bool) -> bool {
    if positional {
        return matches_fixed(&TRINES, a, b, c);
    }
    let r = sorted_indices(a, b, c);
    r[0] + 4 == r[1] && r[0] + 8 == r[2]
}

/// Seasonal assembly (san hui): three consecutive branches of one season.
///
/// The unordered test accepts Yin-Mao-Chen, Si-Wu-Wei, Shen-You-Xu and the
/// winter group Hai-Zi-Chou, which sorts to `[0, 1, 11]`.
pub fn is_half_trine(a: Branch, b: Branch, c: Branch, positional: bool) -> bool {
    if positional {
        return matches_fixed(&HALF_TRINES, a, b, c);
    }
    let r = sorted_indices(a, b, c);
    match r[0] {
        2 | 5 | 8 => r[0] + 1 == r[1] && r[0] + 2 == r[2],
        0 => r[1] == 1 && r[2] == 11,
        _ => false,
    }
}

const fn stem_distance(a: Stem, b: Stem) -> u8 {
    (a.index() as i8 - b.index() as i8).unsigned_abs()
}

/// A stem combines with the primary hidden stem of a branch (order-insensitive).
pub const fn concealed_stem_branch_combine(stem: Stem, branch: Branch) -> bool {
    stem_distance(stem, branch.primary_hidden_stem()) == 5
}

/// A stem clashes with the primary hidden stem of a branch (order-insensitive).
pub const fn concealed_stem_branch_clash(stem: Stem, branch: Branch) -> bool {
    stem_distance(stem, branch.primary_hidden_stem()) == 6
}

/// The primary hidden stems of two branches combine, e.g. Si (Bing) and You (Xin).
pub const fn concealed_branch_branch_combine(b1: Branch, b2: Branch) -> bool {
    stem_distance(b1.primary_hidden_stem(), b2.primary_hidden_stem()) == 5
}

/// Every relation that holds between two pillars, tested in both orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelationSet {
    pub stems_combine: bool,
    pub stems_clash: bool,
    pub branches_combine: bool,
    pub branches_clash: bool,
    /// Stem of either pillar combines with the other's primary hidden stem.
    pub concealed_stem_branch_combine: bool,
    pub concealed_stem_branch_clash: bool,
    pub concealed_branch_combine: bool,
}

impl RelationSet {
    /// No relation holds.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Collect the pairwise relations between two pillars.
pub fn pillar_relations(a: Pillar, b: Pillar) -> RelationSet {
    RelationSet {
        stems_combine: stems_combine_either(a.stem(), b.stem()),
        stems_clash: stems_clash_either(a.stem(), b.stem()),
        branches_combine: branches_combine_either(a.branch(), b.branch()),
        branches_clash: branches_clash_either(a.branch(), b.branch()),
        concealed_stem_branch_combine: concealed_stem_branch_combine(a.stem(), b.branch())
            || concealed_stem_branch_combine(b.stem(), a.branch()),
        concealed_stem_branch_clash: concealed_stem_branch_clash(a.stem(), b.branch())
            || concealed_stem_branch_clash(b.stem(), a.branch()),
        concealed_branch_combine: concealed_branch_branch_combine(a.branch(), b.branch()),
    }
}
