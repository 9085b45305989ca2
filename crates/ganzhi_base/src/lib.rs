//! Sexagenary cycle arithmetic for the Four Pillars.
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches (with hidden stems) and the Five Elements
//! - Ring arithmetic and sexagenary indexing of pillars
//! - Combination, clash, trine and concealed relation predicates
//! - Five-spirit / Ten-Gods classification against a Day Master
//! - Day Master annotation of stems, branches and pillars
//!
//! Everything here is pure, table-driven and allocation-free apart from the
//! description helpers.

pub mod branch;
pub mod cycle;
pub mod describe;
pub mod element;
pub mod error;
pub mod pillar;
pub mod relations;
pub mod stem;
pub mod ten_gods;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, Branch, branch_element};
pub use cycle::{
    SEXAGENARY_COUNT, day_sexagenary, day_stem_to_hour_start_stem, next_on_ring, prev_on_ring,
    sexagenary_index, year_sexagenary, year_stem_to_month_start_stem,
};
pub use describe::{
    BranchInfo, PillarInfo, StemInfo, describe_branch, describe_branches, describe_pillar,
    describe_stem, describe_stems,
};
pub use element::{ALL_ELEMENTS, Element, Polarity, generates, restrains};
pub use error::{BaseError, IndexKind};
pub use pillar::Pillar;
pub use relations::{
    RelationSet, branches_clash, branches_clash_either, branches_combine,
    branches_combine_either, concealed_branch_branch_combine, concealed_stem_branch_clash,
    concealed_stem_branch_combine, is_half_trine, is_trine, pillar_relations, stems_clash,
    stems_clash_either, stems_combine, stems_combine_either,
};
pub use stem::{ALL_STEMS, STEM_COUNT, Stem, stem_element, stem_polarity};
pub use ten_gods::{
    ALL_FIVE_SPIRITS, ALL_TEN_GODS, FiveSpirit, TenGod, five_spirit, five_spirit_index,
    is_dominant, ten_god, ten_gods_index,
};
