// Production mutation pools, same three-pool shape as markings but a
// separate trait source.

use crate::roller::TraitTable;

pub fn pool_one() -> TraitTable {
    TraitTable::from_pairs([
        ("Rosal", "rlrl"),
        ("Radish", "Rd_"),
        ("Stained", "St_"),
        ("Crest", "Cst_"),
        ("Cornish", "crcr"),
        ("Laced", "L_"),
        ("Seraph", "Sph_"),
    ])
}

pub fn pool_two() -> TraitTable {
    TraitTable::from_pairs([
        ("Primal", "Pr_"),
        ("Jaguar", "grgr"),
        ("Sunsper", "Sp_"),
        ("Willowed", "Wh_"),
        ("Blotted", "Bb_"),
        ("Exper", "xpxp"),
    ])
}

pub fn pool_three() -> TraitTable {
    TraitTable::from_pairs([
        ("Pheonix Syndrome", "PXS_"),
        ("Caped", "Cpd_"),
        ("Polaris", "plrplr"),
        ("Crown", "Cw_"),
        ("Hotspur", "Hp_"),
        ("Reverse", "revrev"),
        ("Docket", "dckdck"),
    ])
}
