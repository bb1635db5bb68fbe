// Production oddball abnormalities. Label-only entries: oddballs never
// carry a genotype code. "Brindle" is listed twice in the stud book
// source and stays duplicated here (list semantics, not dict semantics).

use crate::roller::TraitTable;

pub fn all() -> TraitTable {
    TraitTable::from_labels([
        "Heterochromia",
        "Birdcatcher Spots",
        "Bend-Or Spots",
        "Vitiligo",
        "Swarry",
        "Undercoat",
        "Chimera",
        "Brindle",
        "Shorthair",
        "Emperor",
        "Cift",
        "Brindle",
    ])
}
