// Production marking pools. The three pools are independent: one roll
// draws from exactly one of them.

use crate::roller::TraitTable;

pub fn pool_one() -> TraitTable {
    TraitTable::from_pairs([
        ("Flaxen", "ff_"),
        ("Silver", "Z_"),
        ("Sooty", "Sty_"),
        ("Roan", "Rn_"),
        ("Dun", "D_"),
        ("Gray", "G_"),
    ])
}

pub fn pool_two() -> TraitTable {
    TraitTable::from_pairs([
        ("Overo", "O_"),
        ("Tobiano", "T_"),
        ("Rabicano", "Rb_"),
        ("Splash", "Spl_"),
        ("Snowflake Appaloosa", "nLp"),
        ("Blanket Appaloosa", "nLP patn"),
        ("Leopard Appaloosa", "nLp patnpatn"),
    ])
}

pub fn pool_three() -> TraitTable {
    TraitTable::from_pairs([
        ("Dominant White", "W_"),
        ("Sabino", "Sb_"),
        ("Varnish Roan Appaloosa", "LpLp"),
        ("Snowcap Appaloosa", "LpLp patn"),
        ("Fewspot Appaloosa", "LpLp patnpatn"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_non_empty() {
        assert_eq!(pool_one().len(), 6);
        assert_eq!(pool_two().len(), 7);
        assert_eq!(pool_three().len(), 5);
    }
}
