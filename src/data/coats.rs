// Production coat tables, one per rarity tier. Rolling at rarity N draws
// from the union of every tier up to N.

use crate::roller::TraitTable;

/// Tier 1: base coats.
pub fn common() -> TraitTable {
    TraitTable::from_pairs([
        ("Chestnut", "ee_"),
        ("Bay", "E_ A_"),
        ("Black", "E_ aa"),
        ("Palomino", "ee_ Cr_"),
        ("Buckskin", "E_ A_ Cr_"),
        ("Smokey Black", "E_ aa Cr_"),
    ])
}

/// Tier 2: single-dilution coats.
pub fn uncommon() -> TraitTable {
    TraitTable::from_pairs([
        ("Gold Champagne", "ee_ Ch_"),
        ("Amber Champagne", "E_ A_ Ch_"),
        ("Classic Champagne", "E_ aa Ch_"),
        ("Gold Pearl", "ee_ prlprl"),
        ("Amber Pearl", "E_ A_ prlprl"),
        ("Black Pearl", "E_ aa prlprl"),
        ("Bronze", "ee_ Pr_"),
        ("Iron", "E_ A_ Pr_"),
        ("Steel", "E_ aa Pr_"),
        ("Clay", "ee_ stnstn"),
        ("Shale", "E_ A_ stnstn"),
        ("Granite", "E_ aa stnstn"),
        ("Cherry", "ee_ Yn_"),
        ("Cranberry", "E_ A_ Yn_"),
        ("Rhubarb", "E_ aa Yn_"),
        ("Powder Loden", "ee_ Th_"),
        ("Pistachio Loden", "E_ A_ Th_"),
        ("Classic Loden", "E_ aa Th_"),
    ])
}

/// Tier 3: double-dilution coats. "Gold Pearl Champagne" appears twice in
/// the stud book source; the table collapses it to one entry.
pub fn rare() -> TraitTable {
    TraitTable::from_pairs([
        ("Gold Cream Champagne", "ee_ Cr_ Ch_"),
        ("Amber Cream Champagne", "E_ A_ Cr_ Ch_"),
        ("Classic Cream Champagne", "E_ aa Cr_ Ch_"),
        ("Cremello", "ee_ CrCr"),
        ("Perlino", "E_ A_ CrCr"),
        ("Smoky Cream", "E_ aa CrCr"),
        ("Brass", "ee_ CrPr"),
        ("Chrome", "E_ A_ CrPr"),
        ("Cobalt", "E_ aa CrPr"),
        ("Sand", "ee_ Crstn"),
        ("Silica", "E_ A_ stn Cr_"),
        ("Cobble", "E_ aa stn Cr_"),
        ("Sangria", "ee_ YnCr"),
        ("Port", "E_ A_ YnCr"),
        ("Velvet", "E_ aa YnCr"),
        ("Coral", "ee_ Cr_ Th_"),
        ("Seagrass", "E_ A_ Cr_ Th_"),
        ("Yosun", "E_ aa Cr_ Th_"),
        ("Palomino Pearl", "ee_ Crprl"),
        ("Buckskin Pearl", "E_ A_ Crprl"),
        ("Smoky Cream Pearl", "E_ aa Crprl"),
        ("Honeybutter", "ee_ Pr_ Ch_"),
        ("Tuscan", "E_ A_ Pr_ Ch_"),
        ("Mustard", "E_ aa Pr_ Ch_"),
        ("Gold Pearl Champagne", "ee_ prlprl Ch_"),
        ("Bay Pearl Champagne", "ee_ prlprl Ch_"),
        ("Black Pearl Champagne", "E_ aa prlprl Ch_"),
        ("Chestnut Pearl Champagne", "E_ A_ prlprl Ch_"),
        ("Palomino Pearl Champagne", "ee_ prlprl Ch_"),
        ("Buckskin Pearl Champagne", "E_ A_ prlprl Ch_"),
        ("Smoky Black Pearl Champagne", "E_ aa prlprl Ch_"),
        ("Gold Pearl Champagne", "ee_ prlprl Ch_"),
        ("Amber Pearl Champagne", "E_ A_ prlprl Ch_"),
        ("Classic Pearl Champagne", "E_ aa prlprl Ch_"),
        ("Gold Cream Pearl Champagne", "ee_ Crprl Ch_"),
        ("Amber Cream Pearl Champagne", "E_ A_ Crprl Ch_"),
        ("Classic Cream Pearl Champagne", "E_ aa Crprl Ch_"),
    ])
}

/// Tier 4: extra coats.
pub fn extra() -> TraitTable {
    TraitTable::from_pairs([
        ("Ash", "ee_ stnstn Ch_"),
        ("Cinder", "E_ A_ stnstn Ch_"),
        ("Charcoal", "E_ aa stnstn Ch_"),
        ("Syrah", "ee_ Yn_ Ch_"),
        ("Merlot", "E_ A_ Yn_ Ch_"),
        ("Cabernet", "E_ aa Yn_ Ch_"),
        ("Martini", "ee_ Th_ Ch_"),
        ("Vermouth", "E_ A_ Th_ Ch_"),
        ("Verdant", "E_ aa Th_ Ch_"),
        ("Copper", "ee_ Prprl"),
        ("Rose Gold", "E_ A_ Prprl"),
        ("Tungsten", "E_ aa Prprl Ch_"),
        ("Salt", "ee_ prlstn"),
        ("Paprika", "E_ A_ prlstn Ch_"),
        ("Pepper", "E_ aa prlstn Ch_"),
        ("Moscato", "ee_ prlprl Yn_"),
        ("Pink Moscato", "E_ A_ Yn_ prlprl Ch_"),
        ("Chardonnay", "E_ aa Yn_ prlprl"),
        ("Mint", "ee_ prlprl Th_"),
        ("Basil", "E_ A_ prlprl Th_"),
        ("Sage", "E_ aa Th_ prlprl"),
        ("Vermillion", "ee_ Crprl Yn_"),
        ("Scarlet", "E_ A_ Yn_ Crprl"),
        ("Blood", "E_ aa Yn_ Crprl"),
        ("Rosemary", "ee_ Crprl Th_"),
        ("Thyme", "E_ A_ Th_ Crprl"),
        ("Oregano", "E_ aa Th_ Crprl"),
        ("Gold Cream Pearl Champagne", "ee_ Crprl Ch_"),
        ("Amber Cream Pearl Champagne", "E_ A_ Crprl Ch_"),
        ("Classic Cream Pearl Champagne", "E_ aa Crprl Ch_"),
    ])
}

/// Tier 5: pedigree coats.
pub fn pedigree() -> TraitTable {
    TraitTable::from_pairs([
        ("Sparrow", "ee_ Prprl Ch_"),
        ("Starling", "E_ A_ Pr_ prlprl Ch_"),
        ("Raven", "E_ aa Prprl Ch_"),
        ("Powder Blue", "ee_ prlstn Ch_"),
        ("Russian Blue", "E_ A_ prlstn Ch_"),
        ("Royal Blue", "E_ aa prlstn Ch_"),
        ("Maroon", "ee_ prlprl Yn_ Ch_"),
        ("Mulberry", "E_ A_ prlprl Yn_ Ch_"),
        ("Mahogany", "E_ aa prlprl Yn_ Ch_"),
        ("Conure", "ee_ prlprl Th_ Ch_"),
        ("Peacock", "E_ A_ prlprl Th_ Ch_"),
        ("Turaco", "E_ aa prlprl Th_ Ch_"),
    ])
}

/// Tier 6: designer coats.
pub fn design() -> TraitTable {
    TraitTable::from_pairs([
        ("Taro", "ee_ prlstn Ch_"),
        ("Mauve", "E_ A_ prlstn Ch_"),
        ("Murphy", "E_ A_ prlstn Ch_"),
        ("Sapphire", "ee_ Prstn Ch_"),
        ("Indigo", "E_ A_ Prstn Ch_"),
        ("Obsidian", "E_ aa Prstn Ch_"),
        ("Plum", "ee_ stnstn Yn_ Ch_"),
        ("Prune", "E_ A_ stnstn Yn_ Ch_"),
        ("Currant", "E_ aa stnstn Yn_ Ch_"),
        ("Maple", "ee_ stnstn Th_ Ch_"),
        ("Oak", "E_ A_ stnstn Th_ Ch_"),
        ("Pine", "E_ aa stnstn Th_ Ch_"),
        ("Ruby", "ee_ prlstn Yn_ Ch_"),
        ("Jasper", "E_ A_ prlstn Yn_ Ch_"),
        ("Garnet", "E_ aa prlstn Yn_ Ch_"),
        ("Melon", "ee_ prlstn Th_ Ch_"),
        ("Honeydew", "E_ A_ prlstn Th_ Ch_"),
        ("Musk", "E_ aa prlstn Th_ Ch_"),
        ("Peanut", "ee_ Crprl Yn_ Ch_"),
        ("Almond", "E_ A_ Crprl Yn_ Ch_"),
        ("Cashew", "E_ aa Crprl Yn_ Ch_"),
        ("Sugarcane", "ee_ Crprl Th_ Ch_"),
        ("Bamboo", "E_ A_ Crprl Th_ Ch_"),
        ("Sorghum", "E_ aa Crprl Th_ Ch_"),
        ("Mocha", "ee_ PrCr Yn_"),
        ("Chocolate", "E_ A_ PrCr Yn_"),
        ("Espresso", "E_ aa PrCr Yn_"),
        ("Mead", "ee_ PrCr Th_"),
        ("Sherry", "E_ A_ PrCr Th"),
        ("Vermouth", "E_ aa PrCr Th"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tiers_non_empty() {
        for (name, table) in [
            ("common", common()),
            ("uncommon", uncommon()),
            ("rare", rare()),
            ("extra", extra()),
            ("pedigree", pedigree()),
            ("design", design()),
        ] {
            assert!(!table.is_empty(), "{} tier is empty", name);
        }
    }

    #[test]
    fn test_rare_tier_collapses_duplicate_label() {
        let rare = rare();
        let count = rare
            .entries()
            .iter()
            .filter(|e| e.phenotype() == "Gold Pearl Champagne")
            .count();
        assert_eq!(count, 1);
        // 37 written entries, one duplicated label.
        assert_eq!(rare.len(), 36);
    }

    #[test]
    fn test_tier_sizes() {
        assert_eq!(common().len(), 6);
        assert_eq!(uncommon().len(), 18);
        assert_eq!(extra().len(), 30);
        assert_eq!(pedigree().len(), 12);
        assert_eq!(design().len(), 30);
    }
}
