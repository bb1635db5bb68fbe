/*
 * Equigen - Rarity-Tiered Coat Selector
 * Design notes:
 * 1. Tiers are strictly additive: rolling at rarity N merges every tier
 *    table with rank <= N, concatenated in increasing tier order with
 *    per-table insertion order preserved.
 * 2. The merged pool is NOT deduplicated and tiers carry no extra weight;
 *    one discrete uniform pick over the concatenation.
 * 3. An empty merged pool (rarity 0, or all referenced tables empty) is
 *    an error, never a silent non-result.
 */

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::tables::{TraitEntry, TraitTable};
use super::{RollerError, RollerResult};

/// Number of coat rarity tiers.
pub const TIER_COUNT: usize = 6;

/// A single selected trait: phenotype label plus genotype code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub phenotype: String,
    pub genotype: String,
}

impl From<&TraitEntry> for Selection {
    fn from(entry: &TraitEntry) -> Self {
        Self {
            phenotype: entry.phenotype().to_string(),
            genotype: entry.genotype().to_string(),
        }
    }
}

fn merged_pool(tiers: &[TraitTable; TIER_COUNT], rarity: u8) -> Vec<&TraitEntry> {
    let mut combined = Vec::new();
    for (index, table) in tiers.iter().enumerate() {
        if (index as u8) < rarity {
            combined.extend(table.entries());
        }
    }
    combined
}

/// Picks one coat uniformly from the union of all tiers with rank <= rarity.
///
/// Rarity above 6 behaves like 6: every tier is already included.
pub fn select_coat<R: Rng>(
    tiers: &[TraitTable; TIER_COUNT],
    rarity: u8,
    rng: &mut R,
) -> RollerResult<Selection> {
    let combined = merged_pool(tiers, rarity);
    if combined.is_empty() {
        return Err(RollerError::EmptyPool(format!(
            "no coats available at rarity {}",
            rarity
        )));
    }

    let picked = combined[rng.gen_range(0..combined.len())];
    Ok(Selection::from(picked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tiers() -> [TraitTable; TIER_COUNT] {
        [
            TraitTable::from_pairs([("Chestnut", "ee_"), ("Bay", "E_ A_")]),
            TraitTable::from_pairs([("Bronze", "ee_ Pr_")]),
            TraitTable::from_pairs([("Cremello", "ee_ CrCr")]),
            TraitTable::from_pairs([("Copper", "ee_ Prprl")]),
            TraitTable::from_pairs([("Sparrow", "ee_ Prprl Ch_")]),
            TraitTable::from_pairs([("Taro", "ee_ prlstn Ch_")]),
        ]
    }

    #[test]
    fn test_pool_grows_monotonically_with_rarity() {
        let tiers = tiers();
        let mut previous = 0;
        for rarity in 1..=6 {
            let size = merged_pool(&tiers, rarity).len();
            assert!(size >= previous, "pool shrank at rarity {}", rarity);
            previous = size;
        }
    }

    #[test]
    fn test_rarity_one_only_draws_from_tier_one() {
        let tiers = tiers();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let selection = select_coat(&tiers, 1, &mut rng).unwrap();
            assert!(selection.phenotype == "Chestnut" || selection.phenotype == "Bay");
        }
    }

    #[test]
    fn test_high_rarity_reaches_top_tier() {
        let tiers = tiers();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let mut saw_design_coat = false;
        for _ in 0..500 {
            let selection = select_coat(&tiers, 6, &mut rng).unwrap();
            if selection.phenotype == "Taro" {
                saw_design_coat = true;
                break;
            }
        }
        assert!(saw_design_coat);
    }

    #[test]
    fn test_rarity_zero_is_empty_pool_error() {
        let tiers = tiers();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = select_coat(&tiers, 0, &mut rng);
        assert!(matches!(result, Err(RollerError::EmptyPool(_))));
    }

    #[test]
    fn test_all_empty_tables_is_empty_pool_error() {
        let tiers: [TraitTable; TIER_COUNT] = std::array::from_fn(|_| TraitTable::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = select_coat(&tiers, 6, &mut rng);
        assert!(matches!(result, Err(RollerError::EmptyPool(_))));
    }

    #[test]
    fn test_rarity_above_six_behaves_like_six() {
        let tiers = tiers();
        assert_eq!(merged_pool(&tiers, 9).len(), merged_pool(&tiers, 6).len());
    }
}
