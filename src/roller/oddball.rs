/*
 * Equigen - Oddball Selector
 * Design notes:
 * 1. Independent probability gate: a uniform real in [0, 1) must land
 *    below the configured chance (10% in production) before any pick
 *    happens. The gate is evaluated per roll, never retried.
 * 2. Oddballs are phenotype-only by design; any genotype an entry might
 *    carry is discarded and never reaches the combined genotype string.
 */

use rand::Rng;

use super::tables::TraitTable;

/// Rolls the abnormality gate and, on success, picks one oddball label.
///
/// Returns `None` when the caller declined, the gate fails, or the pool
/// is empty.
pub fn select_oddball<R: Rng>(
    pool: &TraitTable,
    opt_in: bool,
    chance: f64,
    rng: &mut R,
) -> Option<String> {
    if !opt_in {
        return None;
    }
    if rng.gen::<f64>() >= chance {
        return None;
    }

    let entries = pool.entries();
    if entries.is_empty() {
        return None;
    }

    let picked = &entries[rng.gen_range(0..entries.len())];
    Some(picked.phenotype().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn oddballs() -> TraitTable {
        TraitTable::from_labels(["Heterochromia", "Vitiligo", "Chimera", "Brindle"])
    }

    #[test]
    fn test_declined_opt_in_returns_none() {
        let pool = oddballs();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for _ in 0..100 {
            assert!(select_oddball(&pool, false, 0.1, &mut rng).is_none());
        }
    }

    #[test]
    fn test_success_rate_is_near_ten_percent() {
        let pool = oddballs();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut hits = 0u32;
        for _ in 0..100_000 {
            if select_oddball(&pool, true, 0.1, &mut rng).is_some() {
                hits += 1;
            }
        }

        // Binomial sd at n=100k, p=0.1 is ~95; allow five sigma either way.
        assert!(hits > 9_500 && hits < 10_500, "hit rate {} out of 100000", hits);
    }

    #[test]
    fn test_success_returns_label_from_pool() {
        let pool = oddballs();
        let mut rng = ChaCha8Rng::seed_from_u64(13);

        let mut picked = Vec::new();
        for _ in 0..10_000 {
            if let Some(label) = select_oddball(&pool, true, 0.1, &mut rng) {
                picked.push(label);
            }
        }

        assert!(!picked.is_empty());
        for label in &picked {
            assert!(pool.entries().iter().any(|e| e.phenotype() == label));
        }
    }

    #[test]
    fn test_certain_gate_always_picks() {
        let pool = oddballs();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..50 {
            assert!(select_oddball(&pool, true, 1.0, &mut rng).is_some());
        }
    }

    #[test]
    fn test_empty_pool_returns_none() {
        let pool = TraitTable::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..100 {
            assert!(select_oddball(&pool, true, 1.0, &mut rng).is_none());
        }
    }
}
