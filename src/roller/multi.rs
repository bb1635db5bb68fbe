/*
 * Equigen - Pool-Based Multi-Selector
 * Design notes:
 * 1. One selector shape shared by markings and mutations: three
 *    independent pools, exactly one used per roll (pools are NOT
 *    cumulative, unlike coat tiers).
 * 2. Requesting up to the pool size samples without replacement; over-
 *    requesting falls back to independent uniform draws with replacement.
 * 3. A pool choice outside {1, 2, 3} is an error; an empty pool or a zero
 *    count is a non-result, not an error.
 */

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::tables::{TraitEntry, TraitTable};
use super::{RollerError, RollerResult};

/// Number of independent pools backing markings and mutations each.
pub const POOL_COUNT: usize = 3;

/// Ordered phenotype labels and positionally aligned genotype codes
/// sampled from one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSelection {
    pub phenotypes: Vec<String>,
    pub genotypes: Vec<String>,
}

impl MultiSelection {
    /// Space-joined phenotype labels, in the order drawn.
    pub fn phenotype(&self) -> String {
        self.phenotypes.join(" ")
    }

    /// Space-joined genotype codes, aligned with `phenotype()`.
    pub fn genotype(&self) -> String {
        self.genotypes.join(" ")
    }
}

/// Samples `count` entries from the pool selected by `choice` (1-3).
///
/// Returns `Ok(None)` when the chosen pool is empty or `count` is zero.
pub fn select_multiple<R: Rng>(
    pools: &[TraitTable; POOL_COUNT],
    choice: u8,
    count: usize,
    rng: &mut R,
) -> RollerResult<Option<MultiSelection>> {
    let pool = match choice {
        1..=3 => &pools[(choice - 1) as usize],
        other => return Err(RollerError::InvalidChoice(other)),
    };

    if pool.is_empty() || count == 0 {
        return Ok(None);
    }

    let entries = pool.entries();
    let selected: Vec<&TraitEntry> = if count <= entries.len() {
        entries.choose_multiple(rng, count).collect()
    } else {
        (0..count)
            .map(|_| &entries[rng.gen_range(0..entries.len())])
            .collect()
    };

    let mut phenotypes = Vec::with_capacity(count);
    let mut genotypes = Vec::with_capacity(count);
    for entry in selected {
        phenotypes.push(entry.phenotype().to_string());
        genotypes.push(entry.genotype().to_string());
    }

    Ok(Some(MultiSelection { phenotypes, genotypes }))
}
