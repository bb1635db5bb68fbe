/*
 * Equigen - Trait Roller Module
 * Design notes:
 * 1. One logical component with four operations (coat, markings,
 *    mutations, oddball) plus a pure combiner; no operation depends on
 *    another's output except the combiner.
 * 2. All tables arrive through an immutable RollerConfig at construction,
 *    so tests run against small synthetic tables instead of the full
 *    production data.
 * 3. A single ChaCha8Rng owned by the roller is the only entropy source;
 *    with_seed() makes whole rolls reproducible.
 * 4. Errors are surfaced, never masked: an empty merged pool and an
 *    out-of-range pool choice both propagate to the CLI layer.
 */

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod coat;
pub mod combine;
pub mod multi;
pub mod oddball;
pub mod tables;

pub use coat::{select_coat, Selection, TIER_COUNT};
pub use combine::combine;
pub use multi::{select_multiple, MultiSelection, POOL_COUNT};
pub use oddball::select_oddball;
pub use tables::{TraitEntry, TraitTable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollerError {
    #[error("empty pool: {0}")]
    EmptyPool(String),
    #[error("invalid pool choice {0}, must be 1, 2, or 3")]
    InvalidChoice(u8),
}

pub type RollerResult<T> = Result<T, RollerError>;

/// Immutable trait tables handed to the roller at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollerConfig {
    pub coat_tiers: [TraitTable; TIER_COUNT],
    pub marking_pools: [TraitTable; POOL_COUNT],
    pub mutation_pools: [TraitTable; POOL_COUNT],
    pub oddballs: TraitTable,
    pub oddball_chance: f64,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            coat_tiers: std::array::from_fn(|_| TraitTable::default()),
            marking_pools: std::array::from_fn(|_| TraitTable::default()),
            mutation_pools: std::array::from_fn(|_| TraitTable::default()),
            oddballs: TraitTable::default(),
            oddball_chance: crate::constants::ODDBALL_CHANCE,
        }
    }
}

/// One pool pick: which of the three pools, and how many draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRequest {
    pub choice: u8,
    pub count: usize,
}

/// Already-validated parameters for one full roll. Range validation is a
/// CLI concern; the roller only rejects what it cannot compute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    pub rarity: u8,
    pub markings: Option<PoolRequest>,
    pub mutations: Option<PoolRequest>,
    pub oddball_opt_in: bool,
}

/// Everything one roll produced, including the combined display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub coat: Selection,
    pub markings: Option<MultiSelection>,
    pub mutations: Option<MultiSelection>,
    pub oddball: Option<String>,
    pub phenotype: String,
    pub genotype: String,
}

#[derive(Debug, Clone)]
pub struct TraitRoller {
    config: RollerConfig,
    rng: ChaCha8Rng,
}

impl TraitRoller {
    pub fn new(config: RollerConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic roller for reproducible runs and tests.
    pub fn with_seed(config: RollerConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &RollerConfig {
        &self.config
    }

    pub fn select_coat(&mut self, rarity: u8) -> RollerResult<Selection> {
        select_coat(&self.config.coat_tiers, rarity, &mut self.rng)
    }

    pub fn select_markings(&mut self, choice: u8, count: usize) -> RollerResult<Option<MultiSelection>> {
        select_multiple(&self.config.marking_pools, choice, count, &mut self.rng)
    }

    pub fn select_mutations(&mut self, choice: u8, count: usize) -> RollerResult<Option<MultiSelection>> {
        select_multiple(&self.config.mutation_pools, choice, count, &mut self.rng)
    }

    pub fn select_oddball(&mut self, opt_in: bool) -> Option<String> {
        select_oddball(
            &self.config.oddballs,
            opt_in,
            self.config.oddball_chance,
            &mut self.rng,
        )
    }

    /// Runs the four operations in order and combines their results.
    pub fn roll(&mut self, request: &RollRequest) -> RollerResult<RollOutcome> {
        let coat = self.select_coat(request.rarity)?;

        let markings = match request.markings {
            Some(pool) => self.select_markings(pool.choice, pool.count)?,
            None => None,
        };
        let mutations = match request.mutations {
            Some(pool) => self.select_mutations(pool.choice, pool.count)?,
            None => None,
        };
        let oddball = self.select_oddball(request.oddball_opt_in);

        let (phenotype, genotype) = combine(
            &coat,
            markings.as_ref(),
            mutations.as_ref(),
            oddball.as_deref(),
        );
        log::debug!("rolled '{}' at rarity {}", phenotype, request.rarity);

        Ok(RollOutcome {
            coat,
            markings,
            mutations,
            oddball,
            phenotype,
            genotype,
        })
    }
}
