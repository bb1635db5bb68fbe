// Equigen library entry
// Rarity-tiered random trait roller for a horse-breeding genetics sim.
// Architecture: the roller core takes already-validated parameters and an
// immutable table config; prompting and output live in the bin.

pub mod data;
pub mod roller;

// Re-export the core types
pub use roller::{
    combine, select_coat, select_multiple, select_oddball, MultiSelection, PoolRequest,
    RollOutcome, RollRequest, RollerConfig, RollerError, RollerResult, Selection, TraitEntry,
    TraitRoller, TraitTable,
};

pub const VERSION: &str = "0.1.0";
pub const NAME: &str = "equigen";

pub mod constants {
    /// Coat rarity tiers are ranked 1 through 6, cumulative.
    pub const MIN_RARITY: u8 = 1;
    pub const MAX_RARITY: u8 = 6;

    /// Markings and mutations each draw from one of three pools.
    pub const POOL_CHOICES: [u8; 3] = [1, 2, 3];

    /// The CLI caps marking and mutation counts at three per roll.
    pub const MAX_TRAIT_COUNT: u8 = 3;

    /// Independent gate probability for the oddball abnormality roll.
    pub const ODDBALL_CHANCE: f64 = 0.10;
}
