/*
 * Equigen - Production Data
 * Static trait definitions for the stable: six coat tiers, three marking
 * pools, three mutation pools, and the oddball set. Built once at startup
 * and handed to the roller as an immutable config.
 */

use crate::constants::ODDBALL_CHANCE;
use crate::roller::RollerConfig;

pub mod coats;
pub mod markings;
pub mod mutations;
pub mod oddballs;

/// Assembles the full production configuration.
pub fn stable_config() -> RollerConfig {
    RollerConfig {
        coat_tiers: [
            coats::common(),
            coats::uncommon(),
            coats::rare(),
            coats::extra(),
            coats::pedigree(),
            coats::design(),
        ],
        marking_pools: [markings::pool_one(), markings::pool_two(), markings::pool_three()],
        mutation_pools: [mutations::pool_one(), mutations::pool_two(), mutations::pool_three()],
        oddballs: oddballs::all(),
        oddball_chance: ODDBALL_CHANCE,
    }
}
