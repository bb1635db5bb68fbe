// Equigen CLI entry
// Thin shell over the roller core: collect already-validated parameters
// from flags or interactive prompts, roll once, print the combined
// phenotype and genotype.

use std::io::{self, Write};

use clap::Parser;
use equigen::data;
use equigen::roller::{PoolRequest, RollRequest, TraitRoller};
use log::error;

#[derive(Debug, Parser)]
#[command(name = "equigen", version, about = "Rarity-tiered random trait roller for a horse genetics sim")]
struct Cli {
    /// Max coat rarity tier (1-6); prompts interactively when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    rarity: Option<u8>,

    /// How many markings to roll (0-3)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    markings: u8,

    /// Which marking pool to draw from (1-3)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    marking_pool: u8,

    /// How many mutations to roll (0-3)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    mutations: u8,

    /// Which mutation pool to draw from (1-3)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    mutation_pool: u8,

    /// Opt in to the 10% oddball abnormality roll
    #[arg(long)]
    oddball: bool,

    /// Seed for a reproducible roll
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the full outcome as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn to_request(&self, rarity: u8) -> RollRequest {
        let markings = (self.markings > 0).then_some(PoolRequest {
            choice: self.marking_pool,
            count: self.markings as usize,
        });
        let mutations = (self.mutations > 0).then_some(PoolRequest {
            choice: self.mutation_pool,
            count: self.mutations as usize,
        });

        RollRequest {
            rarity,
            markings,
            mutations,
            oddball_opt_in: self.oddball,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        error!("roll failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = data::stable_config();
    let mut roller = match cli.seed {
        Some(seed) => TraitRoller::with_seed(config, seed),
        None => TraitRoller::new(config),
    };

    let request = match cli.rarity {
        Some(rarity) => cli.to_request(rarity),
        None => prompt_request()?,
    };

    let outcome = roller.roll(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("Phenotype: {}", outcome.phenotype);
        println!("Genotype: {}", outcome.genotype);
    }

    Ok(())
}

/// Interactive fallback: the same prompt flow the stable's original roller
/// script used, validating each answer before the core is called.
fn prompt_request() -> io::Result<RollRequest> {
    let rarity = prompt_number(
        "Enter the max rarity for coats (1-6): ",
        1,
        6,
        "Invalid input. Please enter a number between 1 and 6.",
    )?;
    println!("Rolling up to rarity {}.", rarity);

    let num_markings = prompt_number(
        "How many markings? (0-3): ",
        0,
        3,
        "Invalid input for markings. Please enter a number between 0 and 3.",
    )?;
    let markings = if num_markings > 0 {
        let choice = prompt_number(
            "Enter marking rarity (1 = markings1, 2 = markings2, 3 = markings3): ",
            1,
            3,
            "Invalid input. Please enter 1, 2, or 3 for markings.",
        )?;
        Some(PoolRequest {
            choice,
            count: num_markings as usize,
        })
    } else {
        None
    };

    let num_mutations = prompt_number(
        "How many mutations? (0-3): ",
        0,
        3,
        "Invalid input for mutations. Please enter a number between 0 and 3.",
    )?;
    let mutations = if num_mutations > 0 {
        let choice = prompt_number(
            "Enter mutation rarity (1 = mutations1, 2 = mutations2, 3 = mutations3): ",
            1,
            3,
            "Invalid input. Please enter 1, 2, or 3 for mutations.",
        )?;
        Some(PoolRequest {
            choice,
            count: num_mutations as usize,
        })
    } else {
        None
    };

    let oddball_opt_in = prompt_yes("Get a random abnormality? (y/n): ")?;

    Ok(RollRequest {
        rarity,
        markings,
        mutations,
        oddball_opt_in,
    })
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_number(prompt: &str, min: u8, max: u8, invalid_message: &str) -> io::Result<u8> {
    let answer = prompt_line(prompt)?;
    match answer.parse::<u8>() {
        Ok(value) if value >= min && value <= max => Ok(value),
        _ => {
            println!("{}", invalid_message);
            std::process::exit(1);
        }
    }
}

fn prompt_yes(prompt: &str) -> io::Result<bool> {
    let answer = prompt_line(prompt)?;
    Ok(answer.to_lowercase().starts_with('y'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["equigen", "--rarity", "4"]).unwrap();

        assert_eq!(cli.rarity, Some(4));
        assert_eq!(cli.markings, 0);
        assert_eq!(cli.mutations, 0);
        assert!(!cli.oddball);
        assert!(!cli.json);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_cli_rejects_out_of_range_rarity() {
        assert!(Cli::try_parse_from(["equigen", "--rarity", "7"]).is_err());
        assert!(Cli::try_parse_from(["equigen", "--rarity", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_out_of_range_pool() {
        assert!(Cli::try_parse_from(["equigen", "--rarity", "2", "--marking-pool", "4"]).is_err());
        assert!(Cli::try_parse_from(["equigen", "--rarity", "2", "--mutations", "5"]).is_err());
    }

    #[test]
    fn test_request_skips_zero_count_pools() {
        let cli = Cli::try_parse_from(["equigen", "--rarity", "3", "--markings", "2"]).unwrap();
        let request = cli.to_request(3);

        assert_eq!(request.markings, Some(PoolRequest { choice: 1, count: 2 }));
        assert!(request.mutations.is_none());
        assert!(!request.oddball_opt_in);
    }

    #[test]
    fn test_request_carries_oddball_opt_in() {
        let cli = Cli::try_parse_from(["equigen", "--rarity", "6", "--oddball"]).unwrap();
        let request = cli.to_request(6);

        assert!(request.oddball_opt_in);
    }
}
