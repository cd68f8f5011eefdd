//! Console driver for Iterated Prisoner's Dilemma matches

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use ipd_logic::{
    run_named_match, MatchConfig, MatchResult, SeededRng, Strategy, Winner, DEFAULT_ROUNDS,
};

/// The original demonstration pairings: four deterministic matchups plus
/// three stochastic ones repeated for a spread of outcomes.
const DEMO_CARD: [(&str, &str, u32); 7] = [
    ("Always Cooperate", "Tit For Tat", 1),
    ("Always Defect", "Tit For Tat", 1),
    ("Always Defect", "Suspicious Tit For Tat", 1),
    ("Reverse Tit for Tat", "Suspicious Tit For Tat", 1),
    ("Always Cooperate", "Random", 10),
    ("Tit For Tat", "Random", 10),
    ("Suspicious Tit For Tat", "Naive Prober", 10),
];

#[derive(Parser)]
#[command(name = "ipd")]
#[command(about = "Iterated Prisoner's Dilemma match runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a matchup between two named strategies
    Run {
        /// Player A's strategy name, e.g. "Tit For Tat"
        player_a: String,
        /// Player B's strategy name
        player_b: String,

        /// Rounds per match
        #[arg(long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,

        /// Seed for the stochastic strategies (clock-derived when unset)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of matches to run
        #[arg(long, default_value_t = 1)]
        repeat: u32,

        /// Emit the full round-by-round result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the registered strategy names
    List,

    /// Run the classic demonstration matchup card
    Demo {
        /// Seed for the stochastic strategies (clock-derived when unset)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Run { player_a, player_b, rounds, seed, repeat, json } => {
            run_matches(&player_a, &player_b, rounds, seed, repeat, json)
        }
        Commands::List => {
            for strategy in Strategy::ALL {
                println!("{}", strategy.name());
            }
            Ok(())
        }
        Commands::Demo { seed } => run_demo(seed),
    }
}

fn run_matches(
    player_a: &str,
    player_b: &str,
    rounds: usize,
    seed: Option<u64>,
    repeat: u32,
    json: bool,
) -> Result<()> {
    let seed = seed.unwrap_or_else(clock_seed);
    debug!(seed, rounds, repeat, "running matchup");

    let config = MatchConfig { rounds, ..Default::default() };
    let mut rng = SeededRng::new(seed);

    for _ in 0..repeat {
        let result = run_named_match(player_a, player_b, &config, &mut rng)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            report(player_a, player_b, &result);
        }
    }

    Ok(())
}

fn run_demo(seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(clock_seed);
    debug!(seed, "running demo card");

    let config = MatchConfig::default();
    let mut rng = SeededRng::new(seed);

    for (player_a, player_b, repeat) in DEMO_CARD {
        for _ in 0..repeat {
            let result = run_named_match(player_a, player_b, &config, &mut rng)?;
            report(player_a, player_b, &result);
        }
    }

    Ok(())
}

/// Print the winner declaration for one finished match
fn report(name_a: &str, name_b: &str, result: &MatchResult) {
    match result.winner {
        Winner::PlayerA => println!(
            "The winning strategy is {} (player A), {} to {}",
            name_a, result.total_score_a, result.total_score_b
        ),
        Winner::PlayerB => println!(
            "The winning strategy is {} (player B), {} to {}",
            name_b, result.total_score_b, result.total_score_a
        ),
        Winner::Draw => println!(
            "Draw game, both strategies scored {}",
            result.total_score_a
        ),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9e3779b97f4a7c15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_card_names_resolve() {
        for (player_a, player_b, _) in DEMO_CARD {
            assert!(Strategy::from_name(player_a).is_ok(), "bad name {:?}", player_a);
            assert!(Strategy::from_name(player_b).is_ok(), "bad name {:?}", player_b);
        }
    }

    #[test]
    fn cli_parses_run_args() {
        let cli = Cli::parse_from([
            "ipd", "run", "Tit For Tat", "Always Defect", "--rounds", "10", "--seed", "7",
        ]);
        match cli.cmd {
            Commands::Run { player_a, player_b, rounds, seed, repeat, json } => {
                assert_eq!(player_a, "Tit For Tat");
                assert_eq!(player_b, "Always Defect");
                assert_eq!(rounds, 10);
                assert_eq!(seed, Some(7));
                assert_eq!(repeat, 1);
                assert!(!json);
            }
            _ => panic!("expected run subcommand"),
        }
    }
}
