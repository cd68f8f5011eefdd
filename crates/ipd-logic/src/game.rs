//! Match execution engine

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::payoff::PayoffMatrix;
use crate::random::SeededRng;
use crate::strategy::{execute_strategy, Move, Strategy};

/// Default number of rounds per match
pub const DEFAULT_ROUNDS: usize = 50;

/// Configuration for one match
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub rounds: usize,
    pub payoffs: PayoffMatrix,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            payoffs: PayoffMatrix::default(),
        }
    }
}

/// Outcome of a match by cumulative score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    PlayerA,
    PlayerB,
    Draw,
}

impl Winner {
    /// Strictly greater cumulative score wins; equal scores draw
    fn from_scores(score_a: u32, score_b: u32) -> Winner {
        if score_a > score_b {
            Winner::PlayerA
        } else if score_b > score_a {
            Winner::PlayerB
        } else {
            Winner::Draw
        }
    }
}

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: usize,
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: u32,
    pub score_b: u32,
    pub cumulative_a: u32,
    pub cumulative_b: u32,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub rounds: Vec<RoundResult>,
    pub total_score_a: u32,
    pub total_score_b: u32,
    pub round_count: usize,
    pub winner: Winner,
}

/// Run a complete match between two strategies
///
/// Each round both strategies are evaluated against the state prior to
/// the round, then the move pair is scored and appended. History buffers
/// are freshly allocated per match; nothing carries over between calls.
///
/// # Arguments
/// * `strategy_a` - First player's strategy
/// * `strategy_b` - Second player's strategy
/// * `config` - Round count and payoff matrix
/// * `rng` - Seeded random source for the stochastic strategies
pub fn run_match(
    strategy_a: Strategy,
    strategy_b: Strategy,
    config: &MatchConfig,
    rng: &mut SeededRng,
) -> MatchResult {
    let mut history_a: Vec<Move> = Vec::with_capacity(config.rounds);
    let mut history_b: Vec<Move> = Vec::with_capacity(config.rounds);
    let mut rounds: Vec<RoundResult> = Vec::with_capacity(config.rounds);
    let mut total_a = 0u32;
    let mut total_b = 0u32;

    for round in 0..config.rounds {
        let move_a = execute_strategy(strategy_a, &history_a, &history_b, round, rng);
        let move_b = execute_strategy(strategy_b, &history_b, &history_a, round, rng);

        let (score_a, score_b) = config.payoffs.lookup(move_a, move_b);
        total_a += score_a;
        total_b += score_b;

        rounds.push(RoundResult {
            round,
            move_a,
            move_b,
            score_a,
            score_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });

        history_a.push(move_a);
        history_b.push(move_b);
    }

    MatchResult {
        rounds,
        total_score_a: total_a,
        total_score_b: total_b,
        round_count: config.rounds,
        winner: Winner::from_scores(total_a, total_b),
    }
}

/// Resolve two strategy names against the registry and run a match
///
/// An unrecognized name fails fast with `UnknownStrategy`.
pub fn run_named_match(
    name_a: &str,
    name_b: &str,
    config: &MatchConfig,
    rng: &mut SeededRng,
) -> Result<MatchResult, MatchError> {
    let strategy_a = Strategy::from_name(name_a)?;
    let strategy_b = Strategy::from_name(name_b)?;
    Ok(run_match(strategy_a, strategy_b, config, rng))
}
