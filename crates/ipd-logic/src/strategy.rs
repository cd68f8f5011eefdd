//! Strategy definitions and execution

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::random::SeededRng;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    /// The other move
    pub fn opposite(self) -> Move {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }
}

/// Probability that Naive Prober defects instead of mimicking.
///
/// The window is half-open: a unit draw of exactly 0.0 mimics.
const PROBE_CHANCE: f64 = 0.001;

/// Decision rule for one player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Always cooperate, never defect.
    AlwaysCooperate,
    /// Always defect, never cooperate.
    AlwaysDefect,
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Tit-for-Tat but start with defect.
    SuspiciousTitForTat,
    /// Play the opposite of opponent's last move. Start with defect.
    ReverseTitForTat,
    /// Fair coin flip each round.
    Random,
    /// Tit-for-Tat with a 0.1% chance to probe with a defection.
    NaiveProber,
}

impl Strategy {
    /// Every registered strategy, in registry order
    pub const ALL: [Strategy; 7] = [
        Strategy::AlwaysCooperate,
        Strategy::AlwaysDefect,
        Strategy::TitForTat,
        Strategy::SuspiciousTitForTat,
        Strategy::ReverseTitForTat,
        Strategy::Random,
        Strategy::NaiveProber,
    ];

    /// Canonical display name used for registry lookup
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::AlwaysCooperate => "Always Cooperate",
            Strategy::AlwaysDefect => "Always Defect",
            Strategy::TitForTat => "Tit For Tat",
            Strategy::SuspiciousTitForTat => "Suspicious Tit For Tat",
            Strategy::ReverseTitForTat => "Reverse Tit for Tat",
            Strategy::Random => "Random",
            Strategy::NaiveProber => "Naive Prober",
        }
    }

    /// Resolve a canonical name to a strategy
    ///
    /// Lookup is exact and case-sensitive. An unrecognized name is a
    /// configuration error, never a silent default.
    pub fn from_name(name: &str) -> Result<Strategy, MatchError> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|s| s.name() == name)
            .ok_or_else(|| MatchError::UnknownStrategy(name.to_string()))
    }
}

impl FromStr for Strategy {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::from_name(s)
    }
}

/// Execute a strategy for one round
///
/// # Arguments
/// * `strategy` - The strategy to execute
/// * `my_history` - Our past moves (rounds 0..round)
/// * `opponent_history` - Opponent's past moves (rounds 0..round)
/// * `round` - Current round number (0-indexed)
/// * `rng` - Random number generator for this match
pub fn execute_strategy(
    strategy: Strategy,
    my_history: &[Move],
    opponent_history: &[Move],
    round: usize,
    rng: &mut SeededRng,
) -> Move {
    // Only moves from rounds before this one are defined
    debug_assert_eq!(my_history.len(), round);
    debug_assert_eq!(opponent_history.len(), round);

    match strategy {
        Strategy::AlwaysCooperate => Move::Cooperate,
        Strategy::AlwaysDefect => Move::Defect,
        Strategy::TitForTat => execute_tit_for_tat(opponent_history),
        Strategy::SuspiciousTitForTat => execute_suspicious_tit_for_tat(opponent_history),
        Strategy::ReverseTitForTat => execute_reverse_tit_for_tat(opponent_history),
        Strategy::Random => execute_random(rng),
        Strategy::NaiveProber => execute_naive_prober(opponent_history, rng),
    }
}

/// Tit-for-Tat: copy opponent's last move, start with cooperate
fn execute_tit_for_tat(opponent_history: &[Move]) -> Move {
    match opponent_history.last() {
        None => Move::Cooperate,
        Some(last) => *last,
    }
}

/// Suspicious Tit-for-Tat: TFT but start with defect
fn execute_suspicious_tit_for_tat(opponent_history: &[Move]) -> Move {
    match opponent_history.last() {
        None => Move::Defect,
        Some(last) => *last,
    }
}

/// Reverse Tit-for-Tat: start with defect, then invert opponent's last move
fn execute_reverse_tit_for_tat(opponent_history: &[Move]) -> Move {
    match opponent_history.last() {
        None => Move::Defect,
        Some(last) => last.opposite(),
    }
}

/// Random: fair coin flip
fn execute_random(rng: &mut SeededRng) -> Move {
    if rng.next_bool() {
        Move::Cooperate
    } else {
        Move::Defect
    }
}

/// Naive Prober: TFT that occasionally probes with a defection
fn execute_naive_prober(opponent_history: &[Move], rng: &mut SeededRng) -> Move {
    match opponent_history.last() {
        None => Move::Cooperate,
        Some(last) => probe_or_mimic(*last, rng.next_unit()),
    }
}

/// The prober's per-round decision given the opponent's last move and a
/// unit draw. Defects iff the draw lands strictly inside (0, PROBE_CHANCE);
/// a draw of exactly 0.0 mimics.
fn probe_or_mimic(last: Move, draw: f64) -> Move {
    if draw > 0.0 && draw < PROBE_CHANCE {
        Move::Defect
    } else {
        last
    }
}
