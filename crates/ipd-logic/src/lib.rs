//! Core game logic for Iterated Prisoner's Dilemma matches
//!
//! Two strategies play a fixed number of rounds; each round's move pair
//! is scored via a payoff matrix and the cumulative totals decide the
//! winner. Randomness is injected through a seeded generator so every
//! match is reproducible.

mod error;
mod game;
mod payoff;
mod random;
mod strategy;

pub use error::MatchError;
pub use game::{
    run_match, run_named_match, MatchConfig, MatchResult, RoundResult, Winner, DEFAULT_ROUNDS,
};
pub use payoff::{score_histories, PayoffMatrix};
pub use random::SeededRng;
pub use strategy::{execute_strategy, Move, Strategy};
