//! Payoff matrix and score accumulation

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::strategy::Move;

/// Payoff matrix for the Prisoner's Dilemma
///
/// Stored as the four classic scalars, so the full (move, move) table is
/// symmetric under player swap by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    /// Both cooperate
    pub reward: u32,
    /// Defect against a cooperator
    pub temptation: u32,
    /// Cooperate against a defector
    pub sucker: u32,
    /// Both defect
    pub punishment: u32,
}

impl PayoffMatrix {
    /// Score one round, returning (score_a, score_b)
    ///
    /// Defined for every one of the four move pairs.
    pub fn lookup(&self, a: Move, b: Move) -> (u32, u32) {
        match (a, b) {
            (Move::Cooperate, Move::Cooperate) => (self.reward, self.reward),
            (Move::Cooperate, Move::Defect) => (self.sucker, self.temptation),
            (Move::Defect, Move::Cooperate) => (self.temptation, self.sucker),
            (Move::Defect, Move::Defect) => (self.punishment, self.punishment),
        }
    }
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self {
            reward: 3,
            temptation: 5,
            sucker: 0,
            punishment: 1,
        }
    }
}

/// Accumulate both players' scores over two equal-length histories
///
/// Plain sum over rounds: no normalization, no discounting. Histories of
/// different lengths are an invariant violation and fail fast.
pub fn score_histories(
    history_a: &[Move],
    history_b: &[Move],
    payoffs: &PayoffMatrix,
) -> Result<(u32, u32), MatchError> {
    if history_a.len() != history_b.len() {
        return Err(MatchError::HistoryLengthMismatch {
            left: history_a.len(),
            right: history_b.len(),
        });
    }

    let mut total_a = 0u32;
    let mut total_b = 0u32;
    for (a, b) in history_a.iter().zip(history_b.iter()) {
        let (score_a, score_b) = payoffs.lookup(*a, *b);
        total_a += score_a;
        total_b += score_b;
    }

    Ok((total_a, total_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matrix_values() {
        let m = PayoffMatrix::default();
        assert_eq!(m.lookup(Move::Cooperate, Move::Cooperate), (3, 3));
        assert_eq!(m.lookup(Move::Cooperate, Move::Defect), (0, 5));
        assert_eq!(m.lookup(Move::Defect, Move::Cooperate), (5, 0));
        assert_eq!(m.lookup(Move::Defect, Move::Defect), (1, 1));
    }

    #[test]
    fn test_matrix_symmetric_under_swap() {
        let m = PayoffMatrix::default();
        for a in [Move::Cooperate, Move::Defect] {
            for b in [Move::Cooperate, Move::Defect] {
                let (sa, sb) = m.lookup(a, b);
                let (sb2, sa2) = m.lookup(b, a);
                assert_eq!((sa, sb), (sa2, sb2));
            }
        }
    }

    #[test]
    fn test_score_histories_sums_rounds() {
        let m = PayoffMatrix::default();
        let a = [Move::Cooperate, Move::Cooperate, Move::Defect];
        let b = [Move::Cooperate, Move::Defect, Move::Defect];

        // (3,3) + (0,5) + (1,1)
        assert_eq!(score_histories(&a, &b, &m).unwrap(), (4, 9));
    }

    #[test]
    fn test_score_empty_histories() {
        let m = PayoffMatrix::default();
        assert_eq!(score_histories(&[], &[], &m).unwrap(), (0, 0));
    }

    #[test]
    fn test_score_length_mismatch() {
        let m = PayoffMatrix::default();
        let a = [Move::Cooperate, Move::Cooperate];
        let b = [Move::Cooperate];

        let err = score_histories(&a, &b, &m).unwrap_err();
        assert_eq!(err, MatchError::HistoryLengthMismatch { left: 2, right: 1 });
    }
}
