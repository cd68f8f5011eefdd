//! Error types for match configuration and scoring

use core::fmt;

/// Errors surfaced by match setup and scoring.
///
/// Every error is synchronous and final: a match is an independent pure
/// computation, so there is nothing to retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// A strategy name did not resolve against the registry.
    UnknownStrategy(String),
    /// Two histories handed to the payoff calculator differ in length.
    HistoryLengthMismatch { left: usize, right: usize },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::UnknownStrategy(name) => {
                write!(f, "unknown strategy name: {:?}", name)
            }
            MatchError::HistoryLengthMismatch { left, right } => {
                write!(f, "history length mismatch: {} vs {}", left, right)
            }
        }
    }
}

impl std::error::Error for MatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MatchError::UnknownStrategy("Pavlov".to_string());
        assert_eq!(err.to_string(), "unknown strategy name: \"Pavlov\"");

        let err = MatchError::HistoryLengthMismatch { left: 50, right: 49 };
        assert_eq!(err.to_string(), "history length mismatch: 50 vs 49");
    }
}
