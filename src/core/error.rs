//! Error types for battle resolution.

use crate::core::battle_state::BattleOutcome;
use thiserror::Error;

/// Result type alias using [`BattleError`].
pub type BattleResult<T> = std::result::Result<T, BattleError>;

/// Errors raised by the battle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A turn was requested after the battle reached a terminal outcome.
    #[error("The battle has ended: {outcome}")]
    BattleAlreadyEnded {
        /// Outcome the battle finished with.
        outcome: BattleOutcome,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ended_message() {
        let err = BattleError::BattleAlreadyEnded {
            outcome: BattleOutcome::Draw,
        };
        let message = err.to_string();
        assert!(message.contains("The battle has ended"));
        assert!(message.contains("Draw (3)"));
    }
}
