//! Duel - Hero vs. Villain Battle Library
//!
//! A deterministic-when-seeded battle kernel: two characters are sampled from
//! archetype ranges, then exchange blows one turn at a time until one falls or
//! the turn limit forces a draw.

pub mod character;
pub mod combat;
pub mod core;
pub mod save_manager;
pub mod simulator;

pub use crate::character::{CharacterState, CharacterType};
pub use crate::combat::{AttackSkill, DefenceSkill, TurnRecord};
pub use crate::core::{
    BattleEngine, BattleError, BattleOutcome, BattleResult, BattleState, FixedZeroRandomness,
    LiveRandomness, RandomnessSource, TURN_LIMIT,
};
pub use crate::save_manager::{BattleSaveManager, SaveError};
