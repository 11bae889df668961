//! Turn-by-turn battle resolution.
//!
//! [`BattleEngine`] owns the [`BattleState`] and the randomness source. The only
//! way to change the state is [`BattleEngine::resolve_turn`], which runs one
//! attacker/defender exchange to completion:
//!
//! 1. Reject the call if the battle already has a terminal outcome.
//! 2. Pick the attacker from turn parity (hero on even turns).
//! 3. Resolve skills and damage, apply damage to the defender only.
//! 4. Build the [`TurnRecord`] and advance the turn counter.
//! 5. Settle the outcome: knockout, or a draw at the turn limit.

use super::battle_state::{BattleOutcome, BattleState};
use super::constants::TURN_LIMIT;
use super::error::{BattleError, BattleResult};
use super::randomness::{LiveRandomness, RandomnessSource};
use crate::character::{CharacterState, CharacterType};
use crate::combat::{resolve_exchange, TurnRecord};
use tracing::{debug, info, warn};

/// Owns one battle and the randomness that drives it.
///
/// Independent battles need independent engines; nothing is shared between
/// instances.
#[derive(Debug, Clone)]
pub struct BattleEngine<R: RandomnessSource> {
    state: BattleState,
    rng: R,
}

impl BattleEngine<LiveRandomness> {
    /// Fresh battle driven by the thread-local generator.
    pub fn new_live() -> Self {
        Self::new(LiveRandomness::new())
    }
}

impl<R: RandomnessSource> BattleEngine<R> {
    /// Create a fresh battle: hero and villain are sampled from `rng`,
    /// turn 0, outcome in progress.
    pub fn new(mut rng: R) -> Self {
        let state = BattleState::new(&mut rng);
        Self { state, rng }
    }

    /// Resume a battle from a persisted state.
    pub fn from_state(state: BattleState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn into_state(self) -> BattleState {
        self.state
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.state.outcome
    }

    pub fn turn_number(&self) -> u32 {
        self.state.turn_number
    }

    pub fn is_finished(&self) -> bool {
        self.state.outcome.is_finished()
    }

    /// Hero as created, before any damage.
    pub fn hero_initial_state(&self) -> &CharacterState {
        &self.state.hero_initial
    }

    /// Villain as created, before any damage.
    pub fn villain_initial_state(&self) -> &CharacterState {
        &self.state.villain_initial
    }

    pub fn hero(&self) -> &CharacterState {
        &self.state.hero
    }

    pub fn villain(&self) -> &CharacterState {
        &self.state.villain
    }

    /// Resolve one turn.
    ///
    /// # Errors
    /// [`BattleError::BattleAlreadyEnded`] once the outcome is terminal. The
    /// state is left untouched in that case.
    pub fn resolve_turn(&mut self) -> BattleResult<TurnRecord> {
        if self.state.outcome.is_finished() {
            warn!(
                turn = self.state.turn_number,
                outcome = self.state.outcome.code(),
                "Turn rejected, battle has ended"
            );
            return Err(BattleError::BattleAlreadyEnded {
                outcome: self.state.outcome,
            });
        }

        let turn_number = self.state.turn_number;
        let attacker_type = BattleState::attacker_for_turn(turn_number);
        let (attacker, defender) = self.state.combatants_mut(attacker_type);

        let exchange = resolve_exchange(attacker, defender, &mut self.rng);
        let defender_health_after = defender.take_damage(exchange.damage);
        defender.times_defended += 1;
        let attacker_health_after = attacker.health;
        let defender_down = !defender.is_alive();

        self.state.turn_number += 1;
        let outcome = if defender_down {
            BattleOutcome::win_for(attacker_type)
        } else if self.state.turn_number >= TURN_LIMIT {
            BattleOutcome::Draw
        } else {
            BattleOutcome::InProgress
        };
        self.state.outcome = outcome;

        debug!(
            turn = turn_number,
            attacker = attacker_type.name(),
            damage = exchange.damage,
            raw = exchange.attack.raw_total,
            defence = exchange.defence.effective_defence,
            attacker_health = attacker_health_after,
            defender_health = defender_health_after,
            "Turn resolved"
        );
        if outcome.is_finished() {
            info!(
                turns = self.state.turn_number,
                outcome = outcome.name(),
                hero_health = self.state.hero.health,
                villain_health = self.state.villain.health,
                "Battle finished"
            );
        }

        Ok(TurnRecord {
            turn_number,
            hero_attacked: attacker_type == CharacterType::Hero,
            damage: exchange.damage,
            attacker_health_after,
            defender_health_after,
            attacker_skills_used: exchange.attack.skills,
            defender_skills_used: exchange.defence.skills,
            outcome_after: outcome,
        })
    }

    /// Resolve turns until the battle ends, returning every record.
    ///
    /// # Errors
    /// [`BattleError::BattleAlreadyEnded`] if the battle was already over.
    pub fn run_to_completion(&mut self) -> BattleResult<Vec<TurnRecord>> {
        let mut records = vec![self.resolve_turn()?];
        while !self.is_finished() {
            records.push(self.resolve_turn()?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::randomness::FixedZeroRandomness;

    fn make_character(
        character_type: CharacterType,
        health: u32,
        strength: u32,
    ) -> CharacterState {
        CharacterState {
            health,
            strength,
            defence: 40,
            speed: 45,
            luck: 25,
            character_type,
            times_defended: 0,
        }
    }

    /// Every draw returns the top of its range.
    struct MaxSource;

    impl RandomnessSource for MaxSource {
        fn next(&mut self, max_exclusive: u32) -> u32 {
            max_exclusive.saturating_sub(1)
        }
    }

    #[test]
    fn test_new_engine_starts_in_progress() {
        let engine = BattleEngine::new(FixedZeroRandomness);
        assert_eq!(engine.outcome(), BattleOutcome::InProgress);
        assert_eq!(engine.turn_number(), 0);
        assert!(!engine.is_finished());
    }

    #[test]
    fn test_first_turn_is_hero() {
        let mut engine = BattleEngine::new(FixedZeroRandomness);
        let record = engine.resolve_turn().unwrap();
        assert_eq!(record.turn_number, 0);
        assert!(record.hero_attacked);
        assert_eq!(engine.turn_number(), 1);
    }

    #[test]
    fn test_defender_times_defended_advances() {
        let mut engine = BattleEngine::new(FixedZeroRandomness);
        engine.resolve_turn().unwrap();
        assert_eq!(engine.villain().times_defended, 1);
        assert_eq!(engine.hero().times_defended, 0);
        engine.resolve_turn().unwrap();
        assert_eq!(engine.hero().times_defended, 1);
    }

    #[test]
    fn test_knockout_gives_hero_win() {
        let hero = make_character(CharacterType::Hero, 100, 80);
        let villain = make_character(CharacterType::Villain, 5, 60);
        let state = BattleState::from_characters(hero, villain);
        let mut engine = BattleEngine::from_state(state, MaxSource);

        let record = engine.resolve_turn().unwrap();
        assert!(record.hero_attacked);
        assert_eq!(record.defender_health_after, 0);
        assert_eq!(record.outcome_after, BattleOutcome::HeroWins);
        assert_eq!(engine.outcome(), BattleOutcome::HeroWins);
        assert_eq!(engine.turn_number(), 1);
    }

    #[test]
    fn test_knockout_gives_villain_win() {
        let hero = make_character(CharacterType::Hero, 1, 70);
        let villain = make_character(CharacterType::Villain, 90, 90);
        let mut state = BattleState::from_characters(hero, villain);
        state.turn_number = 1;
        // Second hero defence: no Resilience
        state.hero.times_defended = 1;
        let mut engine = BattleEngine::from_state(state, MaxSource);

        let record = engine.resolve_turn().unwrap();
        assert!(!record.hero_attacked);
        assert_eq!(record.defender_health_after, 0);
        assert_eq!(engine.outcome(), BattleOutcome::VillainWins);
    }

    #[test]
    fn test_ended_battle_rejects_turn_and_keeps_state() {
        let mut engine = BattleEngine::new(FixedZeroRandomness);
        engine.run_to_completion().unwrap();
        let before = engine.state().clone();

        let err = engine.resolve_turn().unwrap_err();
        assert_eq!(
            err,
            BattleError::BattleAlreadyEnded {
                outcome: BattleOutcome::Draw
            }
        );
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_run_to_completion_on_ended_battle_fails() {
        let mut engine = BattleEngine::new(FixedZeroRandomness);
        engine.run_to_completion().unwrap();
        assert!(engine.run_to_completion().is_err());
    }

    #[test]
    fn test_live_engine_alternates() {
        let mut engine = BattleEngine::new_live();
        let first = engine.resolve_turn().unwrap();
        if let Ok(second) = engine.resolve_turn() {
            assert_ne!(first.hero_attacked, second.hero_attacked);
        }
    }
}
