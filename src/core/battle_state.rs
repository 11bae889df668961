use crate::character::{create_hero, create_villain, CharacterState, CharacterType};
use crate::core::randomness::RandomnessSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Battle outcome. Numeric codes are observed by external tooling and must not
/// change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BattleOutcome {
    #[default]
    InProgress = 0,
    HeroWins = 1,
    VillainWins = 2,
    Draw = 3,
}

impl BattleOutcome {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_finished(self) -> bool {
        self != BattleOutcome::InProgress
    }

    /// Outcome when `winner` knocks out the other side.
    pub fn win_for(winner: CharacterType) -> Self {
        match winner {
            CharacterType::Hero => BattleOutcome::HeroWins,
            CharacterType::Villain => BattleOutcome::VillainWins,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BattleOutcome::InProgress => "In Progress",
            BattleOutcome::HeroWins => "Hero Wins",
            BattleOutcome::VillainWins => "Villain Wins",
            BattleOutcome::Draw => "Draw",
        }
    }
}

impl TryFrom<u8> for BattleOutcome {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BattleOutcome::InProgress),
            1 => Ok(BattleOutcome::HeroWins),
            2 => Ok(BattleOutcome::VillainWins),
            3 => Ok(BattleOutcome::Draw),
            other => Err(other),
        }
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Everything a battle needs to resume between invocations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BattleState {
    pub hero: CharacterState,
    pub villain: CharacterState,
    pub hero_initial: CharacterState,
    pub villain_initial: CharacterState,
    pub turn_number: u32,
    pub outcome: BattleOutcome,
}

impl BattleState {
    /// Creates both characters (hero first) and starts at turn 0.
    pub fn new(rng: &mut impl RandomnessSource) -> Self {
        let hero = create_hero(rng);
        let villain = create_villain(rng);
        Self::from_characters(hero, villain)
    }

    pub fn from_characters(hero: CharacterState, villain: CharacterState) -> Self {
        Self {
            hero,
            villain,
            hero_initial: hero,
            villain_initial: villain,
            turn_number: 0,
            outcome: BattleOutcome::InProgress,
        }
    }

    /// Even turns belong to the hero, odd turns to the villain.
    pub fn attacker_for_turn(turn_number: u32) -> CharacterType {
        if turn_number % 2 == 0 {
            CharacterType::Hero
        } else {
            CharacterType::Villain
        }
    }

    /// Mutable (attacker, defender) pair for the given attacker.
    pub(crate) fn combatants_mut(
        &mut self,
        attacker: CharacterType,
    ) -> (&mut CharacterState, &mut CharacterState) {
        match attacker {
            CharacterType::Hero => (&mut self.hero, &mut self.villain),
            CharacterType::Villain => (&mut self.villain, &mut self.hero),
        }
    }
}
