use super::attributes::{ArchetypeRanges, AttributeType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Archetype tag. The numeric codes are observed by external tooling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharacterType {
    Hero = 0,
    Villain = 1,
}

impl CharacterType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterType::Hero => "Hero",
            CharacterType::Villain => "Villain",
        }
    }

    pub fn ranges(self) -> ArchetypeRanges {
        match self {
            CharacterType::Hero => ArchetypeRanges::HERO,
            CharacterType::Villain => ArchetypeRanges::VILLAIN,
        }
    }

    /// Whether this archetype's defence kit includes Resilience.
    pub fn has_resilience(self) -> bool {
        matches!(self, CharacterType::Hero)
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One combatant. Everything except `health` and `times_defended` is fixed at
/// creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterState {
    pub health: u32,
    pub strength: u32,
    pub defence: u32,
    pub speed: u32,
    pub luck: u32,
    pub character_type: CharacterType,
    /// Turns this character has spent defending; drives Resilience parity.
    #[serde(default)]
    pub times_defended: u32,
}

impl CharacterState {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies damage with a floor of 0 and returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        match attr {
            AttributeType::Health => self.health,
            AttributeType::Strength => self.strength,
            AttributeType::Defence => self.defence,
            AttributeType::Speed => self.speed,
            AttributeType::Luck => self.luck,
        }
    }
}

impl fmt::Display for CharacterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<7}", self.character_type.name())?;
        for attr in AttributeType::all() {
            write!(f, " {}:{:>3}", attr.abbrev(), self.get(attr))?;
        }
        Ok(())
    }
}
