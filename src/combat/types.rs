use crate::core::battle_state::BattleOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Skills an attacker can invoke. Discriminants are the wire identifiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AttackSkill {
    BasicStrike = 0,
    CriticalStrike = 1,
    LuckyStrike = 2,
}

impl AttackSkill {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            AttackSkill::BasicStrike => "Basic Strike",
            AttackSkill::CriticalStrike => "Critical Strike",
            AttackSkill::LuckyStrike => "Lucky Strike",
        }
    }
}

/// Skills a defender can invoke. Discriminants are the wire identifiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DefenceSkill {
    BasicDefence = 0,
    Resilience = 1,
}

impl DefenceSkill {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            DefenceSkill::BasicDefence => "Basic Defence",
            DefenceSkill::Resilience => "Resilience",
        }
    }
}

/// Snapshot of one resolved turn. Built fresh each turn and handed to the
/// caller; the engine keeps nothing of it beyond health and turn counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn_number: u32,
    pub hero_attacked: bool,
    pub damage: u32,
    pub attacker_health_after: u32,
    pub defender_health_after: u32,
    pub attacker_skills_used: Vec<AttackSkill>,
    pub defender_skills_used: Vec<DefenceSkill>,
    /// Battle outcome once this turn was evaluated.
    pub outcome_after: BattleOutcome,
}

impl TurnRecord {
    pub fn attacker_skill_codes(&self) -> Vec<u8> {
        self.attacker_skills_used.iter().map(|s| s.code()).collect()
    }

    pub fn defender_skill_codes(&self) -> Vec<u8> {
        self.defender_skills_used.iter().map(|s| s.code()).collect()
    }

    /// (hero health, villain health) after this turn.
    pub fn healths_after(&self) -> (u32, u32) {
        if self.hero_attacked {
            (self.attacker_health_after, self.defender_health_after)
        } else {
            (self.defender_health_after, self.attacker_health_after)
        }
    }
}

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (attacker, defender) = if self.hero_attacked {
            ("Hero", "Villain")
        } else {
            ("Villain", "Hero")
        };
        let attack: Vec<&str> = self.attacker_skills_used.iter().map(|s| s.name()).collect();
        let defence: Vec<&str> = self.defender_skills_used.iter().map(|s| s.name()).collect();
        write!(
            f,
            "Turn {:>2}: {} hits {} for {} [{}] vs [{}] | {} HP {}, {} HP {}",
            self.turn_number,
            attacker,
            defender,
            self.damage,
            attack.join(", "),
            defence.join(", "),
            attacker,
            self.attacker_health_after,
            defender,
            self.defender_health_after
        )
    }
}
