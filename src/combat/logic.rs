use super::types::{AttackSkill, DefenceSkill};
use crate::character::{CharacterState, CharacterType};
use crate::core::combat_math::*;
use crate::core::constants::STRIKE_ROLL_SIZE;
use crate::core::randomness::RandomnessSource;

const HERO_ATTACK_KIT: [AttackSkill; 3] = [
    AttackSkill::BasicStrike,
    AttackSkill::CriticalStrike,
    AttackSkill::LuckyStrike,
];
const VILLAIN_ATTACK_KIT: [AttackSkill; 1] = [AttackSkill::BasicStrike];

/// Attack skills for an archetype. Fixed per archetype, independent of turn.
pub fn attack_skills(attacker: CharacterType) -> &'static [AttackSkill] {
    match attacker {
        CharacterType::Hero => &HERO_ATTACK_KIT,
        CharacterType::Villain => &VILLAIN_ATTACK_KIT,
    }
}

/// Defence skills for a defender about to take its next hit.
///
/// Basic Defence always fires. Resilience fires for archetypes that carry it on
/// the defender's 1st, 3rd, 5th... defensive turn, never twice in a row. Parity
/// comes from the defender's own count, not the global turn number.
pub fn defence_skills(defender: &CharacterState) -> Vec<DefenceSkill> {
    let mut skills = vec![DefenceSkill::BasicDefence];
    if defender.character_type.has_resilience() && defender.times_defended % 2 == 0 {
        skills.push(DefenceSkill::Resilience);
    }
    skills
}

/// Attacker side of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackResolution {
    pub skills: Vec<AttackSkill>,
    /// Sum of all strike terms, before defence.
    pub raw_total: u32,
}

/// Defender side of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefenceResolution {
    pub skills: Vec<DefenceSkill>,
    pub effective_defence: u32,
}

/// Both sides of a turn plus the damage that lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub attack: AttackResolution,
    pub defence: DefenceResolution,
    pub damage: u32,
}

/// Draws one term per active attack skill and sums them.
pub fn resolve_attack(
    attacker: &CharacterState,
    rng: &mut impl RandomnessSource,
) -> AttackResolution {
    let skills = attack_skills(attacker.character_type).to_vec();
    let raw_total = skills
        .iter()
        .map(|skill| strike_term(*skill, attacker, rng))
        .sum();
    AttackResolution { skills, raw_total }
}

fn strike_term(
    skill: AttackSkill,
    attacker: &CharacterState,
    rng: &mut impl RandomnessSource,
) -> u32 {
    match skill {
        AttackSkill::BasicStrike => basic_strike(attacker.strength, rng.next(STRIKE_ROLL_SIZE)),
        AttackSkill::CriticalStrike => {
            critical_strike(attacker.strength, attacker.luck, rng.next(STRIKE_ROLL_SIZE))
        }
        AttackSkill::LuckyStrike => lucky_strike(attacker.strength, rng.next(attacker.luck + 1)),
    }
}

pub fn resolve_defence(defender: &CharacterState) -> DefenceResolution {
    let skills = defence_skills(defender);
    let resilience = skills.contains(&DefenceSkill::Resilience);
    DefenceResolution {
        effective_defence: effective_defence(defender.defence, resilience),
        skills,
    }
}

/// Resolves one attacker/defender exchange without mutating either side.
///
/// `damage = max(0, raw_total - effective_defence)`.
pub fn resolve_exchange(
    attacker: &CharacterState,
    defender: &CharacterState,
    rng: &mut impl RandomnessSource,
) -> Exchange {
    let attack = resolve_attack(attacker, rng);
    let defence = resolve_defence(defender);
    let damage = calculate_damage_taken(attack.raw_total, defence.effective_defence);
    Exchange {
        attack,
        defence,
        damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{create_hero, create_villain};
    use crate::core::constants::{MAX_HERO_DAMAGE_PER_TURN, MAX_VILLAIN_DAMAGE_PER_TURN};
    use crate::core::randomness::{FixedZeroRandomness, LiveRandomness};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Returns the same value every draw, clamped into range.
    struct ConstantSource(u32);

    impl RandomnessSource for ConstantSource {
        fn next(&mut self, max_exclusive: u32) -> u32 {
            self.0.min(max_exclusive.saturating_sub(1))
        }
    }

    fn make_character(
        character_type: CharacterType,
        strength: u32,
        defence: u32,
        luck: u32,
    ) -> CharacterState {
        CharacterState {
            health: 80,
            strength,
            defence,
            speed: 45,
            luck,
            character_type,
            times_defended: 0,
        }
    }

    #[test]
    fn test_attack_kits() {
        assert_eq!(
            attack_skills(CharacterType::Hero),
            &[
                AttackSkill::BasicStrike,
                AttackSkill::CriticalStrike,
                AttackSkill::LuckyStrike
            ]
        );
        assert_eq!(attack_skills(CharacterType::Villain), &[AttackSkill::BasicStrike]);
    }

    #[test]
    fn test_resilience_alternates_for_hero() {
        let mut hero = make_character(CharacterType::Hero, 75, 50, 20);
        let mut seen = Vec::new();
        for _ in 0..6 {
            let codes: Vec<u8> = defence_skills(&hero).iter().map(|s| s.code()).collect();
            seen.push(codes);
            hero.times_defended += 1;
        }
        assert_eq!(
            seen,
            vec![vec![0, 1], vec![0], vec![0, 1], vec![0], vec![0, 1], vec![0]]
        );
    }

    #[test]
    fn test_villain_never_uses_resilience() {
        let mut villain = make_character(CharacterType::Villain, 75, 50, 30);
        for _ in 0..6 {
            assert_eq!(defence_skills(&villain), vec![DefenceSkill::BasicDefence]);
            villain.times_defended += 1;
        }
    }

    #[test]
    fn test_zero_source_gives_zero_damage() {
        let mut rng = FixedZeroRandomness;
        let hero = create_hero(&mut rng);
        let villain = create_villain(&mut rng);

        let hero_hit = resolve_exchange(&hero, &villain, &mut rng);
        assert_eq!(hero_hit.attack.raw_total, 0);
        assert_eq!(hero_hit.damage, 0);

        let villain_hit = resolve_exchange(&villain, &hero, &mut rng);
        assert_eq!(villain_hit.damage, 0);
    }

    #[test]
    fn test_constant_rolls_hero_damage() {
        // roll 50: basic 80*50/100 = 40, crit 80*50*25/10000 = 10, lucky 80*25/100 = 20
        let hero = make_character(CharacterType::Hero, 80, 50, 25);
        let villain = make_character(CharacterType::Villain, 60, 40, 30);
        let exchange = resolve_exchange(&hero, &villain, &mut ConstantSource(50));
        assert_eq!(exchange.attack.raw_total, 70);
        assert_eq!(exchange.defence.effective_defence, 40);
        assert_eq!(exchange.damage, 30);
    }

    #[test]
    fn test_resilience_raises_defence() {
        let villain = make_character(CharacterType::Villain, 90, 40, 30);
        let hero = make_character(CharacterType::Hero, 75, 46, 20);
        // villain basic: 90*99/100 = 89; hero defence 46 + 23 = 69
        let exchange = resolve_exchange(&villain, &hero, &mut ConstantSource(99));
        assert_eq!(
            exchange.defence.skills,
            vec![DefenceSkill::BasicDefence, DefenceSkill::Resilience]
        );
        assert_eq!(exchange.defence.effective_defence, 69);
        assert_eq!(exchange.damage, 20);
    }

    #[test]
    fn test_seeded_damage_bounds() {
        let mut rng = LiveRandomness::from_rng(ChaCha8Rng::seed_from_u64(42));
        for _ in 0..2000 {
            let hero = create_hero(&mut rng);
            let villain = create_villain(&mut rng);
            let hero_hit = resolve_exchange(&hero, &villain, &mut rng);
            assert!(hero_hit.damage <= MAX_HERO_DAMAGE_PER_TURN);
            let villain_hit = resolve_exchange(&villain, &hero, &mut rng);
            assert!(villain_hit.damage <= MAX_VILLAIN_DAMAGE_PER_TURN);
        }
    }
}
