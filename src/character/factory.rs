//! Character creation by sampling archetype ranges.

use super::attributes::{AttributeType, NUM_ATTRIBUTES};
use super::state::{CharacterState, CharacterType};
use crate::core::randomness::RandomnessSource;

/// Creates a character of the given archetype.
///
/// Draws one value per attribute in [`AttributeType::all`] order. Ranges are
/// fixed and non-empty, so there is no failure path.
pub fn create_character(
    character_type: CharacterType,
    rng: &mut impl RandomnessSource,
) -> CharacterState {
    let ranges = character_type.ranges();
    let mut values = [0u32; NUM_ATTRIBUTES];
    for attr in AttributeType::all() {
        values[attr.index()] = ranges.get(attr).sample(rng);
    }

    CharacterState {
        health: values[AttributeType::Health.index()],
        strength: values[AttributeType::Strength.index()],
        defence: values[AttributeType::Defence.index()],
        speed: values[AttributeType::Speed.index()],
        luck: values[AttributeType::Luck.index()],
        character_type,
        times_defended: 0,
    }
}

pub fn create_hero(rng: &mut impl RandomnessSource) -> CharacterState {
    create_character(CharacterType::Hero, rng)
}

pub fn create_villain(rng: &mut impl RandomnessSource) -> CharacterState {
    create_character(CharacterType::Villain, rng)
}
