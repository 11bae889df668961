//! Pure damage arithmetic shared by the skill resolver and the simulator.
//!
//! Every function here is integer-only and has no side effects; randomness is
//! passed in as already-drawn rolls.

use crate::core::constants::*;

/// Basic strike term.
///
/// # Arguments
/// * `strength` - Attacker strength
/// * `roll` - Draw in `[0, STRIKE_ROLL_SIZE)`, read as a percentage
///
/// # Returns
/// `strength * roll / 100`
pub fn basic_strike(strength: u32, roll: u32) -> u32 {
    strength * roll / STRIKE_PERCENT_DIVISOR
}

/// Critical strike term: a basic strike further scaled by luck percent.
///
/// # Arguments
/// * `strength` - Attacker strength
/// * `luck` - Attacker luck (0-100)
/// * `roll` - Draw in `[0, STRIKE_ROLL_SIZE)`
pub fn critical_strike(strength: u32, luck: u32, roll: u32) -> u32 {
    strength * roll * luck / CRITICAL_STRIKE_DIVISOR
}

/// Lucky strike term.
///
/// # Arguments
/// * `strength` - Attacker strength
/// * `luck_roll` - Draw in `[0, luck]`, read as a percentage of strength
pub fn lucky_strike(strength: u32, luck_roll: u32) -> u32 {
    strength * luck_roll / STRIKE_PERCENT_DIVISOR
}

/// Defence after skills. Resilience adds half of base defence.
pub fn effective_defence(defence: u32, resilience: bool) -> u32 {
    if resilience {
        defence + defence / RESILIENCE_DEFENCE_DIVISOR
    } else {
        defence
    }
}

/// Calculate actual damage taken after defence.
///
/// # Arguments
/// * `raw_damage` - Summed strike terms
/// * `defence` - Effective defence
///
/// # Returns
/// Actual damage taken (minimum 0)
pub fn calculate_damage_taken(raw_damage: u32, defence: u32) -> u32 {
    raw_damage.saturating_sub(defence)
}

/// Apply damage to health, returning remaining health (minimum 0).
pub fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}

/// Check if a combatant is still standing.
pub fn is_alive(current_health: u32) -> bool {
    current_health > 0
}
