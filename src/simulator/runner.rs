//! Simulation runner built on `BattleEngine`.
//!
//! Statistics are gathered from the `TurnRecord`s the engine hands back, the
//! same way a host would observe a battle.

use super::config::SimConfig;
use super::report::{BattleStats, SimReport};
use crate::combat::TurnRecord;
use crate::core::battle_engine::BattleEngine;
use crate::core::randomness::{FixedZeroRandomness, LiveRandomness, RandomnessSource};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let stats = if config.fixed_zero {
            simulate_battle(FixedZeroRandomness)
        } else {
            // Create RNG for this run
            let rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
                None => ChaCha8Rng::from_entropy(),
            };
            simulate_battle(LiveRandomness::from_rng(rng))
        };

        if config.verbosity >= 2 {
            debug!(
                run = run_idx + 1,
                outcome = stats.outcome.name(),
                turns = stats.turns,
                hero_damage = stats.hero_damage_dealt,
                villain_damage = stats.villain_damage_dealt,
                "Battle simulated"
            );
        }
        all_runs.push(stats);
    }

    if config.verbosity >= 1 {
        info!(runs = all_runs.len(), "Simulation complete");
    }

    SimReport::from_runs(all_runs)
}

/// Play one battle to the end and summarize it.
pub fn simulate_battle<R: RandomnessSource>(rng: R) -> BattleStats {
    let mut engine = BattleEngine::new(rng);
    let mut stats = BattleStats::default();

    while !engine.is_finished() {
        match engine.resolve_turn() {
            Ok(record) => stats.record_turn(&record),
            Err(_) => break,
        }
    }

    stats.outcome = engine.outcome();
    stats.turns = engine.turn_number();
    stats
}

impl BattleStats {
    /// Fold one turn into the running totals.
    fn record_turn(&mut self, record: &TurnRecord) {
        if record.hero_attacked {
            self.hero_damage_dealt += record.damage;
            self.max_hero_hit = self.max_hero_hit.max(record.damage);
        } else {
            self.villain_damage_dealt += record.damage;
            self.max_villain_hit = self.max_villain_hit.max(record.damage);
        }
    }
}
