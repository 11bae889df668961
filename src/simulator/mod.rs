//! Battle balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of battles to analyze:
//! - Win rates for each side and how often the turn limit is hit
//! - Battle length distribution
//! - Damage per side and the largest single hits observed
//!
//! Every battle goes through `BattleEngine` (src/core/battle_engine.rs), so
//! results match what a host sees turn by turn.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{BattleStats, SimReport};
pub use runner::{run_simulation, simulate_battle};
