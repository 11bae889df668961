//! Simulation report generation.

use crate::core::battle_state::BattleOutcome;
use crate::core::constants::TURN_LIMIT;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of one simulated battle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BattleStats {
    pub outcome: BattleOutcome,
    pub turns: u32,
    pub hero_damage_dealt: u32,
    pub villain_damage_dealt: u32,
    pub max_hero_hit: u32,
    pub max_villain_hit: u32,
}

/// Aggregated results from multiple simulated battles.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub hero_wins: u32,
    pub villain_wins: u32,
    pub draws: u32,

    // Rates in [0, 1]
    pub hero_win_rate: f64,
    pub villain_win_rate: f64,
    pub draw_rate: f64,

    pub avg_turns: f64,
    pub avg_hero_damage: f64,
    pub avg_villain_damage: f64,
    pub max_hero_hit: u32,
    pub max_villain_hit: u32,

    /// Battles keyed by how many turns they lasted
    pub turn_distribution: BTreeMap<u32, u32>,

    // Individual battle stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<BattleStats>,
}

impl SimReport {
    /// Create a new report from completed battle stats.
    pub fn from_runs(runs: Vec<BattleStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let count = |outcome: BattleOutcome| {
            runs.iter().filter(|r| r.outcome == outcome).count() as u32
        };
        let hero_wins = count(BattleOutcome::HeroWins);
        let villain_wins = count(BattleOutcome::VillainWins);
        let draws = count(BattleOutcome::Draw);

        let avg_turns = runs.iter().map(|r| r.turns as f64).sum::<f64>() / divisor;
        let avg_hero_damage =
            runs.iter().map(|r| r.hero_damage_dealt as f64).sum::<f64>() / divisor;
        let avg_villain_damage =
            runs.iter().map(|r| r.villain_damage_dealt as f64).sum::<f64>() / divisor;
        let max_hero_hit = runs.iter().map(|r| r.max_hero_hit).max().unwrap_or(0);
        let max_villain_hit = runs.iter().map(|r| r.max_villain_hit).max().unwrap_or(0);

        let mut turn_distribution = BTreeMap::new();
        for run in &runs {
            *turn_distribution.entry(run.turns).or_insert(0) += 1;
        }

        Self {
            num_runs,
            hero_wins,
            villain_wins,
            draws,
            hero_win_rate: hero_wins as f64 / divisor,
            villain_win_rate: villain_wins as f64 / divisor,
            draw_rate: draws as f64 / divisor,
            avg_turns,
            avg_hero_damage,
            avg_villain_damage,
            max_hero_hit,
            max_villain_hit,
            turn_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    BATTLE SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Battles: {}\n\n", self.num_runs));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Hero Wins:       {:>6} ({:>5.1}%)\n",
            self.hero_wins,
            self.hero_win_rate * 100.0
        ));
        report.push_str(&format!(
            "  Villain Wins:    {:>6} ({:>5.1}%)\n",
            self.villain_wins,
            self.villain_win_rate * 100.0
        ));
        report.push_str(&format!(
            "  Draws:           {:>6} ({:>5.1}%)\n\n",
            self.draws,
            self.draw_rate * 100.0
        ));

        report.push_str("── DAMAGE ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Turns:           {:.1}\n", self.avg_turns));
        report.push_str(&format!(
            "  Avg Hero Damage:     {:.1}\n",
            self.avg_hero_damage
        ));
        report.push_str(&format!(
            "  Avg Villain Damage:  {:.1}\n",
            self.avg_villain_damage
        ));
        report.push_str(&format!("  Max Hero Hit:        {}\n", self.max_hero_hit));
        report.push_str(&format!("  Max Villain Hit:     {}\n\n", self.max_villain_hit));

        report.push_str("── BATTLE LENGTH ────────────────────────────────────────────────\n");
        for turns in 1..=TURN_LIMIT {
            let battles = self.turn_distribution.get(&turns).copied().unwrap_or(0);
            if battles == 0 {
                continue;
            }
            let pct = (battles as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:2} turns: {:>5.1}% {}\n", turns, pct, bar));
        }

        report
    }

    /// Export report as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
