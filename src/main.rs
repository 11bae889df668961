//! Duel command-line host.
//!
//! Persists a battle between invocations so each `fight` call resolves
//! exactly one turn.
//!
//! # Usage
//!
//! ```bash
//! # Start a battle and save it
//! duel new --save battle.dat
//!
//! # Resolve the next turn
//! duel fight --save battle.dat
//!
//! # Inspect the saved battle
//! duel status --save battle.dat
//!
//! # Play a whole battle in memory
//! duel run --seed 42
//! ```
//!
//! Records go to stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duel::{
    BattleEngine, BattleSaveManager, BattleState, FixedZeroRandomness, LiveRandomness,
    RandomnessSource, TurnRecord,
};

#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Turn-based hero vs. villain battle")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new battle and save it
    New {
        /// Battle save file
        #[arg(short, long)]
        save: PathBuf,

        /// Use zero randomness (every attribute at its lower bound)
        #[arg(long)]
        fixed_zero: bool,
    },

    /// Resolve one turn of a saved battle
    Fight {
        /// Battle save file
        #[arg(short, long)]
        save: PathBuf,

        /// Use zero randomness for this turn's rolls
        #[arg(long)]
        fixed_zero: bool,

        /// Print the turn record as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// Show the state of a saved battle
    Status {
        /// Battle save file
        #[arg(short, long)]
        save: PathBuf,
    },

    /// Play a whole battle without saving it
    Run {
        /// Random seed for a reproducible battle
        #[arg(long)]
        seed: Option<u64>,

        /// Use zero randomness
        #[arg(long, conflicts_with = "seed")]
        fixed_zero: bool,

        /// Print each turn record as a JSON line
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::New { save, fixed_zero } => cmd_new(save, fixed_zero),
        Commands::Fight {
            save,
            fixed_zero,
            json,
        } => cmd_fight(save, fixed_zero, json),
        Commands::Status { save } => cmd_status(save),
        Commands::Run {
            seed,
            fixed_zero,
            json,
        } => cmd_run(seed, fixed_zero, json),
    }
}

fn cmd_new(save: PathBuf, fixed_zero: bool) -> Result<()> {
    let state = if fixed_zero {
        BattleEngine::new(FixedZeroRandomness).into_state()
    } else {
        BattleEngine::new_live().into_state()
    };

    let manager = BattleSaveManager::new(&save);
    manager
        .save(&state)
        .with_context(|| format!("Failed to save battle to {}", save.display()))?;

    println!("New battle saved to {}", save.display());
    println!("  {}", state.hero_initial);
    println!("  {}", state.villain_initial);
    Ok(())
}

fn cmd_fight(save: PathBuf, fixed_zero: bool, json: bool) -> Result<()> {
    let manager = BattleSaveManager::new(&save);
    let state = load_battle(&manager)?;

    let (record, state) = if fixed_zero {
        fight_one_turn(state, FixedZeroRandomness)?
    } else {
        fight_one_turn(state, LiveRandomness::new())?
    };

    manager
        .save(&state)
        .with_context(|| format!("Failed to save battle to {}", save.display()))?;

    print_record(&record, json)?;
    if state.outcome.is_finished() && !json {
        println!("Battle over: {}", state.outcome);
    }
    Ok(())
}

fn cmd_status(save: PathBuf) -> Result<()> {
    let manager = BattleSaveManager::new(&save);
    let state = load_battle(&manager)?;

    println!("Outcome:  {}", state.outcome);
    println!("Turn:     {}", state.turn_number);
    println!("Initial:");
    println!("  {}", state.hero_initial);
    println!("  {}", state.villain_initial);
    println!("Current:");
    println!("  {}", state.hero);
    println!("  {}", state.villain);
    Ok(())
}

fn cmd_run(seed: Option<u64>, fixed_zero: bool, json: bool) -> Result<()> {
    let records = match (fixed_zero, seed) {
        (true, _) => play_out(FixedZeroRandomness, json)?,
        (false, Some(seed)) => {
            play_out(LiveRandomness::from_rng(ChaCha8Rng::seed_from_u64(seed)), json)?
        }
        (false, None) => play_out(LiveRandomness::new(), json)?,
    };

    if let Some(last) = records.last().filter(|_| !json) {
        println!(
            "Battle over after {} turns: {}",
            records.len(),
            last.outcome_after
        );
    }
    Ok(())
}

fn load_battle(manager: &BattleSaveManager) -> Result<BattleState> {
    if !manager.save_exists() {
        bail!(
            "No battle at {}; start one with `duel new`",
            manager.path().display()
        );
    }
    manager
        .load()
        .with_context(|| format!("Failed to load battle from {}", manager.path().display()))
}

fn fight_one_turn<R: RandomnessSource>(
    state: BattleState,
    rng: R,
) -> Result<(TurnRecord, BattleState)> {
    let mut engine = BattleEngine::from_state(state, rng);
    let record = engine.resolve_turn()?;
    Ok((record, engine.into_state()))
}

fn play_out<R: RandomnessSource>(rng: R, json: bool) -> Result<Vec<TurnRecord>> {
    let mut engine = BattleEngine::new(rng);
    if !json {
        println!("  {}", engine.hero_initial_state());
        println!("  {}", engine.villain_initial_state());
    }

    let records = engine.run_to_completion()?;
    for record in &records {
        print_record(record, json)?;
    }
    Ok(records)
}

fn print_record(record: &TurnRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(record)?);
    } else {
        println!("{}", record);
    }
    Ok(())
}
