//! Battle state, engine, and the arithmetic it runs on.

#![allow(unused_imports)]

pub mod battle_engine;
pub mod battle_state;
pub mod combat_math;
pub mod constants;
pub mod error;
pub mod randomness;

pub use battle_engine::*;
pub use battle_state::*;
pub use constants::*;
pub use error::*;
pub use randomness::*;
