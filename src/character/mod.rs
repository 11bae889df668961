//! Combatant attributes, archetypes, and creation.

#![allow(unused_imports)]

pub mod attributes;
pub mod factory;
pub mod state;

pub use attributes::*;
pub use factory::*;
pub use state::*;
