//! Autobrawl battle-resolution core.
//!
//! Data flows one direction: the definition catalog feeds the battle
//! factory, the turn engine resolves the fight deterministically, and the
//! ordered event log is the sole artifact external consumers see. Given a
//! seed string and two rosters, simulation is a pure, total function to
//! that log.

pub mod catalog;
pub mod effects;
pub mod engine;
pub mod error;
pub mod events;
pub mod factory;
pub mod items;
pub mod presets;
pub mod rng;
pub mod targeting;
pub mod triggers;
pub mod types;
pub mod units;

#[cfg(test)]
mod tests;

pub use catalog::{get_item_def, get_unit_def, validate_catalog};
pub use engine::{resolve_battle, simulate, DEFAULT_MAX_TURNS};
pub use error::{BattleError, BattleResult};
pub use events::BattleLogEvent;
pub use factory::{check_roster_positions, make_battle, spawn_unit};
pub use presets::{team_presets, TeamPreset};
pub use rng::BattleRng;
pub use types::*;
