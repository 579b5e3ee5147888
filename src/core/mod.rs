//! Core types: errors, configuration, fixed capacities.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;

pub use config::{
    BattleConfig, COMBATANT_SLOTS, ENEMY_SLOTS, HAND_SIZE, MASTER_SKILL_SLOTS, MAX_COMBO,
    SKILL_SLOTS,
};
pub use error::{BattleError, Result};
