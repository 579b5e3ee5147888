//! Battle configuration and fixed capacities.
//!
//! The capacities are facts of the game screen (five cards dealt, three
//! party slots, six enemy positions) and stay constants. Everything the
//! host may want to tune lives in `BattleConfig`.
//!
//! Loading a config from disk is the host's business; the struct derives
//! serde so any format the host prefers works.

use serde::{Deserialize, Serialize};

/// Cards dealt per turn.
pub const HAND_SIZE: usize = 5;

/// Maximum cards played per turn (fewer when specials take slots).
pub const MAX_COMBO: usize = 3;

/// Front-line party slots.
pub const COMBATANT_SLOTS: usize = 3;

/// Skills per combatant.
pub const SKILL_SLOTS: usize = 3;

/// Master skills.
pub const MASTER_SKILL_SLOTS: usize = 3;

/// Enemy positions on screen (front and back row).
pub const ENEMY_SLOTS: usize = 6;

/// Per-encounter defaults used by `BattleState`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Cooldown applied by `use_skill` when no explicit value is given.
    pub skill_cooldown: u32,

    /// Cooldown applied by `use_master_skill` when no explicit value is given.
    pub master_skill_cooldown: u32,

    /// Stage a fresh encounter starts in.
    pub initial_stage: u32,

    /// Stage total assumed until the first `new_turn` reports one.
    pub initial_stage_total: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            skill_cooldown: 5,
            master_skill_cooldown: 15,
            initial_stage: 1,
            initial_stage_total: 3,
        }
    }
}

impl BattleConfig {
    /// Set the default skill cooldown.
    #[must_use]
    pub fn with_skill_cooldown(mut self, turns: u32) -> Self {
        self.skill_cooldown = turns;
        self
    }

    /// Set the default master-skill cooldown.
    #[must_use]
    pub fn with_master_skill_cooldown(mut self, turns: u32) -> Self {
        self.master_skill_cooldown = turns;
        self
    }

    /// Set the stage layout a fresh encounter starts with.
    #[must_use]
    pub fn with_initial_stage(mut self, stage: u32, stage_total: u32) -> Self {
        self.initial_stage = stage;
        self.initial_stage_total = stage_total;
        self
    }
}
