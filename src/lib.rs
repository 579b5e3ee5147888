//! # battle-autopilot
//!
//! Turn decision engine for a card-chain combat mini-game.
//!
//! Every turn the game deals five command cards; three are played in order
//! (fewer when special attacks take slots) against one targeted enemy.
//! This crate decides which cards, in what order, and which enemy, and
//! keeps the multi-turn bookkeeping (stages, skill cooldowns) that those
//! decisions depend on.
//!
//! ## Design Principles
//!
//! 1. **Pure decisions**: scoring and search are deterministic functions of
//!    their inputs, with no I/O and no hidden state.
//!
//! 2. **Explicit state**: one `BattleState` per encounter, passed by the
//!    caller. Nothing process-wide, so encounters can run side by side.
//!
//! 3. **Validate, then mutate**: malformed input fails before any counter
//!    moves.
//!
//! Screen capture, recognition, and tapping live in the host and only meet
//! this crate through plain arrays.
//!
//! ## Modules
//!
//! - `core`: errors, configuration, fixed capacities
//! - `cards`: card classes, coefficients, the validated `Hand`
//! - `scoring`: combo evaluator and exhaustive combo search
//! - `battle`: per-encounter state machine and target selection
//! - `autopilot`: whole-turn planning (skills, specials, target, cards)

pub mod core;
pub mod cards;
pub mod scoring;
pub mod battle;
pub mod autopilot;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleError, Result,
    HAND_SIZE, MAX_COMBO, COMBATANT_SLOTS, SKILL_SLOTS, MASTER_SKILL_SLOTS, ENEMY_SLOTS,
};

pub use crate::cards::{Affinity, Card, CardColor, Hand};

pub use crate::scoring::{
    evaluate, select_order,
    Arrangements, CardEvaluator, Combo, ComboSearcher, PlayOrder, ScoredCombo, ScoringWeights,
};

pub use crate::battle::{
    select_best_target,
    BattleState, BattleSummary, Combatant, CombatantStatus, EnemySnapshot, MasterSkillSet,
    SharedBattle, TargetSelector,
};

pub use crate::autopilot::{
    PlannerConfig, SkillCast, SkillTarget, TurnObservation, TurnPlan, TurnPlanner,
};
