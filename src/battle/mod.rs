//! Battle state machine and target choice.
//!
//! ## Key Types
//!
//! - `BattleState`: stage/turn counters, cooldowns, enemy HP for one encounter
//! - `Combatant`, `MasterSkillSet`: cooldown holders owned by the state
//! - `EnemySnapshot`, `TargetSelector`: enemy HP and who to hit
//! - `BattleSummary`: per-encounter report for an external aggregator
//! - `SharedBattle`: locked handle for multi-task access
//!
//! Each encounter gets its own `BattleState`; nothing here is global.

pub mod party;
pub mod shared;
pub mod state;
pub mod summary;
pub mod target;

pub use party::{Combatant, CombatantStatus, MasterSkillSet};
pub use shared::SharedBattle;
pub use state::BattleState;
pub use summary::BattleSummary;
pub use target::{select_best_target, EnemySnapshot, TargetSelector};
