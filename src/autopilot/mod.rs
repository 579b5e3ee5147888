//! Whole-turn planning on top of the scorer and the battle state.
//!
//! The host loop looks like:
//!
//! ```
//! use battle_autopilot::autopilot::{TurnObservation, TurnPlanner};
//! use battle_autopilot::battle::BattleState;
//! use battle_autopilot::cards::Hand;
//!
//! let planner = TurnPlanner::default();
//! let mut state = BattleState::new();
//!
//! // perceive
//! let hand = Hand::from_codes(&[1, 1, 1, 0, 2], &[0; 5], &[0.0; 5], &[false; 5], &[0, 0, 1, 1, 2])
//!     .unwrap();
//! let observation = TurnObservation::new(1, 3, hand).with_enemy_hp(vec![12_000, 30_000, 8_000]);
//!
//! // decide
//! let plan = planner.plan_turn(&mut state, &observation).unwrap();
//!
//! // act, then echo casts back so cooldowns stay in sync
//! for cast in &plan.skill_casts {
//!     state.use_skill(cast.combatant, cast.skill).unwrap();
//! }
//! assert_eq!(plan.cards.cards_to_play(), &[0, 1, 2]);
//! assert_eq!(plan.target, Some(1));
//! ```

pub mod config;
pub mod planner;

pub use config::{PlannerConfig, SkillTarget};
pub use planner::{SkillCast, TurnObservation, TurnPlan, TurnPlanner};
