//! One full turn decision: skills, specials, target, cards.
//!
//! ## Order of Operations
//!
//! 1. Store the enemy HP reading
//! 2. `new_turn` with the observed stage (cooldowns decay here)
//! 3. Every auto-cast skill that is now ready, combatant-major
//! 4. Specials: all ready ones on the final stage, otherwise the first
//!    ready one if some enemy is above the HP threshold
//! 5. Target: when a special fires, when the turn opens a stage, or always
//!    if configured
//! 6. Card order for the slots specials left over
//!
//! The planner never records skill casts itself. The executor taps them and
//! echoes each one back through `BattleState::use_skill`, so cooldowns only
//! start for casts that really happened.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use super::config::{PlannerConfig, SkillTarget};
use crate::battle::BattleState;
use crate::cards::Hand;
use crate::core::{Result, COMBATANT_SLOTS, MAX_COMBO, SKILL_SLOTS};
use crate::scoring::{ComboSearcher, PlayOrder};

/// What perception saw at the start of the turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnObservation {
    pub stage: u32,
    pub stage_total: u32,
    /// Up to six enemy HP readings, left to right.
    pub enemy_hp: Vec<u64>,
    pub hand: Hand,
    /// Whether each party member's special gauge is full.
    pub special_ready: [bool; COMBATANT_SLOTS],
}

impl TurnObservation {
    /// Observation with no enemy readings and no special ready.
    pub fn new(stage: u32, stage_total: u32, hand: Hand) -> Self {
        Self {
            stage,
            stage_total,
            enemy_hp: Vec::new(),
            hand,
            special_ready: [false; COMBATANT_SLOTS],
        }
    }

    #[must_use]
    pub fn with_enemy_hp(mut self, hp: impl Into<Vec<u64>>) -> Self {
        self.enemy_hp = hp.into();
        self
    }

    #[must_use]
    pub fn with_special_ready(mut self, ready: [bool; COMBATANT_SLOTS]) -> Self {
        self.special_ready = ready;
        self
    }
}

/// A skill the executor should cast this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCast {
    pub combatant: usize,
    pub skill: usize,
    /// Party slot to pick when the skill prompts for a target.
    pub target: Option<u8>,
}

/// Everything the executor needs for one turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnPlan {
    pub skill_casts: Vec<SkillCast>,
    /// Party members whose special fires, in slot order.
    pub specials: SmallVec<[usize; COMBATANT_SLOTS]>,
    /// Enemy to tap before attacking, if any.
    pub target: Option<usize>,
    pub cards: PlayOrder,
}

/// Decides complete turns against a `BattleState`.
#[derive(Clone, Debug, Default)]
pub struct TurnPlanner {
    config: PlannerConfig,
    searcher: ComboSearcher,
}

impl TurnPlanner {
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            searcher: ComboSearcher::default(),
        }
    }

    /// Use a searcher with custom scoring weights.
    #[must_use]
    pub fn with_searcher(mut self, searcher: ComboSearcher) -> Self {
        self.searcher = searcher;
        self
    }

    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Advance `state` into the observed turn and decide what to do in it.
    pub fn plan_turn(
        &self,
        state: &mut BattleState,
        observation: &TurnObservation,
    ) -> Result<TurnPlan> {
        state.update_enemy_hp(&observation.enemy_hp);
        state.new_turn(observation.stage, observation.stage_total);

        let skill_casts = self.ready_skill_casts(state)?;
        let specials = self.choose_specials(state, observation);

        let opening = state.stage_turn() == 1 || state.turn() == 1;
        let target = if !specials.is_empty() || opening || self.config.always_target {
            Some(state.select_target())
        } else {
            None
        };

        let cards = if self.config.smart_cards {
            self.searcher.select_order(&observation.hand, specials.len())?
        } else {
            PlayOrder::identity(MAX_COMBO - specials.len())
        };

        info!(
            turn = state.turn(),
            skills = skill_casts.len(),
            specials = ?specials,
            target = ?target,
            cards = ?cards.cards_to_play(),
            "turn planned"
        );

        Ok(TurnPlan {
            skill_casts,
            specials,
            target,
            cards,
        })
    }

    fn ready_skill_casts(&self, state: &BattleState) -> Result<Vec<SkillCast>> {
        let mut casts = Vec::new();
        for combatant in 0..COMBATANT_SLOTS {
            if !state.combatant(combatant)?.alive {
                continue;
            }
            for skill in 0..SKILL_SLOTS {
                let target = match self.config.auto_skills[combatant][skill] {
                    SkillTarget::Off => continue,
                    SkillTarget::NoTarget => None,
                    SkillTarget::Ally(ally) => Some(ally),
                };
                if state.is_skill_ready(combatant, skill)? {
                    casts.push(SkillCast { combatant, skill, target });
                }
            }
        }
        Ok(casts)
    }

    fn choose_specials(
        &self,
        state: &BattleState,
        observation: &TurnObservation,
    ) -> SmallVec<[usize; COMBATANT_SLOTS]> {
        let ready: SmallVec<[usize; COMBATANT_SLOTS]> = state
            .combatants()
            .iter()
            .zip(observation.special_ready)
            .enumerate()
            .filter(|(_, (combatant, ready))| *ready && combatant.alive)
            .map(|(slot, _)| slot)
            .collect();

        if state.is_final_stage() {
            ready
        } else if state.enemies().max_hp() > self.config.special_threshold {
            ready.into_iter().take(1).collect()
        } else {
            SmallVec::new()
        }
    }
}
