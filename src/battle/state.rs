//! Per-encounter battle state.
//!
//! ## Turn Counters
//!
//! - `turn`: turns since the encounter started (0 before the first turn)
//! - `stage`: current stage (wave), as reported by perception
//! - `stage_turn`: turns spent in the current stage
//!
//! `new_turn` resets `stage_turn` to 1 exactly when the reported stage
//! differs from the stored one, and increments it otherwise. A fresh state
//! sits in stage 1 with `stage_turn` 1, so a first `new_turn` that reports
//! stage 1 moves it to 2.
//!
//! ## Ownership
//!
//! One `BattleState` per encounter, owned by whoever drives the turn loop.
//! It is not internally synchronized; share it through
//! [`SharedBattle`](super::SharedBattle) when a second task needs access.

use std::time::Instant;

use tracing::info;

use super::party::{Combatant, CombatantStatus, MasterSkillSet};
use super::summary::BattleSummary;
use super::target::{EnemySnapshot, TargetSelector};
use crate::core::error::check_index;
use crate::core::{
    BattleConfig, Result, COMBATANT_SLOTS, ENEMY_SLOTS, MASTER_SKILL_SLOTS, SKILL_SLOTS,
};

/// Mutable state of one encounter.
#[derive(Clone, Debug)]
pub struct BattleState {
    config: BattleConfig,

    // === Progression ===
    stage: u32,
    stage_total: u32,
    stage_turn: u32,
    turn: u32,

    // === Party and enemies ===
    combatants: [Combatant; COMBATANT_SLOTS],
    master: MasterSkillSet,
    enemies: EnemySnapshot,
    current_target: usize,

    started_at: Instant,
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleState {
    /// Fresh encounter with default cooldowns.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BattleConfig::default())
    }

    /// Fresh encounter with custom defaults.
    #[must_use]
    pub fn with_config(config: BattleConfig) -> Self {
        Self {
            stage: config.initial_stage,
            stage_total: config.initial_stage_total,
            stage_turn: 1,
            turn: 0,
            combatants: [Combatant::default(); COMBATANT_SLOTS],
            master: MasterSkillSet::default(),
            enemies: EnemySnapshot::default(),
            current_target: 0,
            started_at: Instant::now(),
            config,
        }
    }

    /// Throw away everything and start a new encounter with the same config.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
        info!("battle state reset");
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    // === Progression ===

    #[must_use]
    pub fn stage(&self) -> u32 {
        self.stage
    }

    #[must_use]
    pub fn stage_total(&self) -> u32 {
        self.stage_total
    }

    #[must_use]
    pub fn stage_turn(&self) -> u32 {
        self.stage_turn
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// True on the last stage of the encounter.
    #[must_use]
    pub fn is_final_stage(&self) -> bool {
        self.stage >= self.stage_total
    }

    /// Start a turn: advance counters and decay every cooldown by one.
    pub fn new_turn(&mut self, current_stage: u32, stage_total: u32) {
        self.turn += 1;

        if current_stage != self.stage {
            self.stage = current_stage;
            self.stage_turn = 1;
        } else {
            self.stage_turn += 1;
        }
        self.stage_total = stage_total;

        for combatant in &mut self.combatants {
            combatant.tick();
        }
        self.master.tick();

        info!(
            turn = self.turn,
            stage = self.stage,
            stage_total = self.stage_total,
            stage_turn = self.stage_turn,
            "new turn"
        );
    }

    // === Skills ===

    /// Record a skill cast with the configured default cooldown.
    pub fn use_skill(&mut self, combatant: usize, skill: usize) -> Result<()> {
        self.use_skill_with_cooldown(combatant, skill, self.config.skill_cooldown)
    }

    /// Record a skill cast with an explicit cooldown.
    pub fn use_skill_with_cooldown(
        &mut self,
        combatant: usize,
        skill: usize,
        cooldown: u32,
    ) -> Result<()> {
        check_index("combatant", combatant, COMBATANT_SLOTS)?;
        check_index("skill", skill, SKILL_SLOTS)?;

        self.combatants[combatant].set_cooldown(skill, cooldown);
        info!(combatant, skill, cooldown, "skill used");
        Ok(())
    }

    /// Record a master-skill cast with the configured default cooldown.
    pub fn use_master_skill(&mut self, skill: usize) -> Result<()> {
        self.use_master_skill_with_cooldown(skill, self.config.master_skill_cooldown)
    }

    /// Record a master-skill cast with an explicit cooldown.
    pub fn use_master_skill_with_cooldown(&mut self, skill: usize, cooldown: u32) -> Result<()> {
        check_index("master skill", skill, MASTER_SKILL_SLOTS)?;

        self.master.set_cooldown(skill, cooldown);
        info!(skill, cooldown, "master skill used");
        Ok(())
    }

    /// Remaining cooldown of a combatant's skill.
    pub fn skill_cooldown(&self, combatant: usize, skill: usize) -> Result<u32> {
        check_index("combatant", combatant, COMBATANT_SLOTS)?;
        check_index("skill", skill, SKILL_SLOTS)?;
        Ok(self.combatants[combatant].cooldown(skill))
    }

    /// Remaining cooldown of a master skill.
    pub fn master_skill_cooldown(&self, skill: usize) -> Result<u32> {
        check_index("master skill", skill, MASTER_SKILL_SLOTS)?;
        Ok(self.master.cooldown(skill))
    }

    pub fn is_skill_ready(&self, combatant: usize, skill: usize) -> Result<bool> {
        Ok(self.skill_cooldown(combatant, skill)? == 0)
    }

    pub fn is_master_skill_ready(&self, skill: usize) -> Result<bool> {
        Ok(self.master_skill_cooldown(skill)? == 0)
    }

    // === Party ===

    /// A party member's current record.
    pub fn combatant(&self, index: usize) -> Result<&Combatant> {
        check_index("combatant", index, COMBATANT_SLOTS)?;
        Ok(&self.combatants[index])
    }

    #[must_use]
    pub fn combatants(&self) -> &[Combatant; COMBATANT_SLOTS] {
        &self.combatants
    }

    #[must_use]
    pub fn master_skills(&self) -> &MasterSkillSet {
        &self.master
    }

    /// Store a perception reading for one party member.
    pub fn update_combatant(&mut self, index: usize, status: CombatantStatus) -> Result<()> {
        check_index("combatant", index, COMBATANT_SLOTS)?;
        self.combatants[index].apply_status(status);
        Ok(())
    }

    // === Enemies ===

    /// Overwrite the enemy HP snapshot positionally (see [`EnemySnapshot::update`]).
    pub fn update_enemy_hp(&mut self, values: &[u64]) {
        self.enemies.update(values);
    }

    #[must_use]
    pub fn enemy_hp(&self) -> &[u64; ENEMY_SLOTS] {
        self.enemies.hp()
    }

    #[must_use]
    pub fn enemies(&self) -> &EnemySnapshot {
        &self.enemies
    }

    /// Pick the attack target from the snapshot and remember it.
    pub fn select_target(&mut self) -> usize {
        self.current_target = TargetSelector::select_best_target(self.enemies.hp());
        self.current_target
    }

    #[must_use]
    pub fn current_target(&self) -> usize {
        self.current_target
    }

    // === Reporting ===

    /// Summary for the statistics aggregator. Elapsed time runs from creation or the last reset.
    #[must_use]
    pub fn summarize(&self, victory: bool) -> BattleSummary {
        BattleSummary {
            turns: self.turn,
            elapsed: self.started_at.elapsed(),
            victory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BattleError;

    #[test]
    fn test_new_state() {
        let state = BattleState::new();
        assert_eq!(state.stage(), 1);
        assert_eq!(state.stage_total(), 3);
        assert_eq!(state.stage_turn(), 1);
        assert_eq!(state.turn(), 0);
        assert_eq!(state.current_target(), 0);
    }

    #[test]
    fn test_stage_transition() {
        let mut state = BattleState::new();

        state.new_turn(2, 3);
        assert_eq!(state.stage(), 2);
        assert_eq!(state.stage_turn(), 1);
        assert_eq!(state.turn(), 1);

        state.new_turn(2, 3);
        assert_eq!(state.stage_turn(), 2);
        assert_eq!(state.turn(), 2);
    }

    #[test]
    fn test_same_stage_increments_on_first_turn() {
        let mut state = BattleState::new();
        state.new_turn(1, 3);
        assert_eq!(state.stage_turn(), 2);
    }

    #[test]
    fn test_cooldown_decay() {
        let mut state = BattleState::new();
        state.use_skill(0, 1).unwrap();
        state.use_master_skill(2).unwrap();
        assert_eq!(state.skill_cooldown(0, 1), Ok(5));
        assert_eq!(state.master_skill_cooldown(2), Ok(15));
        assert!(!state.is_skill_ready(0, 1).unwrap());

        for _ in 0..5 {
            state.new_turn(1, 3);
        }
        assert!(state.is_skill_ready(0, 1).unwrap());
        assert_eq!(state.master_skill_cooldown(2), Ok(10));

        for _ in 0..20 {
            state.new_turn(1, 3);
        }
        assert_eq!(state.master_skill_cooldown(2), Ok(0));
    }

    #[test]
    fn test_explicit_cooldown() {
        let mut state = BattleState::new();
        state.use_skill_with_cooldown(2, 2, 1).unwrap();
        state.new_turn(1, 3);
        assert!(state.is_skill_ready(2, 2).unwrap());
    }

    #[test]
    fn test_out_of_range_leaves_state_untouched() {
        let mut state = BattleState::new();
        let before = *state.combatants();

        assert!(matches!(
            state.use_skill(3, 0),
            Err(BattleError::IndexOutOfRange { what: "combatant", index: 3, .. })
        ));
        assert!(matches!(
            state.use_skill(0, 3),
            Err(BattleError::IndexOutOfRange { what: "skill", index: 3, .. })
        ));
        assert!(state.use_master_skill(3).is_err());
        assert!(state.is_skill_ready(5, 0).is_err());
        assert!(state.is_master_skill_ready(3).is_err());

        assert_eq!(state.combatants(), &before);
        assert_eq!(state.master_skills().cooldowns(), &[0, 0, 0]);
    }

    #[test]
    fn test_select_target_remembers() {
        let mut state = BattleState::new();
        state.update_enemy_hp(&[0, 5000, 5000, 0, 0, 0]);
        assert_eq!(state.select_target(), 1);
        assert_eq!(state.current_target(), 1);
    }

    #[test]
    fn test_update_combatant() {
        let mut state = BattleState::new();
        let status = CombatantStatus { alive: true, hp: 12_000, np: 100 };
        state.update_combatant(1, status).unwrap();
        assert_eq!(state.combatant(1).unwrap().np, 100);
        assert!(state.update_combatant(3, status).is_err());
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut state = BattleState::with_config(BattleConfig::default().with_skill_cooldown(8));
        state.new_turn(2, 3);
        state.use_skill(0, 0).unwrap();

        state.reset();
        assert_eq!(state.turn(), 0);
        assert_eq!(state.stage(), 1);
        assert_eq!(state.skill_cooldown(0, 0), Ok(0));

        state.use_skill(0, 0).unwrap();
        assert_eq!(state.skill_cooldown(0, 0), Ok(8));
    }

    #[test]
    fn test_summarize() {
        let mut state = BattleState::new();
        state.new_turn(1, 3);
        state.new_turn(2, 3);
        let summary = state.summarize(true);
        assert_eq!(summary.turns, 2);
        assert!(summary.victory);
    }

    #[test]
    fn test_final_stage() {
        let mut state = BattleState::new();
        assert!(!state.is_final_stage());
        state.new_turn(3, 3);
        assert!(state.is_final_stage());
    }
}
