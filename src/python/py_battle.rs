//! BattleState binding for Python.

use pyo3::prelude::*;

use crate::battle::BattleState;
use crate::core::BattleConfig;

/// Python wrapper for BattleState.
#[pyclass(name = "BattleState")]
#[derive(Clone, Debug, Default)]
pub struct PyBattleState(pub BattleState);

#[pymethods]
impl PyBattleState {
    /// Start a new encounter.
    #[new]
    #[pyo3(signature = (skill_cooldown = 5, master_skill_cooldown = 15))]
    fn new(skill_cooldown: u32, master_skill_cooldown: u32) -> Self {
        let config = BattleConfig::default()
            .with_skill_cooldown(skill_cooldown)
            .with_master_skill_cooldown(master_skill_cooldown);
        Self(BattleState::with_config(config))
    }

    fn new_turn(&mut self, current_stage: u32, stage_total: u32) {
        self.0.new_turn(current_stage, stage_total);
    }

    #[pyo3(signature = (combatant, skill, cooldown = None))]
    fn use_skill(&mut self, combatant: usize, skill: usize, cooldown: Option<u32>) -> PyResult<()> {
        match cooldown {
            Some(turns) => self.0.use_skill_with_cooldown(combatant, skill, turns)?,
            None => self.0.use_skill(combatant, skill)?,
        }
        Ok(())
    }

    #[pyo3(signature = (skill, cooldown = None))]
    fn use_master_skill(&mut self, skill: usize, cooldown: Option<u32>) -> PyResult<()> {
        match cooldown {
            Some(turns) => self.0.use_master_skill_with_cooldown(skill, turns)?,
            None => self.0.use_master_skill(skill)?,
        }
        Ok(())
    }

    fn is_skill_ready(&self, combatant: usize, skill: usize) -> PyResult<bool> {
        Ok(self.0.is_skill_ready(combatant, skill)?)
    }

    fn is_master_skill_ready(&self, skill: usize) -> PyResult<bool> {
        Ok(self.0.is_master_skill_ready(skill)?)
    }

    fn update_enemy_hp(&mut self, values: Vec<u64>) {
        self.0.update_enemy_hp(&values);
    }

    /// Pick and remember the attack target.
    fn select_best_target(&mut self) -> usize {
        self.0.select_target()
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    /// (turns, elapsed seconds, victory) for the stats aggregator.
    fn summarize(&self, victory: bool) -> (u32, f64, bool) {
        let summary = self.0.summarize(victory);
        (summary.turns, summary.elapsed.as_secs_f64(), summary.victory)
    }

    #[getter]
    fn stage(&self) -> u32 {
        self.0.stage()
    }

    #[getter]
    fn stage_total(&self) -> u32 {
        self.0.stage_total()
    }

    #[getter]
    fn stage_turn(&self) -> u32 {
        self.0.stage_turn()
    }

    #[getter]
    fn turn(&self) -> u32 {
        self.0.turn()
    }

    #[getter]
    fn current_target(&self) -> usize {
        self.0.current_target()
    }

    #[getter]
    fn enemy_hp(&self) -> Vec<u64> {
        self.0.enemy_hp().to_vec()
    }

    fn __repr__(&self) -> String {
        format!(
            "BattleState(turn={}, stage={}/{}, stage_turn={})",
            self.0.turn(),
            self.0.stage(),
            self.0.stage_total(),
            self.0.stage_turn()
        )
    }
}
