//! Party members and the master's skills, with their cooldown counters.
//!
//! Cooldowns count remaining turns; zero means ready. They are unsigned,
//! and decay saturates, so a counter can never go below zero.

use serde::{Deserialize, Serialize};

use crate::core::{MASTER_SKILL_SLOTS, SKILL_SLOTS};

/// Per-turn reading of a party member from perception.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantStatus {
    pub alive: bool,
    pub hp: u32,
    /// Special-attack gauge, in percent.
    pub np: u32,
}

/// One front-line party member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub alive: bool,
    pub hp: u32,
    pub np: u32,
    cooldowns: [u32; SKILL_SLOTS],
}

impl Default for Combatant {
    fn default() -> Self {
        Self {
            alive: true,
            hp: 0,
            np: 0,
            cooldowns: [0; SKILL_SLOTS],
        }
    }
}

impl Combatant {
    /// Remaining cooldown of every skill.
    #[must_use]
    pub fn cooldowns(&self) -> &[u32; SKILL_SLOTS] {
        &self.cooldowns
    }

    pub(crate) fn cooldown(&self, skill: usize) -> u32 {
        self.cooldowns[skill]
    }

    pub(crate) fn set_cooldown(&mut self, skill: usize, turns: u32) {
        self.cooldowns[skill] = turns;
    }

    pub(crate) fn apply_status(&mut self, status: CombatantStatus) {
        self.alive = status.alive;
        self.hp = status.hp;
        self.np = status.np;
    }

    pub(crate) fn tick(&mut self) {
        for cd in &mut self.cooldowns {
            *cd = cd.saturating_sub(1);
        }
    }
}

/// The master's three skills.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterSkillSet {
    cooldowns: [u32; MASTER_SKILL_SLOTS],
}

impl MasterSkillSet {
    #[must_use]
    pub fn cooldowns(&self) -> &[u32; MASTER_SKILL_SLOTS] {
        &self.cooldowns
    }

    pub(crate) fn cooldown(&self, skill: usize) -> u32 {
        self.cooldowns[skill]
    }

    pub(crate) fn set_cooldown(&mut self, skill: usize, turns: u32) {
        self.cooldowns[skill] = turns;
    }

    pub(crate) fn tick(&mut self) {
        for cd in &mut self.cooldowns {
            *cd = cd.saturating_sub(1);
        }
    }
}
