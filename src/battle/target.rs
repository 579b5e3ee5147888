//! Enemy HP snapshot and attack-target choice.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ENEMY_SLOTS;

/// Latest HP reading of every enemy position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    hp: [u64; ENEMY_SLOTS],
}

impl EnemySnapshot {
    #[must_use]
    pub fn hp(&self) -> &[u64; ENEMY_SLOTS] {
        &self.hp
    }

    /// Highest HP on the field (0 when empty).
    #[must_use]
    pub fn max_hp(&self) -> u64 {
        self.hp.iter().copied().max().unwrap_or(0)
    }

    /// Overwrite positions `0..values.len()`; later positions keep their old value.
    /// Readings past the sixth position are dropped.
    pub fn update(&mut self, values: &[u64]) {
        if values.len() > ENEMY_SLOTS {
            debug!(
                readings = values.len(),
                capacity = ENEMY_SLOTS,
                "ignoring enemy HP readings past capacity"
            );
        }
        for (slot, &hp) in self.hp.iter_mut().zip(values) {
            *slot = hp;
        }
    }
}

/// Picks which enemy the party attacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct TargetSelector;

impl TargetSelector {
    /// Index of the enemy with the most HP.
    ///
    /// Scans left to right with a strict comparison, so the first of several
    /// equal maxima wins. An enemy at 0 HP is never preferred over a living
    /// one, and when everything is at 0 (or the slice is empty) index 0 is
    /// returned.
    #[must_use]
    pub fn select_best_target(enemy_hp: &[u64]) -> usize {
        let mut best = 0;
        let mut best_hp = 0;
        for (i, &hp) in enemy_hp.iter().enumerate() {
            if hp > best_hp {
                best_hp = hp;
                best = i;
            }
        }
        best
    }
}

/// Shorthand for [`TargetSelector::select_best_target`].
#[must_use]
pub fn select_best_target(enemy_hp: &[u64]) -> usize {
    TargetSelector::select_best_target(enemy_hp)
}
