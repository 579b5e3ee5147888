//! Tunable constants of the combo score.

use serde::{Deserialize, Serialize};

use crate::core::MAX_COMBO;

/// Weights used by `CardEvaluator`.
///
/// Defaults reproduce the in-game damage approximation the planner was
/// calibrated against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Multiplier for the card in each combo slot.
    pub position: [f64; MAX_COMBO],

    /// Added to every card's base when the combo opens with a Buster card.
    pub buster_first_bonus: f64,

    /// Flat bonus when every card in the combo has the same color.
    pub color_chain_bonus: f64,

    /// Base of the same-combatant chain bonus (before the opening bonus).
    pub brave_chain_base: f64,

    /// Same-combatant chain multiplier when the colors also match.
    pub brave_chain_uniform: f64,

    /// Same-combatant chain multiplier with mixed colors.
    pub brave_chain_mixed: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            position: [1.0, 1.2, 1.4],
            buster_first_bonus: 0.3,
            color_chain_bonus: 4.8,
            brave_chain_base: 1.0,
            brave_chain_uniform: 3.0,
            brave_chain_mixed: 1.8,
        }
    }
}

impl ScoringWeights {
    /// Override the per-slot multipliers.
    #[must_use]
    pub fn with_position(mut self, position: [f64; MAX_COMBO]) -> Self {
        self.position = position;
        self
    }

    /// Override the uniform-color chain bonus.
    #[must_use]
    pub fn with_color_chain_bonus(mut self, bonus: f64) -> Self {
        self.color_chain_bonus = bonus;
        self
    }
}
