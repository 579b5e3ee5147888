//! Damage score of one ordered combo.
//!
//! ## Formula
//!
//! For a combo `c` of up to three card positions:
//!
//! - opening bonus `b` = 0.3 when `c[0]` is Buster, else 0
//! - each unsealed card at slot `s` adds
//!   `(b + position[s] * color) * (1 + critical) * advantage`
//! - when no card is sealed:
//!   - +4.8 if every card shares one color (color chain)
//!   - +`(b + 1.0) * (3.0 | 1.8) * advantage[c[0]]` if every card belongs to
//!     the same combatant; 3.0 when the colors also match, 1.8 otherwise
//!
//! A single card trivially satisfies both chain conditions.

use super::weights::ScoringWeights;
use crate::cards::{Hand, BUSTER_COEFFICIENT};
use crate::core::{BattleError, Result, HAND_SIZE, MAX_COMBO};

/// Check a combo is short enough, in range, and uses each position once.
pub(crate) fn validate_combo(combo: &[usize]) -> Result<()> {
    if combo.len() > MAX_COMBO {
        return Err(BattleError::invalid(format!(
            "combo has {} cards, at most {MAX_COMBO} can be played",
            combo.len()
        )));
    }
    for (slot, &card) in combo.iter().enumerate() {
        if card >= HAND_SIZE {
            return Err(BattleError::invalid(format!("combo card {card} is not in the hand")));
        }
        if combo[..slot].contains(&card) {
            return Err(BattleError::invalid(format!("combo uses card {card} twice")));
        }
    }
    Ok(())
}

/// Pure combo scorer.
#[derive(Clone, Debug, Default)]
pub struct CardEvaluator {
    weights: ScoringWeights,
}

impl CardEvaluator {
    /// Create an evaluator with custom weights.
    #[must_use]
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score `combo` (card positions in play order) against `hand`.
    ///
    /// Fails with `InvalidInput` for combos longer than three, positions
    /// outside the hand, or a position used twice. The empty combo scores 0.
    pub fn evaluate(&self, hand: &Hand, combo: &[usize]) -> Result<f64> {
        validate_combo(combo)?;
        Ok(self.score(hand, combo))
    }

    /// Score a combo already known to be valid.
    pub(crate) fn score(&self, hand: &Hand, combo: &[usize]) -> f64 {
        let Some(&first) = combo.first() else {
            return 0.0;
        };
        let w = &self.weights;

        let first_color = hand.color(first);
        // Coefficients compare exactly; `Hand` stores the values as given.
        let color_chain = combo.iter().all(|&card| hand.color(card) == first_color);
        let opening = if first_color == BUSTER_COEFFICIENT {
            w.buster_first_bonus
        } else {
            0.0
        };

        let mut base = 0.0;
        for (slot, &card) in combo.iter().enumerate() {
            if hand.is_sealed(card) {
                continue;
            }
            base += (opening + w.position[slot] * hand.color(card))
                * (1.0 + hand.critical(card))
                * hand.advantage(card);
        }

        let mut chain = 0.0;
        let chain_error = combo.iter().any(|&card| hand.is_sealed(card));
        if !chain_error {
            if color_chain {
                chain = w.color_chain_bonus;
            }
            let first_group = hand.group(first);
            if combo.iter().all(|&card| hand.group(card) == first_group) {
                let multiplier = if color_chain {
                    w.brave_chain_uniform
                } else {
                    w.brave_chain_mixed
                };
                chain += (opening + w.brave_chain_base) * multiplier * hand.advantage(first);
            }
        }

        base + chain
    }
}

/// Score a combo straight from perception slices with default weights.
///
/// Every slice must hold exactly five entries.
pub fn evaluate(
    combo: &[usize],
    color: &[f64],
    advantage: &[f64],
    critical: &[f64],
    sealed: &[bool],
    group: &[u32],
) -> Result<f64> {
    let hand = Hand::from_slices(color, advantage, critical, sealed, group)?;
    CardEvaluator::default().evaluate(&hand, combo)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(color: [f64; 5], sealed: [bool; 5], group: [u32; 5]) -> Hand {
        Hand::from_slices(&color, &[1.0; 5], &[0.0; 5], &sealed, &group).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_combo_scores_zero() {
        let h = hand([1.0; 5], [false; 5], [0, 1, 2, 0, 1]);
        assert_eq!(CardEvaluator::default().evaluate(&h, &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_color_chain() {
        let h = hand([1.0, 1.0, 1.0, 0.8, 1.1], [false; 5], [0, 0, 1, 1, 2]);
        let score = CardEvaluator::default().evaluate(&h, &[0, 1, 2]).unwrap();
        assert!(approx(score, 3.6 + 4.8), "got {score}");
    }

    #[test]
    fn test_buster_opening_bonus() {
        let h = hand([1.0, 1.0, 1.0, 0.8, 1.1], [false; 5], [0, 0, 1, 1, 2]);
        let score = CardEvaluator::default().evaluate(&h, &[4, 0, 2]).unwrap();
        // (0.3 + 1.1) + (0.3 + 1.2) + (0.3 + 1.4)
        assert!(approx(score, 4.6), "got {score}");
    }

    #[test]
    fn test_sealed_card_zeroes_itself_and_chain() {
        let h = hand([1.0; 5], [false, true, false, false, false], [0, 0, 1, 1, 2]);
        let score = CardEvaluator::default().evaluate(&h, &[0, 1, 2]).unwrap();
        // Only slots 0 and 2 count, no color chain
        assert!(approx(score, 1.0 + 1.4), "got {score}");
    }

    #[test]
    fn test_same_combatant_chain_stacks_with_color_chain() {
        let h = hand([0.8; 5], [false; 5], [1, 1, 1, 0, 0]);
        let score = CardEvaluator::default().evaluate(&h, &[0, 1, 2]).unwrap();
        let base = (1.0 + 1.2 + 1.4) * 0.8;
        assert!(approx(score, base + 4.8 + 1.0 * 3.0), "got {score}");
    }

    #[test]
    fn test_same_combatant_chain_mixed_colors() {
        let h = hand([1.1, 0.8, 1.0, 1.0, 1.0], [false; 5], [2, 2, 2, 0, 1]);
        let score = CardEvaluator::default().evaluate(&h, &[0, 1, 2]).unwrap();
        let base = (0.3 + 1.1) + (0.3 + 1.2 * 0.8) + (0.3 + 1.4);
        assert!(approx(score, base + 1.3 * 1.8), "got {score}");
    }

    #[test]
    fn test_critical_and_advantage_scale_card() {
        let h = Hand::from_slices(
            &[1.0; 5],
            &[1.7, 1.0, 1.0, 1.0, 1.0],
            &[0.5, 0.0, 0.0, 0.0, 0.0],
            &[false; 5],
            &[0, 1, 2, 0, 1],
        )
        .unwrap();
        let score = CardEvaluator::default().evaluate(&h, &[0, 1]).unwrap();
        // Mixed groups, but one color across both cards
        assert!(approx(score, 1.0 * 1.5 * 1.7 + 1.2 + 4.8), "got {score}");
    }

    #[test]
    fn test_near_equal_colors_do_not_chain() {
        let nudged = 1.0 + 1e-12;
        let h = hand([1.0, 1.0, nudged, 1.0, 1.0], [false; 5], [0, 1, 2, 0, 1]);
        let score = CardEvaluator::default().evaluate(&h, &[0, 1, 2]).unwrap();
        assert!(approx(score, 3.6), "got {score}");

        let almost_buster = hand([1.1 - 1e-12, 1.0, 1.0, 1.0, 1.0], [false; 5], [0, 1, 2, 0, 1]);
        let score = CardEvaluator::default().evaluate(&almost_buster, &[0]).unwrap();
        // No opening bonus: only the single-card chains apply
        assert!(approx(score, (1.1 - 1e-12) + 4.8 + 3.0), "got {score}");
    }

    #[test]
    fn test_single_card_gets_both_chains() {
        let h = hand([1.0; 5], [false; 5], [0, 1, 2, 0, 1]);
        let score = CardEvaluator::default().evaluate(&h, &[3]).unwrap();
        assert!(approx(score, 1.0 + 4.8 + 3.0), "got {score}");
    }

    #[test]
    fn test_invalid_combos() {
        let h = hand([1.0; 5], [false; 5], [0; 5]);
        let evaluator = CardEvaluator::default();
        assert!(evaluator.evaluate(&h, &[0, 1, 2, 3]).is_err());
        assert!(evaluator.evaluate(&h, &[0, 5]).is_err());
        assert!(evaluator.evaluate(&h, &[2, 2]).is_err());
    }

    #[test]
    fn test_free_function_checks_lengths() {
        let err = evaluate(&[0], &[1.0; 5], &[1.0; 3], &[0.0; 5], &[false; 5], &[0; 5]);
        assert!(matches!(err, Err(BattleError::InvalidInput(_))));

        let score = evaluate(
            &[0, 1, 2],
            &[1.0; 5],
            &[1.0; 5],
            &[0.0; 5],
            &[false; 5],
            &[0, 0, 1, 1, 2],
        )
        .unwrap();
        assert!(approx(score, 8.4));
    }
}
