//! Exhaustive combo search over the dealt hand.
//!
//! With `k = 3 - special_count` card slots to fill, every ordered
//! `k`-arrangement of the five positions is scored (at most 60) and the
//! best one is played. Ties keep the earliest arrangement in
//! [`Arrangements`] order. The cards left over are appended by a cheap
//! single-card strength so the executor has a fallback priority if a tap
//! fails.
//!
//! The bound of 60 evaluations comes from the fixed five-card hand; the
//! count grows factorially with hand size.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::arrangements::{Arrangements, Combo};
use super::evaluator::CardEvaluator;
use crate::cards::Hand;
use crate::core::{BattleError, Result, HAND_SIZE, MAX_COMBO};

/// How many top combos to log when DEBUG is enabled.
const RANKING_LOG_LIMIT: usize = 10;

/// A combo together with its score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredCombo {
    pub combo: Combo,
    pub score: f64,
}

/// Full five-card priority: the first `play_count` entries are played in order.
///
/// `order` is always a permutation of `0..5` and `play_count` at most 3;
/// deserialization enforces both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlayOrder")]
pub struct PlayOrder {
    order: [usize; HAND_SIZE],
    play_count: usize,
    score: f64,
}

/// Unchecked wire form of [`PlayOrder`].
#[derive(Deserialize)]
struct RawPlayOrder {
    order: [usize; HAND_SIZE],
    play_count: usize,
    score: f64,
}

impl TryFrom<RawPlayOrder> for PlayOrder {
    type Error = BattleError;

    fn try_from(raw: RawPlayOrder) -> Result<Self> {
        if raw.play_count > MAX_COMBO {
            return Err(BattleError::invalid(format!(
                "play count {} exceeds {MAX_COMBO}",
                raw.play_count
            )));
        }
        let mut seen = [false; HAND_SIZE];
        for &card in &raw.order {
            if card >= HAND_SIZE || seen[card] {
                return Err(BattleError::invalid(format!(
                    "play order {:?} is not a permutation of 0..{HAND_SIZE}",
                    raw.order
                )));
            }
            seen[card] = true;
        }
        Ok(Self {
            order: raw.order,
            play_count: raw.play_count,
            score: raw.score,
        })
    }
}

impl PlayOrder {
    /// Positions in natural order, used when no search is wanted.
    #[must_use]
    pub fn identity(play_count: usize) -> Self {
        Self {
            order: [0, 1, 2, 3, 4],
            play_count: play_count.min(MAX_COMBO),
            score: 0.0,
        }
    }

    /// All five positions, chosen cards first.
    #[must_use]
    pub fn order(&self) -> &[usize; HAND_SIZE] {
        &self.order
    }

    /// Cards to tap this turn, in tap order.
    #[must_use]
    pub fn cards_to_play(&self) -> &[usize] {
        &self.order[..self.play_count]
    }

    /// Remaining positions by descending fallback strength.
    #[must_use]
    pub fn fallback(&self) -> &[usize] {
        &self.order[self.play_count..]
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_count
    }

    /// Score of the chosen combo (0 when nothing was searched).
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Picks the best combo for a hand.
#[derive(Clone, Debug, Default)]
pub struct ComboSearcher {
    evaluator: CardEvaluator,
}

fn card_slots(special_count: usize) -> Result<usize> {
    MAX_COMBO.checked_sub(special_count).ok_or_else(|| {
        BattleError::invalid(format!(
            "special count {special_count} outside 0..={MAX_COMBO}"
        ))
    })
}

impl ComboSearcher {
    /// Create a searcher around a configured evaluator.
    #[must_use]
    pub fn new(evaluator: CardEvaluator) -> Self {
        Self { evaluator }
    }

    #[must_use]
    pub fn evaluator(&self) -> &CardEvaluator {
        &self.evaluator
    }

    /// Choose the play order for this turn.
    ///
    /// `special_count` (0..=3) is how many card slots specials take. With
    /// all three taken the identity order comes back unscored.
    pub fn select_order(&self, hand: &Hand, special_count: usize) -> Result<PlayOrder> {
        let k = card_slots(special_count)?;
        if k == 0 {
            return Ok(PlayOrder::identity(0));
        }

        let mut best: Option<ScoredCombo> = None;
        for combo in Arrangements::new(HAND_SIZE, k) {
            let score = self.evaluator.score(hand, &combo);
            trace!(?combo, score, "scored combo");
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(ScoredCombo { combo, score });
            }
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            let ranked = self.rank_slots(hand, k);
            for (rank, entry) in ranked.iter().take(RANKING_LOG_LIMIT).enumerate() {
                debug!(rank = rank + 1, combo = ?entry.combo, score = entry.score, "combo ranking");
            }
        }

        let Some(best) = best else {
            return Ok(PlayOrder::identity(k));
        };

        let mut rest: Vec<usize> = (0..HAND_SIZE).filter(|i| !best.combo.contains(i)).collect();
        rest.sort_by(|&a, &b| hand.fallback_strength(b).total_cmp(&hand.fallback_strength(a)));

        let mut order = [0; HAND_SIZE];
        for (slot, &card) in best.combo.iter().chain(rest.iter()).enumerate() {
            order[slot] = card;
        }

        Ok(PlayOrder {
            order,
            play_count: k,
            score: best.score,
        })
    }

    /// Every candidate combo for this turn, best first.
    ///
    /// Equal scores keep enumeration order, so the first entry is always the
    /// combo `select_order` plays. Empty when specials fill every slot.
    pub fn rank(&self, hand: &Hand, special_count: usize) -> Result<Vec<ScoredCombo>> {
        let k = card_slots(special_count)?;
        if k == 0 {
            return Ok(Vec::new());
        }
        Ok(self.rank_slots(hand, k))
    }

    fn rank_slots(&self, hand: &Hand, k: usize) -> Vec<ScoredCombo> {
        let mut ranked: Vec<ScoredCombo> = Arrangements::new(HAND_SIZE, k)
            .map(|combo| {
                let score = self.evaluator.score(hand, &combo);
                ScoredCombo { combo, score }
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

/// Choose the play order straight from perception slices with default weights.
///
/// Every slice must hold exactly five entries and `special_count` must be
/// 0..=3. Returns all five positions, chosen cards first.
pub fn select_order(
    color: &[f64],
    advantage: &[f64],
    critical: &[f64],
    sealed: &[bool],
    group: &[u32],
    special_count: usize,
) -> Result<[usize; HAND_SIZE]> {
    card_slots(special_count)?;
    let hand = Hand::from_slices(color, advantage, critical, sealed, group)?;
    Ok(*ComboSearcher::default().select_order(&hand, special_count)?.order())
}
