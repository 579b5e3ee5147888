//! The five cards offered on a turn.
//!
//! A `Hand` stores per-card attributes as parallel fixed-size arrays, which
//! is the shape perception produces and the shape the scorer reads. Building
//! one is the only place input lengths are checked; everything downstream
//! can index `0..HAND_SIZE` freely.
//!
//! Every constructor, deserialization included, rejects non-finite
//! coefficients and critical rates outside [0, 1].

use serde::{Deserialize, Serialize};

use super::attributes::{Affinity, CardColor};
use crate::core::{BattleError, Result, HAND_SIZE};

/// One recognized command card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Screen position (0-4).
    pub index: usize,
    pub color: CardColor,
    pub affinity: Affinity,
    /// Critical chance in [0, 1].
    pub critical_rate: f64,
    /// Sealed cards score nothing and break chains.
    pub sealed: bool,
    /// Which party member dealt this card.
    pub owner: u32,
}

impl Card {
    /// Create an unsealed, non-critical card owned by party member 0.
    pub fn new(index: usize, color: CardColor, affinity: Affinity) -> Self {
        Self {
            index,
            color,
            affinity,
            critical_rate: 0.0,
            sealed: false,
            owner: 0,
        }
    }

    /// Set the critical chance.
    #[must_use]
    pub fn with_critical(mut self, rate: f64) -> Self {
        self.critical_rate = rate;
        self
    }

    /// Set the owning party member.
    #[must_use]
    pub fn with_owner(mut self, owner: u32) -> Self {
        self.owner = owner;
        self
    }

    /// Mark the card as sealed.
    #[must_use]
    pub fn sealed(mut self) -> Self {
        self.sealed = true;
        self
    }
}

/// Attributes of a full hand, indexed by card position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHand")]
pub struct Hand {
    color: [f64; HAND_SIZE],
    advantage: [f64; HAND_SIZE],
    critical: [f64; HAND_SIZE],
    sealed: [bool; HAND_SIZE],
    group: [u32; HAND_SIZE],
}

/// Unchecked wire form of [`Hand`].
#[derive(Deserialize)]
struct RawHand {
    color: [f64; HAND_SIZE],
    advantage: [f64; HAND_SIZE],
    critical: [f64; HAND_SIZE],
    sealed: [bool; HAND_SIZE],
    group: [u32; HAND_SIZE],
}

impl TryFrom<RawHand> for Hand {
    type Error = BattleError;

    fn try_from(raw: RawHand) -> Result<Self> {
        Self::checked(Self {
            color: raw.color,
            advantage: raw.advantage,
            critical: raw.critical,
            sealed: raw.sealed,
            group: raw.group,
        })
    }
}

fn exact<T: Copy>(name: &str, values: &[T]) -> Result<[T; HAND_SIZE]> {
    <[T; HAND_SIZE]>::try_from(values).map_err(|_| {
        BattleError::invalid(format!(
            "{name} must have {HAND_SIZE} entries, got {}",
            values.len()
        ))
    })
}

impl Hand {
    /// Build from raw coefficient slices, each of which must hold exactly five entries.
    pub fn from_slices(
        color: &[f64],
        advantage: &[f64],
        critical: &[f64],
        sealed: &[bool],
        group: &[u32],
    ) -> Result<Self> {
        Self::checked(Self {
            color: exact("color", color)?,
            advantage: exact("advantage", advantage)?,
            critical: exact("critical", critical)?,
            sealed: exact("sealed", sealed)?,
            group: exact("group", group)?,
        })
    }

    /// Build from perception class codes instead of coefficients.
    pub fn from_codes(
        color_codes: &[u8],
        affinity_codes: &[u8],
        critical: &[f64],
        sealed: &[bool],
        group: &[u32],
    ) -> Result<Self> {
        let color_codes = exact("color", color_codes)?;
        let affinity_codes = exact("advantage", affinity_codes)?;

        let mut color = [0.0; HAND_SIZE];
        let mut advantage = [0.0; HAND_SIZE];
        for i in 0..HAND_SIZE {
            color[i] = CardColor::from_code(color_codes[i])?.coefficient();
            advantage[i] = Affinity::from_code(affinity_codes[i])?.coefficient();
        }

        Self::checked(Self {
            color,
            advantage,
            critical: exact("critical", critical)?,
            sealed: exact("sealed", sealed)?,
            group: exact("group", group)?,
        })
    }

    /// Build from five cards whose indices cover 0..5 exactly once, in any order.
    pub fn from_cards(cards: &[Card]) -> Result<Self> {
        if cards.len() != HAND_SIZE {
            return Err(BattleError::invalid(format!(
                "hand must have {HAND_SIZE} cards, got {}",
                cards.len()
            )));
        }

        let mut seen = [false; HAND_SIZE];
        let mut hand = Self {
            color: [0.0; HAND_SIZE],
            advantage: [0.0; HAND_SIZE],
            critical: [0.0; HAND_SIZE],
            sealed: [false; HAND_SIZE],
            group: [0; HAND_SIZE],
        };

        for card in cards {
            if card.index >= HAND_SIZE || seen[card.index] {
                return Err(BattleError::invalid(format!(
                    "card index {} is out of range or repeated",
                    card.index
                )));
            }
            seen[card.index] = true;

            let i = card.index;
            hand.color[i] = card.color.coefficient();
            hand.advantage[i] = card.affinity.coefficient();
            hand.critical[i] = card.critical_rate;
            hand.sealed[i] = card.sealed;
            hand.group[i] = card.owner;
        }

        Self::checked(hand)
    }

    fn checked(hand: Self) -> Result<Self> {
        for i in 0..HAND_SIZE {
            if !hand.color[i].is_finite() || !hand.advantage[i].is_finite() {
                return Err(BattleError::invalid(format!(
                    "card {i} has a non-finite coefficient (color {}, advantage {})",
                    hand.color[i], hand.advantage[i]
                )));
            }
            // NaN fails the range check too
            if !(0.0..=1.0).contains(&hand.critical[i]) {
                return Err(BattleError::invalid(format!(
                    "critical rate {} of card {i} is outside [0, 1]",
                    hand.critical[i]
                )));
            }
        }
        Ok(hand)
    }

    /// Color coefficient of card `i`.
    #[must_use]
    pub fn color(&self, i: usize) -> f64 {
        self.color[i]
    }

    /// Affinity coefficient of card `i`.
    #[must_use]
    pub fn advantage(&self, i: usize) -> f64 {
        self.advantage[i]
    }

    #[must_use]
    pub fn critical(&self, i: usize) -> f64 {
        self.critical[i]
    }

    #[must_use]
    pub fn is_sealed(&self, i: usize) -> bool {
        self.sealed[i]
    }

    /// Owning party member of card `i`.
    #[must_use]
    pub fn group(&self, i: usize) -> u32 {
        self.group[i]
    }

    /// Cheap single-card strength used to order cards outside the chosen combo.
    #[must_use]
    pub fn fallback_strength(&self, i: usize) -> f64 {
        let usable = if self.sealed[i] { 0.0 } else { 1.0 };
        self.color[i] * self.advantage[i] * usable * (1.0 + self.critical[i])
    }
}
