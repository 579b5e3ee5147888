//! Card classes and their damage coefficients.
//!
//! Perception reports both classes as small integer codes (0, 1, 2).
//! The coefficients below are what the scorer actually multiplies with.
//!
//! | Code | `CardColor` | coeff | `Affinity`     | coeff |
//! |------|-------------|-------|----------------|-------|
//! | 0    | Arts        | 0.8   | Normal         | 1.0   |
//! | 1    | Quick       | 1.0   | Advantage      | 1.7   |
//! | 2    | Buster      | 1.1   | Disadvantage   | 0.6   |

use serde::{Deserialize, Serialize};

use crate::core::{BattleError, Result};

/// Coefficient of a Buster card; the first-card bonus keys off this value.
pub const BUSTER_COEFFICIENT: f64 = 1.1;

/// Color class of a command card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Arts,
    Quick,
    Buster,
}

impl CardColor {
    /// Damage coefficient used by the scorer.
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            CardColor::Arts => 0.8,
            CardColor::Quick => 1.0,
            CardColor::Buster => BUSTER_COEFFICIENT,
        }
    }

    /// Decode the perception code (0 = Arts, 1 = Quick, 2 = Buster).
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(CardColor::Arts),
            1 => Ok(CardColor::Quick),
            2 => Ok(CardColor::Buster),
            other => Err(BattleError::invalid(format!("unknown card color code {other}"))),
        }
    }
}

/// Class matchup between the card's owner and the enemy side.
///
/// Only the numeric coefficients are relied on; the label names follow the
/// 1.7 / 0.6 split and say nothing about which side holds the edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affinity {
    #[default]
    Normal,
    Advantage,
    Disadvantage,
}

impl Affinity {
    /// Damage coefficient used by the scorer.
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Affinity::Normal => 1.0,
            Affinity::Advantage => 1.7,
            Affinity::Disadvantage => 0.6,
        }
    }

    /// Decode the perception code (0 = Normal, 1 = Advantage, 2 = Disadvantage).
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Affinity::Normal),
            1 => Ok(Affinity::Advantage),
            2 => Ok(Affinity::Disadvantage),
            other => Err(BattleError::invalid(format!("unknown affinity code {other}"))),
        }
    }
}
