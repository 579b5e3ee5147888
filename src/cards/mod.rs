//! Card model: color and affinity classes, single cards, and the dealt hand.
//!
//! ## Key Types
//!
//! - `CardColor`: Arts / Quick / Buster with their damage coefficients
//! - `Affinity`: Normal / Advantage / Disadvantage coefficients
//! - `Card`: one recognized card, as perception reports it
//! - `Hand`: validated attributes of all five cards, indexed by position
//!
//! Cards live for a single decision; a new `Hand` is built every turn.

pub mod attributes;
pub mod hand;

pub use attributes::{Affinity, CardColor, BUSTER_COEFFICIENT};
pub use hand::{Card, Hand};
