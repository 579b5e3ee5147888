//! Card-combo scoring and search.
//!
//! - `CardEvaluator`: pure score of one ordered combo
//! - `Arrangements`: lexicographic enumeration of ordered combos
//! - `ComboSearcher`: best combo plus fallback order for the whole hand
//!
//! ## Example
//!
//! ```
//! use battle_autopilot::cards::Hand;
//! use battle_autopilot::scoring::ComboSearcher;
//!
//! let hand = Hand::from_slices(
//!     &[1.0, 1.0, 1.0, 0.8, 1.1],
//!     &[1.0; 5],
//!     &[0.0; 5],
//!     &[false; 5],
//!     &[0, 0, 1, 1, 2],
//! ).unwrap();
//!
//! let play = ComboSearcher::default().select_order(&hand, 0).unwrap();
//! assert_eq!(play.cards_to_play(), &[0, 1, 2]);
//! ```

pub mod arrangements;
pub mod evaluator;
pub mod search;
pub mod weights;

pub use arrangements::{Arrangements, Combo};
pub use evaluator::{evaluate, CardEvaluator};
pub use search::{select_order, ComboSearcher, PlayOrder, ScoredCombo};
pub use weights::ScoringWeights;
