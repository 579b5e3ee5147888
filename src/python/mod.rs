//! Python bindings for the decision core.
//!
//! The perception and tapping side of the bot runs in Python; these
//! bindings let it call the scorer and keep a `BattleState` alive across
//! its per-turn callbacks.
//!
//! # Quick Start
//!
//! ```python
//! import battle_autopilot as bp
//!
//! state = bp.BattleState()
//! state.update_enemy_hp([10000, 52000, 0])
//! state.new_turn(1, 3)
//!
//! order = bp.select_order(
//!     color=[1.0, 1.0, 1.0, 0.8, 1.1],
//!     advantage=[1.0] * 5,
//!     critical=[0.0] * 5,
//!     sealed=[False] * 5,
//!     group=[0, 0, 1, 1, 2],
//!     special_count=0,
//! )
//! target = state.select_best_target()
//! ```

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::BattleError;

mod py_battle;
mod py_scoring;

pub use py_battle::*;
pub use py_scoring::*;

impl From<BattleError> for PyErr {
    fn from(err: BattleError) -> Self {
        match &err {
            BattleError::InvalidInput(_) => PyValueError::new_err(err.to_string()),
            BattleError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        }
    }
}

/// battle_autopilot: turn decisions for the card-chain battle bot.
#[pymodule]
fn battle_autopilot(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Scoring
    m.add_function(wrap_pyfunction!(py_scoring::evaluate_combo, m)?)?;
    m.add_function(wrap_pyfunction!(py_scoring::select_order, m)?)?;
    m.add_function(wrap_pyfunction!(py_scoring::select_best_target, m)?)?;

    // State
    m.add_class::<PyBattleState>()?;

    Ok(())
}
