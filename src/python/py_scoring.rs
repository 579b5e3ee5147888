//! Scoring function bindings for Python.

use pyo3::prelude::*;

use crate::battle;
use crate::scoring;

/// Score one ordered combo of up to three card positions.
#[pyfunction]
#[pyo3(signature = (combo, color, advantage, critical, sealed, group))]
pub fn evaluate_combo(
    combo: Vec<usize>,
    color: Vec<f64>,
    advantage: Vec<f64>,
    critical: Vec<f64>,
    sealed: Vec<bool>,
    group: Vec<u32>,
) -> PyResult<f64> {
    Ok(scoring::evaluate(&combo, &color, &advantage, &critical, &sealed, &group)?)
}

/// Five card positions, the cards to play first.
#[pyfunction]
#[pyo3(signature = (color, advantage, critical, sealed, group, special_count = 0))]
pub fn select_order(
    color: Vec<f64>,
    advantage: Vec<f64>,
    critical: Vec<f64>,
    sealed: Vec<bool>,
    group: Vec<u32>,
    special_count: usize,
) -> PyResult<Vec<usize>> {
    let order =
        scoring::select_order(&color, &advantage, &critical, &sealed, &group, special_count)?;
    Ok(order.to_vec())
}

/// Index of the enemy with the most HP (first one on ties).
#[pyfunction]
pub fn select_best_target(enemy_hp: Vec<u64>) -> usize {
    battle::select_best_target(&enemy_hp)
}
