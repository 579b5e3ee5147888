//! Error type shared by every fallible operation in the crate.
//!
//! Validation always happens before any state is touched, so an `Err`
//! leaves the caller's `BattleState` exactly as it was.

use thiserror::Error;

/// Errors raised by scoring, searching, and battle-state transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// Malformed perception input (wrong slice length, bad code, bad combo).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Combatant, skill, or master-skill index outside its fixed range.
    #[error("{what} index {index} out of range (expected 0..{len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl BattleError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BattleError::InvalidInput(msg.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BattleError>;

/// Check that `index < len`, naming the offending kind of index on failure.
pub(crate) fn check_index(what: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(BattleError::IndexOutOfRange { what, index, len })
    }
}
