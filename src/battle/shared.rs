//! Battle state shared between the turn loop and a background watchdog.
//!
//! Each `with` call holds the lock for the whole closure, so a state
//! transition (e.g. `new_turn` followed by `select_target`) is never
//! interleaved with another task's access.

use std::sync::Arc;

use parking_lot::Mutex;

use super::state::BattleState;

/// Cloneable handle to one encounter's state.
#[derive(Clone, Debug, Default)]
pub struct SharedBattle {
    inner: Arc<Mutex<BattleState>>,
}

impl SharedBattle {
    /// Wrap an existing state.
    #[must_use]
    pub fn new(state: BattleState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Run `f` with exclusive access to the state.
    pub fn with<R>(&self, f: impl FnOnce(&mut BattleState) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> BattleState {
        self.inner.lock().clone()
    }

    /// Start a new encounter in place; every handle sees the reset.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }
}
