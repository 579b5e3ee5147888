//! End-of-battle report handed to the statistics aggregator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome of one encounter. Aggregating many of these is someone else's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleSummary {
    /// Turns taken.
    pub turns: u32,
    /// Wall time from state creation (or reset) to the summary.
    pub elapsed: Duration,
    pub victory: bool,
}
