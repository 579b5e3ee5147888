//! Ordered selections of `k` distinct positions out of `n`.
//!
//! ## Enumeration Order
//!
//! Arrangements come out in lexicographic order of their position
//! sequence. For `n = 4, k = 2`:
//!
//! ```text
//! [0,1] [0,2] [0,3] [1,0] [1,2] [1,3] [2,0] [2,1] [2,3] [3,0] [3,1] [3,2]
//! ```
//!
//! The combo searcher keeps the first arrangement that reaches the best
//! score, so this order *is* its tie-break and must not change.
//!
//! ```
//! use battle_autopilot::scoring::Arrangements;
//!
//! let all: Vec<_> = Arrangements::new(5, 3).collect();
//! assert_eq!(all.len(), 60);
//! assert_eq!(all[0].as_slice(), &[0, 1, 2]);
//! assert_eq!(all[59].as_slice(), &[4, 3, 2]);
//! ```

use smallvec::SmallVec;

use crate::core::MAX_COMBO;

/// An ordered combo of card positions.
pub type Combo = SmallVec<[usize; MAX_COMBO]>;

/// Iterator over every `k`-arrangement of `0..n` in lexicographic order.
#[derive(Clone, Debug)]
pub struct Arrangements {
    n: usize,
    k: usize,
    current: Combo,
    started: bool,
    done: bool,
}

impl Arrangements {
    /// Enumerate arrangements of `k` distinct positions from `0..n`.
    ///
    /// Yields nothing when `k > n`, and the single empty arrangement when `k == 0`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            current: SmallVec::new(),
            started: false,
            done: k > n,
        }
    }

    /// Number of arrangements this iterator yields in total: n! / (n-k)!.
    #[must_use]
    pub fn count_total(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        ((n - k + 1)..=n).product()
    }

    /// Step `current` to its lexicographic successor. Returns false when exhausted.
    fn advance(&mut self) -> bool {
        for pos in (0..self.k).rev() {
            let prefix = &self.current[..pos];
            let bumped = (self.current[pos] + 1..self.n).find(|v| !prefix.contains(v));

            if let Some(value) = bumped {
                self.current.truncate(pos);
                self.current.push(value);
                // Refill the tail with the smallest unused positions
                while self.current.len() < self.k {
                    let fill = (0..self.n).find(|v| !self.current.contains(v));
                    match fill {
                        Some(fill) => self.current.push(fill),
                        None => return false,
                    }
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Arrangements {
    type Item = Combo;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            self.current = (0..self.k).collect();
            return Some(self.current.clone());
        }

        if self.advance() {
            Some(self.current.clone())
        } else {
            self.done = true;
            None
        }
    }
}
