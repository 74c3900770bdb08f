//! Counts for various things which count, roughly.

use std::time::Duration;

/// Counters related to a context/solve.
#[derive(Default)]
pub struct Counters {
    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// A count of every decision made.
    pub decisions: usize,

    /// A count of every unit propagation performed.
    pub propagations: usize,

    /// A count of every conflict seen during a solve.
    pub conflicts: usize,

    /// A count of every backtrack taken.
    pub backtracks: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
