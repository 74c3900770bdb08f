//! A listener timing a solve by wall clock.

use std::time::{Duration, Instant};

use crate::dispatch::SolverListener;

/// Wall-clock time between `init` and `cleanup`.
#[derive(Default)]
pub struct ChronoListener {
    start: Option<Instant>,
    elapsed: Duration,
}

impl ChronoListener {
    /// The time between the last `init` and `cleanup` pair.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl SolverListener for ChronoListener {
    fn init(&mut self) {
        self.start = Some(Instant::now());
    }

    fn cleanup(&mut self) {
        if let Some(start) = self.start {
            self.elapsed = start.elapsed();
        }
    }
}

impl std::fmt::Display for ChronoListener {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Took {} milliseconds", self.elapsed.as_millis())
    }
}
