//! A listener counting the events of a solve.

use crate::db::keys::ClauseId;
use crate::dispatch::SolverListener;
use crate::structures::literal::RawLiteral;

/// Counts of decisions, propagations, assertions, conflicts and backtracks.
///
/// Counts reset on `init`, so one listener may observe a sequence of solves.
#[derive(Default)]
pub struct StatisticsListener {
    decisions: usize,
    propagations: usize,
    assertions: usize,
    conflicts: usize,
    backtracks: usize,
}

impl StatisticsListener {
    pub fn decisions(&self) -> usize {
        self.decisions
    }

    pub fn propagations(&self) -> usize {
        self.propagations
    }

    pub fn assertions(&self) -> usize {
        self.assertions
    }

    pub fn conflicts(&self) -> usize {
        self.conflicts
    }

    pub fn backtracks(&self) -> usize {
        self.backtracks
    }
}

impl SolverListener for StatisticsListener {
    fn init(&mut self) {
        self.decisions = 0;
        self.propagations = 0;
        self.assertions = 0;
        self.conflicts = 0;
        self.backtracks = 0;
    }

    fn on_decide(&mut self, _literal: RawLiteral) {
        self.decisions += 1;
    }

    fn on_propagate(&mut self, _literal: RawLiteral, _clause: Option<ClauseId>) {
        self.propagations += 1;
    }

    fn on_assert(&mut self, _literal: RawLiteral) {
        self.assertions += 1;
    }

    fn on_conflict(&mut self, _clause: ClauseId) {
        self.conflicts += 1;
    }

    fn on_backtrack(&mut self, _literal: RawLiteral) {
        self.backtracks += 1;
    }
}

impl std::fmt::Display for StatisticsListener {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Statistics [ {} decisions  |  {} propagations  |  {} assertions  |  {} conflicts  |  {} backtracks ]",
            self.decisions, self.propagations, self.assertions, self.conflicts, self.backtracks
        )
    }
}
