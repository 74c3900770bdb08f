//! Determining the satisfiability of the formula in a context.
//!
//! The canonical, iterative form of the DPLL loop:
//!
//! ```text
//! while undetermined:
//!     propagate unit literals
//!     if a conflict arose:
//!         at the top level      → unsatisfiable
//!         otherwise             → consume the conflict, backtrack one level
//!     else:
//!         nothing left to solve → satisfiable
//!         otherwise             → decide
//! ```
//!
//! On a satisfiable outcome the valuation is materialised from the resolution
//! stack, bottom level first; on an unsatisfiable outcome the valuation is
//! frozen unsatisfiable.
//!
//! A configured time limit is checked at the top of each iteration.
//! Running out of time reports [Unknown](crate::reports::Solve::Unknown) and
//! leaves the valuation untouched --- an exceeded deadline is never evidence
//! of unsatisfiability.

use std::time::Instant;

use rand::Rng;

use crate::db::Status;
use crate::misc::log::targets;
use crate::reports;
use crate::structures::valuation::Valuation;
use crate::context::GenericContext;
use crate::types::err;

impl<R: Rng + std::default::Default> GenericContext<R> {
    /// Runs the search to completion and reports the outcome.
    pub fn solve(&mut self) -> Result<reports::Solve, err::Solve> {
        let this_total_time = Instant::now();

        self.listeners.init();
        self.status = Status::Unknown;

        // An empty clause present before any assertion is an immediate
        // conflict; nothing later re-checks, as emptiness otherwise only
        // arises through reduction.
        if self.conflict.is_none() {
            self.conflict = self.formula.find_unsatisfiable_clause();
        }

        'search: loop {
            self.counters.total_iterations += 1;
            log::trace!(target: targets::PROPAGATION, "Iteration {}", self.counters.total_iterations);

            if let Some(limit) = self.config.time_limit {
                if this_total_time.elapsed() > limit {
                    log::debug!(target: targets::PROPAGATION, "Time limit exceeded.");
                    break 'search;
                }
            }

            self.full_unit_propagate()?;

            if self.conflicting() {
                if self.resolution.current_level() <= 1 {
                    self.status = Status::Inconsistent;
                    break 'search;
                }
                self.apply_conflict()?;
                self.apply_backtrack()?;
            } else {
                if !self.formula.has_clauses() || !self.formula.has_variables() {
                    self.status = Status::Consistent;
                    break 'search;
                }
                self.apply_decide()?;
            }
        }

        self.counters.time = this_total_time.elapsed();

        match self.status {
            Status::Consistent => {
                let mut valuation = Valuation::new();
                for literal in self.resolution.assigned_literals() {
                    valuation.push(self.formula.external(literal));
                }
                self.valuation = valuation;
            }
            Status::Inconsistent => self.valuation.set_unsatisfiable(),
            Status::Unknown => {}
        }

        self.listeners.cleanup();
        Ok(self.report())
    }
}
