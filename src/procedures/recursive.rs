//! The recursive form of the DPLL search.
//!
//! Levels are implicit in the call stack: each frame owns a local
//! [History], propagates a chosen literal, recurses, and on failure replays
//! the history and retries with the opposite literal.
//! Both branches failing is the caller's failure in turn.
//!
//! The contracts match [solve](crate::context::GenericContext::solve) --- the
//! same listener events, the same valuation semantics --- but deep formulas
//! will grow the native stack with the search tree, which is why the iterative
//! form is the canonical one.

use std::time::Instant;

use rand::Rng;

use crate::context::GenericContext;
use crate::db::history::History;
use crate::db::Status;
use crate::misc::log::targets;
use crate::reports;
use crate::structures::literal::Literal;
use crate::structures::valuation::Valuation;
use crate::types::err;

impl<R: Rng + std::default::Default> GenericContext<R> {
    /// Runs the recursive search to completion and reports the outcome.
    pub fn solve_recursive(&mut self) -> Result<reports::Solve, err::Solve> {
        let this_total_time = Instant::now();

        self.listeners.init();
        self.status = Status::Unknown;
        self.valuation = Valuation::new();

        if self.formula.find_unsatisfiable_clause().is_some() {
            self.valuation.set_unsatisfiable();
        } else {
            self.recursive_search()?;
        }

        self.status = match self.valuation.is_satisfiable() {
            true => Status::Consistent,
            false => Status::Inconsistent,
        };

        self.counters.time = this_total_time.elapsed();
        self.listeners.cleanup();
        Ok(self.report())
    }

    fn recursive_search(&mut self) -> Result<(), err::Solve> {
        // Stop cases: nothing left to satisfy, or to assign.
        if !self.formula.has_clauses() {
            log::debug!(target: targets::PROPAGATION, "No more clauses.");
            return Ok(());
        }
        if !self.formula.has_variables() {
            log::debug!(target: targets::PROPAGATION, "No more variables.");
            return Ok(());
        }

        // A unit literal if there is one, the heuristic's choice otherwise.
        let literal = match self.formula.find_unit_literal() {
            Some(unit) => {
                self.counters.propagations += 1;
                self.listeners.on_propagate(self.external(unit), None);
                unit
            }
            None => {
                self.counters.decisions += 1;
                let chosen = self
                    .selector
                    .select(&self.formula, &mut self.rng)
                    .ok_or(err::Solve::NoSelection)?;
                self.listeners.on_decide(self.external(chosen));
                chosen
            }
        };

        let mut history = History::new();

        // First branch.
        let satisfiable = self.propagate_with_history(literal, &mut history)?;
        if satisfiable {
            self.valuation.push(self.external(literal));
            self.recursive_search()?;
            if self.valuation.is_satisfiable() {
                return Ok(());
            }
            self.valuation.pop();
        }

        // Rebuild the formula and try the opposite literal.
        history.replay(&mut self.formula)?;
        self.valuation.set_satisfiable();

        let satisfiable = self.propagate_with_history(!literal, &mut history)?;
        if satisfiable {
            self.valuation.push(self.external(!literal));
            self.recursive_search()?;
            if self.valuation.is_satisfiable() {
                return Ok(());
            }
            self.valuation.pop();
        }

        // Both branches failed.
        self.valuation.set_unsatisfiable();
        self.counters.backtracks += 1;
        history.replay(&mut self.formula)?;
        self.listeners.on_backtrack(self.external(literal));
        Ok(())
    }

    /// Reduction by a literal with removals recorded in a frame-local history,
    /// notifying listeners per clause touched.
    fn propagate_with_history(
        &mut self,
        literal: Literal,
        history: &mut History,
    ) -> Result<bool, err::Solve> {
        while let Some(key) = self.formula.occurrence(literal) {
            history.add_clause(key);
            let id = self.formula.clause(key)?.id();
            self.formula.remove_clause(key)?;
            self.listeners.on_propagate(self.external(literal), Some(id));
        }

        let mut satisfiable = true;
        let opposite = !literal;
        while let Some(key) = self.formula.occurrence(opposite) {
            history.add_literal(key, opposite);
            self.formula.remove_literal_from_clause(key, opposite)?;

            let clause = self.formula.clause(key)?;
            self.listeners
                .on_propagate(self.external(literal), Some(clause.id()));
            if clause.is_unsatisfiable() {
                log::debug!(target: targets::PROPAGATION, "The produced clause is unsatisfiable.");
                satisfiable = false;
                break;
            }
        }

        self.formula.remove_variable(literal.variable());
        self.listeners.on_assert(self.external(literal));
        Ok(satisfiable)
    }
}
