//! Checking a candidate solution against the formula.
//!
//! The checker replays the reduction of a solve: the formula is reduced by
//! each literal of the candidate, in order, destructively and without history
//! --- there is nothing to backtrack to.
//! The candidate is valid iff no reduction produced the empty clause and no
//! active clause remains at the end.
//!
//! Literals naming variables the formula does not (or no longer) actively
//! uses are skipped: assigning them can neither satisfy nor empty a clause.

use rand::Rng;

use crate::context::GenericContext;
use crate::misc::log::targets;
use crate::structures::literal::{Literal, RawLiteral};
use crate::types::err;

impl<R: Rng + std::default::Default> GenericContext<R> {
    /// Whether the candidate assignment satisfies the formula.
    ///
    /// Consumes the formula; a context checked once is spent.
    pub fn check_solution(&mut self, solution: &[RawLiteral]) -> Result<bool, err::Solve> {
        for literal in solution {
            if !self.reduce_by(*literal)? {
                log::debug!(target: targets::CHECKER, "An unsatisfiable clause was obtained.");
                return Ok(false);
            }
        }

        match self.formula.has_clauses() {
            false => {
                log::debug!(target: targets::CHECKER, "All clauses could be interpreted.");
                Ok(true)
            }
            true => {
                log::debug!(target: targets::CHECKER, "Some clauses could not be interpreted.");
                Ok(false)
            }
        }
    }

    /// One reduction step: clauses satisfied by the literal are removed, the
    /// opposite literal is removed from clauses containing it, the variable is
    /// parked.
    ///
    /// Returns false iff the reduction produced the empty clause.
    fn reduce_by(&mut self, raw: RawLiteral) -> Result<bool, err::Solve> {
        let Some(index) = self.formula.active_index_of(raw.id()) else {
            return Ok(true);
        };
        let literal = Literal::new(index, raw.polarity());
        log::debug!(target: targets::CHECKER, "Reduction using literal {raw}…");

        while let Some(key) = self.formula.occurrence(literal) {
            self.formula.remove_clause(key)?;
        }

        let mut satisfiable = true;
        let opposite = !literal;
        while let Some(key) = self.formula.occurrence(opposite) {
            self.formula.remove_literal_from_clause(key, opposite)?;
            if self.formula.clause(key)?.is_unsatisfiable() {
                satisfiable = false;
                break;
            }
        }

        self.formula.remove_variable(literal.variable());
        Ok(satisfiable)
    }
}
