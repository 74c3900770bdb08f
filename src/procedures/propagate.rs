//! Unit propagation, and the reduction of the formula by an asserted literal.
//!
//! # Reduction
//!
//! Asserting a literal L reduces the formula in three moves:
//!
//! 1. Every active clause containing L is satisfied by L and removed.
//! 2. L's negation is removed from every active clause containing it.
//!    A clause emptied this way is the conflict signal: the sweep records the
//!    conflict and stops, leaving any remaining occurrences of the negation
//!    untouched.
//! 3. L's variable is parked, and L is pushed onto the current level.
//!
//! Every removal of moves 1 and 2 is recorded in the current level's history
//! first, so a backtrack restores the formula exactly --- including the
//! partial state left by a mid-sweep conflict.
//!
//! # Propagation
//!
//! Unit propagation asserts the literal of some unary clause, repeatedly,
//! until no unary clause remains or a conflict arises.
//! Each assertion parks a variable, so propagation makes monotone progress.

use rand::Rng;

use crate::context::GenericContext;
use crate::misc::log::targets;
use crate::structures::literal::Literal;
use crate::types::err;

impl<R: Rng + std::default::Default> GenericContext<R> {
    /// Propagates unit literals until none remain or a conflict arises.
    pub fn full_unit_propagate(&mut self) -> Result<(), err::Solve> {
        while self.apply_unit_propagate()? {}
        Ok(())
    }

    /// Asserts the literal of some unary clause, if one exists.
    ///
    /// Returns true iff a literal was found and asserted without conflict.
    pub fn apply_unit_propagate(&mut self) -> Result<bool, err::Solve> {
        let Some(literal) = self.formula.find_unit_literal() else {
            return Ok(false);
        };

        log::debug!(target: targets::PROPAGATION, "Propagating literal {}…", self.external(literal));
        self.counters.propagations += 1;
        self.listeners.on_propagate(self.external(literal), None);

        self.assert_literal(literal)?;
        Ok(!self.conflicting())
    }

    /// Reduces the formula by the literal and records it on the current level.
    pub fn assert_literal(&mut self, literal: Literal) -> Result<(), err::Solve> {
        self.remove_clauses_with_literal(literal)?;
        self.remove_opposite_literal_from_clauses(literal)?;

        // The variable may already have been parked by the sweeps.
        self.formula.remove_variable(literal.variable());

        self.resolution.push_literal(literal);
        self.listeners.on_assert(self.external(literal));
        Ok(())
    }

    /// Removes the active clauses satisfied by the literal, recording each
    /// removal in the current level's history.
    fn remove_clauses_with_literal(&mut self, literal: Literal) -> Result<(), err::Solve> {
        while let Some(key) = self.formula.occurrence(literal) {
            self.resolution.add_clause(key);
            self.formula.remove_clause(key)?;
        }
        Ok(())
    }

    /// Removes the literal's negation from the active clauses containing it,
    /// stopping at the first clause this empties.
    fn remove_opposite_literal_from_clauses(&mut self, literal: Literal) -> Result<(), err::Solve> {
        let opposite = !literal;
        while let Some(key) = self.formula.occurrence(opposite) {
            self.resolution.add_literal(key, opposite);
            self.formula.remove_literal_from_clause(key, opposite)?;

            if self.formula.clause(key)?.is_unsatisfiable() {
                log::debug!(target: targets::PROPAGATION, "The produced clause is unsatisfiable.");
                self.conflict = Some(key);
                break;
            }
        }
        Ok(())
    }
}
