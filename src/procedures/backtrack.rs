//! Recovery from a conflict by chronological backtracking.
//!
//! A backtrack undoes exactly one level: the top level's history is replayed
//! on the formula, the level is popped, and the negation of the abandoned
//! decision literal is asserted on the now-current level --- without opening a
//! new one, so the opposite branch is explored in place.
//!
//! If the negation conflicts in turn, the main loop sees the fresh conflict on
//! its next iteration and the backtrack recurses one level further.

use rand::Rng;

use crate::context::GenericContext;
use crate::misc::log::targets;
use crate::types::err;

impl<R: Rng + std::default::Default> GenericContext<R> {
    /// Consumes the recorded conflict, notifying listeners.
    pub fn apply_conflict(&mut self) -> Result<(), err::Solve> {
        let Some(key) = self.conflict.take() else {
            return Ok(());
        };
        self.counters.conflicts += 1;
        self.listeners.on_conflict(self.formula.clause(key)?.id());
        Ok(())
    }

    /// Undoes the top level and asserts the negation of its decision literal.
    pub fn apply_backtrack(&mut self) -> Result<(), err::Solve> {
        let Some(literal) = self.resolution.last_decision_literal() else {
            return Err(err::Solve::MissingDecision);
        };

        log::debug!(target: targets::BACKTRACK, "Backtracking on {}…", self.external(literal));
        self.resolution.replay(&mut self.formula)?;
        self.resolution.pop_level();

        self.counters.backtracks += 1;
        self.listeners.on_backtrack(self.external(literal));

        self.assert_literal(!literal)
    }
}
