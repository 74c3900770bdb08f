//! Opening a new level on a literal chosen by the heuristic.

use rand::Rng;

use crate::context::GenericContext;
use crate::misc::log::targets;
use crate::types::err;

impl<R: Rng + std::default::Default> GenericContext<R> {
    /// Opens a new resolution level, selects a decision literal, and asserts it.
    pub fn apply_decide(&mut self) -> Result<(), err::Solve> {
        self.resolution.next_level();
        self.counters.decisions += 1;

        let literal = self
            .selector
            .select(&self.formula, &mut self.rng)
            .ok_or(err::Solve::NoSelection)?;

        log::debug!(target: targets::DECISION, "Decision: {}", self.external(literal));
        self.listeners.on_decide(self.external(literal));

        self.assert_literal(literal)
    }
}
