//! A resolution level: a run of asserted literals and the history to undo them.

use crate::db::history::History;
use crate::structures::literal::Literal;

/// One level of the resolution stack.
///
/// The first literal is the level's decision; the rest are propagations made
/// within the level.
/// Level zero has no decision, only the propagations made before any choice.
#[derive(Default)]
pub struct Level {
    literals: Vec<Literal>,
    history: History,
}

impl Level {
    pub fn new() -> Self {
        Level::default()
    }

    /// Appends an asserted literal.
    pub fn push_literal(&mut self, literal: Literal) {
        self.literals.push(literal);
    }

    /// The first literal of the level, i.e. the literal selected by a decision.
    pub fn first_literal(&self) -> Option<Literal> {
        self.literals.first().copied()
    }

    /// The literals asserted within the level, in assertion order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The undo log of the level.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub(super) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}
