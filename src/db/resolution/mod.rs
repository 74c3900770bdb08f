//! The resolution stack: the levels of the search, each with its undo history.
//!
//! A level is opened by a decision and closed by a backtrack.
//! Level zero is created with the stack and holds the unit propagations made
//! before any decision, so the stack is never empty and
//! [current_level](ResolutionStack::current_level) is at least one.
//!
//! The stack owns its levels, each level owns its history, and each history
//! owns its steps: popping a level releases everything recorded in it.
//! Dropping the stack never touches the formula --- a caller wanting the
//! formula restored replays explicitly first.

mod level;
pub use level::Level;

use crate::db::formula::Formula;
use crate::db::history::History;
use crate::db::keys::{ClauseKey, LevelIndex};
use crate::structures::literal::Literal;
use crate::types::err;

/// A non-empty stack of resolution levels.
pub struct ResolutionStack {
    levels: Vec<Level>,
}

impl Default for ResolutionStack {
    fn default() -> Self {
        ResolutionStack {
            levels: vec![Level::new()],
        }
    }
}

impl ResolutionStack {
    pub fn new() -> Self {
        ResolutionStack::default()
    }

    /// Opens a fresh level on top of the stack.
    pub fn next_level(&mut self) {
        self.levels.push(Level::new());
    }

    /// Removes the top level, releasing its literals and history.
    pub fn pop_level(&mut self) {
        self.levels.pop();
    }

    /// A count of the levels in the stack.
    pub fn current_level(&self) -> LevelIndex {
        self.levels.len()
    }

    /// Appends a literal to the top level.
    pub fn push_literal(&mut self, literal: Literal) {
        self.top_mut().push_literal(literal);
    }

    /// The decision literal of the top level, i.e. its first literal.
    pub fn last_decision_literal(&self) -> Option<Literal> {
        self.top().first_literal()
    }

    /// Records the removal of a clause in the top level's history.
    pub fn add_clause(&mut self, clause: ClauseKey) {
        self.top_mut().history_mut().add_clause(clause);
    }

    /// Records the removal of a literal from a clause in the top level's history.
    pub fn add_literal(&mut self, clause: ClauseKey, literal: Literal) {
        self.top_mut().history_mut().add_literal(clause, literal);
    }

    /// Replays the top level's history on the formula.
    pub fn replay(&mut self, formula: &mut Formula) -> Result<(), err::Formula> {
        self.top_mut().history_mut().replay(formula)
    }

    /// The levels of the stack, bottom first.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Every asserted literal, in assertion order across levels.
    pub fn assigned_literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.levels
            .iter()
            .flat_map(|level| level.literals().iter().copied())
    }

    /// The history of the top level.
    pub fn history(&self) -> &History {
        self.top().history()
    }

    fn top(&self) -> &Level {
        self.levels.last().expect("the stack is never empty")
    }

    fn top_mut(&mut self) -> &mut Level {
        self.levels.last_mut().expect("the stack is never empty")
    }
}
