//! The undo log for formula mutations.
//!
//! Each step is the inverse of one mutating primitive, holding just enough to
//! locate its target in the formula's unused pool:
//!
//! - [RemoveClause](HistoryStep::RemoveClause) undoes a clause removal by
//!   re-activating the clause with all its preserved literals.
//! - [RemoveLiteral](HistoryStep::RemoveLiteral) undoes a literal removal by
//!   re-inserting the literal and relinking the occurrence.
//!
//! Steps are replayed in strict LIFO order, and replay is exhaustive: an
//! emptied history is all that remains afterwards.

use crate::db::formula::Formula;
use crate::db::keys::ClauseKey;
use crate::misc::log::targets;
use crate::structures::literal::Literal;
use crate::types::err;

/// The inverse of one formula mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryStep {
    /// A clause was removed from the formula.
    RemoveClause(ClauseKey),
    /// A literal was removed from a clause.
    RemoveLiteral(ClauseKey, Literal),
}

/// A LIFO of history steps.
#[derive(Default)]
pub struct History {
    steps: Vec<HistoryStep>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Records the removal of a clause.
    pub fn add_clause(&mut self, clause: ClauseKey) {
        log::debug!(target: targets::HISTORY, "Clause removal added to the history.");
        self.steps.push(HistoryStep::RemoveClause(clause));
    }

    /// Records the removal of a literal from a clause.
    pub fn add_literal(&mut self, clause: ClauseKey, literal: Literal) {
        log::debug!(target: targets::HISTORY, "Literal removal added to the history.");
        self.steps.push(HistoryStep::RemoveLiteral(clause, literal));
    }

    /// Applies the inverse of every step to the formula, most recent first.
    pub fn replay(&mut self, formula: &mut Formula) -> Result<(), err::Formula> {
        log::debug!(target: targets::HISTORY, "Replaying {} steps…", self.steps.len());
        while let Some(step) = self.steps.pop() {
            match step {
                HistoryStep::RemoveClause(key) => formula.add_clause(key)?,
                HistoryStep::RemoveLiteral(key, literal) => {
                    formula.add_literal_to_clause(key, literal)?
                }
            }
        }
        log::debug!(target: targets::HISTORY, "History replayed.");
        Ok(())
    }

    /// Drops every step without touching the formula.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::RawLiteral;

    #[test]
    fn replay_restores_a_removed_clause() {
        let mut formula = Formula::new();
        let key = formula
            .create_clause(1, &[RawLiteral::positive(1), RawLiteral::negative(2)])
            .expect("fresh clause");

        let mut history = History::new();
        history.add_clause(key);
        formula.remove_clause(key).expect("active clause");
        assert!(!formula.has_clauses());

        history.replay(&mut formula).expect("consistent history");
        assert!(history.is_empty());
        assert_eq!(formula.active_clause_count(), 1);
        assert_eq!(formula.active_variable_count(), 2);
    }

    #[test]
    fn replay_is_lifo() {
        let mut formula = Formula::new();
        let key = formula
            .create_clause(1, &[RawLiteral::positive(1), RawLiteral::positive(2)])
            .expect("fresh clause");
        let x1 = formula.active_index_of(1).expect("x1 active");
        let x2 = formula.active_index_of(2).expect("x2 active");

        let mut history = History::new();

        // Empty the clause literal by literal, then remove it.
        for literal in [Literal::new(x1, true), Literal::new(x2, true)] {
            history.add_literal(key, literal);
            formula
                .remove_literal_from_clause(key, literal)
                .expect("literal present");
        }
        history.add_clause(key);
        formula.remove_clause(key).expect("active clause");

        // Replay must add the clause back before refilling it.
        history.replay(&mut formula).expect("consistent history");
        let clause = formula.clause(key).expect("stored");
        assert!(clause.is_used());
        assert_eq!(clause.size(), 2);
    }
}
