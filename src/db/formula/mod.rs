//! The formula store: clauses, variables, and the occurrence index binding them.
//!
//! # Shape
//!
//! A formula is a bipartite graph.
//! On one side, active clauses hold ordered lists of literals.
//! On the other, active variables hold one list of keys to the active clauses
//! in which they occur positively, and one for negative occurrences.
//! The two sides mirror each other exactly: a clause holds the literal (x, s)
//! exactly as often as clause's key appears in x's s-occurrence list, which is
//! exactly once.
//!
//! # Mutation
//!
//! The formula is the sole authority over the graph, and every mutating
//! primitive leaves the mirror intact:
//!
//! - [create_clause](Formula::create_clause) adds a clause and links both
//!   directions, creating variables as needed.
//! - [remove_clause](Formula::remove_clause) unlinks every occurrence of a
//!   clause and parks the clause in the unused pool, with its literal list
//!   preserved.
//! - [remove_literal_from_clause](Formula::remove_literal_from_clause) drops
//!   one literal and its occurrence. The clause stays active even when this
//!   empties it --- an active empty clause is the conflict signal.
//! - [add_clause](Formula::add_clause) and
//!   [add_literal_to_clause](Formula::add_literal_to_clause) are the inverses,
//!   used by [history](crate::db::history) replay.
//!
//! A variable whose last occurrence is unlinked is parked automatically;
//! relinking restores it.
//! Storage is never reclaimed, so keys and indices recorded in histories or
//! valuations stay valid for the lifetime of the formula.

mod clause;
mod variable;

pub use clause::{ClauseStore, StoredClause};
pub use variable::{Variable, VariableStore};

use crate::db::keys::{ClauseId, ClauseKey, VariableIndex};
use crate::misc::log::targets;
use crate::structures::literal::{Literal, RawLiteral};
use crate::types::err;

/// The formula store.
#[derive(Default)]
pub struct Formula {
    variables: VariableStore,
    clauses: ClauseStore,
}

impl Formula {
    pub fn new() -> Self {
        Formula::default()
    }

    /// Creates a clause from raw literals, linking both directions of the
    /// occurrence graph and creating any variable not yet seen.
    ///
    /// Duplicate literals are dropped silently.
    /// A clause containing a literal and its negation is a tautology and is
    /// rejected, as is a clause with no literals.
    pub fn create_clause(
        &mut self,
        id: ClauseId,
        literals: &[RawLiteral],
    ) -> Result<ClauseKey, err::Formula> {
        if literals.is_empty() {
            return Err(err::Formula::EmptyClause);
        }

        let mut kept: Vec<RawLiteral> = Vec::with_capacity(literals.len());
        for literal in literals {
            match kept.iter().find(|k| k.id() == literal.id()) {
                Some(seen) if seen.polarity() == literal.polarity() => {
                    log::debug!(target: targets::FORMULA, "Literal {literal} already in clause {id}, skipped.");
                }
                Some(_) => return Err(err::Formula::TautologicalClause),
                None => kept.push(*literal),
            }
        }

        let bound: Vec<Literal> = kept
            .iter()
            .map(|literal| {
                let index = self.variables.find_or_create(literal.id());
                Literal::new(index, literal.polarity())
            })
            .collect();

        let key = self.clauses.insert(id, bound.clone());
        for literal in bound {
            self.variables.activate(literal.variable());
            self.variables
                .get_mut(literal.variable())
                .add_occurrence(key, literal.polarity());
        }

        log::debug!(target: targets::FORMULA, "Clause {id} added.");
        Ok(key)
    }

    /// The literal of the first active unary clause, in storage order.
    pub fn find_unit_literal(&self) -> Option<Literal> {
        self.clauses
            .active()
            .find(|(_, clause)| clause.is_unary())
            .and_then(|(_, clause)| clause.first_literal())
    }

    /// The first active empty clause, in storage order.
    pub fn find_unsatisfiable_clause(&self) -> Option<ClauseKey> {
        self.clauses
            .active()
            .find(|(_, clause)| clause.is_unsatisfiable())
            .map(|(key, _)| key)
    }

    /// Some active clause containing the literal, if any.
    pub fn occurrence(&self, literal: Literal) -> Option<ClauseKey> {
        self.variables
            .get(literal.variable())
            .first_occurrence(literal.polarity())
    }

    /// Unlinks every occurrence of the clause and moves it to the unused pool.
    ///
    /// The literal list is preserved so [add_clause](Formula::add_clause) can
    /// undo the removal.
    pub fn remove_clause(&mut self, key: ClauseKey) -> Result<(), err::Formula> {
        let clause = self.clauses.get(key).ok_or(err::Formula::MissingClause)?;
        if !clause.is_used() {
            return Err(err::Formula::InactiveClause);
        }
        let id = clause.id();
        let literals = clause.literals().to_vec();

        for literal in literals {
            self.unlink_occurrence(key, literal);
        }
        self.clauses.park(key);

        log::debug!(target: targets::FORMULA, "Clause {id} removed.");
        Ok(())
    }

    /// Removes one literal from an active clause and unlinks the occurrence.
    ///
    /// An emptied clause stays active: it is now the empty clause, and
    /// detecting it is the caller's business.
    pub fn remove_literal_from_clause(
        &mut self,
        key: ClauseKey,
        literal: Literal,
    ) -> Result<(), err::Formula> {
        let clause = self.clauses.get_mut(key).ok_or(err::Formula::MissingClause)?;
        if !clause.is_used() {
            return Err(err::Formula::InactiveClause);
        }
        if !clause.remove_literal(literal) {
            return Err(err::Formula::MissingLiteral);
        }
        let id = clause.id();

        self.unlink_occurrence(key, literal);

        log::debug!(target: targets::FORMULA, "Literal removed from clause {id}.");
        Ok(())
    }

    /// Moves a clause from the unused pool back to the active set, relinking
    /// every occurrence and restoring parked variables.
    pub fn add_clause(&mut self, key: ClauseKey) -> Result<(), err::Formula> {
        let clause = self.clauses.get(key).ok_or(err::Formula::MissingClause)?;
        if clause.is_used() {
            return Err(err::Formula::ActiveClause);
        }
        let id = clause.id();
        let literals = clause.literals().to_vec();

        self.clauses.activate(key);
        for literal in literals {
            self.variables.activate(literal.variable());
            self.variables
                .get_mut(literal.variable())
                .add_occurrence(key, literal.polarity());
        }

        log::debug!(target: targets::FORMULA, "Clause {id} added back.");
        Ok(())
    }

    /// Re-inserts a literal into an active clause, relinking the occurrence
    /// and restoring the variable if it was parked.
    pub fn add_literal_to_clause(
        &mut self,
        key: ClauseKey,
        literal: Literal,
    ) -> Result<(), err::Formula> {
        let clause = self.clauses.get_mut(key).ok_or(err::Formula::MissingClause)?;
        if !clause.is_used() {
            return Err(err::Formula::InactiveClause);
        }
        clause.push_literal(literal);
        let id = clause.id();

        self.variables.activate(literal.variable());
        self.variables
            .get_mut(literal.variable())
            .add_occurrence(key, literal.polarity());

        log::debug!(target: targets::FORMULA, "Literal added back to clause {id}.");
        Ok(())
    }

    /// Moves a variable to the unused pool. A no-op on an unused variable.
    pub fn remove_variable(&mut self, index: VariableIndex) {
        self.variables.park(index);
    }

    /// Moves a variable back to the active pool. A no-op on an active variable.
    pub fn add_variable(&mut self, index: VariableIndex) {
        self.variables.activate(index);
    }

    /// Whether any clause is active.
    pub fn has_clauses(&self) -> bool {
        self.clauses.active_count() > 0
    }

    /// Whether any variable is active.
    pub fn has_variables(&self) -> bool {
        self.variables.active_count() > 0
    }

    /// The variable at the given index, active or not.
    pub fn variable(&self, index: VariableIndex) -> &Variable {
        self.variables.get(index)
    }

    /// The clause under the given key, active or not.
    pub fn clause(&self, key: ClauseKey) -> Result<&StoredClause, err::Formula> {
        self.clauses.get(key).ok_or(err::Formula::MissingClause)
    }

    /// The index of the *active* variable with the given external id.
    pub fn active_index_of(&self, id: u32) -> Option<VariableIndex> {
        self.variables
            .index_of(id)
            .filter(|index| self.variables.get(*index).is_used())
    }

    /// The active variables, in creation order.
    pub fn active_variables(&self) -> impl Iterator<Item = (VariableIndex, &Variable)> {
        self.variables.active()
    }

    /// The active clauses, in storage order.
    pub fn active_clauses(&self) -> impl Iterator<Item = (ClauseKey, &StoredClause)> {
        self.clauses.active()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.count()
    }

    pub fn active_variable_count(&self) -> usize {
        self.variables.active_count()
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.count()
    }

    pub fn active_clause_count(&self) -> usize {
        self.clauses.active_count()
    }

    /// The external form of a bound literal.
    pub fn external(&self, literal: Literal) -> RawLiteral {
        let id = self.variables.get(literal.variable()).id();
        match literal.polarity() {
            true => RawLiteral::positive(id),
            false => RawLiteral::negative(id),
        }
    }

    /// The active formula in DIMACS form, with a problem line.
    pub fn dimacs(&self) -> String {
        let max_id = self
            .active_variables()
            .map(|(_, variable)| variable.id())
            .max()
            .unwrap_or(0);

        let mut out = format!("p cnf {max_id} {}\n", self.active_clause_count());
        for (_, clause) in self.active_clauses() {
            for literal in clause.literals() {
                out.push_str(&self.external(*literal).to_string());
                out.push(' ');
            }
            out.push_str("0\n");
        }
        out
    }

    /// Logs the active clauses and variables at debug level.
    pub fn log(&self) {
        if !log::log_enabled!(target: targets::FORMULA, log::Level::Debug) {
            return;
        }

        log::debug!(target: targets::FORMULA, "Clauses = {{");
        for (_, clause) in self.active_clauses() {
            let literals = clause
                .literals()
                .iter()
                .map(|l| self.external(*l).to_string())
                .collect::<Vec<_>>()
                .join(" v ");
            log::debug!(target: targets::FORMULA, "   {}: {literals}", clause.id());
        }
        log::debug!(target: targets::FORMULA, "}}");

        log::debug!(target: targets::FORMULA, "Variables = {{");
        for (_, variable) in self.active_variables() {
            let ids = |polarity: bool| {
                variable
                    .occurrences(polarity)
                    .iter()
                    .filter_map(|key| self.clauses.get(*key))
                    .map(|clause| clause.id().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            log::debug!(
                target: targets::FORMULA,
                "   x{} \t+{{ {} }} \t-{{ {} }}",
                variable.id(),
                ids(true),
                ids(false),
            );
        }
        log::debug!(target: targets::FORMULA, "}}");
    }

    /// Unlinks one occurrence, parking the variable when neither occurrence
    /// list has an entry left.
    fn unlink_occurrence(&mut self, key: ClauseKey, literal: Literal) {
        let index = literal.variable();
        let unused = {
            let variable = self.variables.get_mut(index);
            variable.remove_occurrence(key, literal.polarity());
            !variable.has_positive_occurrence() && !variable.has_negative_occurrence()
        };
        if unused {
            log::debug!(target: targets::FORMULA, "Variable x{} is not used anymore.", self.variables.get(index).id());
            self.variables.park(index);
        }
    }
}
