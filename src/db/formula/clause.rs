//! Stored clauses, and the store which holds them.
//!
//! A stored clause is the external id it was created with, an ordered list of
//! bound literals, and a used flag.
//! The store never evicts: a removed clause parks in the unused pool with its
//! literal list preserved, so the removal can be undone from a history step
//! holding nothing but the key.
//!
//! A clause with no literals is unsatisfiable --- during a solve this is the
//! conflict signal.
//! A clause with exactly one literal is unary, and its literal is a candidate
//! for unit propagation.

use slotmap::SlotMap;

use crate::db::keys::{ClauseId, ClauseKey};
use crate::structures::literal::Literal;

/// A clause as held by the store.
pub struct StoredClause {
    id: ClauseId,
    literals: Vec<Literal>,
    used: bool,
}

impl StoredClause {
    fn new(id: ClauseId, literals: Vec<Literal>) -> Self {
        StoredClause {
            id,
            literals,
            used: true,
        }
    }

    /// The external id of the clause.
    pub fn id(&self) -> ClauseId {
        self.id
    }

    /// Whether the clause is part of the active formula.
    pub fn is_used(&self) -> bool {
        self.used
    }

    /// The literals of the clause, in order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// An empty clause admits no satisfying assignment.
    pub fn is_unsatisfiable(&self) -> bool {
        self.literals.is_empty()
    }

    /// A clause of exactly one literal.
    pub fn is_unary(&self) -> bool {
        self.literals.len() == 1
    }

    /// The first literal of the clause, if any.
    pub fn first_literal(&self) -> Option<Literal> {
        self.literals.first().copied()
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.contains(&literal)
    }

    pub(super) fn push_literal(&mut self, literal: Literal) {
        self.literals.push(literal);
    }

    /// Removes one instance of the literal, preserving the order of the rest.
    pub(super) fn remove_literal(&mut self, literal: Literal) -> bool {
        match self.literals.iter().position(|l| *l == literal) {
            Some(position) => {
                self.literals.remove(position);
                true
            }
            None => false,
        }
    }
}

/// The store of every clause seen by a formula, active or unused.
#[derive(Default)]
pub struct ClauseStore {
    clauses: SlotMap<ClauseKey, StoredClause>,
    active_count: usize,
}

impl ClauseStore {
    pub(super) fn insert(&mut self, id: ClauseId, literals: Vec<Literal>) -> ClauseKey {
        self.active_count += 1;
        self.clauses.insert(StoredClause::new(id, literals))
    }

    pub fn get(&self, key: ClauseKey) -> Option<&StoredClause> {
        self.clauses.get(key)
    }

    pub(super) fn get_mut(&mut self, key: ClauseKey) -> Option<&mut StoredClause> {
        self.clauses.get_mut(key)
    }

    /// Moves a clause to the unused pool.
    ///
    /// The caller has checked the clause is active.
    pub(super) fn park(&mut self, key: ClauseKey) {
        if let Some(clause) = self.clauses.get_mut(key) {
            if clause.used {
                clause.used = false;
                self.active_count -= 1;
            }
        }
    }

    /// Moves a clause back to the active pool.
    ///
    /// The caller has checked the clause is unused.
    pub(super) fn activate(&mut self, key: ClauseKey) {
        if let Some(clause) = self.clauses.get_mut(key) {
            if !clause.used {
                clause.used = true;
                self.active_count += 1;
            }
        }
    }

    /// A count of every clause the store has seen.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of the clauses in the active pool.
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// The active clauses, in storage order.
    ///
    /// Storage order is fixed for the lifetime of the store, so within one
    /// solve the iteration is deterministic.
    pub fn active(&self) -> impl Iterator<Item = (ClauseKey, &StoredClause)> {
        self.clauses.iter().filter(|(_, clause)| clause.used)
    }
}
