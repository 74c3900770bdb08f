//! Phase saving: a cache of asserted polarities, replayed on later decisions.
//!
//! The cache is one structure worn two ways.
//! As a [SolverListener] it records the polarity of every assertion.
//! Wrapped in a [CachingPolarity] it answers decisions on a variable with the
//! last polarity the variable was asserted with, delegating to a fallback
//! selector for variables not yet seen.
//!
//! Clones share storage, so registering a clone of the selector's cache as a
//! listener on the same context closes the loop.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use rand_core::RngCore;

use crate::db::formula::Formula;
use crate::db::keys::VariableIndex;
use crate::dispatch::SolverListener;
use crate::heuristics::PolaritySelector;
use crate::structures::literal::{Literal, RawLiteral};

/// The last asserted polarity per external variable id.
#[derive(Clone, Default)]
pub struct PolarityCache {
    remembered: Rc<RefCell<HashMap<u32, bool>>>,
}

impl PolarityCache {
    pub fn new() -> Self {
        PolarityCache::default()
    }

    pub fn record(&self, id: u32, polarity: bool) {
        self.remembered.borrow_mut().insert(id, polarity);
    }

    pub fn recall(&self, id: u32) -> Option<bool> {
        self.remembered.borrow().get(&id).copied()
    }
}

impl SolverListener for PolarityCache {
    fn on_assert(&mut self, literal: RawLiteral) {
        self.record(literal.id(), literal.polarity());
    }
}

/// A polarity selector which prefers the cached polarity of the variable.
pub struct CachingPolarity {
    cache: PolarityCache,
    fallback: Box<dyn PolaritySelector>,
}

impl CachingPolarity {
    pub fn new(cache: PolarityCache, fallback: Box<dyn PolaritySelector>) -> Self {
        CachingPolarity { cache, fallback }
    }
}

impl PolaritySelector for CachingPolarity {
    fn select(
        &mut self,
        formula: &Formula,
        variable: VariableIndex,
        rng: &mut dyn RngCore,
    ) -> Literal {
        let id = formula.variable(variable).id();
        match self.cache.recall(id) {
            Some(polarity) => Literal::new(variable, polarity),
            None => self.fallback.select(formula, variable, rng),
        }
    }
}
