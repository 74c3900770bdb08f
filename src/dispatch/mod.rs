//! Events sent to external observers of a solve.
//!
//! A [SolverListener] receives each event of the search: the lifecycle pair
//! `init`/`cleanup`, and the per-step events for decisions, propagations,
//! assertions, conflicts and backtracks.
//! `on_restart` and `on_forget` are hooks for strategies the solver does not
//! implement; nothing calls them, but an extension may.
//!
//! Events carry data in external form --- [RawLiteral]s and clause ids ---
//! so a listener never holds a reference into the formula and cannot mutate
//! the solve it observes.
//!
//! The [ListenerDispatcher] fans each event out to every registered listener
//! in registration order, and all notifications for one assertion complete
//! before the next assertion begins.
//!
//! Listeners are shared: the caller keeps one handle to read results from,
//! the dispatcher keeps another to deliver events to.
//!
//! ```rust
//! # use std::{cell::RefCell, rc::Rc};
//! # use heron_sat::dispatch::listeners::StatisticsListener;
//! # use heron_sat::{config::Config, context::Context};
//! let mut the_context = Context::from_config(Config::default());
//! let statistics = Rc::new(RefCell::new(StatisticsListener::default()));
//! the_context.add_listener(statistics.clone());
//!
//! let unit = the_context.literals_from_string("1").unwrap();
//! the_context.add_clause(1, &unit).unwrap();
//! the_context.solve().unwrap();
//!
//! assert_eq!(statistics.borrow().propagations(), 1);
//! ```

pub mod listeners;

use std::cell::RefCell;
use std::rc::Rc;

use crate::db::keys::ClauseId;
use crate::structures::literal::RawLiteral;

/// An observer of the events of a solve.
///
/// Every method has an empty default, so a listener implements only what it
/// cares about.
pub trait SolverListener {
    /// A solve is about to begin.
    fn init(&mut self) {}

    /// A literal was selected by the decision heuristic.
    fn on_decide(&mut self, _literal: RawLiteral) {}

    /// A literal is being propagated, through the given clause when known.
    fn on_propagate(&mut self, _literal: RawLiteral, _clause: Option<ClauseId>) {}

    /// A literal was asserted and the formula reduced by it.
    fn on_assert(&mut self, _literal: RawLiteral) {}

    /// Reduction produced the empty clause.
    fn on_conflict(&mut self, _clause: ClauseId) {}

    /// The top level was undone; the literal is the abandoned decision.
    fn on_backtrack(&mut self, _literal: RawLiteral) {}

    /// Hook: the solver restarted. No built-in caller.
    fn on_restart(&mut self) {}

    /// Hook: clauses were forgotten. No built-in caller.
    fn on_forget(&mut self) {}

    /// The solve has finished.
    fn cleanup(&mut self) {}
}

/// Fan-out of events to registered listeners, in registration order.
#[derive(Default)]
pub struct ListenerDispatcher {
    listeners: Vec<Rc<RefCell<dyn SolverListener>>>,
}

impl ListenerDispatcher {
    pub fn register(&mut self, listener: Rc<RefCell<dyn SolverListener>>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn init(&self) {
        for listener in &self.listeners {
            listener.borrow_mut().init();
        }
    }

    pub fn on_decide(&self, literal: RawLiteral) {
        for listener in &self.listeners {
            listener.borrow_mut().on_decide(literal);
        }
    }

    pub fn on_propagate(&self, literal: RawLiteral, clause: Option<ClauseId>) {
        for listener in &self.listeners {
            listener.borrow_mut().on_propagate(literal, clause);
        }
    }

    pub fn on_assert(&self, literal: RawLiteral) {
        for listener in &self.listeners {
            listener.borrow_mut().on_assert(literal);
        }
    }

    pub fn on_conflict(&self, clause: ClauseId) {
        for listener in &self.listeners {
            listener.borrow_mut().on_conflict(clause);
        }
    }

    pub fn on_backtrack(&self, literal: RawLiteral) {
        for listener in &self.listeners {
            listener.borrow_mut().on_backtrack(literal);
        }
    }

    pub fn on_restart(&self) {
        for listener in &self.listeners {
            listener.borrow_mut().on_restart();
        }
    }

    pub fn on_forget(&self) {
        for listener in &self.listeners {
            listener.borrow_mut().on_forget();
        }
    }

    pub fn cleanup(&self) {
        for listener in &self.listeners {
            listener.borrow_mut().cleanup();
        }
    }
}
