//! The context --- to which formulas are added and within which solves take place.
//!
//! Strictly, a [GenericContext] and a [Context].
//!
//! The generic context is parameterised to a source of randomness, which only
//! the opt-in random heuristics consume.
//! [Context] fixes the source to the crate's own [Pcg32](crate::generic::pcg),
//! seeded from the configuration, and is the type the front ends and tests
//! use.
//!
//! # Example
//! ```rust
//! # use heron_sat::config::Config;
//! # use heron_sat::context::Context;
//! # use heron_sat::reports;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p_or_q = the_context.literals_from_string("1 2").unwrap();
//! the_context.add_clause(1, &p_or_q).unwrap();
//!
//! let not_p = the_context.literals_from_string("-1").unwrap();
//! the_context.add_clause(2, &not_p).unwrap();
//!
//! assert_eq!(the_context.solve().unwrap(), reports::Solve::Satisfiable);
//!
//! let assigned: Vec<i64> =
//!     the_context.valuation().literals().iter().map(|l| l.as_dimacs()).collect();
//! assert!(assigned.contains(&-1));
//! assert!(assigned.contains(&2));
//! ```

mod counters;
pub use counters::Counters;

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;

use crate::config::Config;
use crate::db::formula::Formula;
use crate::db::keys::ClauseKey;
use crate::db::resolution::ResolutionStack;
use crate::db::Status;
use crate::dispatch::{ListenerDispatcher, SolverListener};
use crate::generic::pcg::Pcg32;
use crate::heuristics::{self, LiteralSelector, PolarityCache};
use crate::reports;
use crate::structures::literal::{Literal, RawLiteral};
use crate::structures::valuation::Valuation;

/// A generic context, parameterised to a source of randomness.
///
/// The source of rng must also implement default to mitigate limitations of
/// the borrow checker.
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context/solve.
    pub counters: Counters,

    /// The formula store.
    pub formula: Formula,

    /// The resolution stack.
    pub resolution: ResolutionStack,

    /// The valuation produced by the last solve.
    pub valuation: Valuation,

    /// The status of the formula.
    pub status: Status,

    /// Listeners observing the solve.
    pub listeners: ListenerDispatcher,

    /// The source of rng.
    pub rng: R,

    /// The decision heuristic.
    pub(crate) selector: Box<dyn LiteralSelector>,

    /// The clause found unsatisfiable by the last reduction, if any.
    pub(crate) conflict: Option<ClauseKey>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context from a configuration and an explicit decision heuristic.
    pub fn with_selector(config: Config, selector: Box<dyn LiteralSelector>) -> Self {
        GenericContext {
            config,
            counters: Counters::default(),
            formula: Formula::new(),
            resolution: ResolutionStack::new(),
            valuation: Valuation::new(),
            status: Status::Unknown,
            listeners: ListenerDispatcher::default(),
            rng: R::default(),
            selector,
            conflict: None,
        }
    }

    /// Registers a listener for the events of a solve.
    pub fn add_listener(&mut self, listener: Rc<RefCell<dyn SolverListener>>) {
        self.listeners.register(listener);
    }

    /// The report of the last solve, from the status of the formula.
    pub fn report(&self) -> reports::Solve {
        match self.status {
            Status::Consistent => reports::Solve::Satisfiable,
            Status::Inconsistent => reports::Solve::Unsatisfiable,
            Status::Unknown => reports::Solve::Unknown,
        }
    }

    /// The valuation produced by the last solve.
    pub fn valuation(&self) -> &Valuation {
        &self.valuation
    }

    /// Whether a conflict clause is recorded.
    pub fn conflicting(&self) -> bool {
        self.conflict.is_some()
    }

    /// The external form of a literal bound to the context's formula.
    pub fn external(&self, literal: Literal) -> RawLiteral {
        self.formula.external(literal)
    }
}

/// A context which uses [Pcg32] as its source of randomness.
pub type Context = GenericContext<Pcg32>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The decision heuristic is built from the configuration, and when
    /// polarity caching is configured the cache is registered as a listener so
    /// later decisions replay asserted polarities.
    pub fn from_config(config: Config) -> Self {
        let mut context = match config.polarity_caching {
            true => {
                let cache = PolarityCache::new();
                let selector = heuristics::from_config(&config, Some(cache.clone()));
                let mut context = GenericContext::with_selector(config, selector);
                context.add_listener(Rc::new(RefCell::new(cache)));
                context
            }
            false => {
                let selector = heuristics::from_config(&config, None);
                GenericContext::with_selector(config, selector)
            }
        };

        context.rng = Pcg32::seed_from_u64(context.config.random_seed);
        context
    }
}
