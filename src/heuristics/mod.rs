//! Decision heuristics.
//!
//! A [LiteralSelector] maps the current formula to a decision literal.
//! The provided composition is [VariablePolarity]: pick a variable with a
//! [VariableSelector], then a polarity for it with a [PolaritySelector].
//!
//! Every selector receives the context's source of randomness, and the
//! deterministic selectors ignore it.
//! With the default configuration no selector consumes randomness, so a solve
//! is a function of the formula alone.

mod caching;
mod polarity;
mod variable;

pub use caching::{CachingPolarity, PolarityCache};
pub use polarity::{lean_true, MostUsedPolarity, PositiveFirst, RandomPolarity};
pub use variable::{FirstVariable, LeastUsedVariable, MostUsedVariable};

use rand_core::RngCore;

use crate::config::{Config, PolarityChoice, VariableChoice};
use crate::db::formula::Formula;
use crate::db::keys::VariableIndex;
use crate::misc::log::targets;
use crate::structures::literal::Literal;

/// Selection of a decision literal from the current formula.
pub trait LiteralSelector {
    /// The literal to decide on, or none when no variable is active.
    fn select(&mut self, formula: &Formula, rng: &mut dyn RngCore) -> Option<Literal>;
}

/// Selection of the variable of a decision literal.
pub trait VariableSelector {
    fn select(&mut self, formula: &Formula, rng: &mut dyn RngCore) -> Option<VariableIndex>;
}

/// Selection of the polarity of a decision literal, given its variable.
pub trait PolaritySelector {
    fn select(
        &mut self,
        formula: &Formula,
        variable: VariableIndex,
        rng: &mut dyn RngCore,
    ) -> Literal;
}

/// The composition of a variable selector with a polarity selector.
///
/// When the random decision frequency is positive, a decision may instead be
/// made on a uniformly random active variable; the polarity selector applies
/// either way.
pub struct VariablePolarity {
    variable: Box<dyn VariableSelector>,
    polarity: Box<dyn PolaritySelector>,
    random_decision_frequency: f64,
}

impl VariablePolarity {
    pub fn new(variable: Box<dyn VariableSelector>, polarity: Box<dyn PolaritySelector>) -> Self {
        VariablePolarity {
            variable,
            polarity,
            random_decision_frequency: 0.0,
        }
    }

    pub fn with_random_decisions(mut self, frequency: f64) -> Self {
        self.random_decision_frequency = frequency;
        self
    }

    fn random_variable(formula: &Formula, rng: &mut dyn RngCore) -> Option<VariableIndex> {
        let count = formula.active_variable_count();
        if count == 0 {
            return None;
        }
        let position = rng.next_u32() as usize % count;
        formula
            .active_variables()
            .nth(position)
            .map(|(index, _)| index)
    }
}

impl LiteralSelector for VariablePolarity {
    fn select(&mut self, formula: &Formula, rng: &mut dyn RngCore) -> Option<Literal> {
        let variable = {
            if self.random_decision_frequency > 0.0
                && lean_true(rng, self.random_decision_frequency)
            {
                Self::random_variable(formula, rng)
            } else {
                self.variable.select(formula, rng)
            }
        }?;

        let literal = self.polarity.select(formula, variable, rng);
        log::debug!(target: targets::DECISION, "Literal {} selected.", formula.external(literal));
        Some(literal)
    }
}

/// The selector described by a configuration.
///
/// When polarity caching is requested the polarity selector is wrapped with
/// the given cache; registering the same cache as a listener on the context
/// closes the phase-saving loop.
pub fn from_config(config: &Config, cache: Option<PolarityCache>) -> Box<dyn LiteralSelector> {
    let variable: Box<dyn VariableSelector> = match config.variable_choice {
        VariableChoice::First => Box::new(FirstVariable),
        VariableChoice::LeastUsed => Box::new(LeastUsedVariable),
        VariableChoice::MostUsed => Box::new(MostUsedVariable),
    };

    let polarity: Box<dyn PolaritySelector> = match config.polarity_choice {
        PolarityChoice::PositiveFirst => Box::new(PositiveFirst),
        PolarityChoice::MostUsed => Box::new(MostUsedPolarity),
        PolarityChoice::Random => Box::new(RandomPolarity::new(config.polarity_lean)),
    };

    let polarity: Box<dyn PolaritySelector> = match cache {
        Some(cache) => Box::new(CachingPolarity::new(cache, polarity)),
        None => polarity,
    };

    Box::new(
        VariablePolarity::new(variable, polarity)
            .with_random_decisions(config.random_decision_frequency),
    )
}
