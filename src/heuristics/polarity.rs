//! The provided polarity selectors.

use rand_core::RngCore;

use crate::config::PolarityLean;
use crate::db::formula::Formula;
use crate::db::keys::VariableIndex;
use crate::heuristics::PolaritySelector;
use crate::structures::literal::Literal;

/// True with the given probability.
///
/// Draws one `u32` from the rng, whatever the outcome.
pub fn lean_true(rng: &mut dyn RngCore, lean: f64) -> bool {
    (rng.next_u32() as f64) < lean * (u32::MAX as f64)
}

/// Positive, unless the variable has no positive occurrence.
pub struct PositiveFirst;

impl PolaritySelector for PositiveFirst {
    fn select(
        &mut self,
        formula: &Formula,
        variable: VariableIndex,
        _rng: &mut dyn RngCore,
    ) -> Literal {
        let polarity = formula.variable(variable).has_positive_occurrence();
        Literal::new(variable, polarity)
    }
}

/// The polarity with the most occurrences, positive on a tie.
pub struct MostUsedPolarity;

impl PolaritySelector for MostUsedPolarity {
    fn select(
        &mut self,
        formula: &Formula,
        variable: VariableIndex,
        _rng: &mut dyn RngCore,
    ) -> Literal {
        let variable_data = formula.variable(variable);
        let polarity = variable_data.count_positive_occurrences()
            >= variable_data.count_negative_occurrences();
        Literal::new(variable, polarity)
    }
}

/// A random polarity, leaning `true` with the configured probability.
pub struct RandomPolarity {
    lean: PolarityLean,
}

impl RandomPolarity {
    pub fn new(lean: PolarityLean) -> Self {
        RandomPolarity { lean }
    }
}

impl PolaritySelector for RandomPolarity {
    fn select(
        &mut self,
        _formula: &Formula,
        variable: VariableIndex,
        rng: &mut dyn RngCore,
    ) -> Literal {
        Literal::new(variable, lean_true(rng, self.lean))
    }
}
