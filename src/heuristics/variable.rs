//! The provided variable selectors.
//!
//! All are deterministic and side-effect free, reading only the active
//! variables and their occurrence counts.

use rand_core::RngCore;

use crate::db::formula::Formula;
use crate::db::keys::VariableIndex;
use crate::heuristics::VariableSelector;

/// The first variable in active iteration order.
pub struct FirstVariable;

impl VariableSelector for FirstVariable {
    fn select(&mut self, formula: &Formula, _rng: &mut dyn RngCore) -> Option<VariableIndex> {
        formula.active_variables().next().map(|(index, _)| index)
    }
}

/// A variable minimising the total occurrence count.
pub struct LeastUsedVariable;

impl VariableSelector for LeastUsedVariable {
    fn select(&mut self, formula: &Formula, _rng: &mut dyn RngCore) -> Option<VariableIndex> {
        formula
            .active_variables()
            .min_by_key(|(_, variable)| variable.count_occurrences())
            .map(|(index, _)| index)
    }
}

/// A variable maximising the total occurrence count.
pub struct MostUsedVariable;

impl VariableSelector for MostUsedVariable {
    fn select(&mut self, formula: &Formula, _rng: &mut dyn RngCore) -> Option<VariableIndex> {
        formula
            .active_variables()
            .max_by_key(|(_, variable)| variable.count_occurrences())
            .map(|(index, _)| index)
    }
}
