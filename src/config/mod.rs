//! Configuration details.
//!
//! All configuration for a context is contained within a [Config], fixed at
//! construction time.
//! The default configuration gives a fully deterministic solver: the random
//! heuristics and the time limit are opt-in.

use std::time::Duration;

/// Representation for the probability of choosing `true` when the random
/// polarity selector is used.
pub type PolarityLean = f64;

/// Representation for the probability of making a uniformly random decision
/// in place of the configured variable selector.
pub type RandomDecisionFrequency = f64;

/// Variant ways of selecting the variable of a decision literal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum VariableChoice {
    /// The first variable in active iteration order.
    First,
    /// A variable with the fewest occurrences in active clauses.
    LeastUsed,
    /// A variable with the most occurrences in active clauses.
    #[default]
    MostUsed,
}

impl std::fmt::Display for VariableChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::LeastUsed => write!(f, "least-used"),
            Self::MostUsed => write!(f, "most-used"),
        }
    }
}

/// Variant ways of selecting the polarity of a decision literal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum PolarityChoice {
    /// Positive, unless the variable has no positive occurrence.
    PositiveFirst,
    /// The polarity with the most occurrences, positive on a tie.
    #[default]
    MostUsed,
    /// Random, with the probability of `true` given by the polarity lean.
    Random,
}

impl std::fmt::Display for PolarityChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PositiveFirst => write!(f, "positive-first"),
            Self::MostUsed => write!(f, "most-used"),
            Self::Random => write!(f, "random"),
        }
    }
}

/// The configuration of a context.
#[derive(Clone, Debug)]
pub struct Config {
    /// How the variable of a decision literal is selected.
    pub variable_choice: VariableChoice,

    /// How the polarity of a decision literal is selected.
    pub polarity_choice: PolarityChoice,

    /// Whether the polarity of each assertion is cached and replayed on later
    /// decisions of the same variable (phase saving).
    pub polarity_caching: bool,

    /// The probability of choosing `true` under [PolarityChoice::Random].
    pub polarity_lean: PolarityLean,

    /// The probability of deciding on a uniformly random active variable
    /// rather than consulting the variable selector.
    pub random_decision_frequency: RandomDecisionFrequency,

    /// The seed for the context's source of randomness.
    pub random_seed: u64,

    /// An optional limit on solve time, checked at the top of the main loop.
    ///
    /// An exceeded limit reports [Unknown](crate::reports::Solve::Unknown) ---
    /// never unsatisfiable.
    pub time_limit: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variable_choice: VariableChoice::default(),
            polarity_choice: PolarityChoice::default(),
            polarity_caching: true,
            polarity_lean: 0.5,
            random_decision_frequency: 0.0,
            random_seed: 0,
            time_limit: None,
        }
    }
}
