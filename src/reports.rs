//! Reports on the outcome of a procedure.

/// The outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solve {
    /// A satisfying valuation was found.
    Satisfiable,
    /// No assignment satisfies the formula.
    Unsatisfiable,
    /// The search was cut short, e.g. by a time limit.
    Unknown,
}

impl std::fmt::Display for Solve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
