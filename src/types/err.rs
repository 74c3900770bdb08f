/*
Names of the error enums --- for the most part --- overlap with the names of
the structures they relate to.

So, intended use is to namespace errors via the module.

For example:
- use err::{self}
- …
- err::<TYPE>
 */

/// Errors from reading some text representation of a formula or solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parse {
    /// A line could not be read from the source.
    Line(usize),
    /// A token which is not a non-zero signed integer, by line.
    Token(usize),
    /// A clause ran to the end of a line without the terminating zero.
    MissingTerminator(usize),
    /// No `v ` line was found in a solution file.
    MissingSolution,
    /// A string which is not a literal, outside any line context.
    Literal,
}

/// Errors from the formula store.
///
/// `EmptyClause` and `TautologicalClause` are rejections at clause creation,
/// handled by dropping the clause.
/// The remaining variants indicate a primitive was applied to a target in the
/// wrong state, which the solver procedures never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// An attempt to create a clause with no literals.
    EmptyClause,
    /// An attempt to create a clause containing a literal and its negation.
    TautologicalClause,
    /// No clause is stored under the given key.
    MissingClause,
    /// The clause under the given key is in the unused pool.
    InactiveClause,
    /// The clause under the given key is already active.
    ActiveClause,
    /// The literal to remove does not occur in the clause.
    MissingLiteral,
}

/// Errors from building a context from some external source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Build {
    Parse(Parse),
    Formula(Formula),
}

/// Errors from a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solve {
    /// A backtrack was requested with no decision on the resolution stack.
    MissingDecision,
    /// The literal selector failed to return a literal for a formula with active variables.
    NoSelection,
    /// The error from an interaction with the formula store.
    Formula(Formula),
}

/// Errors from reading or rebuilding a sudoku grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grid {
    /// A line could not be read from the grid file.
    Line(usize),
    /// A line which is not a known-cell triplet, by line.
    Cell(usize),
    /// A valuation which does not settle every cell of the grid.
    Incomplete,
}

impl From<Parse> for Build {
    fn from(e: Parse) -> Self {
        Build::Parse(e)
    }
}

impl From<Formula> for Build {
    fn from(e: Formula) -> Self {
        Build::Formula(e)
    }
}

impl From<Formula> for Solve {
    fn from(e: Formula) -> Self {
        Solve::Formula(e)
    }
}
