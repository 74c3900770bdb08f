//! A library for determining the satisfiability of boolean formulas written in
//! conjunctive normal form.
//!
//! # The context
//!
//! The library is built around the core structure of a [context](crate::context):
//! a formula, the stack of the search over it, and the configuration and
//! observers of that search.
//!
//! - The [formula store](crate::db::formula) \
//!   Clauses and variables, cross-indexed: each variable lists the active
//!   clauses in which it occurs, by polarity, and the lists mirror the clause
//!   contents exactly. Clauses and variables are never freed --- removal
//!   during a solve parks them in an unused pool, from where a history step
//!   can restore them.
//! - The [resolution stack](crate::db::resolution) \
//!   One level per decision, holding the literals asserted within the level
//!   and the [history](crate::db::history) of formula mutations to undo when
//!   the level is abandoned.
//! - The [valuation](crate::structures::valuation) \
//!   The result of a solve: the asserted literals in order, or a frozen
//!   unsatisfiable flag.
//!
//! # The search
//!
//! The [solve](crate::context::GenericContext::solve) procedure is a DPLL
//! loop: propagate unit literals, decide on a literal when propagation runs
//! dry, and on a conflict backtrack chronologically --- undo one level and
//! assert the opposite of its decision.
//! Asserting a literal reduces the formula destructively; the history makes
//! every reduction reversible.
//! A [recursive variant](crate::context::GenericContext::solve_recursive)
//! with levels implicit in the call stack is provided for small problems.
//!
//! Decision literals come from pluggable [heuristics](crate::heuristics),
//! composed from a variable selector and a polarity selector.
//! [Listeners](crate::dispatch) observe the events of the search without
//! access to the formula.
//!
//! # Beyond solving
//!
//! - A [solution checker](crate::context::GenericContext::check_solution)
//!   replays a candidate assignment against the formula with the same
//!   reduction primitives.
//! - [Builders](crate::builder) construct clauses from raw literals, strings,
//!   or DIMACS sources.
//! - A [sudoku](crate::sudoku) encoder maps 9×9 grids to CNF and back.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod dispatch;
pub mod generic;
pub mod heuristics;
pub mod misc;
mod procedures;
pub mod reports;
pub mod structures;
pub mod sudoku;
pub mod types;
