//! Tools for building a context.
//!
//! Clauses reach the formula three ways:
//!
//! - [add_clause](crate::context::GenericContext::add_clause), from a slice of
//!   raw literals.
//! - [new_clause](crate::context::GenericContext::new_clause), through a
//!   fluent [ClauseBuilder] --- the form clause generators use.
//! - [read_dimacs](crate::context::GenericContext::read_dimacs), from a DIMACS
//!   CNF source.
//!
//! All three share one policy: duplicate literals within a clause dedup
//! silently, and a tautological or empty clause is dropped with a debug log
//! rather than stored --- a tautology constrains nothing, and the empty
//! clause would make the formula unconditionally unsatisfiable at load.

mod dimacs;

use rand::Rng;

use crate::context::GenericContext;
use crate::db::keys::{ClauseId, ClauseKey};
use crate::misc::log::targets;
use crate::structures::literal::RawLiteral;
use crate::types::err;

impl<R: Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause to the formula.
    ///
    /// Returns the key of the stored clause, or none when the clause was
    /// dropped as tautological or empty.
    pub fn add_clause(
        &mut self,
        id: ClauseId,
        literals: &[RawLiteral],
    ) -> Result<Option<ClauseKey>, err::Build> {
        match self.formula.create_clause(id, literals) {
            Ok(key) => Ok(Some(key)),
            Err(err::Formula::TautologicalClause) => {
                log::debug!(target: targets::FORMULA, "Clause {id} is a tautology, dropped.");
                Ok(None)
            }
            Err(err::Formula::EmptyClause) => {
                log::debug!(target: targets::FORMULA, "Clause {id} is empty, dropped.");
                Ok(None)
            }
            Err(e) => Err(err::Build::Formula(e)),
        }
    }

    /// Opens a fluent builder for the clause with the given id.
    ///
    /// ```rust
    /// # use heron_sat::config::Config;
    /// # use heron_sat::context::Context;
    /// let mut the_context = Context::from_config(Config::default());
    /// the_context.new_clause(1).positive(1).negative(2).add().unwrap();
    /// ```
    pub fn new_clause(&mut self, id: ClauseId) -> ClauseBuilder<'_, R> {
        ClauseBuilder {
            context: self,
            id,
            literals: Vec::default(),
        }
    }

    /// Raw literals from a string of whitespace-separated signed integers.
    ///
    /// ```rust
    /// # use heron_sat::config::Config;
    /// # use heron_sat::context::Context;
    /// let the_context = Context::from_config(Config::default());
    /// let literals = the_context.literals_from_string("1 -2 3").unwrap();
    /// assert_eq!(literals.len(), 3);
    /// ```
    pub fn literals_from_string(&self, string: &str) -> Result<Vec<RawLiteral>, err::Parse> {
        let mut literals = Vec::default();
        for token in string.split_whitespace() {
            let token: i32 = token.parse().map_err(|_| err::Parse::Literal)?;
            let literal = RawLiteral::from_dimacs(token).ok_or(err::Parse::Literal)?;
            literals.push(literal);
        }
        Ok(literals)
    }
}

/// A clause under construction, tied to the context it will be added to.
pub struct ClauseBuilder<'c, R: Rng + std::default::Default> {
    context: &'c mut GenericContext<R>,
    id: ClauseId,
    literals: Vec<RawLiteral>,
}

impl<R: Rng + std::default::Default> ClauseBuilder<'_, R> {
    /// Appends a positive literal of the given variable.
    pub fn positive(mut self, variable: u32) -> Self {
        self.literals.push(RawLiteral::positive(variable));
        self
    }

    /// Appends a negative literal of the given variable.
    pub fn negative(mut self, variable: u32) -> Self {
        self.literals.push(RawLiteral::negative(variable));
        self
    }

    /// Builds the clause and adds it to the formula.
    pub fn add(self) -> Result<Option<ClauseKey>, err::Build> {
        self.context.add_clause(self.id, &self.literals)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::context::Context;

    #[test]
    fn tautologies_and_empties_drop() {
        let mut the_context = Context::from_config(Config::default());

        let tautology = the_context.literals_from_string("1 -1 2").unwrap();
        assert_eq!(the_context.add_clause(1, &tautology), Ok(None));
        assert_eq!(the_context.add_clause(2, &[]), Ok(None));
        assert!(!the_context.formula.has_clauses());
    }

    #[test]
    fn duplicates_dedup() {
        let mut the_context = Context::from_config(Config::default());

        let key = the_context
            .new_clause(1)
            .positive(1)
            .positive(1)
            .negative(2)
            .add()
            .unwrap()
            .unwrap();
        assert_eq!(the_context.formula.clause(key).unwrap().size(), 2);
    }
}
