//! The result of a solve: an ordered sequence of asserted literals, and a flag.
//!
//! Literals appear in assertion order, so the valuation doubles as a trace of
//! the successful branch of the search.
//! The flag defaults to satisfiable, and pushing a literal onto an
//! unsatisfiable valuation resets it --- a valuation with literals was reached
//! by asserting them, whatever state it was in before.
//!
//! The [Display] implementation writes the DIMACS solution form:
//!
//! ```text
//! s SATISFIABLE
//! v 1 -2 3 0
//! ```

use crate::misc::log::targets;
use crate::structures::literal::RawLiteral;

/// An ordered sequence of asserted literals together with a satisfiability flag.
#[derive(Clone, Debug, Default)]
pub struct Valuation {
    literals: Vec<RawLiteral>,
    unsatisfiable: bool,
}

impl Valuation {
    pub fn new() -> Self {
        Valuation::default()
    }

    /// True unless the valuation has been frozen as unsatisfiable.
    pub fn is_satisfiable(&self) -> bool {
        !self.unsatisfiable
    }

    pub fn is_unsatisfiable(&self) -> bool {
        self.unsatisfiable
    }

    pub fn set_satisfiable(&mut self) {
        self.unsatisfiable = false;
    }

    pub fn set_unsatisfiable(&mut self) {
        log::debug!(target: targets::VALUATION, "The valuation is set unsatisfiable.");
        self.unsatisfiable = true;
    }

    /// Appends a literal.
    ///
    /// An unsatisfiable valuation becomes satisfiable again, as the push
    /// witnesses a branch on which assertion succeeded.
    pub fn push(&mut self, literal: RawLiteral) {
        log::debug!(target: targets::VALUATION, "Literal {literal} added to the valuation.");
        self.literals.push(literal);

        if self.unsatisfiable {
            log::debug!(target: targets::VALUATION, "The valuation was unsatisfiable, and has now been set satisfiable.");
            self.unsatisfiable = false;
        }
    }

    /// The most recently pushed literal, if any.
    pub fn top(&self) -> Option<RawLiteral> {
        self.literals.last().copied()
    }

    /// Removes the most recently pushed literal.
    ///
    /// The satisfiability flag is untouched.
    pub fn pop(&mut self) -> Option<RawLiteral> {
        let literal = self.literals.pop();
        if let Some(literal) = literal {
            log::debug!(target: targets::VALUATION, "Literal {literal} removed from the valuation.");
        }
        literal
    }

    /// The literals of the valuation, in assertion order.
    pub fn literals(&self) -> &[RawLiteral] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.unsatisfiable {
            return writeln!(f, "s UNSATISFIABLE");
        }

        writeln!(f, "s SATISFIABLE")?;
        write!(f, "v")?;
        for literal in &self.literals {
            write!(f, " {literal}")?;
        }
        writeln!(f, " 0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_resets_the_flag() {
        let mut valuation = Valuation::new();
        assert!(valuation.is_satisfiable());

        valuation.set_unsatisfiable();
        assert!(valuation.is_unsatisfiable());

        valuation.push(RawLiteral::positive(1));
        assert!(valuation.is_satisfiable());

        valuation.pop();
        assert!(valuation.is_satisfiable());
    }

    #[test]
    fn dimacs_solution_form() {
        let mut valuation = Valuation::new();
        valuation.push(RawLiteral::positive(1));
        valuation.push(RawLiteral::negative(2));
        assert_eq!(valuation.to_string(), "s SATISFIABLE\nv 1 -2 0\n");

        valuation.set_unsatisfiable();
        assert_eq!(valuation.to_string(), "s UNSATISFIABLE\n");
    }
}
