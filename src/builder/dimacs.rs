//! Reading DIMACS CNF problems and SAT solutions.
//!
//! The CNF reader is lenient:
//!
//! - Lines starting with `c` are comments, ignored.
//! - Lines starting with `p` are the problem header, ignored --- the stores
//!   grow as clauses arrive, so the counts buy nothing.
//! - A line starting with `%` terminates parsing.
//! - Every other non-blank line holds clauses: whitespace-separated non-zero
//!   signed integers, each clause terminated by `0`. More than one clause may
//!   share a line, but a clause must not run past the end of its line.
//!
//! Clause ids are assigned sequentially from one, in reading order.
//!
//! The solution reader accepts the `v ` line of a DIMACS solution: signed
//! integers terminated by `0`, in assertion order.

use std::io::BufRead;

use rand::Rng;

use crate::context::GenericContext;
use crate::misc::log::targets;
use crate::structures::literal::RawLiteral;
use crate::types::err;

impl<R: Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS CNF problem into the context.
    ///
    /// ```rust
    /// # use heron_sat::config::Config;
    /// # use heron_sat::context::Context;
    /// # use heron_sat::reports;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = "
    /// c Two clauses force 2, the third forbids it.
    /// p cnf 2 3
    ///  1  2 0
    /// -1  2 0
    /// -2 0
    /// ";
    ///
    /// assert!(the_context.read_dimacs(dimacs.as_bytes()).is_ok());
    /// assert!(the_context.solve().is_ok());
    /// assert_eq!(the_context.report(), reports::Solve::Unsatisfiable);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<(), err::Build> {
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<RawLiteral> = Vec::default();

        let mut line_counter = 0;
        let mut clause_counter = 0;

        'line_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'line_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::Build::Parse(err::Parse::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('c') => {}
                Some('p') => {}
                Some('%') => break 'line_loop,
                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                clause_counter += 1;
                                self.add_clause(clause_counter, &the_clause)?;
                            }
                            _ => {
                                let token: i32 = item
                                    .parse()
                                    .map_err(|_| err::Build::Parse(err::Parse::Token(line_counter)))?;
                                // Token zero is covered above, still…
                                let literal = RawLiteral::from_dimacs(token).ok_or(
                                    err::Build::Parse(err::Parse::Token(line_counter)),
                                )?;
                                clause_buffer.push(literal);
                            }
                        }
                    }

                    if !clause_buffer.is_empty() {
                        return Err(err::Build::Parse(err::Parse::MissingTerminator(
                            line_counter,
                        )));
                    }
                }
            }

            buffer.clear();
        }

        log::debug!(
            target: targets::PARSER,
            "Read {clause_counter} clauses over {line_counter} lines; {} clauses and {} variables are in the formula.",
            self.formula.active_clause_count(),
            self.formula.active_variable_count(),
        );
        Ok(())
    }

    /// Reads the candidate assignment of a DIMACS SAT solution: the literals
    /// of the first `v ` line, in order.
    pub fn read_solution(&self, mut reader: impl BufRead) -> Result<Vec<RawLiteral>, err::Parse> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::Parse::Line(line_counter)),
            }

            if buffer.starts_with("v ") {
                let mut solution = Vec::default();
                for item in buffer[2..].split_whitespace() {
                    if item == "0" {
                        return Ok(solution);
                    }
                    let token: i32 = item.parse().map_err(|_| err::Parse::Token(line_counter))?;
                    let literal =
                        RawLiteral::from_dimacs(token).ok_or(err::Parse::Token(line_counter))?;
                    solution.push(literal);
                }
                return Err(err::Parse::MissingTerminator(line_counter));
            }

            buffer.clear();
        }

        Err(err::Parse::MissingSolution)
    }
}
