//! Plain value types: literals in their raw and bound forms, and valuations.

pub mod literal;
pub mod valuation;

pub use literal::{Literal, RawLiteral};
pub use valuation::Valuation;
