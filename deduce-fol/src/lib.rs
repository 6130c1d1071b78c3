/*! Provides a set of tools for parsing, printing and substituting into propositional and
first-order formulae, written in the notation of a natural deduction system. */
#[macro_use]
extern crate tracing;

pub mod parser;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
#[cfg(test)]
pub mod test_prelude;
pub mod trace;
pub mod transform;

pub use parser::{parse, parse_term, parse_with_constants};
