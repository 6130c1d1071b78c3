/*! Defines an abstract syntax tree (AST) for first-order terms and formulae. */

mod formula;
mod macros;
mod symbol;
mod term;

pub use formula::{Atom, And, Exists, Forall, Formula, Implies, Not, Or};
pub use symbol::{Pred, C, F, V};
pub use term::Term;
