/*! Implements substitution of terms for variables and the generation of fresh variables. */
mod fresh;
mod substitution;

pub use fresh::fresh_variable;
pub use substitution::Substitute;
