/*! Defines the symbols of [`V`], [`C`], [`F`] and [`Pred`] for making terms and formulae.

[`V`]: crate::syntax::V
[`C`]: crate::syntax::C
[`F`]: crate::syntax::F
[`Pred`]: crate::syntax::Pred
*/

use super::{Atom, Formula, Term};
use std::fmt;

/// Represents an uninterpreted function symbol with a given name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct F(pub String);

impl F {
    /// Applies the receiver on a list of terms.
    ///
    /// **Note**: the definition of [`F`] does not impose any restrictions on the
    /// arity of function symbols. In particular, `f.app(vec![])` builds the term `f()`, which
    /// is representable even though the parser never produces it.
    ///
    /// [`F`]: crate::syntax::F
    pub fn app(self, terms: Vec<Term>) -> Term {
        Term::App {
            function: self,
            terms,
        }
    }

    /// Returns the name of the function symbol.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for F {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a variable symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct V(pub String);

impl V {
    /// Returns the name of the variable symbol.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for V {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a constant symbol with a given name.
///
/// **Note**: Although it is possible to treat nullary functions as constants, we distinguish
/// the two at a syntactic level.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct C(pub String);

impl C {
    /// Returns the name of the constant symbol.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for C {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a predicate symbol with a given name.
///
/// A predicate applied on no terms is a propositional atom.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Pred(pub String);

impl Pred {
    /// Applies the receiver on a list of arguments.
    ///
    /// **Note**: the definition of [`Pred`] does not impose any restrictions
    /// on the arity of predicate symbols.
    ///
    /// [`Pred`]: crate::syntax::Pred
    pub fn app(self, terms: Vec<Term>) -> Formula {
        Atom::new(self, terms).into()
    }

    /// Returns the name of the predicate symbol.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for Pred {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::{c, f, pred, v};

    #[test]
    fn test_var_to_string() {
        assert_eq!("x", v!(x).to_string());
        assert_eq!("y'", crate::syntax::V::from("y'").to_string());
    }

    #[test]
    fn test_func_to_string() {
        assert_eq!("f", f!(f).to_string());
        assert_eq!("g", f!(g).to_string());
    }

    #[test]
    fn test_const_to_string() {
        assert_eq!("A", c!(A).to_string());
        assert_eq!("Socrates", c!(Socrates).to_string());
    }

    #[test]
    fn test_pred_to_string() {
        assert_eq!("P", pred!(P).to_string());
        assert_eq!("p", pred!(p).to_string());
    }

    #[test]
    fn test_pred_app_nullary() {
        assert_eq!("p", pred!(p).app(vec![]).to_string());
    }
}
