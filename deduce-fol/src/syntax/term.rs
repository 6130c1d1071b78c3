/*! Defines the syntax for first-order terms. */

use super::{C, F, V};
use std::{collections::BTreeSet, fmt};

/// Represents a first-order term and consists of variables, constants and function applications.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a [variable symbol].
    ///
    /// [variable symbol]: crate::syntax::V
    Var { variable: V },

    /// Is a constant term, wrapping a [constant symbol].
    ///
    /// [constant symbol]: crate::syntax::C
    Const { constant: C },

    /// Is a composite term, made by applying a `function` on a list of `terms`.
    App { function: F, terms: Vec<Term> },
}

impl Term {
    /// Returns the set of all variable symbols in the term.
    ///
    /// **Example**:
    /// ```rust
    /// # use deduce_fol::syntax::{V, C, F, Term};
    /// let x = V::from("x");
    /// let y = V::from("y");
    ///
    /// // f(x, g(y, A, x)):
    /// let t = F::from("f").app(vec![
    ///     Term::from(x.clone()),
    ///     F::from("g").app(vec![
    ///         Term::from(y.clone()),
    ///         Term::from(C::from("A")),
    ///         Term::from(x.clone()),
    ///     ]),
    /// ]);
    ///
    /// assert_eq!(vec![&x, &y], t.variables().into_iter().collect::<Vec<_>>());
    /// ```
    pub fn variables(&self) -> BTreeSet<&V> {
        match self {
            Term::Var { variable } => std::iter::once(variable).collect(),
            Term::Const { .. } => BTreeSet::new(),
            Term::App { terms, .. } => terms.iter().flat_map(|t| t.variables()).collect(),
        }
    }

    /// Returns the set of all constant symbols in the term.
    pub fn constants(&self) -> BTreeSet<&C> {
        match self {
            Term::Var { .. } => BTreeSet::new(),
            Term::Const { constant } => std::iter::once(constant).collect(),
            Term::App { terms, .. } => terms.iter().flat_map(|t| t.constants()).collect(),
        }
    }

    /// Returns true if `variable` occurs in the receiver.
    pub fn mentions(&self, variable: &V) -> bool {
        match self {
            Term::Var { variable: v } => v == variable,
            Term::Const { .. } => false,
            Term::App { terms, .. } => terms.iter().any(|t| t.mentions(variable)),
        }
    }
}

impl From<V> for Term {
    fn from(variable: V) -> Self {
        Self::Var { variable }
    }
}

impl From<C> for Term {
    fn from(constant: C) -> Self {
        Self::Const { constant }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Var { variable } => write!(f, "{}", variable),
            Self::Const { constant } => write!(f, "{}", constant),
            Self::App { function, terms } => {
                let ts: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
                write!(f, "{}({})", function, ts.join(", "))
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
