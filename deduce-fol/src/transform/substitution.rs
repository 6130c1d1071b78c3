/*! Implements the substitution of a term for a variable in terms and formulae.

Substitution into a formula is capture-avoiding: when the replacement term mentions the
variable bound by a quantifier, the bound variable is renamed to a [fresh variable] before the
substitution descends into the body of the quantifier.

[fresh variable]: crate::transform::fresh_variable
*/

use super::fresh_variable;
use crate::{
    syntax::{Atom, Formula, Term, V},
    trace::RENAME,
};

/// Is the trait of syntactic objects that admit substituting a term for a variable.
pub trait Substitute {
    /// Replaces the free occurrences of `var` in the receiver with `term`.
    ///
    /// **Example**:
    /// ```rust
    /// # use deduce_fol::syntax::{V, F, Formula, Term};
    /// use deduce_fol::transform::Substitute;
    ///
    /// let x = V::from("x");
    /// let y = V::from("y");
    /// let f_y = F::from("f").app(vec![Term::from(y)]);
    ///
    /// // `y` in `f(y)` is not captured by the quantifier:
    /// let formula: Formula = "forall y. P(x, y)".parse().unwrap();
    /// assert_eq!("∀y0.P(f(y), y0)", formula.substitute(&x, &f_y).to_string());
    /// ```
    fn substitute(&self, var: &V, term: &Term) -> Self;
}

impl Substitute for Term {
    fn substitute(&self, var: &V, term: &Term) -> Self {
        match self {
            Term::Var { variable } if variable == var => term.clone(),
            Term::Var { .. } | Term::Const { .. } => self.clone(),
            Term::App { function, terms } => {
                let terms = terms.iter().map(|t| t.substitute(var, term)).collect();
                function.clone().app(terms)
            }
        }
    }
}

impl Substitute for Formula {
    fn substitute(&self, var: &V, term: &Term) -> Self {
        match self {
            Formula::Bottom => Formula::Bottom,
            Formula::Atom(this) => {
                let terms = this.terms().iter().map(|t| t.substitute(var, term)).collect();
                Atom::new(this.predicate().clone(), terms).into()
            }
            Formula::Not(this) => Formula::not(this.formula().substitute(var, term)),
            Formula::And(this) => this
                .left()
                .substitute(var, term)
                .and(this.right().substitute(var, term)),
            Formula::Or(this) => this
                .left()
                .substitute(var, term)
                .or(this.right().substitute(var, term)),
            Formula::Implies(this) => this
                .premise()
                .substitute(var, term)
                .implies(this.consequence().substitute(var, term)),
            Formula::Forall(this) => {
                substitute_quantified(this.variable(), this.formula(), var, term, Formula::forall)
                    .unwrap_or_else(|| self.clone())
            }
            Formula::Exists(this) => {
                substitute_quantified(this.variable(), this.formula(), var, term, Formula::exists)
                    .unwrap_or_else(|| self.clone())
            }
        }
    }
}

// Substitutes `term` for `var` under a quantifier that binds `bound` in `body`, rebuilding the
// quantifier with `quantify`. Returns `None` when `var` is the bound variable itself, in which
// case the quantified formula is left unchanged. A bound variable that occurs in `term` is
// renamed whether or not `var` occurs free in `body`.
fn substitute_quantified(
    bound: &V,
    body: &Formula,
    var: &V,
    term: &Term,
    quantify: impl Fn(V, Formula) -> Formula,
) -> Option<Formula> {
    if bound == var {
        return None;
    }

    let term_vars = term.variables();
    if term_vars.contains(bound) {
        let mut forbidden = term_vars;
        forbidden.extend(body.free_vars());
        let fresh = fresh_variable(bound, &forbidden);
        debug!(event = RENAME, variable = %bound, fresh = %fresh);

        let renamed = body.substitute(bound, &fresh.clone().into());
        Some(quantify(fresh, renamed.substitute(var, term)))
    } else {
        Some(quantify(bound.clone(), body.substitute(var, term)))
    }
}

impl Formula {
    /// Returns true if `term` is free for `var` in the receiver, that is, substituting `term` for
    /// `var` does not place a variable of `term` in the scope of a quantifier that binds it.
    ///
    /// **Example**:
    /// ```rust
    /// # use deduce_fol::syntax::{V, Formula, Term};
    /// let x = V::from("x");
    /// let y = Term::from(V::from("y"));
    /// let z = Term::from(V::from("z"));
    ///
    /// let formula: Formula = "forall y. P(x, y)".parse().unwrap();
    /// assert!(!formula.is_free_for(&y, &x));
    /// assert!(formula.is_free_for(&z, &x));
    /// ```
    pub fn is_free_for(&self, term: &Term, var: &V) -> bool {
        match self {
            Formula::Bottom | Formula::Atom(_) => true,
            Formula::Not(this) => this.formula().is_free_for(term, var),
            Formula::And(this) => {
                this.left().is_free_for(term, var) && this.right().is_free_for(term, var)
            }
            Formula::Or(this) => {
                this.left().is_free_for(term, var) && this.right().is_free_for(term, var)
            }
            Formula::Implies(this) => {
                this.premise().is_free_for(term, var)
                    && this.consequence().is_free_for(term, var)
            }
            Formula::Forall(this) => quantified_free_for(this.variable(), this.formula(), term, var),
            Formula::Exists(this) => quantified_free_for(this.variable(), this.formula(), term, var),
        }
    }
}

fn quantified_free_for(bound: &V, body: &Formula, term: &Term, var: &V) -> bool {
    if bound == var {
        true
    } else if term.mentions(bound) {
        !body.is_free(var)
    } else {
        body.is_free_for(term, var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, term, test_prelude::*};

    fn formula(text: &str) -> Formula {
        parse(text).unwrap()
    }

    #[test]
    fn test_substitute_term() {
        assert_eq!(y(), x().substitute(&_x(), &y()));
        assert_eq!(x(), x().substitute(&_y(), &a()));
        assert_eq!(a(), a().substitute(&_x(), &y()));
        assert_eq!(
            term!(f(g(z), @A, h(g(z)))),
            term!(f(x, @A, h(x))).substitute(&_x(), &term!(g(z)))
        );
        assert_eq!(
            term!(f(y, y)),
            term!(f(x, y)).substitute(&_x(), &y())
        );
    }

    #[test]
    fn test_substitute_atom() {
        assert_eq!(formula("P(A)"), formula("P(x)").substitute(&_x(), &a()));
        assert_eq!(
            formula("P(A) & Q(A)"),
            formula("P(x) & Q(x)").substitute(&_x(), &a())
        );
        assert_eq!(formula("P(y)"), formula("P(y)").substitute(&_x(), &a()));
        assert_eq!(formula("p"), formula("p").substitute(&_x(), &a()));
        assert_eq!(formula("_"), formula("_").substitute(&_x(), &a()));
    }

    #[test]
    fn test_substitute_connectives() {
        assert_eq!(
            formula("~P(f(y)) | (Q(f(y)) -> R(z, f(y)))"),
            formula("~P(x) | (Q(x) -> R(z, x))").substitute(&_x(), &term!(f(y)))
        );
    }

    #[test]
    fn test_substitute_bound_variable() {
        let original = formula("forall x. P(x)");
        assert_eq!(original, original.substitute(&_x(), &a()));

        let original = formula("exists x. P(x)");
        assert_eq!(original, original.substitute(&_x(), &a()));
    }

    #[test]
    fn test_substitute_outside_scope() {
        assert_eq!(
            formula("(forall x. P(x)) & Q(A)"),
            formula("(forall x. P(x)) & Q(x)").substitute(&_x(), &a())
        );
        assert_eq!(
            "((∀x.P(x)) ∧ Q(A))",
            formula("(forall x. P(x)) & Q(x)")
                .substitute(&_x(), &a())
                .to_string()
        );
    }

    #[test]
    fn test_substitute_no_capture_risk() {
        assert_eq!(
            formula("forall y. P(f(z), y)"),
            formula("forall y. P(x, y)").substitute(&_x(), &term!(f(z)))
        );
        assert_eq!(
            formula("exists y. P(A, y)"),
            formula("exists y. P(x, y)").substitute(&_x(), &a())
        );
    }

    #[test]
    fn test_substitute_avoids_capture() {
        {
            let result = formula("forall y. P(x, y)").substitute(&_x(), &y());
            assert_eq!(formula("forall y0. P(y, y0)"), result);
            assert_ne!(formula("forall y. P(y, y)"), result);
        }
        {
            let result = formula("exists y. P(x, y)").substitute(&_x(), &term!(f(y)));
            assert_eq!("∃y0.P(f(y), y0)", result.to_string());
        }
        {
            // the fresh name avoids the free variables of the body:
            let result = formula("forall y. P(x, y, y0)").substitute(&_x(), &y());
            assert_eq!(formula("forall y1. P(y, y1, y0)"), result);
        }
        {
            // and the variables of the replacement:
            let result = formula("forall y. P(x, y)").substitute(&_x(), &term!(f(y, y0)));
            assert_eq!(formula("forall y1. P(f(y, y0), y1)"), result);
        }
    }

    #[test]
    fn test_substitute_nested_capture() {
        let result = formula("forall y. forall z. R(x, y, z)").substitute(&_x(), &term!(g(y, z)));
        assert_eq!(formula("forall y0. forall z0. R(g(y, z), y0, z0)"), result);

        // renaming the outer variable must not be captured by the inner quantifier:
        let result = formula("forall y. exists y0. P(x, y, y0)").substitute(&_x(), &y());
        assert_eq!(formula("forall y0. exists y00. P(y, y0, y00)"), result);
    }

    #[test]
    fn test_substitute_resulting_binder_differs() {
        let t = term!(h(y, w));
        let result = formula("exists y. (P(x) & Q(y))").substitute(&_x(), &t);
        match &result {
            Formula::Exists(this) => {
                assert!(!t.variables().contains(this.variable()));
            }
            _ => panic!("expected an existential formula"),
        }
        assert_eq!(formula("exists y0. (P(h(y, w)) & Q(y0))"), result);
    }

    #[test]
    fn test_substitute_absent_variable() {
        for text in vec!["P(y)", "forall x. P(x)", "(p -> q) & ~r"] {
            let f = formula(text);
            assert!(!f.is_free(&_x()));
            assert_eq!(f, f.substitute(&_x(), &term!(g(y, z))));
        }
    }

    #[test]
    fn test_substitute_absent_variable_renames_bound() {
        // a bound variable that occurs in the term is renamed even if `x` does not occur:
        assert_eq!(
            formula("forall y0. P(y0)"),
            formula("forall y. P(y)").substitute(&_x(), &y())
        );
        assert_eq!(
            formula("exists y0. forall z0. R(y0, z0, w)"),
            formula("exists y. forall z. R(y, z, w)").substitute(&_x(), &term!(g(y, z)))
        );
        assert_eq!(
            formula("forall y0. (P(y0) & exists x. Q(x, y0))"),
            formula("forall y. (P(y) & exists x. Q(x, y))").substitute(&_x(), &y())
        );
        assert_eq!(
            formula("forall y0. (P(y0) & Q(y, y0))"),
            formula("forall y. (P(y) & Q(x, y))").substitute(&_x(), &y())
        );
    }

    #[test]
    fn test_is_free_for_atomic() {
        assert!(formula("P(x)").is_free_for(&y(), &_x()));
        assert!(formula("_").is_free_for(&y(), &_x()));
        assert!(formula("p").is_free_for(&y(), &_x()));
    }

    #[test]
    fn test_is_free_for_quantifier() {
        let f = formula("forall y. P(x, y)");
        assert!(!f.is_free_for(&y(), &_x()));
        assert!(!f.is_free_for(&term!(f(y)), &_x()));
        assert!(f.is_free_for(&z(), &_x()));
        assert!(f.is_free_for(&a(), &_x()));
        // vacuous when the variable is the bound one:
        assert!(f.is_free_for(&y(), &_y()));
        // `x` does not occur free in the body:
        assert!(formula("forall y. P(z, y)").is_free_for(&y(), &_x()));
        assert!(formula("exists y. P(x, y)").is_free_for(&z(), &_x()));
        assert!(!formula("exists y. P(x, y)").is_free_for(&y(), &_x()));
    }

    #[test]
    fn test_is_free_for_nested() {
        let f = formula("Q(x) & forall z. (P(x) | exists y. R(x, y))");
        assert!(!f.is_free_for(&y(), &_x()));
        assert!(!f.is_free_for(&z(), &_x()));
        assert!(f.is_free_for(&w(), &_x()));
        assert!(formula("~forall y. P(x, y)").is_free_for(&a(), &_x()));
        assert!(!formula("p -> forall y. P(x, y)").is_free_for(&y(), &_x()));
    }

    #[test]
    fn test_is_free_for_agrees_with_substitution() {
        // a term that is free for the variable and mentions no bound variable renames nothing:
        let f = formula("forall y. P(x, y) & exists z. Q(z, x)");
        let t = term!(f(w));
        assert!(f.is_free_for(&t, &_x()));
        assert_eq!(
            formula("forall y. P(f(w), y) & exists z. Q(z, f(w))"),
            f.substitute(&_x(), &t)
        );
    }
}
