//! Macros for building symbols, terms and atomic formulae from Rust tokens, mostly used in tests.
//! Inside `term!`, `terms!` and `atom!`, a lowercase identifier is a variable and an identifier
//! prefixed by `@` is a constant.

/// Creates a [variable symbol](crate::syntax::V).
#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::V::from(stringify!($v))
    };
}

/// Creates a [function symbol](crate::syntax::F).
#[macro_export]
macro_rules! f {
    ($f:ident) => {
        $crate::syntax::F::from(stringify!($f))
    };
}

/// Creates a [constant symbol](crate::syntax::C).
#[macro_export]
macro_rules! c {
    ($c:ident) => {
        $crate::syntax::C::from(stringify!($c))
    };
}

/// Creates a [predicate symbol](crate::syntax::Pred).
#[macro_export]
macro_rules! pred {
    ($p:ident) => {
        $crate::syntax::Pred::from(stringify!($p))
    };
}

/// Creates a [term](crate::syntax::Term).
///
/// **Example**:
/// ```rust
/// # use deduce_fol::term;
/// assert_eq!("f(x, g(A))", term!(f(x, g(@A))).to_string());
/// ```
#[macro_export]
macro_rules! term {
    ($v:ident) => {
        $crate::syntax::Term::from($crate::v!($v))
    };
    (@$c:ident) => {
        $crate::syntax::Term::from($crate::c!($c))
    };
    ($func:ident ($($t:tt)*)) => {
        $crate::f!($func).app($crate::terms!($($t)*))
    };
}

/// Creates a vector of [terms](crate::syntax::Term), separated by commas.
#[macro_export]
macro_rules! terms {
    (@acc () -> ($($result:tt)*)) => {
        vec![$($result)*]
    };
    (@acc ($v:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!($v),))
    };
    (@acc (@$c:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!(@$c),))
    };
    (@acc ($func:ident ($($t:tt)*) $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!($func ($($t)*)),))
    };
    ($($tail:tt)*) => {
        $crate::terms!(@acc ($($tail)*) -> ())
    };
}

/// Creates an atomic [formula](crate::syntax::Formula), either propositional or a predicate
/// applied to terms.
///
/// **Example**:
/// ```rust
/// # use deduce_fol::atom;
/// assert_eq!("p", atom!(p).to_string());
/// assert_eq!("R(x, f(A))", atom!(R(x, f(@A))).to_string());
/// ```
#[macro_export]
macro_rules! atom {
    ($p:ident) => {
        $crate::pred!($p).app(vec![])
    };
    ($p:ident ($($t:tt)*)) => {
        $crate::pred!($p).app($crate::terms!($($t)*))
    };
}

#[cfg(test)]
mod tests {
    use crate::syntax::{Formula, Term, C, V};
    use crate::test_prelude::*;

    #[test]
    fn test_term_macro() {
        assert_eq!(Term::from(V::from("x")), term!(x));
        assert_eq!(Term::from(C::from("A")), term!(@A));
        assert_eq!(f().app(vec![x(), a()]), term!(f(x, @A)));
        assert_eq!(
            g().app(vec![f().app(vec![y()]), h().app(vec![z(), b()])]),
            term!(g(f(y), h(z, @B)))
        );
        assert_eq!(f().app(vec![]), term!(f()));
    }

    #[test]
    fn test_atom_macro() {
        assert_eq!(p(), atom!(p));
        assert_eq!(P().app(vec![x(), term!(f(@A))]), atom!(P(x, f(@A))));
        assert_eq!(Formula::from(crate::syntax::Atom::new(Q(), vec![])), atom!(Q()));
    }
}
