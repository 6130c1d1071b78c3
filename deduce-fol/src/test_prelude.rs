use crate::syntax::*;

// Variables
pub fn _u() -> V { V::from("u") }

pub fn _v() -> V { V::from("v") }

pub fn _w() -> V { V::from("w") }

pub fn _x() -> V { V::from("x") }

pub fn _y() -> V { V::from("y") }

pub fn _z() -> V { V::from("z") }

pub fn u() -> Term { V::from("u").into() }

pub fn v() -> Term { V::from("v").into() }

pub fn w() -> Term { V::from("w").into() }

pub fn x() -> Term { V::from("x").into() }

pub fn y() -> Term { V::from("y").into() }

pub fn z() -> Term { V::from("z").into() }

// Functions
pub fn f() -> F { F::from("f") }

pub fn g() -> F { F::from("g") }

pub fn h() -> F { F::from("h") }

// Constants
pub fn a() -> Term { C::from("A").into() }

pub fn b() -> Term { C::from("B").into() }

pub fn c() -> Term { C::from("C").into() }

// Predicates
#[allow(non_snake_case)]
pub fn P() -> Pred { Pred::from("P") }

#[allow(non_snake_case)]
pub fn Q() -> Pred { Pred::from("Q") }

#[allow(non_snake_case)]
pub fn R() -> Pred { Pred::from("R") }

// Propositions
pub fn p() -> Formula { Pred::from("p").app(vec![]) }

pub fn q() -> Formula { Pred::from("q").app(vec![]) }

pub fn r() -> Formula { Pred::from("r").app(vec![]) }
