/*! Defines the syntax of propositional and first-order formulae, built from atoms, bottom,
the connectives ¬, ∧, ∨, → and the quantifiers ∀ and ∃. */
use super::{Pred, Term, C, V};
use itertools::Itertools;
use std::{collections::BTreeSet, fmt};

/// Represents an atomic formula, obtained by applying a predicate on a list of terms.
///
/// **Note**: an atom with no terms is a propositional atom such as `p`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    predicate: Pred,
    terms: Vec<Term>,
}

impl Atom {
    /// Creates a new atom.
    pub fn new(predicate: Pred, terms: Vec<Term>) -> Self {
        Self { predicate, terms }
    }

    /// Returns the predicate of the receiver.
    #[inline(always)]
    pub fn predicate(&self) -> &Pred {
        &self.predicate
    }

    /// Returns the terms of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the variables of the terms of the receiver.
    pub fn free_vars(&self) -> BTreeSet<&V> {
        self.terms.iter().flat_map(|t| t.variables()).collect()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.terms.is_empty() {
            write!(f, "{}", self.predicate)
        } else {
            write!(f, "{}({})", self.predicate, self.terms.iter().join(", "))
        }
    }
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Not {
    formula: Formula,
}

impl Not {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: Formula) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }
}

/// Represents the conjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct And {
    left: Formula,
    right: Formula,
}

impl And {
    /// Returns the conjunction of `left` and `right`.
    pub fn new(left: Formula, right: Formula) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &Formula {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &Formula {
        &self.right
    }
}

/// Represents the disjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Or {
    left: Formula,
    right: Formula,
}

impl Or {
    /// Returns the disjunction of `left` and `right`.
    pub fn new(left: Formula, right: Formula) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &Formula {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &Formula {
        &self.right
    }
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implies {
    premise: Formula,
    consequence: Formula,
}

impl Implies {
    /// Returns an implication with a `premise` and a `consequence`.
    pub fn new(premise: Formula, consequence: Formula) -> Self {
        Self {
            premise,
            consequence,
        }
    }

    /// Returns the premise of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &Formula {
        &self.premise
    }

    /// Returns the consequence of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &Formula {
        &self.consequence
    }
}

/// Represents a universally quantified formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Forall {
    variable: V,
    formula: Formula,
}

impl Forall {
    /// Returns a universally quantified formula with bound `variable` and `formula`.
    pub fn new(variable: V, formula: Formula) -> Self {
        Self { variable, formula }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// Returns the formula of the universally quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }
}

/// Represents an existentially quantified formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exists {
    variable: V,
    formula: Formula,
}

impl Exists {
    /// Returns an existentially quantified formula with bound `variable` and `formula`.
    pub fn new(variable: V, formula: Formula) -> Self {
        Self { variable, formula }
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// Returns the formula of the existentially quantified receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }
}

/// Is an abstract syntax tree (AST) for propositional and first-order formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    /// Is logical bottom (⊥) or falsehood.
    Bottom,

    /// Is an atomic formula, wrapping an [`Atom`].
    Atom(Atom),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not>),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And>),

    /// Is a disjunction of two formulae, wrapping an [`Or`].
    Or(Box<Or>),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies>),

    /// Is a universally quantified formula, wrapping a [`Forall`].
    Forall(Box<Forall>),

    /// Is an existentially quantified formula, wrapping an [`Exists`].
    Exists(Box<Exists>),
}

impl From<Atom> for Formula {
    fn from(value: Atom) -> Self {
        Self::Atom(value)
    }
}

impl From<Not> for Formula {
    fn from(value: Not) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And> for Formula {
    fn from(value: And) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or> for Formula {
    fn from(value: Or) -> Self {
        Self::Or(Box::new(value))
    }
}

impl From<Implies> for Formula {
    fn from(value: Implies) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Forall> for Formula {
    fn from(value: Forall) -> Self {
        Self::Forall(Box::new(value))
    }
}

impl From<Exists> for Formula {
    fn from(value: Exists) -> Self {
        Self::Exists(Box::new(value))
    }
}

impl Formula {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    /// Returns a universally quantified formula with the given `variable` and `formula`.
    #[inline(always)]
    pub fn forall(variable: V, formula: Self) -> Self {
        Forall { variable, formula }.into()
    }

    /// Returns an existentially quantified formula with the given `variable` and `formula`.
    #[inline(always)]
    pub fn exists(variable: V, formula: Self) -> Self {
        Exists { variable, formula }.into()
    }

    /// Returns a conjunction of `self` and `other`.
    #[inline(always)]
    pub fn and(self, other: Self) -> Self {
        And {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns a disjunction of `self` and `other`.
    #[inline(always)]
    pub fn or(self, other: Self) -> Self {
        Or {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns an implication between `self` and `other`.
    #[inline(always)]
    pub fn implies(self, other: Self) -> Self {
        Implies {
            premise: self,
            consequence: other,
        }
        .into()
    }

    /// Returns the set of free variable symbols in the receiver formula.
    ///
    /// **Example**:
    /// ```rust
    /// # use deduce_fol::syntax::{V, Formula};
    /// let x = V::from("x");
    /// let y = V::from("y");
    ///
    /// let formula: Formula = "forall x. P(x, y)".parse().unwrap();
    /// assert_eq!(vec![&y], formula.free_vars().into_iter().collect::<Vec<_>>());
    ///
    /// // the `x` of `Q(x)` is outside the scope of the quantifier:
    /// let formula: Formula = "(forall x. P(x)) -> Q(x)".parse().unwrap();
    /// assert_eq!(vec![&x], formula.free_vars().into_iter().collect::<Vec<_>>());
    /// ```
    pub fn free_vars(&self) -> BTreeSet<&V> {
        match self {
            Self::Bottom => BTreeSet::new(),
            Self::Atom(this) => this.free_vars(),
            Self::Not(this) => this.formula.free_vars(),
            Self::And(this) => union(this.left.free_vars(), this.right.free_vars()),
            Self::Or(this) => union(this.left.free_vars(), this.right.free_vars()),
            Self::Implies(this) => {
                union(this.premise.free_vars(), this.consequence.free_vars())
            }
            Self::Forall(this) => bind(this.formula.free_vars(), &this.variable),
            Self::Exists(this) => bind(this.formula.free_vars(), &this.variable),
        }
    }

    /// Returns the set of constant symbols that occur in the receiver.
    pub fn constants(&self) -> BTreeSet<&C> {
        match self {
            Self::Bottom => BTreeSet::new(),
            Self::Atom(this) => this.terms.iter().flat_map(|t| t.constants()).collect(),
            Self::Not(this) => this.formula.constants(),
            Self::And(this) => union(this.left.constants(), this.right.constants()),
            Self::Or(this) => union(this.left.constants(), this.right.constants()),
            Self::Implies(this) => {
                union(this.premise.constants(), this.consequence.constants())
            }
            Self::Forall(this) => this.formula.constants(),
            Self::Exists(this) => this.formula.constants(),
        }
    }

    /// Returns true if `variable` occurs free in the receiver.
    pub fn is_free(&self, variable: &V) -> bool {
        match self {
            Self::Bottom => false,
            Self::Atom(this) => this.terms.iter().any(|t| t.mentions(variable)),
            Self::Not(this) => this.formula.is_free(variable),
            Self::And(this) => this.left.is_free(variable) || this.right.is_free(variable),
            Self::Or(this) => this.left.is_free(variable) || this.right.is_free(variable),
            Self::Implies(this) => {
                this.premise.is_free(variable) || this.consequence.is_free(variable)
            }
            Self::Forall(this) => &this.variable != variable && this.formula.is_free(variable),
            Self::Exists(this) => &this.variable != variable && this.formula.is_free(variable),
        }
    }

    /// Returns true if the receiver has no free variables.
    pub fn is_closed(&self) -> bool {
        self.free_vars().is_empty()
    }

    /// Returns a human readable name for the main connective of the receiver.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bottom => "Bottom",
            Self::Atom(_) => "Atom",
            Self::Not(_) => "Negation",
            Self::And(_) => "Conjunction",
            Self::Or(_) => "Disjunction",
            Self::Implies(_) => "Implication",
            Self::Forall(_) => "Universal",
            Self::Exists(_) => "Existential",
        }
    }

    // A quantifier, possibly under negations, extends as far to the right as possible when
    // parsed. Such a formula must be wrapped in parentheses when it is followed by a connective.
    fn is_open_ended(&self) -> bool {
        match self {
            Self::Forall(_) | Self::Exists(_) => true,
            Self::Not(this) => this.formula.is_open_ended(),
            _ => false,
        }
    }
}

fn union<T: Ord>(mut left: BTreeSet<T>, right: BTreeSet<T>) -> BTreeSet<T> {
    left.extend(right);
    left
}

fn bind<'a>(mut vars: BTreeSet<&'a V>, variable: &V) -> BTreeSet<&'a V> {
    vars.remove(variable);
    vars
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fn parens(formula: &Formula) -> String {
            if formula.is_open_ended() {
                format!("({})", formula)
            } else {
                formula.to_string()
            }
        }
        match self {
            Self::Bottom => write!(f, "⊥"),
            Self::Atom(this) => write!(f, "{}", this),
            // binary connectives bring their own parentheses:
            Self::Not(this) => write!(f, "¬{}", this.formula),
            Self::And(this) => write!(f, "({} ∧ {})", parens(&this.left), this.right),
            Self::Or(this) => write!(f, "({} ∨ {})", parens(&this.left), this.right),
            Self::Implies(this) => {
                write!(f, "({} → {})", parens(&this.premise), this.consequence)
            }
            Self::Forall(this) => write!(f, "∀{}.{}", this.variable, this.formula),
            Self::Exists(this) => write!(f, "∃{}.{}", this.variable, this.formula),
        }
    }
}

// contains no non-ascii characters
impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fn parens(formula: &Formula) -> String {
            if formula.is_open_ended() {
                format!("({:?})", formula)
            } else {
                format!("{:?}", formula)
            }
        }
        match self {
            Self::Bottom => write!(f, "_"),
            Self::Atom(this) => write!(f, "{}", this),
            Self::Not(this) => write!(f, "~{:?}", this.formula),
            Self::And(this) => write!(f, "({} & {:?})", parens(&this.left), this.right),
            Self::Or(this) => write!(f, "({} | {:?})", parens(&this.left), this.right),
            Self::Implies(this) => {
                write!(f, "({} -> {:?})", parens(&this.premise), this.consequence)
            }
            Self::Forall(this) => write!(f, "forall {}. {:?}", this.variable, this.formula),
            Self::Exists(this) => write!(f, "exists {}. {:?}", this.variable, this.formula),
        }
    }
}
