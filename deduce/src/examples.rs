use crate::{constants::*, terminal::Stylus};
use deduce_fol::parse;

pub(crate) const PROPOSITIONAL: &[(&str, &str)] = &[
    ("Simple atom", "p"),
    ("Negation", "~p"),
    ("Conjunction", "p & q"),
    ("Disjunction", "p | q"),
    ("Implication", "p -> q"),
    ("Modus ponens", "(p & (p -> q)) -> q"),
    ("De Morgan", "~(p & q) -> (~p | ~q)"),
    ("Contraposition", "(p -> q) -> (~q -> ~p)"),
    ("Bottom elimination", "⊥ -> p"),
    ("Double negation", "p -> ~~p"),
];

pub(crate) const FIRST_ORDER: &[(&str, &str)] = &[
    ("Predicate", "P(x)"),
    ("Binary relation", "R(x, y)"),
    ("Universal", "forall x. P(x)"),
    ("Existential", "exists x. P(x)"),
    ("Universal conditional", "forall x. (P(x) -> Q(x))"),
    ("Existential conjunction", "exists x. (P(x) & Q(x))"),
    ("Nested quantifiers", "forall x. exists y. R(x, y)"),
    ("Function application", "P(f(x))"),
    ("Complex", "forall x. (P(x) -> exists y. R(x, y))"),
    ("Unicode quantifiers", "∀x. ∃y. R(x, y)"),
];

/// Parses every example formula and prints a line per example. Returns the number of examples
/// that failed to parse.
pub(crate) fn run_examples(stylus: &Stylus) -> usize {
    let mut failures = 0;
    for (title, examples) in &[
        ("Propositional Logic:", PROPOSITIONAL),
        ("First-Order Logic:", FIRST_ORDER),
    ] {
        println!();
        stylus.println(STYLE_INFO, title);
        for (name, text) in examples.iter() {
            stylus.set(STYLE_FORMULA);
            print!("  {:<24} {:<40}", name, text);
            match parse(text) {
                Ok(_) => stylus.println(STYLE_SUCCESS, "✓"),
                Err(e) => {
                    failures += 1;
                    stylus.println(STYLE_ERROR, &format!("✗ ({})", e));
                }
            }
        }
    }
    failures
}
