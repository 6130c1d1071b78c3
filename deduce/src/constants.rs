use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
     ┌─────────────────────────────────┐
     │   Γ, φ ⊢ ψ                      │
     │  ──────────  (→I)      deduce   │
     │   Γ ⊢ φ → ψ                     │
     └─────────────────────────────────┘
"#;

pub(crate) const HELP: &str = r#"Commands:
  parse <formula>             parse a formula and store it as f1, f2, ...
  list                        list the stored formulae
  clear                       forget the stored formulae
  subst <name> <var> <term>   substitute <term> for <var> in a stored formula
  test                        parse the example formulae
  help                        show this message
  quit                        leave the session (also `exit` or `q`)

Syntax:
  bottom       ⊥ or _
  negation     ~p, !p or ¬p
  conjunction  p & q or p ∧ q
  disjunction  p | q or p ∨ q
  implication  p -> q or p → q
  universal    forall x. P(x) or ∀x. P(x)
  existential  exists x. P(x) or ∃x. P(x)
  terms        x (variable), A (constant), f(x, A) (function application)"#;

pub(crate) const PROMPT: &str = "> ";

pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_FORMULA: StyleId = 2;
pub(crate) const STYLE_SUCCESS: StyleId = 3;
pub(crate) const STYLE_ERROR: StyleId = 4;
