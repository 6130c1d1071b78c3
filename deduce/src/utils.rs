use crate::{
    constants::*,
    terminal::{Style, Stylus},
};
use anyhow::{bail, Error};
use deduce_fol::{
    parse_term, parse_with_constants,
    syntax::{Formula, Term, C, V},
    trace::SUBSTITUTE,
    transform::Substitute,
};
use itertools::Itertools;
use std::collections::BTreeSet;

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_FORMULA, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_SUCCESS,
            Style::new()
                .foreground(term::color::GREEN)
                .attribute(term::Attr::Bold),
        );
        stylus.insert_style(
            STYLE_ERROR,
            Style::new()
                .foreground(term::color::BRIGHT_RED)
                .attribute(term::Attr::Bold),
        );
    }

    stylus
}

/// Parses the text of a formula, given as one or more words on the command line.
pub(crate) fn read_formula(words: &[String]) -> Result<(Formula, BTreeSet<C>), Error> {
    let text = words.join(" ");
    if text.trim().is_empty() {
        bail!("please provide a formula to parse");
    }
    parse_with_constants(&text).map_err(|e| Error::new(e).context("failed to parse the formula"))
}

/// Parses `text` as a term that is a single variable.
pub(crate) fn read_variable(text: &str) -> Result<V, Error> {
    match read_term(text)? {
        Term::Var { variable } => Ok(variable),
        term => bail!("`{}` is not a variable", term),
    }
}

pub(crate) fn read_term(text: &str) -> Result<Term, Error> {
    parse_term(text.trim()).map_err(|e| Error::new(e).context("failed to parse the term"))
}

/// Substitutes `term` for `variable` in `formula`, logging the substitution.
pub(crate) fn substitute(formula: &Formula, variable: &V, term: &Term) -> Formula {
    let result = formula.substitute(variable, term);
    info!(
        event = SUBSTITUTE,
        formula = %formula,
        variable = %variable,
        term = %term,
    );
    result
}

/// Returns the labeled lines that describe the structure of `formula`.
pub(crate) fn report(formula: &Formula, constants: &BTreeSet<C>) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Formula", formula.to_string()),
        ("Kind", formula.kind().to_string()),
    ];

    let free_vars = formula.free_vars();
    if !free_vars.is_empty() {
        lines.push(("Free vars", free_vars.iter().join(", ")));
    }

    match formula {
        Formula::And(this) => {
            lines.push(("Left", this.left().to_string()));
            lines.push(("Right", this.right().to_string()));
        }
        Formula::Or(this) => {
            lines.push(("Left", this.left().to_string()));
            lines.push(("Right", this.right().to_string()));
        }
        Formula::Implies(this) => {
            lines.push(("Left", this.premise().to_string()));
            lines.push(("Right", this.consequence().to_string()));
        }
        Formula::Not(this) => lines.push(("Subformula", this.formula().to_string())),
        Formula::Forall(this) => lines.push(("Subformula", this.formula().to_string())),
        Formula::Exists(this) => lines.push(("Subformula", this.formula().to_string())),
        Formula::Atom(_) | Formula::Bottom => (),
    }

    if !constants.is_empty() {
        lines.push(("Constants", constants.iter().join(", ")));
    }
    lines
}

pub(crate) fn print_report(
    title: &str,
    formula: &Formula,
    constants: &BTreeSet<C>,
    stylus: &Stylus,
) {
    stylus.println(STYLE_SUCCESS, title);
    for (label, value) in report(formula, constants) {
        stylus.set(STYLE_INFO);
        print!("  {:<12}", format!("{}:", label));
        stylus.println(STYLE_FORMULA, &value);
    }
}

pub(crate) fn print_substitution(
    formula: &Formula,
    variable: &V,
    term: &Term,
    result: &Formula,
    stylus: &Stylus,
) {
    stylus.set(STYLE_INFO);
    print!("  {:<12}", "Free for:");
    stylus.println(
        STYLE_FORMULA,
        if formula.is_free_for(term, variable) {
            "yes"
        } else {
            "no, bound variables are renamed"
        },
    );
    stylus.set(STYLE_INFO);
    print!("  {:<12}", format!("[{}/{}]:", term, variable));
    stylus.println(STYLE_FORMULA, &result.to_string());
}

pub(crate) fn print_error(error: &Error, stylus: &Stylus) {
    stylus.println(STYLE_ERROR, &format!("Error: {:#}", error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use deduce_fol::parse;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    fn labels(lines: &[(&'static str, String)]) -> Vec<&'static str> {
        lines.iter().map(|(l, _)| *l).collect()
    }

    #[test]
    fn test_read_formula() {
        let (formula, constants) = read_formula(&words("forall x. P(x, A)")).unwrap();
        assert_eq!(parse("∀x.P(x, A)").unwrap(), formula);
        assert_eq!(vec![C::from("A")], constants.into_iter().collect::<Vec<_>>());

        assert!(read_formula(&[]).is_err());
        assert!(read_formula(&words("   ")).is_err());
        assert!(read_formula(&words("p &")).is_err());
    }

    #[test]
    fn test_read_variable() {
        assert_eq!(V::from("x"), read_variable(" x ").unwrap());
        assert!(read_variable("A").is_err());
        assert!(read_variable("f(x)").is_err());
        assert!(read_variable("").is_err());
    }

    #[test]
    fn test_read_term() {
        assert_eq!("f(y, A)", read_term("f(y, A)").unwrap().to_string());
        assert!(read_term("f(y,)").is_err());
    }

    #[test]
    fn test_substitute() {
        let formula = parse("forall y. P(x, y)").unwrap();
        let term = read_term("f(y)").unwrap();
        assert_eq!(
            "∀y0.P(f(y), y0)",
            substitute(&formula, &V::from("x"), &term).to_string()
        );
    }

    #[test]
    fn test_report_binary() {
        let formula = parse("P(x) -> Q(A)").unwrap();
        let constants = vec![C::from("A")].into_iter().collect();
        let lines = report(&formula, &constants);
        assert_eq!(
            vec!["Formula", "Kind", "Free vars", "Left", "Right", "Constants"],
            labels(&lines)
        );
        assert_eq!("(P(x) → Q(A))", lines[0].1);
        assert_eq!("Implication", lines[1].1);
        assert_eq!("x", lines[2].1);
        assert_eq!("P(x)", lines[3].1);
        assert_eq!("Q(A)", lines[4].1);
        assert_eq!("A", lines[5].1);
    }

    #[test]
    fn test_report_quantifier() {
        let formula = parse("exists x. R(x, z, y)").unwrap();
        let lines = report(&formula, &BTreeSet::new());
        assert_eq!(vec!["Formula", "Kind", "Free vars", "Subformula"], labels(&lines));
        assert_eq!("Existential", lines[1].1);
        assert_eq!("y, z", lines[2].1);
        assert_eq!("R(x, z, y)", lines[3].1);
    }

    #[test]
    fn test_report_atom() {
        let lines = report(&parse("p").unwrap(), &BTreeSet::new());
        assert_eq!(vec!["Formula", "Kind"], labels(&lines));

        let lines = report(&parse("~⊥").unwrap(), &BTreeSet::new());
        assert_eq!(vec!["Formula", "Kind", "Subformula"], labels(&lines));
        assert_eq!("⊥", lines[2].1);
    }
}
