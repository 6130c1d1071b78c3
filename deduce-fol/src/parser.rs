//! Implements a recursive-descent parser for first-order formulae and terms, written with the
//! [`nom`] parser combinators.
//!
//! The module provides the [`parse`] function, together with [`FromStr`] implementations for
//! [`Formula`] and [`Term`]. Every operator has an ASCII and a Unicode spelling, which may be
//! mixed freely:
//!
//! | connective  | ASCII              | Unicode |
//! |-------------|--------------------|---------|
//! | bottom      | `_`                | `⊥`     |
//! | negation    | `~`, `!`           | `¬`     |
//! | conjunction | `&`                | `∧`     |
//! | disjunction | `\|`               | `∨`     |
//! | implication | `->`               | `→`     |
//! | universal   | `forall`           | `∀`     |
//! | existential | `exists`           | `∃`     |
//!
//! Negation binds tighter than conjunction, which binds tighter than disjunction, which binds
//! tighter than implication. Conjunction and disjunction associate to the left, implication to
//! the right, and the body of a quantifier extends as far to the right as possible.
//!
//! **Example**:
//! ```rust
//! use deduce_fol::syntax::Formula;
//!
//! // parse a string into `Formula`:
//! let formula: Formula = "exists x. P(x) & Q(x)".parse().unwrap();
//!
//! assert_eq!("∃x.(P(x) ∧ Q(x))", formula.to_string());
//! ```
//!
//! Arguments that start with a lowercase letter are variables and all other arguments are
//! constants. The constants that the parser encounters are returned by [`parse_with_constants`]:
//! ```rust
//! use deduce_fol::{parse_with_constants, syntax::C};
//!
//! let (formula, constants) = parse_with_constants("∀x.(Loves(x, Alice) → p)").unwrap();
//!
//! assert_eq!("∀x.(Loves(x, Alice) → p)", formula.to_string());
//! assert_eq!(vec![C::from("Alice")], constants.into_iter().collect::<Vec<_>>());
//! ```
//!
//! [`Formula`]: crate::syntax::Formula
//! [`Term`]: crate::syntax::Term
//! [`FromStr`]: std::str::FromStr
use crate::{
    syntax::{Formula, Pred, Term, C, F, V},
    trace::PARSE,
};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::satisfy,
    combinator::{cut, map, opt, recognize, value},
    error::{ErrorKind, ParseError},
    multi::many0,
    sequence::{pair, preceded, terminated},
    Parser,
};
use std::{collections::BTreeSet, str::FromStr};
use thiserror::Error;

const COMMA: &str = ",";
const DOT: &str = ".";
const L_PAREN: &str = "(";
const R_PAREN: &str = ")";
const TILDE: &str = "~";
const EXCLAMATION: &str = "!";
const NEG: &str = "¬";
const AMPERSAND: &str = "&";
const WEDGE: &str = "∧";
const BAR: &str = "|";
const VEE: &str = "∨";
const CHAR_RIGHT_ARROW: &str = "->";
const RIGHT_ARROW: &str = "→";
const FORALL: &str = "forall";
const CHAR_FORALL: &str = "∀";
const EXISTS: &str = "exists";
const CHAR_EXISTS: &str = "∃";

// Parentheses, negations, quantifiers and function applications may nest up to this depth.
const MAX_DEPTH: usize = 128;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TokenType {
    Comma,
    Dot,
    LParen,
    RParen,
    Bottom,
    Not,
    And,
    Or,
    Implies,
    Forall,
    Exists,
    Identifier,
}

impl ToString for TokenType {
    fn to_string(&self) -> String {
        match self {
            Self::Comma => "`,`",
            Self::Dot => "`.`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Bottom => "`⊥`",
            Self::Not => "`¬`",
            Self::And => "`∧`",
            Self::Or => "`∨`",
            Self::Implies => "`→`",
            Self::Forall => "`∀`",
            Self::Exists => "`∃`",
            Self::Identifier => "`identifier`",
        }
        .into()
    }
}

// tokens that may start a formula:
const FORMULA_START: [TokenType; 6] = [
    TokenType::LParen,
    TokenType::Not,
    TokenType::Forall,
    TokenType::Exists,
    TokenType::Bottom,
    TokenType::Identifier,
];

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found:?}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEof {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found:?}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
    #[error("trailing comma in argument list at line {}, column {}", (*.position).line, (*.position).column)]
    TrailingComma { position: Position },
    #[error("cannot quantify over predicate `{name}` at line {}, column {}", (*.position).line, (*.position).column)]
    QuantifiedPredicate { position: Position, name: String },
    #[error("formula is nested too deeply at line {}, column {}", (*.position).line, (*.position).column)]
    NestingTooDeep { position: Position },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }

    /// Returns the position in the source where the error occurred.
    pub fn position(&self) -> &Position {
        match self {
            Self::UnrecognizedToken { position, .. }
            | Self::UnrecognizedEof { position, .. }
            | Self::ExtraToken { position, .. }
            | Self::TrailingComma { position }
            | Self::QuantifiedPredicate { position, .. }
            | Self::NestingTooDeep { position } => position,
        }
    }
}

/// Is a line and column in the source, both starting at 1. Columns count characters, not bytes.
#[derive(Clone, PartialEq, Debug)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    // Returns the byte offset of `rest`, a suffix of the source that is left unparsed.
    fn offset(&self, rest: &str) -> usize {
        self.source.len() - rest.len()
    }

    fn position(&self, location: usize) -> Position {
        let line = self
            .lines
            .iter()
            .position(|l| location < *l)
            .unwrap_or_else(|| self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }
}

#[derive(Debug)]
enum Reason {
    Expected(&'static [TokenType]),
    TrailingComma,
    QuantifiedPredicate(String),
    TooDeep,
}

// Is the error that the combinators pass around. It keeps the input that was left when the
// parser failed, from which the position of the failure is recovered.
#[derive(Debug)]
struct Mismatch<'s> {
    rest: &'s str,
    reason: Reason,
}

impl<'s> Mismatch<'s> {
    fn new(rest: &'s str, reason: Reason) -> Self {
        Self { rest, reason }
    }

    fn into_error(self, info: &SourceInfo) -> Error {
        let position = info.position(info.offset(self.rest));
        match self.reason {
            Reason::Expected(expected) => match self.rest.chars().next() {
                Some(c) => Error::UnrecognizedToken {
                    position,
                    expected: expected.to_vec(),
                    found: c.to_string(),
                },
                None => Error::UnrecognizedEof {
                    position,
                    expected: expected.to_vec(),
                },
            },
            Reason::TrailingComma => Error::TrailingComma { position },
            Reason::QuantifiedPredicate(name) => Error::QuantifiedPredicate { position, name },
            Reason::TooDeep => Error::NestingTooDeep { position },
        }
    }
}

impl<'s> ParseError<&'s str> for Mismatch<'s> {
    fn from_error_kind(input: &'s str, _: ErrorKind) -> Self {
        Self::new(input, Reason::Expected(&[]))
    }

    fn append(_: &'s str, _: ErrorKind, other: Self) -> Self {
        other
    }

    // keep the alternative that got further into the input, or the later one on a tie:
    fn or(self, other: Self) -> Self {
        if other.rest.len() <= self.rest.len() {
            other
        } else {
            self
        }
    }
}

type IResult<'s, O> = nom::IResult<&'s str, O, Mismatch<'s>>;

fn is_bottom(c: char) -> bool {
    c == '⊥' || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

fn starts_lowercase(name: &str) -> bool {
    name.chars().next().map_or(false, char::is_lowercase)
}

fn starts_uppercase(name: &str) -> bool {
    name.chars().next().map_or(false, char::is_uppercase)
}

fn space<'s>(input: &'s str) -> IResult<'s, &'s str> {
    take_while(char::is_whitespace)(input)
}

fn symbol<'s>(token: &'static str) -> impl FnMut(&'s str) -> IResult<'s, &'s str> {
    preceded(space, tag(token))
}

fn not<'s>(input: &'s str) -> IResult<'s, &'s str> {
    preceded(space, alt((tag(TILDE), tag(NEG), tag(EXCLAMATION))))(input)
}

fn and<'s>(input: &'s str) -> IResult<'s, &'s str> {
    preceded(space, alt((tag(AMPERSAND), tag(WEDGE))))(input)
}

fn or<'s>(input: &'s str) -> IResult<'s, &'s str> {
    preceded(space, alt((tag(BAR), tag(VEE))))(input)
}

fn implies<'s>(input: &'s str) -> IResult<'s, &'s str> {
    preceded(space, alt((tag(CHAR_RIGHT_ARROW), tag(RIGHT_ARROW))))(input)
}

// An identifier is a letter followed by letters, digits, `_` or `'`.
fn identifier<'s>(input: &'s str) -> IResult<'s, &'s str> {
    recognize(pair(
        satisfy(char::is_alphabetic),
        take_while(is_identifier_part),
    ))(input)
}

// Skips whitespace and runs `parser`, reporting a recoverable error as a mismatch against the
// `expected` tokens at the position where `parser` started.
fn expect<'s, O, P>(
    expected: &'static [TokenType],
    mut parser: P,
) -> impl FnMut(&'s str) -> IResult<'s, O>
where
    P: Parser<&'s str, O, Mismatch<'s>>,
{
    move |input: &'s str| {
        let (input, _) = space(input)?;
        parser.parse(input).map_err(|e| match e {
            nom::Err::Error(_) => nom::Err::Error(Mismatch::new(input, Reason::Expected(expected))),
            e => e,
        })
    }
}

// Returns the depth of a construct nested at `input`, or fails if it is too deep.
fn deeper<'s>(input: &'s str, depth: usize) -> Result<usize, nom::Err<Mismatch<'s>>> {
    if depth < MAX_DEPTH {
        Ok(depth + 1)
    } else {
        Err(nom::Err::Failure(Mismatch::new(input, Reason::TooDeep)))
    }
}

fn formula<'s>(input: &'s str, depth: usize) -> IResult<'s, Formula> {
    implication(input, depth)
}

fn implication<'s>(input: &'s str, depth: usize) -> IResult<'s, Formula> {
    let (input, premise) = disjunction(input, depth)?;
    let (input, mut rest) = many0(preceded(implies, cut(|i| disjunction(i, depth))))(input)?;
    let formula = match rest.pop() {
        Some(last) => {
            let consequence = rest
                .into_iter()
                .rev()
                .fold(last, |right, left| left.implies(right));
            premise.implies(consequence)
        }
        None => premise,
    };
    Ok((input, formula))
}

fn disjunction<'s>(input: &'s str, depth: usize) -> IResult<'s, Formula> {
    let (input, first) = conjunction(input, depth)?;
    let (input, rest) = many0(preceded(or, cut(|i| conjunction(i, depth))))(input)?;
    Ok((input, rest.into_iter().fold(first, Formula::or)))
}

fn conjunction<'s>(input: &'s str, depth: usize) -> IResult<'s, Formula> {
    let (input, first) = negation(input, depth)?;
    let (input, rest) = many0(preceded(and, cut(|i| negation(i, depth))))(input)?;
    Ok((input, rest.into_iter().fold(first, Formula::and)))
}

fn negation<'s>(input: &'s str, depth: usize) -> IResult<'s, Formula> {
    alt((
        map(preceded(not, cut(|i| negated(i, depth))), Formula::not),
        |i| primary(i, depth),
    ))(input)
}

fn negated<'s>(input: &'s str, depth: usize) -> IResult<'s, Formula> {
    let depth = deeper(input, depth)?;
    negation(input, depth)
}

fn primary<'s>(input: &'s str, depth: usize) -> IResult<'s, Formula> {
    expect(
        &FORMULA_START,
        alt((
            preceded(tag(L_PAREN), cut(|i| parenthesized(i, depth))),
            preceded(
                alt((tag(FORALL), tag(CHAR_FORALL))),
                cut(|i| quantified(i, depth, Formula::forall)),
            ),
            preceded(
                alt((tag(EXISTS), tag(CHAR_EXISTS))),
                cut(|i| quantified(i, depth, Formula::exists)),
            ),
            |i| atom(i, depth),
        )),
    )(input)
}

fn parenthesized<'s>(input: &'s str, depth: usize) -> IResult<'s, Formula> {
    let depth = deeper(input, depth)?;
    terminated(
        move |i| formula(i, depth),
        expect(&[TokenType::RParen], tag(R_PAREN)),
    )(input)
}

// Parses what follows a quantifier symbol: the bound variable, an optional dot and the body.
fn quantified<'s>(
    input: &'s str,
    depth: usize,
    quantify: fn(V, Formula) -> Formula,
) -> IResult<'s, Formula> {
    let (input, _) = space(input)?;
    let (rest, name) = expect(&[TokenType::Identifier], identifier)(input)?;
    if starts_uppercase(name) && symbol(L_PAREN)(rest).is_ok() {
        return Err(nom::Err::Failure(Mismatch::new(
            input,
            Reason::QuantifiedPredicate(name.into()),
        )));
    }
    let (rest, _) = opt(symbol(DOT))(rest)?;
    let depth = deeper(rest, depth)?;
    let (rest, body) = formula(rest, depth)?;
    Ok((rest, quantify(V::from(name), body)))
}

fn atom<'s>(input: &'s str, depth: usize) -> IResult<'s, Formula> {
    alt((
        value(Formula::Bottom, satisfy(is_bottom)),
        map(
            pair(
                identifier,
                opt(preceded(
                    symbol(L_PAREN),
                    cut(alt((
                        value(Vec::new(), symbol(R_PAREN)),
                        |i| arguments(i, depth),
                    ))),
                )),
            ),
            |(name, terms): (&str, Option<Vec<Term>>)| {
                Pred::from(name).app(terms.unwrap_or_default())
            },
        ),
    ))(input)
}

fn term<'s>(input: &'s str, depth: usize) -> IResult<'s, Term> {
    let (input, name) = expect(&[TokenType::Identifier], identifier)(input)?;
    let (input, terms) = opt(preceded(
        symbol(L_PAREN),
        cut(|i| nested_arguments(i, depth)),
    ))(input)?;
    let term = match terms {
        Some(terms) => F::from(name).app(terms),
        None if starts_lowercase(name) => V::from(name).into(),
        None => C::from(name).into(),
    };
    Ok((input, term))
}

fn nested_arguments<'s>(input: &'s str, depth: usize) -> IResult<'s, Vec<Term>> {
    let depth = deeper(input, depth)?;
    arguments(input, depth)
}

// Parses the arguments of an application after its opening parenthesis, up to and including
// the closing one.
fn arguments<'s>(input: &'s str, depth: usize) -> IResult<'s, Vec<Term>> {
    let (input, first) = term(input, depth)?;
    let (input, rest) = many0(|i| next_argument(i, depth))(input)?;
    let (input, _) = expect(&[TokenType::Comma, TokenType::RParen], tag(R_PAREN))(input)?;
    Ok((input, std::iter::once(first).chain(rest).collect()))
}

fn next_argument<'s>(input: &'s str, depth: usize) -> IResult<'s, Term> {
    let (comma, _) = space(input)?;
    let (rest, _) = tag::<_, _, Mismatch<'s>>(COMMA)(comma)?;
    if symbol(R_PAREN)(rest).is_ok() {
        return Err(nom::Err::Failure(Mismatch::new(comma, Reason::TrailingComma)));
    }
    cut(|i| term(i, depth))(rest)
}

// Runs `parser` on `source` and fails unless only whitespace is left after it.
fn complete<'s, O, P>(source: &'s str, mut parser: P) -> Result<O, Error>
where
    P: Parser<&'s str, O, Mismatch<'s>>,
{
    let info = SourceInfo::new(source);
    let (rest, output) = parser.parse(source).map_err(|e| match e {
        nom::Err::Error(mismatch) | nom::Err::Failure(mismatch) => mismatch.into_error(&info),
        nom::Err::Incomplete(_) => Mismatch::new("", Reason::Expected(&[])).into_error(&info),
    })?;

    let rest = rest.trim_start();
    match rest.chars().next() {
        Some(c) => Err(Error::ExtraToken {
            position: info.position(info.offset(rest)),
            found: c.to_string(),
        }),
        None => Ok(output),
    }
}

/// Parses `source` into a [`Formula`], returning it together with the set of constants that
/// occur in it.
///
/// [`Formula`]: crate::syntax::Formula
pub fn parse_with_constants(source: &str) -> Result<(Formula, BTreeSet<C>), Error> {
    let formula = complete(source, |i| formula(i, 0))?;
    let constants = formula.constants().into_iter().cloned().collect();

    info!(event = PARSE, formula = %formula);
    Ok((formula, constants))
}

/// Parses `source` into a [`Formula`].
///
/// **Example**:
/// ```rust
/// use deduce_fol::parse;
///
/// let formula = parse("p -> q -> r").unwrap();
/// assert_eq!("(p → (q → r))", formula.to_string());
///
/// assert!(parse("P(x,)").is_err());
/// ```
///
/// [`Formula`]: crate::syntax::Formula
pub fn parse(source: &str) -> Result<Formula, Error> {
    parse_with_constants(source).map(|(formula, _)| formula)
}

/// Parses `source` into a [`Term`].
///
/// [`Term`]: crate::syntax::Term
pub fn parse_term(source: &str) -> Result<Term, Error> {
    complete(source, |i| term(i, 0))
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_term(s)
    }
}
