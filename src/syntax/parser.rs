// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/parser.rs
// Parser for LaTeX-style first-order formulas using nom

use crate::ast::*;
use crate::error::FormulaError;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace1, satisfy},
    combinator::{cut, map, not, opt, value},
    error::{ErrorKind, ParseError},
    multi::{many0, many0_count, separated_list1},
    sequence::{pair, preceded, terminated},
    IResult,
};

type ParseResult<'a, T> = IResult<&'a str, T, SyntaxFailure<'a>>;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Reason {
    Expected(&'static str),
    Unexpected,
    MissingIdentifier(&'static str),
    Nom(ErrorKind),
}

/// Parser-internal failure. `input` is the unconsumed suffix at the point
/// of failure, which gives the offset once the parse is abandoned.
#[derive(Debug, Clone, PartialEq)]
struct SyntaxFailure<'a> {
    input: &'a str,
    reason: Reason,
}

impl<'a> SyntaxFailure<'a> {
    fn expected(input: &'a str, what: &'static str) -> Self {
        SyntaxFailure { input, reason: Reason::Expected(what) }
    }

    fn missing_identifier(input: &'a str, what: &'static str) -> Self {
        SyntaxFailure { input, reason: Reason::MissingIdentifier(what) }
    }

    fn into_error(self, source: &str) -> FormulaError {
        let consumed = source.len() - self.input.len();
        let offset = source[..consumed].chars().count();
        let found = match self.input.chars().next() {
            Some(c) => format!("'{}'", c),
            None => "fim da entrada".to_string(),
        };
        match self.reason {
            Reason::Expected(what) => {
                FormulaError::syntax(offset, format!("esperava {}, encontrou {}", what, found))
            }
            Reason::Unexpected => FormulaError::syntax(offset, format!("token inesperado {}", found)),
            Reason::MissingIdentifier(what) => FormulaError::structural(format!(
                "esperava átomo/variável ({}) na posição {}, encontrou {}",
                what, offset, found
            )),
            Reason::Nom(kind) => FormulaError::syntax(
                offset,
                format!("entrada inválida ({:?}), encontrou {}", kind, found),
            ),
        }
    }
}

impl<'a> ParseError<&'a str> for SyntaxFailure<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        SyntaxFailure { input, reason: Reason::Nom(kind) }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    // Keep whichever branch got further; ties go to the later branch,
    // which is where the descriptive fallbacks live.
    fn or(self, other: Self) -> Self {
        if other.input.len() <= self.input.len() {
            other
        } else {
            self
        }
    }
}

/// Replace a plain error from `parser` with "expected `what`".
fn expect<'a, O, F>(what: &'static str, mut parser: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    move |input| {
        let (input, _) = sp(input)?;
        parser(input).map_err(|e| match e {
            nom::Err::Error(_) => nom::Err::Error(SyntaxFailure::expected(input, what)),
            other => other,
        })
    }
}

// ============================================================================
// Lexer
// ============================================================================

/// Whitespace, including the LaTeX thin space `\,`.
fn sp(input: &str) -> ParseResult<'_, ()> {
    map(many0_count(alt((multispace1, tag("\\,")))), |_| ())(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    preceded(sp, inner)
}

/// A backslash command. `\to` must not match the start of `\top`.
fn keyword<'a>(kw: &'static str) -> impl FnMut(&'a str) -> ParseResult<'a, &'a str> {
    move |input| {
        let (input, _) = sp(input)?;
        terminated(tag(kw), not(satisfy(|c: char| c.is_ascii_alphabetic())))(input)
    }
}

fn identifier(input: &str) -> ParseResult<'_, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    Implies,
    Iff,
}

impl Connective {
    fn build(self, left: Formula, right: Formula) -> Formula {
        match self {
            Connective::Implies => Formula::implies(left, right),
            Connective::Iff => Formula::iff(left, right),
        }
    }
}

fn conditional_op(input: &str) -> ParseResult<'_, Connective> {
    alt((
        value(Connective::Implies, alt((keyword("\\rightarrow"), keyword("\\to")))),
        value(Connective::Iff, alt((keyword("\\leftrightarrow"), keyword("\\iff")))),
    ))(input)
}

fn or_op(input: &str) -> ParseResult<'_, &str> {
    alt((keyword("\\lor"), keyword("\\vee")))(input)
}

fn and_op(input: &str) -> ParseResult<'_, &str> {
    alt((keyword("\\land"), keyword("\\wedge")))(input)
}

fn not_op(input: &str) -> ParseResult<'_, &str> {
    alt((keyword("\\neg"), keyword("\\lnot")))(input)
}

fn quantifier(input: &str) -> ParseResult<'_, Quantifier> {
    alt((
        value(Quantifier::Forall, keyword("\\forall")),
        value(Quantifier::Exists, keyword("\\exists")),
    ))(input)
}

// ============================================================================
// Formulas
// ============================================================================

/// Implications and biconditionals, folded left: `a \to b \to c` is
/// `((a \to b) \to c)`.
fn expression(input: &str) -> ParseResult<'_, Formula> {
    let (input, first) = disjunction(input)?;
    let (input, rest) = many0(pair(conditional_op, cut(disjunction)))(input)?;

    Ok((
        input,
        rest.into_iter().fold(first, |acc, (op, rhs)| op.build(acc, rhs)),
    ))
}

fn disjunction(input: &str) -> ParseResult<'_, Formula> {
    let (input, first) = conjunction(input)?;
    let (input, rest) = many0(preceded(or_op, cut(conjunction)))(input)?;

    Ok((input, rest.into_iter().fold(first, Formula::or)))
}

fn conjunction(input: &str) -> ParseResult<'_, Formula> {
    let (input, first) = negation(input)?;
    let (input, rest) = many0(preceded(and_op, cut(negation)))(input)?;

    Ok((input, rest.into_iter().fold(first, Formula::and)))
}

fn negation(input: &str) -> ParseResult<'_, Formula> {
    if let Ok((input, _)) = not_op(input) {
        let (input, operand) = cut(negation)(input)?;
        return Ok((input, Formula::not(operand)));
    }
    primary(input)
}

fn primary(input: &str) -> ParseResult<'_, Formula> {
    let (input, _) = sp(input)?;
    alt((quantified, parenthesized, atom, missing_formula))(input)
}

fn missing_formula(input: &str) -> ParseResult<'_, Formula> {
    Err(nom::Err::Error(SyntaxFailure::expected(input, "uma fórmula")))
}

/// `\forall x body`; the body extends as far right as an expression can.
fn quantified(input: &str) -> ParseResult<'_, Formula> {
    let (input, q) = quantifier(input)?;
    let (input, x) = cut(bound_variable)(input)?;
    let (input, body) = cut(expression)(input)?;
    Ok((input, q.bind(x, body)))
}

fn bound_variable(input: &str) -> ParseResult<'_, Var> {
    let (input, _) = sp(input)?;
    match identifier(input) {
        Ok((rest, name)) => Ok((rest, Var::new(name))),
        Err(_) => Err(nom::Err::Error(SyntaxFailure::missing_identifier(
            input,
            "variável do quantificador",
        ))),
    }
}

fn parenthesized(input: &str) -> ParseResult<'_, Formula> {
    let (input, _) = char('(')(input)?;
    let (input, inner) = cut(expression)(input)?;
    let (input, _) = cut(expect("')'", char(')')))(input)?;
    Ok((input, inner))
}

// ============================================================================
// Atoms and Terms
// ============================================================================

fn atom(input: &str) -> ParseResult<'_, Formula> {
    map(term, Formula::Atom)(input)
}

/// `name` or `name(arg, ...)`, rendered back to compact text. Whitespace
/// may separate the name from its argument list.
fn term(input: &str) -> ParseResult<'_, String> {
    let (input, name) = identifier(input)?;
    let (input, args) = opt(preceded(sp, arguments))(input)?;

    let text = match args {
        Some(args) => format!("{}({})", name, args.join(",")),
        None => name.to_string(),
    };
    Ok((input, text))
}

fn arguments(input: &str) -> ParseResult<'_, Vec<String>> {
    let (input, _) = char('(')(input)?;
    let (input, args) = cut(separated_list1(ws(char(',')), cut(argument)))(input)?;
    let (input, _) = cut(expect("')'", char(')')))(input)?;
    Ok((input, args))
}

fn argument(input: &str) -> ParseResult<'_, String> {
    let (input, _) = sp(input)?;
    term(input).map_err(|e| match e {
        nom::Err::Error(_) => {
            nom::Err::Error(SyntaxFailure::missing_identifier(input, "argumento"))
        }
        other => other,
    })
}

// ============================================================================
// Public API
// ============================================================================

/// Parse a complete formula. Trailing input is an error.
pub fn parse_formula(input: &str) -> Result<Formula, FormulaError> {
    match terminated(expression, sp)(input) {
        Ok(("", formula)) => Ok(formula),
        Ok((remaining, _)) => Err(SyntaxFailure {
            input: remaining,
            reason: Reason::Unexpected,
        }
        .into_error(input)),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e.into_error(input)),
        Err(nom::Err::Incomplete(_)) => Err(FormulaError::syntax(
            input.chars().count(),
            "entrada incompleta",
        )),
    }
}
