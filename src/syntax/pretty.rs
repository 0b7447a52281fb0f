// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/pretty.rs
// Serialization of formulas back to LaTeX notation

use crate::ast::*;
use std::fmt;

// ============================================================================
// Display Implementations
// ============================================================================

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Notation(self, false))
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Quantifier::Forall => write!(f, "\\forall"),
            Quantifier::Exists => write!(f, "\\exists"),
        }
    }
}

// ============================================================================
// Printer
// ============================================================================

/// A formula plus whether more text follows it before the enclosing
/// parenthesis closes. A quantifier's body extends as far right as the
/// parser can reach, so a quantifier in that position must be wrapped.
struct Notation<'a>(&'a Formula, bool);

impl<'a> fmt::Display for Notation<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Notation(formula, followed) = *self;

        match formula {
            Formula::Atom(text) => write!(f, "{}", text),

            Formula::Not(a) => write!(f, "\\neg {}", Notation(a, followed)),

            Formula::And(a, b) => binary(f, a, "\\land", b),
            Formula::Or(a, b) => binary(f, a, "\\lor", b),
            Formula::Implies(a, b) => binary(f, a, "\\rightarrow", b),
            Formula::Iff(a, b) => binary(f, a, "\\leftrightarrow", b),

            Formula::Forall(x, body) => quantified(f, Quantifier::Forall, x, body, followed),
            Formula::Exists(x, body) => quantified(f, Quantifier::Exists, x, body, followed),
        }
    }
}

fn binary(f: &mut fmt::Formatter, a: &Formula, op: &str, b: &Formula) -> fmt::Result {
    write!(f, "({} {} {})", Notation(a, true), op, Notation(b, false))
}

fn quantified(
    f: &mut fmt::Formatter,
    q: Quantifier,
    x: &Var,
    body: &Formula,
    followed: bool,
) -> fmt::Result {
    if followed {
        write!(f, "({} {} {})", q, x, Notation(body, false))
    } else {
        write!(f, "{} {} {}", q, x, Notation(body, false))
    }
}
