// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/prenex.rs
// Prenex form: hoist every quantifier to the front

use super::{Rewritten, Trace};
use crate::ast::*;
use tracing::debug;

/// Pull all quantifiers out of the tree, keeping their pre-order
/// (left to right, outside in), and wrap them back around the matrix.
///
/// Only sound on standardized input, where hoisting cannot capture.
pub fn to_prenex(formula: &Formula) -> Rewritten {
    let mut prefix = Vec::new();
    let matrix = strip(formula, &mut prefix);
    let hoisted = prefix.len();

    let result = prefix
        .into_iter()
        .rev()
        .fold(matrix, |body, (q, x)| q.bind(x, body));

    let mut trace = Trace::new();
    if hoisted > 0 {
        trace.note(format!("Forma prenex: {}", result));
    }
    debug!(quantifiers = hoisted, "prenex form built");
    (result, trace)
}

/// The matrix of `formula`, with its quantifiers appended to `prefix`.
fn strip(formula: &Formula, prefix: &mut Vec<(Quantifier, Var)>) -> Formula {
    match formula {
        Formula::Atom(_) => formula.clone(),

        Formula::Not(a) => Formula::not(strip(a, prefix)),

        Formula::And(a, b) => {
            let a = strip(a, prefix);
            Formula::and(a, strip(b, prefix))
        }
        Formula::Or(a, b) => {
            let a = strip(a, prefix);
            Formula::or(a, strip(b, prefix))
        }
        Formula::Implies(a, b) => {
            let a = strip(a, prefix);
            Formula::implies(a, strip(b, prefix))
        }
        Formula::Iff(a, b) => {
            let a = strip(a, prefix);
            Formula::iff(a, strip(b, prefix))
        }

        Formula::Forall(x, body) => {
            prefix.push((Quantifier::Forall, x.clone()));
            strip(body, prefix)
        }
        Formula::Exists(x, body) => {
            prefix.push((Quantifier::Exists, x.clone()));
            strip(body, prefix)
        }
    }
}
