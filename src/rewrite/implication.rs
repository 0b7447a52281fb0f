// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/implication.rs
// Implication and biconditional elimination

use super::{Rewritten, Trace};
use crate::ast::*;
use tracing::debug;

/// Rewrite `A \to B` as `\neg A \lor B` and `A \leftrightarrow B` as
/// `(\neg A \lor B) \land (\neg B \lor A)`, everywhere in the tree.
pub fn eliminate_implications(formula: &Formula) -> Rewritten {
    let mut trace = Trace::new();
    let result = eliminate(formula, &mut trace);
    debug!(rewrites = trace.len(), "implications eliminated");
    (result, trace)
}

fn eliminate(formula: &Formula, trace: &mut Trace) -> Formula {
    match formula {
        Formula::Atom(_) => formula.clone(),

        Formula::Not(a) => Formula::not(eliminate(a, trace)),
        Formula::And(a, b) => Formula::and(eliminate(a, trace), eliminate(b, trace)),
        Formula::Or(a, b) => Formula::or(eliminate(a, trace), eliminate(b, trace)),

        Formula::Implies(a, b) => {
            let a = eliminate(a, trace);
            let b = eliminate(b, trace);
            let result = Formula::or(Formula::not(a), b);
            trace.equivalence(formula, &result);
            result
        }

        Formula::Iff(a, b) => {
            let a = eliminate(a, trace);
            let b = eliminate(b, trace);
            let result = Formula::and(
                Formula::or(Formula::not(a.clone()), b.clone()),
                Formula::or(Formula::not(b), a),
            );
            trace.equivalence(formula, &result);
            result
        }

        Formula::Forall(x, body) => Formula::Forall(x.clone(), Box::new(eliminate(body, trace))),
        Formula::Exists(x, body) => Formula::Exists(x.clone(), Box::new(eliminate(body, trace))),
    }
}
