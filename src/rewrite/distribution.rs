// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/distribution.rs
// Distribution of disjunction over conjunction

use super::{Rewritten, Trace};
use crate::ast::*;
use tracing::debug;

/// Apply `A ∨ (B ∧ C) ⇒ (A ∨ B) ∧ (A ∨ C)` and its mirror until no
/// disjunction has a conjunction below it.
///
/// Rounds repeat until one records no rewrite. On negation normal form
/// input the first round already reaches the fixpoint; anything else
/// (a quantifier under a disjunction, say) stops once nothing changes.
pub fn distribute(formula: &Formula) -> Rewritten {
    let mut trace = Trace::new();
    let mut current = formula.clone();
    let mut rounds = 0;

    loop {
        let before = trace.len();
        current = distribute_round(&current, &mut trace);
        rounds += 1;
        if trace.len() == before {
            break;
        }
    }

    debug!(steps = trace.len(), rounds, "distribution finished");
    trace.note(format!("Forma normal conjuntiva: {}", current));
    (current, trace)
}

fn distribute_round(formula: &Formula, trace: &mut Trace) -> Formula {
    match formula {
        Formula::Atom(_) => formula.clone(),

        Formula::Not(a) => Formula::not(distribute_round(a, trace)),

        Formula::And(a, b) => {
            let a = distribute_round(a, trace);
            Formula::and(a, distribute_round(b, trace))
        }

        Formula::Or(a, b) => {
            let a = distribute_round(a, trace);
            let b = distribute_round(b, trace);
            distribute_or(a, b, trace)
        }

        Formula::Implies(a, b) => {
            let a = distribute_round(a, trace);
            Formula::implies(a, distribute_round(b, trace))
        }
        Formula::Iff(a, b) => {
            let a = distribute_round(a, trace);
            Formula::iff(a, distribute_round(b, trace))
        }

        Formula::Forall(x, body) => {
            Formula::Forall(x.clone(), Box::new(distribute_round(body, trace)))
        }
        Formula::Exists(x, body) => {
            Formula::Exists(x.clone(), Box::new(distribute_round(body, trace)))
        }
    }
}

/// Build `left ∨ right` from two distributed operands, distributing again
/// on every disjunction the rewrite creates.
fn distribute_or(left: Formula, right: Formula, trace: &mut Trace) -> Formula {
    match (left, right) {
        // A ∨ (B ∧ C)
        (a, Formula::And(b, c)) => {
            let before = Formula::or(a.clone(), Formula::And(b.clone(), c.clone()));
            let after = Formula::and(
                Formula::or(a.clone(), (*b).clone()),
                Formula::or(a.clone(), (*c).clone()),
            );
            trace.equivalence(&before, &after);
            let ab = distribute_or(a.clone(), *b, trace);
            Formula::and(ab, distribute_or(a, *c, trace))
        }

        // (A ∧ B) ∨ C
        (Formula::And(a, b), c) => {
            let before = Formula::or(Formula::And(a.clone(), b.clone()), c.clone());
            let after = Formula::and(
                Formula::or((*a).clone(), c.clone()),
                Formula::or((*b).clone(), c.clone()),
            );
            trace.equivalence(&before, &after);
            let ac = distribute_or(*a, c.clone(), trace);
            Formula::and(ac, distribute_or(*b, c, trace))
        }

        (a, b) => Formula::or(a, b),
    }
}

/// True if some disjunction has a conjunction anywhere beneath it.
pub fn has_conjunction_under_disjunction(formula: &Formula) -> bool {
    formula.any(&|f| match f {
        Formula::Or(a, b) => {
            let is_and = |g: &Formula| matches!(g, Formula::And(_, _));
            a.any(&is_and) || b.any(&is_and)
        }
        _ => false,
    })
}
