// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/negation.rs
// Negation normal form: push every negation down onto an atom

use super::{Rewritten, Trace};
use crate::ast::*;
use tracing::debug;

/// Expects an implication-free formula. Any `Implies`/`Iff` that is still
/// present is carried through with its children normalized.
pub fn to_negation_normal_form(formula: &Formula) -> Rewritten {
    let mut trace = Trace::new();
    let result = nnf(formula, &mut trace);
    debug!(rewrites = trace.len(), "negation normal form reached");
    (result, trace)
}

fn nnf(formula: &Formula, trace: &mut Trace) -> Formula {
    match formula {
        Formula::Atom(_) => formula.clone(),

        Formula::Not(inner) => match inner.as_ref() {
            Formula::Atom(_) => formula.clone(),

            // ¬¬A ⇒ A
            Formula::Not(a) => {
                trace.equivalence(formula, a);
                nnf(a, trace)
            }

            // ¬(A ∧ B) ⇒ ¬A ∨ ¬B
            Formula::And(a, b) => push(
                formula,
                Formula::or(negate(a), negate(b)),
                trace,
            ),

            // ¬(A ∨ B) ⇒ ¬A ∧ ¬B
            Formula::Or(a, b) => push(
                formula,
                Formula::and(negate(a), negate(b)),
                trace,
            ),

            // ¬∀x.A ⇒ ∃x.¬A
            Formula::Forall(x, a) => push(
                formula,
                Quantifier::Forall.dual().bind(x.clone(), negate(a)),
                trace,
            ),

            // ¬∃x.A ⇒ ∀x.¬A
            Formula::Exists(x, a) => push(
                formula,
                Quantifier::Exists.dual().bind(x.clone(), negate(a)),
                trace,
            ),

            Formula::Implies(_, _) | Formula::Iff(_, _) => Formula::not(nnf(inner, trace)),
        },

        Formula::And(a, b) => Formula::and(nnf(a, trace), nnf(b, trace)),
        Formula::Or(a, b) => Formula::or(nnf(a, trace), nnf(b, trace)),
        Formula::Implies(a, b) => Formula::implies(nnf(a, trace), nnf(b, trace)),
        Formula::Iff(a, b) => Formula::iff(nnf(a, trace), nnf(b, trace)),

        Formula::Forall(x, body) => Formula::Forall(x.clone(), Box::new(nnf(body, trace))),
        Formula::Exists(x, body) => Formula::Exists(x.clone(), Box::new(nnf(body, trace))),
    }
}

fn negate(a: &Formula) -> Formula {
    Formula::not(a.clone())
}

/// Record one rule application, then keep normalizing its result.
fn push(formula: &Formula, pushed: Formula, trace: &mut Trace) -> Formula {
    trace.equivalence(formula, &pushed);
    nnf(&pushed, trace)
}
