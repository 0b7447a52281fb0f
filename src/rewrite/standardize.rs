// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/standardize.rs
// Variable standardization: give every quantifier its own variable name

use super::{Rewritten, Trace};
use crate::ast::*;
use crate::core::subst::{fresh_name, names, rename_in_text};
use std::collections::{HashMap, HashSet};
use tracing::debug;

type Renaming = HashMap<String, String>;

/// `bound` holds the quantifier names chosen so far, which decide when a
/// quantifier must be renamed. `taken` also holds every identifier of the
/// input, so a fresh name never captures a free occurrence.
struct Names {
    bound: HashSet<String>,
    taken: HashSet<String>,
}

/// Rename bound variables so that no two quantifiers share a name.
///
/// The set of used names is threaded left to right through the whole
/// tree. The renaming is scoped: it is extended for a quantifier's body
/// only, and both children of a binary node start from the same one.
/// Fresh names avoid every identifier of the input as well.
pub fn standardize_variables(formula: &Formula) -> Rewritten {
    let mut trace = Trace::new();
    let mut used = Names {
        bound: HashSet::new(),
        taken: names(formula),
    };
    let result = standardize(formula, &Renaming::new(), &mut used, &mut trace);
    debug!(entries = trace.len(), bound = used.bound.len(), "variables standardized");
    (result, trace)
}

fn standardize(
    formula: &Formula,
    renaming: &Renaming,
    used: &mut Names,
    trace: &mut Trace,
) -> Formula {
    match formula {
        Formula::Atom(text) => {
            let renamed = rename_in_text(text, |word| renaming.get(word).map(String::as_str));
            if renamed != *text {
                trace.note(format!("Substituição em {}: {}", text, renamed));
            }
            Formula::Atom(renamed)
        }

        Formula::Not(a) => Formula::not(standardize(a, renaming, used, trace)),

        Formula::And(a, b) => {
            let a = standardize(a, renaming, used, trace);
            Formula::and(a, standardize(b, renaming, used, trace))
        }
        Formula::Or(a, b) => {
            let a = standardize(a, renaming, used, trace);
            Formula::or(a, standardize(b, renaming, used, trace))
        }
        Formula::Implies(a, b) => {
            let a = standardize(a, renaming, used, trace);
            Formula::implies(a, standardize(b, renaming, used, trace))
        }
        Formula::Iff(a, b) => {
            let a = standardize(a, renaming, used, trace);
            Formula::iff(a, standardize(b, renaming, used, trace))
        }

        Formula::Forall(x, body) => {
            rebind(Quantifier::Forall, x, body, renaming, used, trace)
        }
        Formula::Exists(x, body) => {
            rebind(Quantifier::Exists, x, body, renaming, used, trace)
        }
    }
}

fn rebind(
    q: Quantifier,
    x: &Var,
    body: &Formula,
    renaming: &Renaming,
    used: &mut Names,
    trace: &mut Trace,
) -> Formula {
    let name = if used.bound.contains(x.as_str()) {
        let fresh = fresh_name(x.as_str(), &used.taken);
        trace.note(format!("Renomeando {} {} para {} {}", q, x, q, fresh));
        fresh
    } else {
        x.as_str().to_string()
    };
    used.bound.insert(name.clone());
    used.taken.insert(name.clone());

    let mut scope = renaming.clone();
    scope.insert(x.as_str().to_string(), name.clone());
    q.bind(Var::new(name), standardize(body, &scope, used, trace))
}
