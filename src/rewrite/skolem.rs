// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/skolem.rs
// Skolemization: replace existential variables by Skolem terms

use super::{Rewritten, Trace};
use crate::ast::*;
use crate::config::Config;
use crate::core::subst::{names, substitute};
use std::collections::HashSet;
use tracing::debug;

/// Drop every existential quantifier, substituting its variable with a
/// Skolem function of the universals bound above it, or with a Skolem
/// constant when there are none.
///
/// The counter naming the symbols is threaded through the recursion, so
/// numbering follows the left-to-right, outside-in order of the
/// existentials and starts at 1. A number whose symbol already names
/// something in the formula is skipped.
pub fn skolemize(formula: &Formula, config: &Config) -> Rewritten {
    let mut trace = Trace::new();
    let symbols = Symbols {
        config,
        taken: names(formula),
    };
    let (result, count) = skolem(formula, &[], 0, &symbols, &mut trace);
    debug!(symbols = count, "existentials eliminated");
    (result, trace)
}

fn skolem(
    formula: &Formula,
    universals: &[Var],
    counter: usize,
    symbols: &Symbols<'_>,
    trace: &mut Trace,
) -> (Formula, usize) {
    match formula {
        Formula::Atom(_) => (formula.clone(), counter),

        Formula::Not(a) => {
            let (a, counter) = skolem(a, universals, counter, symbols, trace);
            (Formula::not(a), counter)
        }

        Formula::And(a, b) => both(a, b, Formula::and, universals, counter, symbols, trace),
        Formula::Or(a, b) => both(a, b, Formula::or, universals, counter, symbols, trace),
        Formula::Implies(a, b) => both(a, b, Formula::implies, universals, counter, symbols, trace),
        Formula::Iff(a, b) => both(a, b, Formula::iff, universals, counter, symbols, trace),

        Formula::Forall(x, body) => {
            let mut scope = universals.to_vec();
            scope.push(x.clone());
            let (body, counter) = skolem(body, &scope, counter, symbols, trace);
            (Formula::Forall(x.clone(), Box::new(body)), counter)
        }

        Formula::Exists(y, body) => {
            let (term, counter) = symbols.next(universals, counter);
            trace.note(format!("Eliminando \\exists {}: {} := {}", y, y, term));
            let substituted = substitute(body, y, &term);
            skolem(&substituted, universals, counter, symbols, trace)
        }
    }
}

fn both(
    a: &Formula,
    b: &Formula,
    build: fn(Formula, Formula) -> Formula,
    universals: &[Var],
    counter: usize,
    symbols: &Symbols<'_>,
    trace: &mut Trace,
) -> (Formula, usize) {
    let (a, counter) = skolem(a, universals, counter, symbols, trace);
    let (b, counter) = skolem(b, universals, counter, symbols, trace);
    (build(a, b), counter)
}

struct Symbols<'a> {
    config: &'a Config,
    taken: HashSet<String>,
}

impl Symbols<'_> {
    /// The first Skolem term after `counter` whose symbol is unused.
    fn next(&self, universals: &[Var], counter: usize) -> (String, usize) {
        let prefix = if universals.is_empty() {
            &self.config.skolem_constant_prefix
        } else {
            &self.config.skolem_function_prefix
        };
        let n = ((counter + 1)..)
            .find(|n| !self.taken.contains(&format!("{}{}", prefix, n)))
            .unwrap_or(counter + 1);
        (skolem_term(universals, n, self.config), n)
    }
}

/// `f<n>(x,y,...)` over the enclosing universals, or the constant `c<n>`.
pub fn skolem_term(universals: &[Var], n: usize, config: &Config) -> String {
    if universals.is_empty() {
        format!("{}{}", config.skolem_constant_prefix, n)
    } else {
        let args: Vec<&str> = universals.iter().map(Var::as_str).collect();
        format!("{}{}({})", config.skolem_function_prefix, n, args.join(","))
    }
}
