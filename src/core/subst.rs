// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/subst.rs
// Identifier-level substitution inside opaque atom text

use crate::ast::*;
use std::collections::HashSet;

// ============================================================================
// Text Substitution
// ============================================================================

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Identifier tokens of an atom, in order of appearance.
pub fn identifiers(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_identifier_char(c))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Rewrite every maximal identifier token of `text` for which `lookup`
/// returns a replacement. All tokens are looked up in the original text,
/// so the replacement is simultaneous: `x -> y, y -> z` turns `P(x,y)`
/// into `P(y,z)`.
pub fn rename_in_text<'m>(text: &str, lookup: impl Fn(&str) -> Option<&'m str>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(is_identifier_char) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(tail.len());
        let word = &tail[..end];
        out.push_str(lookup(word).unwrap_or(word));
        rest = &tail[end..];
    }

    out.push_str(rest);
    out
}

/// Replace whole-token occurrences of `name`; `x` never matches inside `x1`.
pub fn replace_identifier(text: &str, name: &str, replacement: &str) -> String {
    rename_in_text(text, |word| (word == name).then_some(replacement))
}

pub fn mentions(text: &str, name: &str) -> bool {
    identifiers(text).contains(&name)
}

// ============================================================================
// Formula Substitution
// ============================================================================

/// formula{term/x}: replace the free occurrences of `x` in every atom.
/// A quantifier rebinding `x` shadows it for its whole body.
pub fn substitute(formula: &Formula, x: &Var, term: &str) -> Formula {
    match formula {
        Formula::Atom(text) => Formula::Atom(replace_identifier(text, x.as_str(), term)),

        Formula::Not(a) => Formula::not(substitute(a, x, term)),

        Formula::And(a, b) => Formula::and(substitute(a, x, term), substitute(b, x, term)),
        Formula::Or(a, b) => Formula::or(substitute(a, x, term), substitute(b, x, term)),
        Formula::Implies(a, b) => {
            Formula::implies(substitute(a, x, term), substitute(b, x, term))
        }
        Formula::Iff(a, b) => Formula::iff(substitute(a, x, term), substitute(b, x, term)),

        Formula::Forall(y, _) | Formula::Exists(y, _) if y == x => formula.clone(),
        Formula::Forall(y, body) => {
            Formula::Forall(y.clone(), Box::new(substitute(body, x, term)))
        }
        Formula::Exists(y, body) => {
            Formula::Exists(y.clone(), Box::new(substitute(body, x, term)))
        }
    }
}

// ============================================================================
// Fresh Names
// ============================================================================

/// Every identifier the formula mentions: atom tokens and bound variables.
pub fn names(formula: &Formula) -> HashSet<String> {
    let mut found = HashSet::new();
    collect_names(formula, &mut found);
    found
}

fn collect_names(formula: &Formula, found: &mut HashSet<String>) {
    match formula {
        Formula::Atom(text) => found.extend(identifiers(text).into_iter().map(str::to_string)),
        Formula::Not(a) => collect_names(a, found),
        Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) | Formula::Iff(a, b) => {
            collect_names(a, found);
            collect_names(b, found);
        }
        Formula::Forall(x, body) | Formula::Exists(x, body) => {
            found.insert(x.as_str().to_string());
            collect_names(body, found);
        }
    }
}

/// `base` followed by the smallest positive integer that makes it unused.
pub fn fresh_name(base: &str, used: &HashSet<String>) -> String {
    (1usize..)
        .map(|n| format!("{}{}", base, n))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}
