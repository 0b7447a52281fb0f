// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/clauses.rs
// Clause extraction and Horn classification of a CNF matrix

use crate::ast::*;
use serde::Serialize;
use std::fmt;

// ============================================================================
// Matrix and Clauses
// ============================================================================

/// Strip the quantifier prefix. After Skolemization only universals are
/// left, but an existential prefix is stripped the same way.
pub fn matrix(formula: &Formula) -> &Formula {
    let mut current = formula;
    while let Some((_, _, body)) = current.as_quantified() {
        current = body;
    }
    current
}

/// The conjuncts of the top-level `And` spine, left to right.
pub fn extract_clauses(matrix: &Formula) -> Vec<&Formula> {
    let mut clauses = Vec::new();
    collect_clauses(matrix, &mut clauses);
    clauses
}

fn collect_clauses<'a>(formula: &'a Formula, clauses: &mut Vec<&'a Formula>) {
    match formula {
        Formula::And(a, b) => {
            collect_clauses(a, clauses);
            collect_clauses(b, clauses);
        }
        _ => clauses.push(formula),
    }
}

/// Un-negated atoms reachable through `Or` nodes. A negation counts zero
/// whatever sits beneath it.
pub fn positive_literals(clause: &Formula) -> usize {
    match clause {
        Formula::Atom(_) => 1,
        Formula::Or(a, b) => positive_literals(a) + positive_literals(b),
        _ => 0,
    }
}

// ============================================================================
// Reports
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseReport {
    pub clause: Formula,
    pub positive_literals: usize,
    pub is_horn: bool,
}

pub fn classify_horn(clause: &Formula) -> ClauseReport {
    let positive_literals = positive_literals(clause);
    ClauseReport {
        clause: clause.clone(),
        positive_literals,
        is_horn: positive_literals <= 1,
    }
}

impl fmt::Display for ClauseReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verdict = if self.is_horn { "é Horn" } else { "não é Horn" };
        write!(
            f,
            "{} tem {} literal(is) positivo(s): {}",
            self.clause, self.positive_literals, verdict
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HornAnalysis {
    pub clauses: Vec<ClauseReport>,
    pub is_horn: bool,
}

impl HornAnalysis {
    /// One line per clause, numbered from 1.
    pub fn reports(&self) -> Vec<String> {
        self.clauses
            .iter()
            .enumerate()
            .map(|(i, report)| format!("Cláusula {}: {}", i + 1, report))
            .collect()
    }

    pub fn verdict(&self) -> String {
        if self.is_horn {
            "A fórmula é Horn: todas as cláusulas têm no máximo um literal positivo.".to_string()
        } else {
            let offending: Vec<String> = self
                .clauses
                .iter()
                .enumerate()
                .filter(|(_, report)| !report.is_horn)
                .map(|(i, _)| (i + 1).to_string())
                .collect();
            format!(
                "A fórmula não é Horn: cláusula(s) {} com mais de um literal positivo.",
                offending.join(", ")
            )
        }
    }
}

/// Classify every clause of a CNF formula (quantifier prefix allowed).
pub fn analyze(formula: &Formula) -> HornAnalysis {
    let clauses: Vec<ClauseReport> = extract_clauses(matrix(formula))
        .into_iter()
        .map(classify_horn)
        .collect();
    let is_horn = clauses.iter().all(|report| report.is_horn);
    HornAnalysis { clauses, is_horn }
}
