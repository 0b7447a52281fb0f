// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/mod.rs
// The rewrite passes and the derivation trace they produce

pub mod implication;
pub mod negation;
pub mod standardize;
pub mod prenex;
pub mod skolem;
pub mod distribution;

pub use implication::eliminate_implications;
pub use negation::to_negation_normal_form;
pub use standardize::standardize_variables;
pub use prenex::to_prenex;
pub use skolem::skolemize;
pub use distribution::distribute;

use crate::ast::Formula;
use serde::Serialize;
use std::fmt;

// ============================================================================
// Trace
// ============================================================================

/// One line of a derivation, as shown to the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEntry {
    Note { text: String },
    Equivalence { before: String, after: String },
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TraceEntry::Note { text } => write!(f, "{}", text),
            TraceEntry::Equivalence { before, after } => write!(f, "{} ≡ {}", before, after),
        }
    }
}

/// The append-only list of entries a single pass produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace(Vec<TraceEntry>);

impl Trace {
    pub fn new() -> Self {
        Trace(Vec::new())
    }

    pub fn note(&mut self, text: impl Into<String>) {
        self.0.push(TraceEntry::Note { text: text.into() });
    }

    pub fn equivalence(&mut self, before: &Formula, after: &Formula) {
        self.0.push(TraceEntry::Equivalence {
            before: before.to_string(),
            after: after.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.0
    }
}

impl IntoIterator for Trace {
    type Item = TraceEntry;
    type IntoIter = std::vec::IntoIter<TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Output of every pass: the new tree and how it was reached.
pub type Rewritten = (Formula, Trace);
