// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/lib.rs
// First-order formula to CNF library

pub mod ast;
pub mod clauses;
pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod rewrite;
pub mod syntax;

// Re-export commonly used items
pub use ast::{Formula, Quantifier, Var};
pub use clauses::{analyze, classify_horn, extract_clauses, matrix, ClauseReport, HornAnalysis};
pub use config::Config;
pub use error::FormulaError;
pub use pipeline::{convert, derivation, run_passes, Conversion, Stage};
pub use rewrite::{
    distribute, eliminate_implications, skolemize, standardize_variables,
    to_negation_normal_form, to_prenex, Trace, TraceEntry,
};
pub use syntax::parse_formula;
