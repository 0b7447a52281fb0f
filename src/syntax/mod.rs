// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/mod.rs
// Reading and writing the LaTeX formula notation

pub mod parser;
pub mod pretty;

pub use parser::parse_formula;
