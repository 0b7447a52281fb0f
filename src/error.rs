// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/error.rs
// Errors reported while reading a formula

use thiserror::Error;

/// The only failures the pipeline can produce. Every rewrite pass is total
/// over well-formed trees, so these all come from the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("erro de sintaxe na posição {offset}: {description}")]
    Syntax { offset: usize, description: String },
    #[error("erro estrutural: {description}")]
    Structural { description: String },
}

impl FormulaError {
    pub fn syntax(offset: usize, description: impl Into<String>) -> Self {
        FormulaError::Syntax {
            offset,
            description: description.into(),
        }
    }

    pub fn structural(description: impl Into<String>) -> Self {
        FormulaError::Structural {
            description: description.into(),
        }
    }

    /// Character offset of a syntax error.
    pub fn offset(&self) -> Option<usize> {
        match self {
            FormulaError::Syntax { offset, .. } => Some(*offset),
            FormulaError::Structural { .. } => None,
        }
    }
}
