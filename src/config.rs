// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/config.rs
// Pipeline configuration

use serde::{Deserialize, Serialize};

/// Settings for a conversion run. Missing fields in a JSON config file
/// take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix of Skolem function symbols (`f` gives `f1(x)`)
    pub skolem_function_prefix: String,
    /// Prefix of Skolem constants (`c` gives `c1`)
    pub skolem_constant_prefix: String,
    /// Keep the per-stage derivation messages
    pub include_trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            skolem_function_prefix: "f".to_string(),
            skolem_constant_prefix: "c".to_string(),
            include_trace: true,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
