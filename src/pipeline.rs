// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/pipeline.rs
// Runs the passes in order and collects the derivation for a renderer

use crate::ast::Formula;
use crate::clauses::{analyze, matrix, HornAnalysis};
use crate::config::Config;
use crate::error::FormulaError;
use crate::rewrite::*;
use crate::syntax::parse_formula;
use serde::Serialize;
use tracing::{info, warn};

pub const IMPLICATIONS: &str = "Eliminação de implicações e bicondicionais";
pub const NEGATION_NORMAL_FORM: &str = "Forma normal negativa";
pub const STANDARDIZATION: &str = "Padronização de variáveis";
pub const PRENEX: &str = "Forma normal prenex";
pub const SKOLEMIZATION: &str = "Skolemização";
pub const CNF: &str = "Forma normal conjuntiva";
pub const HORN: &str = "Cláusulas e análise de Horn";
pub const ERROR: &str = "Erro";

// ============================================================================
// Stages
// ============================================================================

/// One record of the derivation: the tree a stage produced and the steps
/// that led to it. An error record has no formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub title: String,
    pub formula: Option<Formula>,
    pub notation: Option<String>,
    pub trace: Vec<TraceEntry>,
}

impl Stage {
    fn new(title: &str, formula: &Formula, trace: Trace, config: &Config) -> Self {
        Stage {
            title: title.to_string(),
            formula: Some(formula.clone()),
            notation: Some(formula.to_string()),
            trace: if config.include_trace {
                trace.into_entries()
            } else {
                Vec::new()
            },
        }
    }

    pub fn error(error: &FormulaError) -> Self {
        let mut trace = Trace::new();
        trace.note(error.to_string());
        Stage {
            title: ERROR.to_string(),
            formula: None,
            notation: None,
            trace: trace.into_entries(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.formula.is_none()
    }
}

/// Everything a successful run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: Formula,
    pub stages: Vec<Stage>,
    pub cnf: Formula,
    pub horn: HornAnalysis,
}

// ============================================================================
// Driver
// ============================================================================

/// Run every pass over an already parsed formula.
pub fn run_passes(input: &Formula, config: &Config) -> Conversion {
    let mut stages = Vec::with_capacity(7);

    let (free, trace) = eliminate_implications(input);
    stages.push(Stage::new(IMPLICATIONS, &free, trace, config));

    let (nnf, trace) = to_negation_normal_form(&free);
    stages.push(Stage::new(NEGATION_NORMAL_FORM, &nnf, trace, config));

    let (standard, trace) = standardize_variables(&nnf);
    stages.push(Stage::new(STANDARDIZATION, &standard, trace, config));

    let (prenex, trace) = to_prenex(&standard);
    stages.push(Stage::new(PRENEX, &prenex, trace, config));

    let (skolem, trace) = skolemize(&prenex, config);
    stages.push(Stage::new(SKOLEMIZATION, &skolem, trace, config));

    let (cnf, trace) = distribute(&skolem);
    stages.push(Stage::new(CNF, &cnf, trace, config));

    let horn = analyze(&cnf);
    let mut trace = Trace::new();
    for report in horn.reports() {
        trace.note(report);
    }
    trace.note(horn.verdict());
    stages.push(Stage::new(HORN, matrix(&cnf), trace, config));

    Conversion {
        input: input.clone(),
        stages,
        cnf,
        horn,
    }
}

/// Parse `text` and run the whole pipeline.
pub fn convert(text: &str, config: &Config) -> Result<Conversion, FormulaError> {
    info!(input = text, "converting formula");
    let input = parse_formula(text)?;
    let conversion = run_passes(&input, config);
    info!(
        clauses = conversion.horn.clauses.len(),
        horn = conversion.horn.is_horn,
        "conversion finished"
    );
    Ok(conversion)
}

/// The record list handed to a renderer: seven stages, or a single error
/// stage when the input does not parse.
pub fn derivation(text: &str, config: &Config) -> Vec<Stage> {
    match convert(text, config) {
        Ok(conversion) => conversion.stages,
        Err(error) => {
            warn!(%error, "formula rejected");
            vec![Stage::error(&error)]
        }
    }
}
