// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast.rs
// Core AST for first-order formulas

use serde::Serialize;
use std::fmt;

// ============================================================================
// Core Types
// ============================================================================

/// Bound-variable names
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Var(pub String);

impl Var {
    pub fn new(s: impl Into<String>) -> Self {
        Var(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantifier {
    Forall,
    Exists,
}

impl Quantifier {
    /// The quantifier a negation turns this one into.
    pub fn dual(self) -> Self {
        match self {
            Quantifier::Forall => Quantifier::Exists,
            Quantifier::Exists => Quantifier::Forall,
        }
    }

    pub fn bind(self, x: Var, body: Formula) -> Formula {
        match self {
            Quantifier::Forall => Formula::Forall(x, Box::new(body)),
            Quantifier::Exists => Formula::Exists(x, Box::new(body)),
        }
    }
}

// ============================================================================
// Formulas
// ============================================================================

/// A first-order formula.
///
/// Nodes are never mutated once built; every pass constructs a new tree.
/// `Atom` text is opaque: a predicate call such as `P(x,g(y))` is kept as a
/// single string and its arguments have no identity of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    Atom(String),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
    Forall(Var, Box<Formula>),
    Exists(Var, Box<Formula>),
}

// ============================================================================
// Helper Methods
// ============================================================================

impl Formula {
    /// Bound variables of every quantifier, in pre-order.
    pub fn bound_vars(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        self.collect_bound_vars(&mut vars);
        vars
    }

    fn collect_bound_vars(&self, vars: &mut Vec<Var>) {
        match self {
            Formula::Atom(_) => {}
            Formula::Not(a) => a.collect_bound_vars(vars),
            Formula::And(a, b)
            | Formula::Or(a, b)
            | Formula::Implies(a, b)
            | Formula::Iff(a, b) => {
                a.collect_bound_vars(vars);
                b.collect_bound_vars(vars);
            }
            Formula::Forall(x, body) | Formula::Exists(x, body) => {
                vars.push(x.clone());
                body.collect_bound_vars(vars);
            }
        }
    }

    /// Splits a quantifier node into its parts.
    pub fn as_quantified(&self) -> Option<(Quantifier, &Var, &Formula)> {
        match self {
            Formula::Forall(x, body) => Some((Quantifier::Forall, x, body)),
            Formula::Exists(x, body) => Some((Quantifier::Exists, x, body)),
            _ => None,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom(_))
    }

    pub fn is_quantifier(&self) -> bool {
        matches!(self, Formula::Forall(_, _) | Formula::Exists(_, _))
    }

    pub fn is_quantifier_free(&self) -> bool {
        !self.any(&|f| f.is_quantifier())
    }

    pub fn contains_implication(&self) -> bool {
        self.any(&|f| matches!(f, Formula::Implies(_, _) | Formula::Iff(_, _)))
    }

    /// True if `pred` holds for this node or any node below it.
    pub fn any(&self, pred: &dyn Fn(&Formula) -> bool) -> bool {
        if pred(self) {
            return true;
        }
        match self {
            Formula::Atom(_) => false,
            Formula::Not(a) | Formula::Forall(_, a) | Formula::Exists(_, a) => a.any(pred),
            Formula::And(a, b)
            | Formula::Or(a, b)
            | Formula::Implies(a, b)
            | Formula::Iff(a, b) => a.any(pred) || b.any(pred),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Formula::Atom(_) => 1,
            Formula::Not(a) | Formula::Forall(_, a) | Formula::Exists(_, a) => 1 + a.size(),
            Formula::And(a, b)
            | Formula::Or(a, b)
            | Formula::Implies(a, b)
            | Formula::Iff(a, b) => 1 + a.size() + b.size(),
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Formula {
    pub fn atom(text: impl Into<String>) -> Self {
        Formula::Atom(text.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(a: Formula) -> Self {
        Formula::Not(Box::new(a))
    }

    pub fn and(a: Formula, b: Formula) -> Self {
        Formula::And(Box::new(a), Box::new(b))
    }

    pub fn or(a: Formula, b: Formula) -> Self {
        Formula::Or(Box::new(a), Box::new(b))
    }

    pub fn implies(a: Formula, b: Formula) -> Self {
        Formula::Implies(Box::new(a), Box::new(b))
    }

    pub fn iff(a: Formula, b: Formula) -> Self {
        Formula::Iff(Box::new(a), Box::new(b))
    }

    pub fn forall(x: impl Into<String>, body: Formula) -> Self {
        Formula::Forall(Var::new(x), Box::new(body))
    }

    pub fn exists(x: impl Into<String>, body: Formula) -> Self {
        Formula::Exists(Var::new(x), Box::new(body))
    }
}
