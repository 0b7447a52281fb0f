// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/elimination_test.rs
// Tests for implication and biconditional elimination

use fol_cnf::*;

fn eliminate(text: &str) -> (Formula, Trace) {
    eliminate_implications(&parse_formula(text).unwrap())
}

#[test]
fn test_implication() {
    let (result, trace) = eliminate("p \\rightarrow q");
    assert_eq!(result.to_string(), "(\\neg p \\lor q)");
    assert_eq!(
        trace.entries(),
        &[TraceEntry::Equivalence {
            before: "(p \\rightarrow q)".to_string(),
            after: "(\\neg p \\lor q)".to_string(),
        }]
    );
}

#[test]
fn test_biconditional() {
    let (result, trace) = eliminate("p \\leftrightarrow q");
    assert_eq!(
        result.to_string(),
        "((\\neg p \\lor q) \\land (\\neg q \\lor p))"
    );
    assert_eq!(trace.len(), 1);
}

#[test]
fn test_nested_implications_rewrite_inner_first() {
    let (result, trace) = eliminate("(p \\to q) \\to r");
    assert_eq!(result.to_string(), "(\\neg (\\neg p \\lor q) \\lor r)");
    assert_eq!(trace.len(), 2);
    assert_eq!(
        trace.entries()[0],
        TraceEntry::Equivalence {
            before: "(p \\rightarrow q)".to_string(),
            after: "(\\neg p \\lor q)".to_string(),
        }
    );
}

#[test]
fn test_recurses_under_quantifiers() {
    let (result, _) = eliminate("\\forall x (P(x) \\to \\exists y Q(x,y))");
    assert_eq!(
        result.to_string(),
        "\\forall x (\\neg P(x) \\lor \\exists y Q(x,y))"
    );
    assert!(!result.contains_implication());
}

#[test]
fn test_no_implication_no_trace() {
    let (result, trace) = eliminate("p \\land \\neg q");
    assert_eq!(result, parse_formula("p \\land \\neg q").unwrap());
    assert!(trace.is_empty());
}

#[test]
fn test_equivalence_renders_with_equiv_sign() {
    let (_, trace) = eliminate_implications(&parse_formula("p \\rightarrow q").unwrap());
    assert_eq!(
        trace.entries()[0].to_string(),
        "(p \\rightarrow q) ≡ (\\neg p \\lor q)"
    );
}
