// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/standardize_test.rs
// Tests for variable standardization

use fol_cnf::*;

fn standardize(text: &str) -> (Formula, Trace) {
    standardize_variables(&parse_formula(text).unwrap())
}

#[test]
fn test_sibling_quantifiers_get_distinct_names() {
    let (result, trace) = standardize("(\\forall x P(x)) \\land (\\exists x Q(x))");
    assert_eq!(
        result.to_string(),
        "((\\forall x P(x)) \\land \\exists x1 Q(x1))"
    );
    assert_eq!(
        trace.entries(),
        &[
            TraceEntry::Note {
                text: "Renomeando \\exists x para \\exists x1".to_string()
            },
            TraceEntry::Note {
                text: "Substituição em Q(x): Q(x1)".to_string()
            },
        ]
    );
}

#[test]
fn test_nested_rebinding() {
    let (result, _) = standardize("\\forall x (P(x) \\land \\exists x Q(x))");
    assert_eq!(
        result,
        Formula::forall(
            "x",
            Formula::and(
                Formula::atom("P(x)"),
                Formula::exists("x1", Formula::atom("Q(x1)"))
            )
        )
    );
}

#[test]
fn test_renaming_is_scoped_to_the_body() {
    let (result, _) = standardize("\\forall x ((\\exists x Q(x)) \\land P(x))");
    assert_eq!(
        result,
        Formula::forall(
            "x",
            Formula::and(
                Formula::exists("x1", Formula::atom("Q(x1)")),
                Formula::atom("P(x)")
            )
        )
    );
}

#[test]
fn test_suffix_skips_used_names() {
    let (result, _) = standardize(
        "(\\forall x P(x)) \\land (\\forall x1 Q(x1)) \\land (\\forall x R(x))",
    );
    assert_eq!(result.bound_vars(), vec![Var::new("x"), Var::new("x1"), Var::new("x2")]);
    assert!(result.to_string().contains("R(x2)"));
}

#[test]
fn test_substitution_matches_whole_identifiers() {
    let (result, _) = standardize("(\\forall x P(x)) \\land (\\forall x R(x, xy))");
    assert!(result.to_string().contains("R(x1,xy)"));
}

#[test]
fn test_distinct_names_untouched() {
    let input = parse_formula("\\forall x \\exists y P(x,y)").unwrap();
    let (result, trace) = standardize_variables(&input);
    assert_eq!(result, input);
    assert!(trace.is_empty());
}

#[test]
fn test_fresh_name_avoids_free_identifiers() {
    let (result, trace) = standardize("\\forall x P(x) \\land \\forall x Q(x,x1)");
    assert_eq!(
        result.to_string(),
        "\\forall x (P(x) \\land \\forall x2 Q(x2,x1))"
    );
    assert_eq!(
        trace.entries()[0],
        TraceEntry::Note {
            text: "Renomeando \\forall x para \\forall x2".to_string()
        }
    );
}

#[test]
fn test_fresh_name_avoids_later_binders() {
    let (result, _) = standardize("(\\forall x P(x)) \\land (\\exists x Q(x)) \\land (\\forall x1 R(x1))");
    assert_eq!(result.bound_vars(), vec![Var::new("x"), Var::new("x2"), Var::new("x1")]);
}
