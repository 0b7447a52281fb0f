// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/property_test.rs
// Property-based tests for the parser and every rewrite pass

use fol_cnf::clauses::positive_literals;
use fol_cnf::rewrite::distribution::has_conjunction_under_disjunction;
use fol_cnf::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_var() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("x"), Just("y"), Just("z")]
}

fn arb_formula() -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        Just(Formula::atom("p")),
        Just(Formula::atom("q")),
        Just(Formula::atom("P(x)")),
        Just(Formula::atom("Q(x,y)")),
        Just(Formula::atom("R(f(z),y)")),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Formula::not),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::or(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::implies(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::iff(a, b)),
            (arb_var(), inner.clone()).prop_map(|(x, a)| Formula::forall(x, a)),
            (arb_var(), inner).prop_map(|(x, a)| Formula::exists(x, a)),
        ]
    })
}

/// The formula of every stage, in pipeline order.
fn stages(formula: &Formula) -> Vec<Formula> {
    let conversion = run_passes(formula, &Config::default());
    conversion
        .stages
        .into_iter()
        .filter_map(|stage| stage.formula)
        .collect()
}

fn negation_over_non_atom(formula: &Formula) -> bool {
    formula.any(&|f| matches!(f, Formula::Not(inner) if !matches!(**inner, Formula::Atom(_))))
}

proptest! {
    #[test]
    fn serialize_then_parse_is_identity(formula in arb_formula()) {
        let text = formula.to_string();
        let reparsed = parse_formula(&text);
        prop_assert_eq!(reparsed, Ok(formula));
    }

    #[test]
    fn elimination_removes_implications(formula in arb_formula()) {
        let (result, _) = eliminate_implications(&formula);
        prop_assert!(!result.contains_implication());
    }

    #[test]
    fn negation_normal_form_negates_only_atoms(formula in arb_formula()) {
        let stages = stages(&formula);
        prop_assert!(!negation_over_non_atom(&stages[1]));
    }

    #[test]
    fn standardized_names_are_distinct(formula in arb_formula()) {
        let stages = stages(&formula);
        let vars = stages[2].bound_vars();
        let distinct: HashSet<_> = vars.iter().collect();
        prop_assert_eq!(distinct.len(), vars.len());
    }

    #[test]
    fn prenex_matrix_is_quantifier_free(formula in arb_formula()) {
        let stages = stages(&formula);
        prop_assert!(matrix(&stages[3]).is_quantifier_free());
        prop_assert_eq!(stages[3].bound_vars(), stages[2].bound_vars());
    }

    #[test]
    fn skolemization_removes_existentials(formula in arb_formula()) {
        let stages = stages(&formula);
        prop_assert!(!stages[4].any(&|f| matches!(f, Formula::Exists(_, _))));
        prop_assert!(matrix(&stages[4]).is_quantifier_free());
    }

    #[test]
    fn distribution_reaches_fixpoint(formula in arb_formula()) {
        let stages = stages(&formula);
        prop_assert!(!has_conjunction_under_disjunction(&stages[5]));
        prop_assert!(!negation_over_non_atom(&stages[5]));
    }

    #[test]
    fn horn_verdict_matches_literal_count(formula in arb_formula()) {
        let conversion = run_passes(&formula, &Config::default());
        for report in &conversion.horn.clauses {
            prop_assert_eq!(report.positive_literals, positive_literals(&report.clause));
            prop_assert_eq!(report.is_horn, report.positive_literals <= 1);
        }
        prop_assert_eq!(
            conversion.horn.is_horn,
            conversion.horn.clauses.iter().all(|r| r.is_horn)
        );
    }
}
