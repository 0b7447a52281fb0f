// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/parser_test.rs
// Integration tests for parser and serializer

use fol_cnf::*;

fn parse(text: &str) -> Formula {
    parse_formula(text).unwrap_or_else(|e| panic!("failed to parse '{}': {}", text, e))
}

fn p(name: &str) -> Formula {
    Formula::atom(name)
}

#[test]
fn test_parse_and_print_roundtrip() {
    let examples = vec![
        "p",
        "\\neg p",
        "(p \\land q)",
        "(p \\lor \\neg q)",
        "(p \\rightarrow q)",
        "(p \\leftrightarrow q)",
        "\\forall x P(x)",
        "\\forall x \\exists y P(x,f(y))",
        "((\\forall x P(x)) \\land \\exists y Q(y))",
        "(\\neg (\\exists x P(x)) \\lor q)",
        "((p \\rightarrow q) \\rightarrow r)",
    ];

    for input in examples {
        let formula = parse(input);
        let output = formula.to_string();
        assert_eq!(output, input, "serialization changed for: {}", input);
        assert_eq!(parse(&output), formula, "roundtrip failed for: {}", input);
    }
}

#[test]
fn test_operator_aliases() {
    assert_eq!(parse("p \\to q"), parse("p \\rightarrow q"));
    assert_eq!(parse("p \\iff q"), parse("p \\leftrightarrow q"));
    assert_eq!(parse("p \\wedge q"), parse("p \\land q"));
    assert_eq!(parse("p \\vee q"), parse("p \\lor q"));
    assert_eq!(parse("\\lnot p"), parse("\\neg p"));
}

#[test]
fn test_precedence() {
    assert_eq!(
        parse("p \\lor q \\land r"),
        Formula::or(p("p"), Formula::and(p("q"), p("r")))
    );
    assert_eq!(
        parse("\\neg p \\land q"),
        Formula::and(Formula::not(p("p")), p("q"))
    );
    assert_eq!(
        parse("p \\land q \\to r \\lor s"),
        Formula::implies(Formula::and(p("p"), p("q")), Formula::or(p("r"), p("s")))
    );
}

#[test]
fn test_chains_fold_left() {
    assert_eq!(
        parse("p \\to q \\to r"),
        Formula::implies(Formula::implies(p("p"), p("q")), p("r"))
    );
    assert_eq!(
        parse("p \\leftrightarrow q \\to r"),
        Formula::implies(Formula::iff(p("p"), p("q")), p("r"))
    );
    assert_eq!(
        parse("p \\land q \\land r"),
        Formula::and(Formula::and(p("p"), p("q")), p("r"))
    );
}

#[test]
fn test_nested_negation() {
    assert_eq!(
        parse("\\neg \\neg \\neg p"),
        Formula::not(Formula::not(Formula::not(p("p"))))
    );
    assert_eq!(
        parse("\\neg(p \\land q)"),
        Formula::not(Formula::and(p("p"), p("q")))
    );
}

#[test]
fn test_quantifier_body_extends_right() {
    assert_eq!(
        parse("\\forall x P(x) \\land Q(x)"),
        Formula::forall("x", Formula::and(p("P(x)"), p("Q(x)")))
    );
    assert_eq!(
        parse("p \\land \\exists y R(y) \\lor q"),
        Formula::and(p("p"), Formula::exists("y", Formula::or(p("R(y)"), p("q"))))
    );
    assert_eq!(
        parse("(\\forall x P(x)) \\land Q(x)"),
        Formula::and(Formula::forall("x", p("P(x)")), p("Q(x)"))
    );
}

#[test]
fn test_atom_arguments_are_compacted() {
    assert_eq!(parse("P( f(x,  g(y)) , z )"), p("P(f(x,g(y)),z)"));
    assert_eq!(parse("Loves(john, mother(john))"), p("Loves(john,mother(john))"));
}

#[test]
fn test_space_before_argument_list() {
    assert_eq!(parse("P (x, y)"), p("P(x,y)"));
    assert_eq!(parse("\\forall x P\\,(x)"), Formula::forall("x", p("P(x)")));
    assert_eq!(parse("f (g (x))"), p("f(g(x))"));
}

#[test]
fn test_thin_space_and_whitespace() {
    assert_eq!(parse("  p\\,\\land\\,q  "), Formula::and(p("p"), p("q")));
    assert_eq!(parse("\\forall\\,x\\,P(x)"), Formula::forall("x", p("P(x)")));
}

#[test]
fn test_missing_operand_reports_end_of_input() {
    let err = parse_formula("p \\land").unwrap_err();
    assert_eq!(err.offset(), Some(7));
    assert!(matches!(err, FormulaError::Syntax { .. }));
}

#[test]
fn test_unmatched_parentheses() {
    let err = parse_formula("(p \\lor q").unwrap_err();
    assert_eq!(err.offset(), Some(9));

    let err = parse_formula("p \\lor q)").unwrap_err();
    assert_eq!(err.offset(), Some(8));
    assert!(err.to_string().contains("')'"));
}

#[test]
fn test_trailing_tokens() {
    let err = parse_formula("p q").unwrap_err();
    assert_eq!(err.offset(), Some(2));
}

#[test]
fn test_empty_input() {
    let err = parse_formula("   ").unwrap_err();
    assert_eq!(err.offset(), Some(3));
}

#[test]
fn test_unknown_command() {
    let err = parse_formula("p \\top q").unwrap_err();
    assert!(matches!(err, FormulaError::Syntax { .. }));
}

#[test]
fn test_missing_identifiers_are_structural() {
    let err = parse_formula("\\forall \\land p").unwrap_err();
    assert!(matches!(err, FormulaError::Structural { .. }), "{:?}", err);

    let err = parse_formula("P(,x)").unwrap_err();
    assert!(matches!(err, FormulaError::Structural { .. }), "{:?}", err);

    let err = parse_formula("P(x,)").unwrap_err();
    assert!(matches!(err, FormulaError::Structural { .. }), "{:?}", err);
    assert_eq!(err.offset(), None);
}
