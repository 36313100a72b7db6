//! In addition to the parser tests, this module contains some parsing functions that can be
//! useful in tests, and are intended to be used in other modules.
#![cfg(test)]

use super::*;
use crate::ast::{ConstructionError, Quantifier};

const ERROR_MESSAGE: &str = "parser error during test";

/// Parses a formula from a `&str`. Panics if any error is encountered.
pub fn parse_formula(input: &str) -> Rc<Formula> {
    parse(input).expect(ERROR_MESSAGE)
}

/// Parses a term from a `&str`. Panics if any error is encountered.
pub fn parse_term(input: &str) -> Rc<Formula> {
    Parser::new(input)
        .and_then(|mut parser| parser.parse_term())
        .expect(ERROR_MESSAGE)
}

/// Tries to parse a formula from a `&str`, expecting it to fail. Returns the error encountered,
/// or panics if no error is encountered.
pub fn parse_formula_err(input: &str) -> Error {
    parse(input).expect_err("expected error")
}

fn run_parser_tests(cases: &[(&str, &str)]) {
    for (case, expected) in cases {
        let got = parse_formula(case);
        assert_eq!(*expected, got.to_string(), "parsing '{}'", case);
    }
}

#[test]
fn test_atoms_and_terms() {
    run_parser_tests(&[
        ("p", "p"),
        ("p(x)", "p(x)"),
        ("p(f(x, g(c)), y)", "p(f(x, g(c)), y)"),
        ("((p(x)))", "p(x)"),
        ("  p (  x ,y )  ", "p(x, y)"),
    ]);

    let got = parse_formula("p(f(x))");
    let Formula::Atom(name, args) = got.as_ref() else {
        panic!("expected atom, got {}", got)
    };
    assert_eq!(name, "p");
    assert!(matches!(args[0].as_ref(), Formula::Term(f, Some(_)) if f == "f"));

    assert!(parse_term("f(x)").is_term());
    assert_eq!(parse_term("x").as_var(), Some("x"));
}

#[test]
fn test_precedence() {
    run_parser_tests(&[
        (r"p /\ q \/ r", r"((p /\ q) \/ r)"),
        (r"p \/ q /\ r", r"(p \/ (q /\ r))"),
        (r"p \/ q -> r /\ s", r"((p \/ q) -> (r /\ s))"),
        (r"~p /\ q", r"(~p /\ q)"),
        (r"~(p /\ q)", r"~(p /\ q)"),
        ("~~p", "~~p"),
        ("+ x p(x) -> q", "((x + p(x)) -> q)"),
        (r"! x p(x) /\ q", r"((x ! p(x)) /\ q)"),
    ]);
}

#[test]
fn test_associativity() {
    run_parser_tests(&[
        ("p -> q -> r", "(p -> (q -> r))"),
        ("(p -> q) -> r", "((p -> q) -> r)"),
        (r"p \/ q \/ r", r"((p \/ q) \/ r)"),
        (r"p /\ q /\ r", r"((p /\ q) /\ r)"),
    ]);
}

#[test]
fn test_quantifiers() {
    run_parser_tests(&[
        ("+ x p(x)", "(x + p(x))"),
        ("! x p(x)", "(x ! p(x))"),
        ("+ x (p(x) -> q(x))", "(x + (p(x) -> q(x)))"),
        ("! x + y r(x, f(y))", "(x ! (y + r(x, f(y))))"),
        ("+ (x) p(x)", "(x + p(x))"),
        ("+ x ~p(x)", "(x + ~p(x))"),
    ]);

    let got = parse_formula("+ x p(x)");
    assert!(matches!(
        got.as_ref(),
        Formula::Quant(Quantifier::Forall, x, _) if x == "x"
    ));
}

#[test]
fn test_errors() {
    assert!(matches!(
        parse_formula_err("f()"),
        Error::Parser(ParserError::EmptyArgumentList(name), (1, 1)) if name == "f",
    ));
    assert!(matches!(
        parse_formula_err("p q"),
        Error::Parser(ParserError::UnexpectedToken(Token::Symbol(s)), (1, 3)) if s == "q",
    ));
    assert!(matches!(
        parse_formula_err("p ->"),
        Error::Parser(ParserError::UnexpectedToken(Token::Eof), (1, 5)),
    ));
    assert!(matches!(
        parse_formula_err("(p -> q"),
        Error::Parser(ParserError::UnexpectedToken(Token::Eof), _),
    ));
    assert!(matches!(
        parse_formula_err("p)"),
        Error::Parser(ParserError::UnexpectedToken(Token::CloseParen), (1, 2)),
    ));
    assert!(matches!(
        parse_formula_err("p & q"),
        Error::Parser(ParserError::UnexpectedChar('&'), (1, 3)),
    ));
    assert!(matches!(
        parse_formula_err(""),
        Error::Parser(ParserError::UnexpectedToken(Token::Eof), (1, 1)),
    ));
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        parse_formula_err(r"p(q /\ r)"),
        Error::Parser(
            ParserError::Construction(ConstructionError::ExpectedTerm { name, .. }),
            (1, 1),
        ) if name == "p",
    ));
    assert!(matches!(
        parse_formula_err("f(~x)"),
        Error::Parser(ParserError::Construction(ConstructionError::ExpectedTerm { .. }), _),
    ));
    assert!(matches!(
        parse_formula_err("+ ~x p(x)"),
        Error::Parser(
            ParserError::Construction(ConstructionError::ExpectedVariable { .. }),
            (1, 3),
        ),
    ));
    assert!(matches!(
        parse_formula_err("! (f(x)) p(x)"),
        Error::Parser(ParserError::Construction(ConstructionError::ExpectedVariable { .. }), _),
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse_formula_err("p & q").to_string(),
        "parser error: unexpected character: '&' (on line 1, column 3)",
    );
    assert_eq!(
        parse_formula_err("p\n  q").to_string(),
        "parser error: unexpected token: 'q' (on line 2, column 3)",
    );
}
