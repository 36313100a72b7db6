use gentzen::{
    parser::ParserError,
    prover::{Config, SearchError, Verdict},
    *,
};

fn run_tests(cases: &[(&str, bool)]) {
    for &(formula, expected) in cases {
        let got = solve(formula).unwrap_or_else(|e| panic!("error solving '{}': {}", formula, e));
        assert_eq!(expected, got, "solving '{}'", formula);
    }
}

#[test]
fn test_axioms() {
    run_tests(&[
        ("p -> p", true),
        ("p(f(a), b) -> p(f(a), b)", true),
        ("(+ x p(x)) -> (+ y p(y))", true),
        ("(! x q(x, c)) -> (! z q(z, c))", true),
    ]);
}

#[test]
fn test_propositional_laws() {
    run_tests(&[
        (r"p \/ ~p", true),
        (r"p /\ ~p", false),
        ("~~p -> p", true),
        ("p -> ~~p", true),
        ("(p -> q) -> (~q -> ~p)", true),
        ("((p -> q) -> p) -> p", true),
        (r"~(p \/ q) -> ~p /\ ~q", true),
        (r"p \/ q -> p /\ q", false),
        ("(p -> q) -> (q -> p)", false),
    ]);
}

#[test]
fn test_quantifier_elimination() {
    run_tests(&[
        ("(+ x p(x)) -> p(c)", true),
        ("p(c) -> (! x p(x))", true),
        ("(+ x (p(x) -> q(x))) -> (p(a) -> q(a))", true),
        ("(+ x p(x)) -> q(c)", false),
        ("(! x p(x)) -> p(c)", false),
        ("(! x p(x)) -> (+ x p(x))", false),
    ]);
}

#[test]
fn test_branch_isolation() {
    run_tests(&[
        (r"((q \/ r) /\ (+ x p(x))) -> p(c)", true),
        (r"((+ x p(x)) /\ (q \/ r)) -> p(c)", true),
    ]);
}

#[test]
fn test_budget() {
    let config = Config::new().max_steps(3);
    let got = solve_with("(+ x p(x)) -> p(c)", &config).unwrap();
    assert_eq!(got, Verdict::Inconclusive(SearchError::StepBudgetExceeded { limit: 3 }));

    let config = Config::new().max_depth(1);
    let got = solve_with("(+ x p(x)) -> p(c)", &config).unwrap();
    assert!(matches!(got, Verdict::Inconclusive(SearchError::DepthExceeded { limit: 1 })));
}

#[test]
fn test_syntax_errors() {
    for text in ["p ->", "p q", "f()", "p & q", r"p(q /\ r)", "+ ~x p(x)"] {
        let err = solve(text).expect_err("expected a syntax error");
        assert!(matches!(err, Error::Parser(..)), "solving '{}'", text);
    }

    let err = solve("(p -> q").unwrap_err();
    assert!(matches!(err, Error::Parser(ParserError::UnexpectedToken(_), (1, 8))));
    assert_eq!(
        err.to_string(),
        "parser error: unexpected token: 'EOF' (on line 1, column 8)",
    );
}
