//! The sequent-calculus introduction rules.
//!
//! | Formula  | In antecedent                   | In succedent                    |
//! |----------|---------------------------------|---------------------------------|
//! | `~A`     | `[([], [A])]`                   | `[([A], [])]`                   |
//! | `A -> B` | `[([], [A]), ([B], [])]`        | `[([A], [B])]`                  |
//! | `A \/ B` | `[([A], []), ([B], [])]`        | `[([], [A, B])]`                |
//! | `A /\ B` | `[([A, B], [])]`                | `[([], [A]), ([], [B])]`        |
//! | `+ x A`  | duplicate, then pending `_v`    | `[([], [A[x := _c]])]`          |
//! | `! x A`  | `[([A[x := _c]], [])]`          | duplicate, then pending `_v`    |
//!
//! Every branch must be valid for the introduced sequent to be valid.

use super::sequent::Occurrence;
use crate::ast::{Connective, Formula, FreshNames, Quantifier, Rc, Substitution};

/// The formulas that replace an introduced formula in one branch of a rule. They are added to the
/// front of each side of the sequent, in order.
#[derive(Debug, Clone, Default)]
pub struct Branch {
    pub antecedent: Vec<Occurrence>,
    pub succedent: Vec<Occurrence>,
}

impl Branch {
    fn left(formulas: Vec<Rc<Formula>>) -> Self {
        Self {
            antecedent: formulas.into_iter().map(Occurrence::new).collect(),
            succedent: Vec::new(),
        }
    }

    fn right(formulas: Vec<Rc<Formula>>) -> Self {
        Self {
            antecedent: Vec::new(),
            succedent: formulas.into_iter().map(Occurrence::new).collect(),
        }
    }

    fn both(left: Rc<Formula>, right: Rc<Formula>) -> Self {
        Self {
            antecedent: vec![Occurrence::new(left)],
            succedent: vec![Occurrence::new(right)],
        }
    }
}

/// Returns the branches obtained by introducing the formula at `occurrence` on the antecedent, or
/// `None` if no rule applies to it.
pub fn introduce_in_antecedent(occurrence: &Occurrence, names: &FreshNames) -> Option<Vec<Branch>> {
    let branches = match occurrence.formula.as_ref() {
        Formula::Not(a) => vec![Branch::right(vec![a.clone()])],
        Formula::Connective(Connective::Implies, a, b) => {
            vec![Branch::right(vec![a.clone()]), Branch::left(vec![b.clone()])]
        }
        Formula::Connective(Connective::Or, a, b) => {
            vec![Branch::left(vec![a.clone()]), Branch::left(vec![b.clone()])]
        }
        Formula::Connective(Connective::And, a, b) => {
            vec![Branch::left(vec![a.clone(), b.clone()])]
        }
        Formula::Quant(Quantifier::Forall, x, a) => {
            vec![duplicable(occurrence, Quantifier::Forall, x, a, names).into_left()]
        }
        Formula::Quant(Quantifier::Exists, x, a) => vec![Branch::left(vec![one_shot(x, a, names)])],
        Formula::Term(..) | Formula::Atom(..) | Formula::Pending(..) => return None,
    };
    Some(branches)
}

/// Returns the branches obtained by introducing the formula at `occurrence` on the succedent, or
/// `None` if no rule applies to it.
pub fn introduce_in_succedent(occurrence: &Occurrence, names: &FreshNames) -> Option<Vec<Branch>> {
    let branches = match occurrence.formula.as_ref() {
        Formula::Not(a) => vec![Branch::left(vec![a.clone()])],
        Formula::Connective(Connective::Implies, a, b) => vec![Branch::both(a.clone(), b.clone())],
        Formula::Connective(Connective::Or, a, b) => {
            vec![Branch::right(vec![a.clone(), b.clone()])]
        }
        Formula::Connective(Connective::And, a, b) => {
            vec![Branch::right(vec![a.clone()]), Branch::right(vec![b.clone()])]
        }
        Formula::Quant(Quantifier::Forall, x, a) => {
            vec![Branch::right(vec![one_shot(x, a, names)])]
        }
        Formula::Quant(Quantifier::Exists, x, a) => {
            vec![duplicable(occurrence, Quantifier::Exists, x, a, names).into_right()]
        }
        Formula::Term(..) | Formula::Atom(..) | Formula::Pending(..) => return None,
    };
    Some(branches)
}

/// The formulas that a quantifier on its duplicable side is replaced by.
enum Duplicable {
    /// The first introduction: two copies of the quantifier, both marked as duplicated.
    Copies(Rc<Formula>),

    /// Every later introduction: a pending instantiation over a fresh eigenvariable.
    Pending(Rc<Formula>),
}

impl Duplicable {
    fn occurrences(self) -> Vec<Occurrence> {
        match self {
            Duplicable::Copies(f) => {
                vec![Occurrence::duplicated(f.clone()), Occurrence::duplicated(f)]
            }
            Duplicable::Pending(f) => vec![Occurrence::new(f)],
        }
    }

    fn into_left(self) -> Branch {
        Branch { antecedent: self.occurrences(), succedent: Vec::new() }
    }

    fn into_right(self) -> Branch {
        Branch { antecedent: Vec::new(), succedent: self.occurrences() }
    }
}

fn duplicable(
    occurrence: &Occurrence,
    quantifier: Quantifier,
    x: &str,
    body: &Rc<Formula>,
    names: &FreshNames,
) -> Duplicable {
    if !occurrence.duplicated {
        return Duplicable::Copies(occurrence.formula.clone());
    }
    let v = names.eigenvariable();
    let body = Substitution::renaming(x, &v).apply(names, body);
    Duplicable::Pending(Rc::new(Formula::Pending(quantifier, v, body)))
}

/// The body of a quantifier on its one-shot side, instantiated with a fresh witness constant.
fn one_shot(x: &str, body: &Rc<Formula>, names: &FreshNames) -> Rc<Formula> {
    let c = names.witness_constant();
    Substitution::renaming(x, &c).apply(names, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::parse_formula;

    fn render(branches: &[Branch]) -> Vec<(Vec<String>, Vec<String>)> {
        let side = |s: &[Occurrence]| -> Vec<String> {
            s.iter().map(|o| o.formula.to_string()).collect()
        };
        branches
            .iter()
            .map(|b| (side(&b.antecedent), side(&b.succedent)))
            .collect()
    }

    fn run_tests(left: bool, cases: &[(&str, &[(&[&str], &[&str])])]) {
        for &(formula, expected) in cases {
            let names = FreshNames::new();
            let occurrence = Occurrence::new(parse_formula(formula));
            let got = if left {
                introduce_in_antecedent(&occurrence, &names)
            } else {
                introduce_in_succedent(&occurrence, &names)
            }
            .unwrap();

            let own = |v: &[&str]| -> Vec<String> { v.iter().map(|s| (*s).to_owned()).collect() };
            let expected: Vec<_> = expected.iter().map(|&(a, s)| (own(a), own(s))).collect();
            assert_eq!(expected, render(&got), "introducing '{}'", formula);
        }
    }

    #[test]
    fn test_antecedent_rules() {
        run_tests(
            true,
            &[
                ("~p", &[(&[], &["p"])]),
                ("p -> q", &[(&[], &["p"]), (&["q"], &[])]),
                (r"p \/ q", &[(&["p"], &[]), (&["q"], &[])]),
                (r"p /\ q", &[(&["p", "q"], &[])]),
                ("! x p(x)", &[(&["p(_c1)"], &[])]),
                ("+ x p(x)", &[(&["(x + p(x))", "(x + p(x))"], &[])]),
            ],
        );
    }

    #[test]
    fn test_succedent_rules() {
        run_tests(
            false,
            &[
                ("~p", &[(&["p"], &[])]),
                ("p -> q", &[(&["p"], &["q"])]),
                (r"p \/ q", &[(&[], &["p", "q"])]),
                (r"p /\ q", &[(&[], &["p"]), (&[], &["q"])]),
                ("+ x p(x)", &[(&[], &["p(_c1)"])]),
                ("! x p(x)", &[(&[], &["(x ! p(x))", "(x ! p(x))"])]),
            ],
        );
    }

    #[test]
    fn test_duplication() {
        let names = FreshNames::new();
        let occurrence = Occurrence::new(parse_formula("+ x q(x, y)"));

        let first = introduce_in_antecedent(&occurrence, &names).unwrap();
        let copies = &first[0].antecedent;
        assert_eq!(copies.len(), 2);
        assert!(copies.iter().all(|o| o.duplicated));
        assert!(!occurrence.duplicated);

        let second = introduce_in_antecedent(&copies[0], &names).unwrap();
        let pending = &second[0].antecedent[0].formula;
        assert!(pending.is_pending());
        assert_eq!(pending.to_string(), "(_v1 + q(_v1, y))");
    }

    #[test]
    fn test_no_rule_applies() {
        let names = FreshNames::new();
        for formula in ["p", "p(x)"] {
            let occurrence = Occurrence::new(parse_formula(formula));
            assert!(introduce_in_antecedent(&occurrence, &names).is_none());
            assert!(introduce_in_succedent(&occurrence, &names).is_none());
        }
        assert_eq!(names.issued(), 0);
    }
}
